//! Session file loading
//!
//! A session file lists one or more (key, IV, word count) requests:
//!
//! ```yaml
//! sessions:
//!   - name: test-set-1
//!     key: 2BD6459F82C5B300952C49104881FF48
//!     iv: EA024714AD5C4D84DF1F9B251C0BF45F
//!     words: 4
//! ```
//!
//! Loading only parses the YAML. [`validate_session_file`] turns the raw
//! strings into checked key/IV material.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use snow3g_crypto::{IV_SIZE, KEY_SIZE};
use thiserror::Error;

/// Upper bound on keystream words per session (64 MiB of output)
pub const MAX_WORDS: usize = 1 << 24;

/// Errors that can occur while loading a session file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read session file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse session file: {0}")]
    ParseError(String),

    /// Validation error
    #[error("Session file validation failed: {0}")]
    ValidationError(#[from] ConfigValidationError),
}

/// Errors that can occur while validating sessions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Field is not valid hexadecimal
    #[error("Invalid hex in {field}: {reason}")]
    InvalidHex {
        /// Field name (`key` or `iv`)
        field: &'static str,
        /// Decoder message
        reason: String,
    },

    /// Field decodes to the wrong number of bytes
    #[error("Invalid {field} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Field name (`key` or `iv`)
        field: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Decoded length in bytes
        actual: usize,
    },

    /// Requested word count exceeds [`MAX_WORDS`]
    #[error("Too many keystream words: requested {requested}, maximum {max}")]
    TooManyWords {
        /// Requested word count
        requested: usize,
        /// Allowed maximum
        max: usize,
    },

    /// The file lists no sessions
    #[error("No sessions configured: at least one session must be specified")]
    NoSessions,

    /// Two sessions share a name
    #[error("Duplicate session name: {0}")]
    DuplicateSession(String),
}

/// One session as written in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Label used in output headers
    pub name: String,
    /// 128-bit key as 32 hex digits
    pub key: String,
    /// 128-bit IV as 32 hex digits
    pub iv: String,
    /// Number of keystream words to generate
    #[serde(default = "default_words")]
    pub words: usize,
}

fn default_words() -> usize {
    1
}

/// Contents of a session file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFile {
    /// Requested sessions, processed in order
    pub sessions: Vec<SessionConfig>,
}

/// A validated session ready to run.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// Label used in output headers
    pub name: String,
    /// 128-bit key
    pub key: [u8; KEY_SIZE],
    /// 128-bit IV
    pub iv: [u8; IV_SIZE],
    /// Number of keystream words to generate
    pub words: usize,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("name", &self.name)
            .field("words", &self.words)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Builds a session from hex key/IV strings.
    pub fn from_hex(name: &str, key: &str, iv: &str, words: usize) -> Result<Self, ConfigValidationError> {
        if words > MAX_WORDS {
            return Err(ConfigValidationError::TooManyWords {
                requested: words,
                max: MAX_WORDS,
            });
        }
        Ok(Self {
            name: name.to_string(),
            key: parse_hex_128("key", key)?,
            iv: parse_hex_128("iv", iv)?,
            words,
        })
    }
}

/// Parses 128 bits of hex. Whitespace and a leading `0x` are ignored.
pub fn parse_hex_128(field: &'static str, value: &str) -> Result<[u8; 16], ConfigValidationError> {
    let cleaned: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
        .unwrap_or(&cleaned);

    let bytes = hex::decode(digits).map_err(|e| ConfigValidationError::InvalidHex {
        field,
        reason: e.to_string(),
    })?;

    let actual = bytes.len();
    bytes
        .try_into()
        .map_err(|_| ConfigValidationError::InvalidLength {
            field,
            expected: 16,
            actual,
        })
}

/// Loads a session file from YAML on disk.
pub fn load_session_file<P: AsRef<Path>>(path: P) -> Result<SessionFile, ConfigError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    load_session_file_from_str(&contents)
}

/// Loads a session file from a YAML string.
pub fn load_session_file_from_str(yaml: &str) -> Result<SessionFile, ConfigError> {
    serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Validates every session and decodes its key material.
///
/// # Validation Rules
///
/// - At least one session must be listed
/// - Session names must be unique
/// - Key and IV must be exactly 16 bytes of hex each
/// - Word count must not exceed [`MAX_WORDS`]
pub fn validate_session_file(file: &SessionFile) -> Result<Vec<Session>, ConfigValidationError> {
    if file.sessions.is_empty() {
        return Err(ConfigValidationError::NoSessions);
    }

    let mut names = HashSet::new();
    let mut sessions = Vec::with_capacity(file.sessions.len());
    for cfg in &file.sessions {
        if !names.insert(cfg.name.as_str()) {
            return Err(ConfigValidationError::DuplicateSession(cfg.name.clone()));
        }
        sessions.push(Session::from_hex(&cfg.name, &cfg.key, &cfg.iv, cfg.words)?);
    }
    Ok(sessions)
}

/// Loads and validates a session file in one step.
pub fn load_and_validate_session_file<P: AsRef<Path>>(path: P) -> Result<Vec<Session>, ConfigError> {
    let file = load_session_file(path)?;
    Ok(validate_session_file(&file)?)
}
