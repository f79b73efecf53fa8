//! SNOW 3G stream cipher engine
//!
//! SNOW 3G is a word-oriented stream cipher used in the 3GPP confidentiality
//! and integrity algorithms (UEA2/UIA2 for UMTS, 128-EEA1/128-EIA1 for LTE
//! and NR). This module implements the keystream generator only: a 16-cell
//! LFSR over GF(2^32) and a three-register FSM.
//!
//! Reference: ETSI/SAGE SNOW 3G Specification (3GPP TS 35.216)
//!
//! # Example
//!
//! ```
//! use snow3g_crypto::Snow3g;
//!
//! let key = [0u8; 16];
//! let iv = [0u8; 16];
//!
//! let mut engine = Snow3g::new();
//! engine.initialize(&key, &iv).unwrap();
//! let words = engine.generate_keystream(4).unwrap();
//! assert_eq!(words[0], 0xC764A037);
//! ```

use std::fmt;

use tracing::trace;

use crate::error::{InputKind, Result, Snow3gError};
use crate::field::{DIV_ALPHA, MUL_ALPHA};
use crate::sbox::{s1, s2};

/// Key size in bytes (128 bits)
pub const KEY_SIZE: usize = 16;

/// IV size in bytes (128 bits)
pub const IV_SIZE: usize = 16;

/// Number of LFSR cells
pub const LFSR_LEN: usize = 16;

/// Clocks run in initialization mode before any output
const INIT_CLOCKS: usize = 32;

/// All-ones mask used when loading the key into the LFSR
const ONES: u32 = 0xFFFF_FFFF;

/// Observable lifecycle of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    /// No key/IV loaded yet, or state was cleared
    #[default]
    Uninitialized,
    /// Initialized and warmed up; every clock yields a keystream word
    KeystreamReady,
}

/// LFSR clocking mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClockMode {
    /// FSM output is folded into the feedback word
    Initialization(u32),
    /// Plain linear feedback
    Keystream,
}

/// FSM registers
#[derive(Clone, Copy, Default)]
struct Fsm {
    r1: u32,
    r2: u32,
    r3: u32,
}

/// SNOW 3G keystream generator.
///
/// An engine holds one (key, IV) session at a time. Calling
/// [`initialize`](Self::initialize) again replaces the session completely.
/// Engines share no state, so independent sessions can run on separate
/// threads with one engine each.
#[derive(Clone, Default)]
pub struct Snow3g {
    /// LFSR cells s0..s15
    lfsr: [u32; LFSR_LEN],
    fsm: Fsm,
    state: EngineState,
}

impl Snow3g {
    /// Create an uninitialized engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine and initialize it from key and IV bytes.
    pub fn with_key_iv(key: &[u8], iv: &[u8]) -> Result<Self> {
        let mut engine = Self::new();
        engine.initialize(key, iv)?;
        Ok(engine)
    }

    /// Create an engine initialized from key and IV words `k0..k3`, `IV0..IV3`.
    pub fn from_words(key: &[u32; 4], iv: &[u32; 4]) -> Self {
        let mut engine = Self::new();
        engine.initialize_words(key, iv);
        engine
    }

    /// Current lifecycle state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Whether keystream can be generated
    pub fn is_ready(&self) -> bool {
        self.state == EngineState::KeystreamReady
    }

    /// Initialize the engine with a 16-byte key and a 16-byte IV.
    ///
    /// Word `k_i` (and `IV_i`) is the big-endian value of bytes `4i..4i+4`.
    /// Lengths are checked before anything is written, so on error an
    /// already running session is left untouched.
    pub fn initialize(&mut self, key: &[u8], iv: &[u8]) -> Result<()> {
        let key = words_from_bytes(key, InputKind::Key, KEY_SIZE)?;
        let iv = words_from_bytes(iv, InputKind::Iv, IV_SIZE)?;
        self.initialize_words(&key, &iv);
        Ok(())
    }

    /// Initialize the engine with key words `k0..k3` and IV words `IV0..IV3`.
    ///
    /// Runs the 32 initialization clocks and the discarded warm-up clock.
    pub fn initialize_words(&mut self, key: &[u32; 4], iv: &[u32; 4]) {
        let [k0, k1, k2, k3] = *key;
        let [iv0, iv1, iv2, iv3] = *iv;

        self.lfsr = [
            k0 ^ ONES,
            k1 ^ ONES,
            k2 ^ ONES,
            k3 ^ ONES,
            k0,
            k1,
            k2,
            k3,
            k0 ^ ONES,
            k1 ^ ONES ^ iv3,
            k2 ^ ONES ^ iv2,
            k3 ^ ONES,
            k0 ^ iv1,
            k1,
            k2,
            k3 ^ iv0,
        ];
        self.fsm = Fsm::default();

        for _ in 0..INIT_CLOCKS {
            let f = self.clock_fsm();
            self.clock_lfsr(ClockMode::Initialization(f));
        }

        // Warm-up clock, output discarded
        self.clock_fsm();
        self.clock_lfsr(ClockMode::Keystream);

        self.state = EngineState::KeystreamReady;
        trace!("SNOW 3G engine initialized");
    }

    /// Generate `count` keystream words.
    ///
    /// Successive calls continue the same stream, so two calls of `n` and `m`
    /// words return exactly the words of one call of `n + m`.
    pub fn generate_keystream(&mut self, count: usize) -> Result<Vec<u32>> {
        self.ensure_ready()?;
        let mut keystream = vec![0u32; count];
        self.fill(&mut keystream);
        Ok(keystream)
    }

    /// Fill `keystream` with the next keystream words.
    pub fn fill_keystream(&mut self, keystream: &mut [u32]) -> Result<()> {
        self.ensure_ready()?;
        self.fill(keystream);
        Ok(())
    }

    /// Endless iterator over the next keystream words.
    pub fn words(&mut self) -> Result<Words<'_>> {
        self.ensure_ready()?;
        Ok(Words { engine: self })
    }

    /// Wipe all register contents and return to [`EngineState::Uninitialized`].
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(Snow3gError::EngineNotInitialized)
        }
    }

    fn fill(&mut self, keystream: &mut [u32]) {
        for ks in keystream.iter_mut() {
            *ks = self.next_word();
        }
        trace!(words = keystream.len(), "generated SNOW 3G keystream");
    }

    /// One keystream-mode clock: `z = F ^ s0`.
    #[inline]
    fn next_word(&mut self) -> u32 {
        let f = self.clock_fsm();
        let z = f ^ self.lfsr[0];
        self.clock_lfsr(ClockMode::Keystream);
        z
    }

    /// Clock the FSM and return its output word `F`.
    #[inline]
    fn clock_fsm(&mut self) -> u32 {
        let Fsm { r1, r2, r3 } = self.fsm;
        let f = self.lfsr[15].wrapping_add(r1) ^ r2;
        let r = r2.wrapping_add(r3 ^ self.lfsr[5]);
        self.fsm = Fsm {
            r1: r,
            r2: s1(r1),
            r3: s2(r2),
        };
        f
    }

    /// Clock the LFSR: compute the feedback word, shift, store it in s15.
    #[inline]
    fn clock_lfsr(&mut self, mode: ClockMode) {
        let s0 = self.lfsr[0];
        let s11 = self.lfsr[11];

        let mut v = (s0 << 8)
            ^ MUL_ALPHA[(s0 >> 24) as usize]
            ^ self.lfsr[2]
            ^ (s11 >> 8)
            ^ DIV_ALPHA[(s11 & 0xff) as usize];
        if let ClockMode::Initialization(f) = mode {
            v ^= f;
        }

        self.lfsr.copy_within(1.., 0);
        self.lfsr[LFSR_LEN - 1] = v;
    }
}

impl fmt::Debug for Snow3g {
    // Register contents are key-derived and stay out of logs
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snow3g")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Iterator returned by [`Snow3g::words`].
#[derive(Debug)]
pub struct Words<'a> {
    engine: &'a mut Snow3g,
}

impl Iterator for Words<'_> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        Some(self.engine.next_word())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Split 16 bytes into four big-endian words.
fn words_from_bytes(bytes: &[u8], input: InputKind, expected: usize) -> Result<[u32; 4]> {
    let bytes: &[u8; 16] = bytes
        .try_into()
        .map_err(|_| Snow3gError::InvalidInputLength {
            input,
            expected,
            actual: bytes.len(),
        })?;

    let mut words = [0u32; 4];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(words)
}
