//! SNOW 3G keystream generator
//!
//! Implements the keystream generator behind the 3GPP UEA2/UIA2
//! (128-EEA1/128-EIA1) algorithms:
//! - [`Snow3g`]: the cipher engine (LFSR + FSM)
//! - Finite-field primitives for the LFSR feedback
//! - The `S1`/`S2` substitution boxes
//! - One-shot byte-level derivation
//!
//! Reference: ETSI/SAGE SNOW 3G Specification (3GPP TS 35.216)

pub mod error;
pub mod field;
pub mod keystream;
pub mod sbox;
pub mod snow3g;


pub use error::{InputKind, Result, Snow3gError};
pub use keystream::{derive_keystream, derive_keystream_words, words_to_bytes};
pub use snow3g::{EngineState, Snow3g, Words, IV_SIZE, KEY_SIZE};
