//! One-shot keystream derivation
//!
//! Convenience entry points that run a whole session (initialize, generate,
//! discard) in one call. Words are serialized big-endian, the byte order
//! used by every SNOW 3G consumer in 3GPP.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::Result;
use crate::snow3g::Snow3g;

/// Derive `word_count` keystream words for a key and IV.
///
/// # Arguments
/// * `key` - 128-bit key (16 bytes)
/// * `iv` - 128-bit IV (16 bytes)
/// * `word_count` - Number of 32-bit words to produce
pub fn derive_keystream_words(key: &[u8], iv: &[u8], word_count: usize) -> Result<Vec<u32>> {
    Snow3g::with_key_iv(key, iv)?.generate_keystream(word_count)
}

/// Derive `4 * word_count` keystream bytes for a key and IV.
///
/// # Example
///
/// ```
/// use snow3g_crypto::derive_keystream;
///
/// let ks = derive_keystream(&[0u8; 16], &[0u8; 16], 2).unwrap();
/// assert_eq!(&ks[..], &[0xC7, 0x64, 0xA0, 0x37, 0xB1, 0x2F, 0xC8, 0x57]);
/// ```
pub fn derive_keystream(key: &[u8], iv: &[u8], word_count: usize) -> Result<Bytes> {
    let words = derive_keystream_words(key, iv, word_count)?;
    Ok(words_to_bytes(&words))
}

/// Serialize keystream words big-endian.
pub fn words_to_bytes(words: &[u32]) -> Bytes {
    let mut buf = BytesMut::with_capacity(words.len() * 4);
    for &word in words {
        buf.put_u32(word);
    }
    buf.freeze()
}
