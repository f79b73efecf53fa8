//! Keystream output formatting

use clap::ValueEnum;
use snow3g_crypto::words_to_bytes;

use crate::logging::{format_hex_dump, HexDump};

/// How keystream words are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One word per line, 8 upper-case hex digits
    #[default]
    Words,
    /// All words as a single big-endian hex string
    Hex,
    /// Offset / hex / ASCII dump of the big-endian bytes
    Dump,
}

/// Render keystream words in the requested format.
///
/// An empty keystream renders as an empty string for `words` and `hex`.
pub fn render(words: &[u32], format: OutputFormat) -> String {
    match format {
        OutputFormat::Words => words
            .iter()
            .map(|w| format!("{w:08X}"))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Hex => HexDump(&words_to_bytes(words)).to_string(),
        OutputFormat::Dump => format_hex_dump(&words_to_bytes(words)),
    }
}
