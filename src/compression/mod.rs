//! The compression module holds the whole-file entry points for huffzip.
//!
//! Compression happens in the following steps:
//! - Escape: Replace designated punctuation and newlines with placeholder tokens.
//! - Frequency count: Count every character of the escaped text.
//! - Tree build: Classic min-heap Huffman merge over the frequencies.
//! - Code generation: Walk the tree into the code table, append the sentinel.
//! - Bit packing: Concatenate codes, pad to a byte boundary, prefix the padding byte.
//!
//! The code table is written to its own text file beside the payload.
//! Decompression reloads that table and follows the inverse of the
//! compression process: unpack the bits against the reverse code mapping,
//! then unescape the recovered text.
//!
pub mod compress;
pub mod decompress;

use std::fs;
use std::io;
use std::path::Path;

use log::{error, info};

/// Compress `input` then decompress the result, reporting whether the
/// decoded text matches the original byte for byte. The payload, decoded
/// text, and code table land at the three supplied paths.
pub fn round_trip(
    input: &Path,
    payload: &Path,
    decoded: &Path,
    table: &Path,
) -> io::Result<bool> {
    let summary = compress::compress(input, payload, table)?;
    let result = decompress::decompress(payload, decoded, table)?;

    let original = fs::read_to_string(input)?;
    let matched = original == result.text;
    if matched {
        info!(
            "Round trip matched {} (ratio {:.2})",
            input.display(),
            summary.ratio
        );
    } else {
        error!("Round trip MISMATCH for {}", input.display());
    }
    Ok(matched)
}

#[cfg(test)]
mod test {
    use super::round_trip;
    use std::fs;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("huffzip_roundtrip_{}", name))
    }

    fn assert_round_trips(name: &str, text: &str) {
        let input = scratch(&format!("{}_in.txt", name));
        let payload = scratch(&format!("{}_out.huf", name));
        let decoded = scratch(&format!("{}_decoded.txt", name));
        let table = scratch(&format!("{}_codes.txt", name));
        fs::write(&input, text).unwrap();

        assert!(round_trip(&input, &payload, &decoded, &table).unwrap());
        assert_eq!(fs::read_to_string(&decoded).unwrap(), text);

        for p in [&input, &payload, &decoded, &table] {
            let _ = fs::remove_file(p);
        }
    }

    #[test]
    fn simple_text() {
        assert_round_trips("simple", "hello");
    }

    #[test]
    fn all_unique_characters() {
        assert_round_trips("unique", "abcdef");
    }

    #[test]
    fn highly_repetitive_text() {
        assert_round_trips("repetitive", "aaaaaaaabbbbcccdde");
    }

    #[test]
    fn mixed_case_and_punctuation() {
        assert_round_trips("mixed", "Hello, World!");
    }

    #[test]
    fn long_string_with_newlines() {
        let text = "This is a test.\nThis is only a test.\n".repeat(10);
        assert_round_trips("newlines", text.trim());
    }

    #[test]
    fn single_character_repeated() {
        assert_round_trips("single", &"a".repeat(20));
    }

    #[test]
    fn short_string_with_spaces() {
        assert_round_trips("spaces", "a a a a a a ");
    }

    #[test]
    fn alphanumeric_string() {
        assert_round_trips("alnum", "123abcABC");
    }

    #[test]
    fn symbols_and_punctuation() {
        assert_round_trips("symbols", "@#$%^&*()_+{}|:<>?");
    }

    #[test]
    fn realistic_paragraph_with_repetition() {
        assert_round_trips(
            "pangram",
            "The quick brown fox jumps over the lazy dog. \
             The quick brown fox jumps over the lazy dog.",
        );
    }
}
