//! Whole-file compression for huffzip.
//!
//! Orchestrates the encode path: escape the text, count character
//! frequencies, build the Huffman tree, extract the code table, then write
//! the table file and the bit-packed payload. The tree is dropped as soon as
//! the codes are extracted; only the table file carries coding information
//! forward to decompression.

use std::fs::{self, File};
use std::io::{self, Error, ErrorKind, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::bitstream::bitpacker::pack;
use crate::huffman_coding::code_table::generate_codes;
use crate::huffman_coding::table_file::write_table_file;
use crate::huffman_coding::tree::build_tree;
use crate::tools::escape::escape;
use crate::tools::freq_count::freqs;

/// Figures returned to the caller after a compression call. The CLI prints
/// them; nothing downstream interprets them.
#[derive(Debug)]
pub struct CompressSummary {
    /// Wall time for the whole call, file I/O included.
    pub elapsed: Duration,
    /// Input bytes per payload byte; 0.0 when the payload is empty.
    pub ratio: f64,
    pub input_bytes: u64,
    pub output_bytes: u64,
}

/// Compress the text file at `input`, writing the packed payload to `output`
/// and the code table to `table_path`. Parent directories of both outputs
/// are created as needed. Empty input is rejected: a frequency map with no
/// symbols has no defined tree root.
pub fn compress(input: &Path, output: &Path, table_path: &Path) -> io::Result<CompressSummary> {
    let start = Instant::now();

    let text = fs::read_to_string(input)?;
    let escaped = escape(&text);
    debug!(
        "Escaped {} characters to {}",
        text.chars().count(),
        escaped.chars().count()
    );

    let frequency_map = freqs(&escaped);
    let root = build_tree(&frequency_map).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("Nothing to compress in {}", input.display()),
        )
    })?;
    let table = generate_codes(root);
    debug!(
        "Generated {} codes for {} real symbols",
        table.len(),
        table.real_symbols()
    );

    write_table_file(table_path, &table)?;

    let payload = pack(&escaped, &table)?;
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut f_out = File::create(output)?;
    f_out.write_all(&payload)?;

    let elapsed = start.elapsed();
    let input_bytes = fs::metadata(input)?.len();
    let output_bytes = payload.len() as u64;
    let ratio = if output_bytes != 0 {
        input_bytes as f64 / output_bytes as f64
    } else {
        0.0
    };
    info!(
        "Compressed {} bytes to {} bytes (ratio {:.2}) in {:.4} seconds",
        input_bytes,
        output_bytes,
        ratio,
        elapsed.as_secs_f64()
    );

    Ok(CompressSummary {
        elapsed,
        ratio,
        input_bytes,
        output_bytes,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn scratch(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("huffzip_compress_{}", name))
    }

    #[test]
    fn writes_payload_and_table() {
        let input = scratch("in.txt");
        let output = scratch("out.huf");
        let table = scratch("codes.txt");
        fs::write(&input, "hello").unwrap();

        let summary = compress(&input, &output, &table).unwrap();
        assert_eq!(summary.input_bytes, 5);
        assert!(summary.output_bytes >= 2);
        assert!(summary.ratio > 0.0);

        let payload = fs::read(&output).unwrap();
        assert_eq!(payload.len() as u64, summary.output_bytes);
        assert!((1..=8).contains(&payload[0]));
        let table_text = fs::read_to_string(&table).unwrap();
        assert!(table_text.lines().any(|l| l == "__EOF__:11111111"));

        for p in [&input, &output, &table] {
            let _ = fs::remove_file(p);
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        let input = scratch("empty.txt");
        let output = scratch("empty.huf");
        let table = scratch("empty_codes.txt");
        fs::write(&input, "").unwrap();

        let err = compress(&input, &output, &table).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let _ = fs::remove_file(&input);
    }

    #[test]
    fn missing_input_surfaces_io_error() {
        let err = compress(
            Path::new("definitely/not/here.txt"),
            &scratch("never.huf"),
            &scratch("never_codes.txt"),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
