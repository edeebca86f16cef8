//! Whole-file decompression for huffzip.
//!
//! Reloads the persisted code table, strips the payload's padding, and walks
//! the bit stream against the reverse code mapping. Matching is greedy on
//! the accumulated candidate bits: the first table hit emits a character and
//! resets the candidate, which is sound because the generated codes are
//! prefix-free. A match on the end-of-stream sentinel stops the scan and
//! discards whatever follows. Termination normally comes from the padded
//! bit count dividing exactly into whole codes; the sentinel never actually
//! appears in streams we produce, and a dangling partial code at the end of
//! a corrupt stream is dropped silently.

use std::fs::{self, File};
use std::io::{self, Error, ErrorKind, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use log::{info, trace};

use crate::bitstream::bitreader::BitReader;
use crate::huffman_coding::code_table::{CodeTable, Symbol};
use crate::huffman_coding::table_file::read_table_file;
use crate::tools::escape::unescape;

/// Figures returned to the caller after a decompression call.
#[derive(Debug)]
pub struct DecompressSummary {
    /// The recovered text, as written to the output file.
    pub text: String,
    /// Wall time for the whole call, file I/O included.
    pub elapsed: Duration,
}

/// Decode a packed payload back into escaped text using the code table.
/// The payload's first byte is the padding length; a payload too short to
/// carry it is an error. A corrupt padding byte larger than the remaining
/// bit count saturates to an empty stream rather than underflowing.
pub fn unpack(payload: &[u8], table: &CodeTable) -> io::Result<String> {
    let padding = *payload.first().ok_or_else(|| {
        Error::new(ErrorKind::UnexpectedEof, "Payload is missing its padding byte")
    })? as usize;
    let body = &payload[1..];
    let bits = (body.len() * 8).saturating_sub(padding);

    let reverse = table.reverse();
    let mut reader = BitReader::new(body, bits);
    let mut decoded = String::new();
    let mut candidate = String::new();

    while let Some(bit) = reader.bit() {
        candidate.push(if bit == 1 { '1' } else { '0' });
        if let Some(&symbol) = reverse.get(candidate.as_str()) {
            match symbol {
                Symbol::Eof => {
                    trace!("Hit the end-of-stream sentinel; discarding the rest");
                    candidate.clear();
                    break;
                }
                Symbol::Char(ch) => decoded.push(ch),
            }
            candidate.clear();
        }
    }
    if !candidate.is_empty() {
        trace!("Dropped {} dangling bits at end of stream", candidate.len());
    }
    Ok(decoded)
}

/// Decompress the payload file at `input` using the table file at
/// `table_path`, writing the recovered text to `output`. Parent directories
/// of the output are created as needed.
pub fn decompress(input: &Path, output: &Path, table_path: &Path) -> io::Result<DecompressSummary> {
    let start = Instant::now();

    let table = read_table_file(table_path)?;
    let payload = fs::read(input)?;
    let escaped = unpack(&payload, &table)?;
    let text = unescape(&escaped);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut f_out = File::create(output)?;
    f_out.write_all(text.as_bytes())?;

    let elapsed = start.elapsed();
    info!(
        "Decompressed {} payload bytes to {} characters in {:.4} seconds",
        payload.len(),
        text.chars().count(),
        elapsed.as_secs_f64()
    );

    Ok(DecompressSummary { text, elapsed })
}
