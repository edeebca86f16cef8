//! Bit packing for the encode path.
//!
//! Concatenates the per-character codes into a bit stream, pads the stream
//! to a byte boundary with zero bits, and emits one leading byte holding the
//! padding length. A stream that is already byte-aligned still gets a full
//! byte of padding, so the padding byte is always 1-8.

use std::io::{self, Error, ErrorKind};

use log::trace;

use crate::huffman_coding::code_table::CodeTable;

/// Packs bits into bytes through a u64 queue that is drained into the output
/// buffer one byte at a time.
pub struct BitPacker {
    pub output: Vec<u8>,
    queue: u64,
    q_bits: u8,
    bit_count: usize,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer sized to the suggested
    /// byte count. Call finalize() to pad the queue out before reading the
    /// output buffer.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
            bit_count: 0,
        }
    }

    /// Push a single code bit onto the stream.
    pub fn push_bit(&mut self, bit: bool) {
        self.queue <<= 1; //shift queue by one bit
        self.queue |= bit as u64; //add the bit to the queue
        self.q_bits += 1; //update depth of queue bits
        self.bit_count += 1;
        self.write_stream();
    }

    /// Push a binary-string code ('0'/'1' characters) onto the stream.
    pub fn push_code(&mut self, code: &str) {
        for ch in code.chars() {
            self.push_bit(ch == '1');
        }
    }

    /// Internal bitstream write function common to all push functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Count of code bits pushed so far. Padding bits are not counted.
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Pad the stream to a byte boundary with zero bits and return the
    /// padding length. An aligned stream gets a full 8 bits of padding
    /// (8 - 0 = 8), so the result is always 1-8.
    pub fn finalize(&mut self) -> u8 {
        let padding = 8 - (self.bit_count % 8) as u8;
        self.queue <<= padding;
        self.q_bits += padding;
        self.write_stream();
        padding
    }
}

/// Encode the escaped text against the code table: one leading padding byte,
/// then the byte-aligned packed codes. A character without a table entry is
/// a fatal lookup error; silently dropping it would corrupt the output.
pub fn pack(escaped_text: &str, table: &CodeTable) -> io::Result<Vec<u8>> {
    let mut packer = BitPacker::new(escaped_text.len() / 4 + 2);
    for ch in escaped_text.chars() {
        match table.char_code(ch) {
            Some(code) => packer.push_code(code),
            None => {
                return Err(Error::new(
                    ErrorKind::NotFound,
                    format!("No code table entry for character {:?}", ch),
                ))
            }
        }
    }
    let padding = packer.finalize();
    trace!(
        "Packed {} code bits plus {} padding bits",
        packer.bit_count(),
        padding
    );

    let mut payload = Vec::with_capacity(packer.output.len() + 1);
    payload.push(padding);
    payload.extend_from_slice(&packer.output);
    Ok(payload)
}
