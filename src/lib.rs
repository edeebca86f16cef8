//! Huffzip, a Huffman prefix-code text compressor.
//!
//! Builds a Huffman code from the character frequencies of a text, persists
//! the code table in a line-oriented text format, and bit-packs the text
//! against that code. Decompression reloads the persisted table and walks
//! the packed bit stream back into text. Punctuation characters that would
//! collide with the table-file format (and the newline) are escaped to
//! placeholder tokens before analysis and restored after decoding.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> huffzip compress test.txt`
//!
//! This writes the packed payload to test.huf and the code table to
//! huffman_codes.txt next to it. `huffzip decompress test.huf` reverses it.
//!
pub mod bitstream;
pub mod compression;
pub mod huffman_coding;
pub mod tools;
