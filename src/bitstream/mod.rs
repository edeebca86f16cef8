//! The bitstream module is the bit-level I/O subsystem for the huffzip compressor.
//!
//! The payload format is one leading byte holding the padding length,
//! followed by the byte-aligned concatenation of variable-length codes with
//! zero bits padding out the final byte. The pieces are:
//! - bitpacker: Packs code bit-strings into the payload on the encode path.
//! - bitreader: Surfaces the payload bits, minus padding, on the decode path.
//!
//! This subsystem is designed around the huffzip payload format. It is not
//! intended for more general use.
//!
pub mod bitpacker;
pub mod bitreader;
