//! The huffman_coding module builds the prefix code for the huffzip compressor.
//!
//! Compression builds a tree from character frequencies, extracts a code per
//! character, and persists the codes; decompression never sees the tree, only
//! the reloaded table. The pieces are:
//! - tree: Min-heap Huffman merge producing the owned code tree.
//! - code_table: Symbol and CodeTable types plus code generation from the tree.
//! - table_file: The line-oriented table file format and its file I/O.
//!
pub mod code_table;
pub mod table_file;
pub mod tree;
