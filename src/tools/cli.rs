//! Command line interface for the huffzip compressor.
//!
//! The CLI is thin glue around the codec entry points: it resolves the three
//! file paths each operation needs (input, output, code table), sets the log
//! level, and prints the timing and ratio figures the codec returns without
//! interpreting them.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::LevelFilter;

/// Default file name for the persisted code table.
pub const DEFAULT_TABLE_NAME: &str = "huffman_codes.txt";

/// Command Line Interpretation - uses the external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A Huffman prefix-code text compressor",
    long_about = "Compresses a text file with a Huffman prefix code built from its own \
                  character frequencies. The code table is written next to the payload \
                  and is required to decompress it."
)]
pub struct Args {
    /// Sets verbosity. Repeat for more detail (-v info, -vv debug, -vvv trace)
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    pub verbose: usize,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress a text file
    Compress {
        /// File to compress
        input: PathBuf,
        /// Output payload file (defaults to INPUT with a .huf extension)
        output: Option<PathBuf>,
        /// Code table file (defaults to huffman_codes.txt beside the output)
        #[clap(short, long)]
        table: Option<PathBuf>,
    },
    /// Decompress a payload file
    Decompress {
        /// Payload file to decompress
        input: PathBuf,
        /// Output text file (defaults to INPUT with a .txt extension)
        output: Option<PathBuf>,
        /// Code table file (defaults to huffman_codes.txt beside the input)
        #[clap(short, long)]
        table: Option<PathBuf>,
    },
    /// Compress then decompress a file and verify the result matches
    Roundtrip {
        /// File to push through the round trip
        input: PathBuf,
        /// Code table file (defaults to huffman_codes.txt beside the input)
        #[clap(short, long)]
        table: Option<PathBuf>,
    },
}

/// Map the -v count to a log level.
pub fn level_filter(verbose: usize) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Default payload path for compression: the input with a .huf extension.
pub fn default_compressed_path(input: &Path) -> PathBuf {
    input.with_extension("huf")
}

/// Default output path for decompression: the input with a .txt extension.
pub fn default_decoded_path(input: &Path) -> PathBuf {
    input.with_extension("txt")
}

/// Default code table path: huffman_codes.txt beside the given file.
pub fn default_table_path(beside: &Path) -> PathBuf {
    beside.with_file_name(DEFAULT_TABLE_NAME)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_paths_sit_beside_the_input() {
        let input = Path::new("data/input_file.txt");
        assert_eq!(default_compressed_path(input), Path::new("data/input_file.huf"));
        assert_eq!(
            default_decoded_path(Path::new("data/input_file.huf")),
            Path::new("data/input_file.txt")
        );
        assert_eq!(
            default_table_path(Path::new("data/input_file.huf")),
            Path::new("data/huffman_codes.txt")
        );
    }

    #[test]
    fn verbosity_ladder() {
        assert_eq!(level_filter(0), LevelFilter::Warn);
        assert_eq!(level_filter(1), LevelFilter::Info);
        assert_eq!(level_filter(2), LevelFilter::Debug);
        assert_eq!(level_filter(5), LevelFilter::Trace);
    }
}
