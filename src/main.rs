//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::io::{self, Error, ErrorKind};
use std::process::exit;

use clap::Parser;
use log::error;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use huffzip::compression::{compress::compress, decompress::decompress, round_trip};
use huffzip::tools::cli::{self, Args, Command};

fn main() {
    let args = Args::parse();

    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        cli::level_filter(args.verbose),
        Config::default(),
        TerminalMode::Stdout,
        ColorChoice::Auto,
    )
    .unwrap();

    if let Err(e) = run(&args) {
        error!("{}", e);
        exit(1);
    }
}

/// Resolve default paths and dispatch to the codec entry points, printing
/// the figures they return.
fn run(args: &Args) -> io::Result<()> {
    match &args.command {
        Command::Compress {
            input,
            output,
            table,
        } => {
            let output = output
                .clone()
                .unwrap_or_else(|| cli::default_compressed_path(input));
            let table = table
                .clone()
                .unwrap_or_else(|| cli::default_table_path(&output));
            let summary = compress(input, &output, &table)?;
            println!("Compression ratio: {:.2}", summary.ratio);
            println!("Execution time: {:.4} seconds", summary.elapsed.as_secs_f64());
        }
        Command::Decompress {
            input,
            output,
            table,
        } => {
            let output = output
                .clone()
                .unwrap_or_else(|| cli::default_decoded_path(input));
            let table = table
                .clone()
                .unwrap_or_else(|| cli::default_table_path(input));
            let summary = decompress(input, &output, &table)?;
            println!(
                "Decompression time: {:.4} seconds",
                summary.elapsed.as_secs_f64()
            );
        }
        Command::Roundtrip { input, table } => {
            let payload = cli::default_compressed_path(input);
            let decoded = payload.with_extension("decoded.txt");
            let table = table
                .clone()
                .unwrap_or_else(|| cli::default_table_path(&payload));
            if round_trip(input, &payload, &decoded, &table)? {
                println!("Round trip OK");
            } else {
                return Err(Error::new(
                    ErrorKind::InvalidData,
                    "Decoded text does not match the original",
                ));
            }
        }
    }
    Ok(())
}
