//! burrows CLI - Burrows-Wheeler and move-to-front transforms
//!
//! Reads a whole input (file or stdin), applies one transform, and writes the
//! result (file or stdout).

mod commands;
mod utils;

use burrows_codec::config::{SuffixAlgorithm, SuffixSortConfig};
use burrows_core::Direction;
use clap::{Args, Parser, Subcommand, ValueEnum};
use commands::{Stage, cmd_index, cmd_stats, cmd_transform};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "burrows")]
#[command(
    author,
    version,
    about = "Burrows-Wheeler and move-to-front transforms"
)]
#[command(long_about = "
Reversible block-sorting transforms over raw byte streams.
Input defaults to stdin and output to stdout.

Examples:
  burrows bwt - < input.txt > input.bwt
  burrows bwt + < input.bwt > input.txt
  burrows mtf encode -i input.bwt -o input.mtf
  burrows pipeline compress -i input.txt -o input.bm
  burrows pipeline decompress -i input.bm -o input.txt
  burrows index ABRACADABRA!
  burrows stats -i input.txt --json
")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Burrows-Wheeler transform (32-bit first-row index + last column)
    Bwt {
        /// Transform (-) or inverse (+)
        #[arg(value_enum)]
        mode: Mode,

        #[command(flatten)]
        io: IoArgs,

        /// Suffix sorting algorithm
        #[arg(short, long, value_enum, default_value = "auto")]
        algorithm: Algorithm,
    },

    /// Move-to-front encoding (one index byte per input byte)
    Mtf {
        /// Encode (-) or decode (+)
        #[arg(value_enum)]
        mode: Mode,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Burrows-Wheeler followed by move-to-front
    #[command(alias = "p")]
    Pipeline {
        /// Compress (-) or decompress (+)
        #[arg(value_enum)]
        mode: Mode,

        #[command(flatten)]
        io: IoArgs,

        /// Suffix sorting algorithm
        #[arg(short, long, value_enum, default_value = "auto")]
        algorithm: Algorithm,
    },

    /// Print the sorted rotation offsets of a text
    Index {
        /// Text to index (defaults to ABRACADABRA!)
        text: Option<String>,

        /// Read the block from a file instead
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Suffix sorting algorithm
        #[arg(short, long, value_enum, default_value = "auto")]
        algorithm: Algorithm,
    },

    /// Show transform statistics for an input
    Stats {
        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

/// Input/output locations shared by the transform commands.
#[derive(Args, Debug, Clone, Default)]
struct IoArgs {
    /// Input file (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Direction of a transform command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Forward transform
    #[value(aliases = ["-", "transform", "compress"])]
    Encode,
    /// Inverse transform
    #[value(aliases = ["+", "inverse", "decompress"])]
    Decode,
}

impl From<Mode> for Direction {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Encode => Direction::Encode,
            Mode::Decode => Direction::Decode,
        }
    }
}

/// Suffix sorting algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum Algorithm {
    /// Naive sort for short blocks, prefix doubling otherwise
    #[default]
    Auto,
    /// Prefix doubling, O(n log n)
    Doubling,
    /// Comparison sort with a cyclic comparator
    Naive,
}

impl From<Algorithm> for SuffixSortConfig {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Auto => SuffixSortConfig::new(SuffixAlgorithm::Auto),
            Algorithm::Doubling => SuffixSortConfig::DOUBLING,
            Algorithm::Naive => SuffixSortConfig::NAIVE,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Bwt {
            mode,
            io,
            algorithm,
        } => cmd_transform(
            Stage::Bwt(algorithm.into()),
            mode.into(),
            io.input.as_deref(),
            io.output.as_deref(),
        ),
        Commands::Mtf { mode, io } => cmd_transform(
            Stage::Mtf,
            mode.into(),
            io.input.as_deref(),
            io.output.as_deref(),
        ),
        Commands::Pipeline {
            mode,
            io,
            algorithm,
        } => cmd_transform(
            Stage::Pipeline(algorithm.into()),
            mode.into(),
            io.input.as_deref(),
            io.output.as_deref(),
        ),
        Commands::Index {
            text,
            input,
            json,
            algorithm,
        } => cmd_index(text.as_deref(), input.as_deref(), json, &algorithm.into()),
        Commands::Stats { input, json } => cmd_stats(input.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(utils::exit_code(e.as_ref()));
    }
}
