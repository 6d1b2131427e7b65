use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// 20 MiB
pub const DEFAULT_CHUNK_SIZE: u64 = 20 * 1024 * 1024;

#[derive(Parser)]
#[command(author, version, about = "wfcdev: split a text file and count its words", long_about = None)]
pub struct Cli {
    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug)]
pub struct SplitArgs {
    /// chunk size in bytes
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, value_parser = clap::value_parser!(u64).range(1..))]
    pub chunk_size: u64,

    /// read buffer size in bytes
    #[arg(long, default_value_t = wfc_core::split::DEFAULT_BUFFER_SIZE as u64, value_parser = clap::value_parser!(u64).range(1..))]
    pub buffer_size: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a file into part<N> files under <dir>/<YYYYMMDD>
    Split {
        source: PathBuf,
        #[command(flatten)]
        split: SplitArgs,
        /// fail instead of replacing existing chunk files
        #[arg(long)]
        no_clobber: bool,
    },

    /// Count words of every file in a directory and write wordCount<HHMMSS>.txt
    Count {
        dir: PathBuf,
        /// count the empty word produced by adjacent delimiters
        #[arg(long)]
        keep_empty: bool,
        /// fail instead of replacing an existing report
        #[arg(long)]
        no_clobber: bool,
    },

    /// Split, then count the chunk directory
    Run {
        source: PathBuf,
        #[command(flatten)]
        split: SplitArgs,
        #[arg(long)]
        keep_empty: bool,
        #[arg(long)]
        no_clobber: bool,
    },

    /// Append a file's lines to <source>test, N times, to build a large input
    Generate {
        source: PathBuf,
        #[arg(long, default_value_t = 4)]
        copies: u32,
    },
}
