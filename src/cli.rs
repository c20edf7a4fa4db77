use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rustdvd")]
#[command(about = "A Rust CLI tool for sending raw MMC/SCSI packets to optical drives")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logging and command tracing)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Specify configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show drive vendor, product ID and revision
    Info {
        /// Drive device path (e.g. /dev/sr0)
        #[arg(value_name = "DEVICE")]
        device: Option<String>,

        /// Print the identification as JSON
        #[arg(long)]
        json: bool,
    },

    /// Spin the disc up
    Start {
        /// Drive device path
        #[arg(value_name = "DEVICE")]
        device: Option<String>,

        /// Command timeout in seconds
        #[arg(short, long)]
        timeout: Option<u32>,
    },

    /// Spin the disc down
    Stop {
        /// Drive device path
        #[arg(value_name = "DEVICE")]
        device: Option<String>,

        /// Command timeout in seconds
        #[arg(short, long)]
        timeout: Option<u32>,
    },

    /// Send a raw 12-byte packet command
    Command {
        /// Drive device path
        #[arg(value_name = "DEVICE")]
        device: Option<String>,

        /// Command bytes in hex (e.g. "12 00 00 00 24 00 00 00 00 00 00 00")
        #[arg(long)]
        cdb: String,

        /// Response buffer length in bytes
        #[arg(short, long, default_value = "36")]
        length: usize,

        /// Command timeout in seconds
        #[arg(short, long)]
        timeout: Option<u32>,
    },

    /// Print the DVD scrambling keystream for a seed
    Cypher {
        /// LFSR seed (decimal or 0x-prefixed hex, 15 bits)
        #[arg(long)]
        seed: String,

        /// Number of keystream bytes
        #[arg(short, long, default_value = "2048")]
        length: usize,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
