use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Threshold;

/// Validates that the threshold is at least 2
/// A threshold of 1 would let any single share recover the entire secret
fn validate_threshold(s: &str) -> Result<Threshold, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Threshold::new(value).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "fourword")]
#[command(
    about = "Split BIP39 mnemonics into Shamir Secret Shares; seed and share words may be abbreviated to their first 4 characters"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a mnemonic into shares
    Split {
        /// Number of shares to create
        #[arg(short, long)]
        shares: u8,

        /// Threshold: minimum number of shares needed to reconstruct (must be >= 2)
        #[arg(short, long, value_parser = validate_threshold)]
        threshold: Threshold,

        /// Write shares to this file (one per line) instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Combine shares to reconstruct the original mnemonic
    Combine {
        /// Read shares from this file (one per line) instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
