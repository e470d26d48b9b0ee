use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use zeroize::Zeroizing;

use fourword::cli::{Cli, Commands};
use fourword::commands::{combine_shares, split_mnemonic};
use fourword::domain::{ShareCount, SplitConfig};

/// Read a mnemonic securely from stdin (hidden input when a TTY is available)
///
/// Words may be abbreviated to their first 4 characters.
fn read_mnemonic() -> Result<String> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter mnemonic (12 or 24 words, prefixes of 4 letters accepted):");
        rpassword::read_password().context("Failed to read mnemonic from stdin")
    } else {
        // Non-interactive mode (piped input)
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        let mut mnemonic = String::new();
        handle
            .read_line(&mut mnemonic)
            .context("Failed to read mnemonic from stdin")?;
        Ok(mnemonic.trim().to_string())
    }
}

/// Read shares from stdin, one per line, empty line to finish
fn read_shares() -> Result<Vec<String>> {
    let mut shares = Vec::new();

    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter shares (one per line, empty line to finish):");

        loop {
            let share = rpassword::read_password().context("Failed to read share from stdin")?;

            if share.trim().is_empty() {
                break;
            }

            shares.push(share.trim().to_string());
        }
    } else {
        let stdin = io::stdin();
        let handle = stdin.lock();

        for line in handle.lines() {
            let line = line.context("Failed to read line from stdin")?;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                break;
            }

            shares.push(trimmed.to_string());
        }
    }

    if shares.is_empty() {
        anyhow::bail!("No shares provided");
    }

    Ok(shares)
}

/// Read shares from a file, one per line, blank lines ignored
fn read_shares_from_file(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read shares from {}", path.display()))?;

    let shares: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if shares.is_empty() {
        anyhow::bail!("No shares found in {}", path.display());
    }

    Ok(shares)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            shares,
            threshold,
            output,
        } => {
            let mnemonic = Zeroizing::new(read_mnemonic()?);

            let share_count = ShareCount::new(shares)?;
            let config = SplitConfig::new(threshold, share_count)?;

            let share_mnemonics = split_mnemonic(&mnemonic, config)?;

            match output {
                Some(path) => {
                    let mut contents = share_mnemonics.join("\n");
                    contents.push('\n');
                    fs::write(&path, contents)
                        .with_context(|| format!("Failed to write shares to {}", path.display()))?;
                    eprintln!("Wrote {} shares to {}", share_mnemonics.len(), path.display());
                }
                None => {
                    for (idx, share) in share_mnemonics.iter().enumerate() {
                        println!("Share {}: {}", idx + 1, share);
                    }
                }
            }
        }
        Commands::Combine { file } => {
            let shares = match file {
                Some(path) => read_shares_from_file(&path)?,
                None => read_shares()?,
            };

            let recovered = Zeroizing::new(combine_shares(&shares)?);
            println!("{}", recovered.as_str());
        }
    }

    Ok(())
}
