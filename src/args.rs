use tb::{BankConfig, Money, Result};

use std::{fs, path::PathBuf};

use anyhow::Context;

use clap::{Parser, Subcommand};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("File not found: {0}")]
    FileNotFound(String),
}

#[derive(Parser, Debug)]
#[command(name = "toy-bank", version, about = "In-memory toy bank: customers, accounts, deposits and withdrawals")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process a CSV file of requests, writing one JSON response per line to stdout
    Run {
        /// Path to the requests CSV
        input: PathBuf,

        /// Maximum amount of a single withdrawal for new accounts
        #[arg(long, default_value_t = BankConfig::DEFAULT_PER_WITHDRAWAL_LIMIT)]
        per_withdrawal_limit: Money,

        /// Maximum number of withdrawals per account
        #[arg(long, default_value_t = BankConfig::DEFAULT_DAILY_WITHDRAWAL_LIMIT)]
        daily_withdrawal_limit: u32,
    },

    /// Interactive single-account menu over stdin/stdout
    Console,
}

pub fn parse_args() -> Args {
    Args::parse()
}

/// Requires the input path to point at an existing file
pub fn canonicalize_input(input: PathBuf) -> Result<PathBuf> {
    let path = fs::canonicalize(&input)
        .with_context(|| InputArgsError::FileNotFound(input.display().to_string()))?;

    Ok(path)
}
