use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::rewards::InvalidTransactionPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One table per customer
    #[default]
    Table,
    /// A JSON document
    Json,
}

/// Computes the loyalty reward points customers earned with their purchases.
#[derive(Parser, Debug)]
#[command()]
pub struct RewardsOptions {
    /// Directory holding the config.json with the transactions, defaults to the current directory
    #[arg(short = 'V', long)]
    pub vault: Option<PathBuf>,

    /// Use the built-in sample transactions
    #[arg(short = 's', long, conflicts_with = "vault")]
    pub sample: bool,

    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// What to do with transactions that have an unreadable date or a negative amount
    #[arg(short = 'i', long = "on-invalid", value_enum, default_value_t = InvalidTransactionPolicy::Fail)]
    pub on_invalid: InvalidTransactionPolicy,

    /// More logs on stderr, can be repeated
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbosity: u8,
}
