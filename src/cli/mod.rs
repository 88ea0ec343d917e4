use std::env::current_dir;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use crate::error::{error_chain, Error};
use crate::logging;
use crate::rewards::{compute_rewards, TotalsCache};
use crate::source::{SampleSource, TransactionSource, VaultSource};
use crate::vault::VaultImpl;
pub use argument_parsing::{OutputFormat, RewardsOptions};

mod argument_parsing;
mod formatting;

pub fn rewards_operation() -> ExitCode {
    let arguments = RewardsOptions::parse();
    logging::set_up(arguments.verbosity);

    match run(&arguments) {
        Ok(screen) => {
            println!("{}", screen);
            ExitCode::SUCCESS
        }
        Err(error) => {
            let message = error_chain(&error);
            error!(error = %message, "Could not compute reward points");
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

pub fn run(arguments: &RewardsOptions) -> Result<String, Error> {
    let source = transaction_source(arguments)?;
    let aggregation = compute_rewards(source.as_ref(), arguments.on_invalid)?;

    let mut totals = TotalsCache::new();
    match arguments.format {
        OutputFormat::Table => Ok(formatting::format_rewards_screen(&aggregation, &mut totals)),
        OutputFormat::Json => Ok(formatting::format_rewards_json(&aggregation, &mut totals)?),
    }
}

fn transaction_source(arguments: &RewardsOptions) -> Result<Box<dyn TransactionSource>, Error> {
    if arguments.sample {
        return Ok(Box::new(SampleSource));
    }

    let vault_path = match &arguments.vault {
        Some(path) => path.clone(),
        None => current_dir().map_err(|error| Error::source_unavailable("current directory", error))?,
    };
    Ok(Box::new(VaultSource::new(VaultImpl { path: vault_path })))
}
