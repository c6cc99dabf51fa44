//! Fixbond CLI - price fixed coupon bonds from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Price a bond
//! fixbond price --notional 100 --annual-coupon 0.05 --frequency annual \
//!     --discount-rate 0.03 --date 2025-11-15 --maturity 2028-11-15
//!
//! # Missing parameters are prompted for
//! fixbond price --notional 100
//!
//! # Show the adjusted payment dates
//! fixbond schedule --input bond.json --format json
//!
//! # Log each payment date as it is generated
//! fixbond -v price --input bond.json
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod input;
mod logging;
mod output;

use cli::{Cli, Commands, OutputFormat};
use config::CliConfig;
use output::{print_error, Output};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let Cli {
        format,
        quiet,
        verbose,
        config: config_path,
        command,
    } = Cli::parse();

    logging::init(verbose, quiet);

    match command {
        Commands::Config(args) => {
            let out = Output {
                format: format.unwrap_or_default(),
                precision: CliConfig::default().precision,
                quiet,
            };
            commands::config::execute(args, out, config_path.as_deref())
        }
        Commands::Price(args) => {
            let (config, out) = load_config(format, quiet, config_path.as_deref())?;
            commands::price::execute(args, out, &config)
        }
        Commands::Schedule(args) => {
            let (config, out) = load_config(format, quiet, config_path.as_deref())?;
            commands::schedule::execute(args, out, &config)
        }
    }
}

fn load_config(
    format: Option<OutputFormat>,
    quiet: bool,
    path: Option<&std::path::Path>,
) -> Result<(CliConfig, Output)> {
    let (config, _) = CliConfig::resolve(path)?;
    let out = Output {
        format: format.unwrap_or(config.default_format),
        precision: config.precision,
        quiet,
    };
    Ok((config, out))
}
