//! Config command implementation.
//!
//! Shows where the configuration lives, what it contains, and can write a
//! starter file.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::config::{default_path, CliConfig};
use crate::output::{print_header, print_info, print_json, print_success, KeyValue, Output};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show the configuration file location
    Path,

    /// Write a configuration file with the default settings
    Init(InitArgs),
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, out: Output, explicit: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(out, explicit),
        ConfigCommand::Path => execute_path(explicit),
        ConfigCommand::Init(init_args) => execute_init(&init_args, explicit),
    }
}

fn target_path(explicit: Option<&Path>) -> Result<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(default_path)
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// Show the effective configuration.
fn execute_show(out: Output, explicit: Option<&Path>) -> Result<()> {
    let (config, source) = CliConfig::resolve(explicit)?;

    let frequency = config
        .default_frequency
        .map_or_else(|| "(prompt)".to_string(), |f| f.to_string());
    let results = vec![
        KeyValue::new("default_format", config.default_format.to_string()),
        KeyValue::new("precision", config.precision.to_string()),
        KeyValue::new("default_frequency", frequency),
        KeyValue::new("show_schedule", config.show_schedule.to_string()),
    ];

    match out.format {
        OutputFormat::Table => {
            print_header("Current Configuration");
            out.rows(&results)?;
            if !out.quiet {
                match source {
                    Some(path) => print_info(&format!("Loaded from {}", path.display())),
                    None => print_info("No configuration file found, using defaults"),
                }
            }
        }
        OutputFormat::Csv => out.rows(&results)?,
        OutputFormat::Json => print_json(&config)?,
        OutputFormat::Minimal => print!("{}", config.to_toml()?),
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(explicit: Option<&Path>) -> Result<()> {
    let path = target_path(explicit)?;
    print_info(&format!("Config file: {}", path.display()));
    if path.is_file() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

/// Write the default configuration.
fn execute_init(args: &InitArgs, explicit: Option<&Path>) -> Result<()> {
    let path = target_path(explicit)?;
    if path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists; use --force to overwrite",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, CliConfig::default().to_toml()?)?;
    tracing::info!("Wrote default configuration to {}", path.display());

    print_success(&format!("Created {}", path.display()));
    Ok(())
}
