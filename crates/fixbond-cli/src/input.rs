//! Collection of bond terms from flags, an input file and the terminal.
//!
//! Sources are merged in this order, later ones filling only what is still
//! missing:
//!
//! 1. command-line flags
//! 2. the `--input` JSON file
//! 3. `default_frequency` from the configuration
//! 4. interactive prompts (unless `--no-prompt`)
//!
//! Each prompted value is parsed and checked on its own and re-prompted
//! until it passes. Cross-field rules are left to [`validate`], which runs
//! once on the complete terms.
//!
//! [`validate`]: fixbond_bonds::instruments::validate

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Args;

use fixbond_bonds::instruments::{check_maturity, check_notional, check_rate, BondTerms};
use fixbond_bonds::FixedCouponBond;
use fixbond_core::types::{Date, Frequency};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Bond parameters shared by the `price` and `schedule` commands.
#[derive(Args, Debug, Clone, Default)]
pub struct BondArgs {
    /// Face amount repaid at maturity, e.g. 100
    #[arg(long, allow_negative_numbers = true)]
    pub notional: Option<f64>,

    /// Annual coupon rate as a fraction, e.g. 0.05 for 5%
    #[arg(long, allow_negative_numbers = true)]
    pub annual_coupon: Option<f64>,

    /// Coupon frequency: annual, quarterly or monthly
    #[arg(long, value_parser = parse_frequency)]
    pub frequency: Option<Frequency>,

    /// Continuously compounded discount rate as a fraction, e.g. 0.03
    #[arg(long, allow_negative_numbers = true)]
    pub discount_rate: Option<f64>,

    /// Valuation date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<Date>,

    /// Maturity date (YYYY-MM-DD), must be a weekday
    #[arg(long, value_parser = parse_date)]
    pub maturity: Option<Date>,

    /// JSON file with the bond terms; flags override its fields
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Fail instead of prompting for missing parameters
    #[arg(long)]
    pub no_prompt: bool,
}

fn parse_frequency(s: &str) -> Result<Frequency, String> {
    s.parse().map_err(|e: fixbond_core::CoreError| e.to_string())
}

fn parse_date(s: &str) -> Result<Date, String> {
    Date::parse(s.trim()).map_err(|e| e.to_string())
}

fn parse_number(s: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", s.trim()))
}

impl BondArgs {
    /// Merges flags, input file and configuration into a set of terms.
    ///
    /// Fields still missing afterwards are left as `None`.
    pub fn merged_terms(&self, config: &CliConfig) -> CliResult<BondTerms> {
        let mut terms = match &self.input {
            Some(path) => read_terms_file(path)?,
            None => BondTerms::default(),
        };

        override_with(&mut terms.notional, self.notional);
        override_with(&mut terms.annual_coupon_rate, self.annual_coupon);
        override_with(&mut terms.frequency, self.frequency);
        override_with(&mut terms.discount_rate, self.discount_rate);
        override_with(&mut terms.valuation_date, self.date);
        override_with(&mut terms.maturity_date, self.maturity);

        if terms.frequency.is_none() {
            terms.frequency = config.default_frequency;
        }

        Ok(terms)
    }

    /// Collects complete terms, prompting on stdin for anything missing,
    /// and builds the bond.
    pub fn build_bond(&self, config: &CliConfig) -> anyhow::Result<FixedCouponBond> {
        let mut terms = self.merged_terms(config)?;

        if self.no_prompt {
            let missing = missing_fields(&terms);
            if !missing.is_empty() {
                return Err(CliError::MissingArguments(missing).into());
            }
        } else {
            let stdin = std::io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), std::io::stderr());
            prompter.fill(&mut terms)?;
        }

        Ok(FixedCouponBond::new(terms)?)
    }
}

fn override_with<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

fn read_terms_file(path: &Path) -> CliResult<BondTerms> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::InputFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let terms = serde_json::from_str(&content).map_err(|e| CliError::InputFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    tracing::debug!("Read bond terms from {}", path.display());
    Ok(terms)
}

/// Returns the command-line names of the fields that are still missing.
pub fn missing_fields(terms: &BondTerms) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if terms.notional.is_none() {
        missing.push("--notional");
    }
    if terms.annual_coupon_rate.is_none() {
        missing.push("--annual-coupon");
    }
    if terms.frequency.is_none() {
        missing.push("--frequency");
    }
    if terms.discount_rate.is_none() {
        missing.push("--discount-rate");
    }
    if terms.valuation_date.is_none() {
        missing.push("--date");
    }
    if terms.maturity_date.is_none() {
        missing.push("--maturity");
    }
    missing
}

/// Reads parameter values interactively.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter reading answers from `reader` and writing
    /// prompts and complaints to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prompts for every missing field, in parameter order.
    pub fn fill(&mut self, terms: &mut BondTerms) -> CliResult<()> {
        if terms.notional.is_none() {
            terms.notional = Some(self.ask("notional", "e.g. 100", |s| {
                let value = parse_number(s)?;
                check_notional(value).map_or(Ok(value), |v| Err(v.to_string()))
            })?);
        }
        if terms.annual_coupon_rate.is_none() {
            terms.annual_coupon_rate = Some(self.ask(
                "annual_coupon",
                "as a fraction, e.g. 5% as 0.05",
                |s| {
                    let value = parse_number(s)?;
                    check_rate("annual_coupon_rate", value)
                        .map_or(Ok(value), |v| Err(v.to_string()))
                },
            )?);
        }
        if terms.frequency.is_none() {
            terms.frequency = Some(self.ask(
                "frequency",
                "annual, quarterly or monthly",
                parse_frequency,
            )?);
        }
        if terms.discount_rate.is_none() {
            terms.discount_rate = Some(self.ask(
                "discount_rate",
                "as a fraction, e.g. 3% as 0.03",
                |s| {
                    let value = parse_number(s)?;
                    check_rate("discount_rate", value).map_or(Ok(value), |v| Err(v.to_string()))
                },
            )?);
        }
        if terms.valuation_date.is_none() {
            terms.valuation_date = Some(self.ask("date", "YYYY-MM-DD", parse_date)?);
        }
        if terms.maturity_date.is_none() {
            terms.maturity_date = Some(self.ask("maturity", "YYYY-MM-DD, a weekday", |s| {
                let date = parse_date(s)?;
                check_maturity(date).map_or(Ok(date), |v| Err(v.to_string()))
            })?);
        }
        Ok(())
    }

    /// Asks for one value until `parse` accepts the answer.
    pub fn ask<T>(
        &mut self,
        name: &'static str,
        hint: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> CliResult<T> {
        loop {
            write!(self.writer, "Enter value for {name} ({hint}): ")?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(CliError::InputClosed(name));
            }

            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(reason) => {
                    tracing::debug!("Rejected {} input {:?}: {}", name, line.trim(), reason);
                    writeln!(self.writer, "Invalid {name}: {reason}")?;
                }
            }
        }
    }
}
