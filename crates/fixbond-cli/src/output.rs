//! Rendering of command results.
//!
//! Results go to stdout; status lines and errors are decorated with
//! `colored` markers.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// How command results are rendered.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    /// Selected format.
    pub format: OutputFormat,
    /// Decimal places for amounts.
    pub precision: usize,
    /// Suppress headers and informational lines.
    pub quiet: bool,
}

impl Output {
    /// Formats an amount with the configured precision.
    pub fn amount(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.precision)
    }

    /// Section title, shown only for non-quiet table output.
    pub fn header(&self, title: &str) {
        if self.format == OutputFormat::Table && !self.quiet {
            print_header(title);
        }
    }

    /// Writes `data` as CSV records or, for every other format, a table.
    pub fn rows<T: Serialize + Tabled>(&self, data: &[T]) -> anyhow::Result<()> {
        if self.format == OutputFormat::Csv {
            let stdout = std::io::stdout();
            write_csv(stdout.lock(), data)
        } else {
            println!("{}", render_table(data));
            Ok(())
        }
    }
}

/// Rounded table with the first column left aligned.
fn render_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results.".to_string();
    }
    Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string()
}

/// One header record followed by one record per row.
fn write_csv<W: Write, T: Serialize>(sink: W, data: &[T]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    data.iter().try_for_each(|row| writer.serialize(row))?;
    writer.flush()?;
    Ok(())
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Formats a fraction as a percentage, e.g. `0.045` as `4.5000%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.4}%", value * 100.0)
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", "error:".red().bold());
}

pub fn print_info(message: &str) {
    println!("{} {message}", "-".blue());
}

pub fn print_success(message: &str) {
    println!("{} {message}", "ok:".green());
}

pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A labelled value in a two-column summary.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    #[serde(rename = "metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
