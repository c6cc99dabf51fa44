//! Price command implementation.
//!
//! Prices a fixed coupon bond by discounting its notional and coupons.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use fixbond_bonds::cashflows::LogObserver;
use fixbond_bonds::{BondPricer, FixedCouponBond, PriceResult};

use crate::cli::OutputFormat;
use crate::commands::schedule::{payment_flows, payment_rows};
use crate::config::CliConfig;
use crate::input::BondArgs;
use crate::output::{format_percent, print_json, KeyValue, Output};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Also print the payment schedule
    #[arg(long)]
    pub show_schedule: bool,
}

/// JSON document written by `price --format json`.
#[derive(Debug, Serialize)]
struct PriceOutput<'a> {
    bond: &'a FixedCouponBond,
    #[serde(flatten)]
    result: &'a PriceResult,
}

/// Summary lines for table and CSV output.
fn summary_rows(bond: &FixedCouponBond, result: &PriceResult, out: &Output) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Notional", out.amount(bond.notional())),
        KeyValue::new("Annual Coupon", format_percent(bond.annual_coupon_rate())),
        KeyValue::new("Frequency", bond.frequency().to_string()),
        KeyValue::new("Discount Rate", format_percent(bond.discount_rate())),
        KeyValue::new("Valuation Date", bond.valuation_date().to_string()),
        KeyValue::new("Maturity Date", bond.maturity_date().to_string()),
        KeyValue::new("Days to Maturity", bond.days_to_maturity().to_string()),
        KeyValue::new("Coupon Payments", result.payment_count.to_string()),
        KeyValue::new("Coupon Amount", out.amount(result.coupon_amount)),
        KeyValue::new("Face Value PV", out.amount(result.face_value_pv)),
        KeyValue::new("Coupon PV", out.amount(result.coupon_pv)),
        KeyValue::new("Price", out.amount(result.price)),
    ]
}

/// Execute the price command.
pub fn execute(args: PriceArgs, out: Output, config: &CliConfig) -> Result<()> {
    let bond = args.bond.build_bond(config)?;
    let result = BondPricer::price_with_observer(&bond, &mut LogObserver)?;
    let show_schedule = args.show_schedule || config.show_schedule;

    match out.format {
        OutputFormat::Table | OutputFormat::Csv => {
            out.header("Fixed Coupon Bond Pricing");
            out.rows(&summary_rows(&bond, &result, &out))?;

            if show_schedule {
                let flows = payment_flows(&bond, &result.schedule);
                out.header("Payment Schedule");
                out.rows(&payment_rows(&flows, &out))?;
            }
        }
        OutputFormat::Json => print_json(&PriceOutput {
            bond: &bond,
            result: &result,
        })?,
        OutputFormat::Minimal => {
            println!("{}", out.amount(result.price));
        }
    }

    Ok(())
}
