//! Schedule command implementation.
//!
//! Lists the adjusted coupon payment dates of a bond together with the
//! discounted value of each coupon.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use fixbond_bonds::cashflows::{LogObserver, PaymentSchedule, ScheduleGenerator};
use fixbond_bonds::{BondPricer, FixedCouponBond};
use fixbond_core::types::Date;

use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::input::BondArgs;
use crate::output::{print_json, Output};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub bond: BondArgs,
}

/// One coupon payment, earliest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentFlow {
    /// Position in chronological order, starting at 1.
    pub number: usize,
    /// Adjusted payment date.
    pub date: Date,
    /// Coupon amount.
    pub coupon: f64,
    /// Continuously compounded discount factor to the payment date.
    pub discount_factor: f64,
    /// Discounted coupon.
    pub present_value: f64,
}

/// Table row for a [`PaymentFlow`].
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct PaymentRow {
    #[tabled(rename = "#")]
    pub number: usize,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Day")]
    pub weekday: String,
    #[tabled(rename = "Coupon")]
    pub coupon: String,
    #[tabled(rename = "Discount Factor")]
    pub discount_factor: String,
    #[tabled(rename = "PV")]
    pub present_value: String,
}

/// Builds the chronological cash flow listing of a schedule.
pub fn payment_flows(bond: &FixedCouponBond, schedule: &PaymentSchedule) -> Vec<PaymentFlow> {
    let coupon = bond.coupon_per_period();
    schedule
        .chronological()
        .into_iter()
        .enumerate()
        .map(|(i, date)| {
            let discount_factor =
                BondPricer::discount_factor(bond.discount_rate(), bond.valuation_date(), date);
            PaymentFlow {
                number: i + 1,
                date,
                coupon,
                discount_factor,
                present_value: coupon * discount_factor,
            }
        })
        .collect()
}

/// Formats flows for table or CSV output.
pub fn payment_rows(flows: &[PaymentFlow], out: &Output) -> Vec<PaymentRow> {
    flows
        .iter()
        .map(|flow| PaymentRow {
            number: flow.number,
            date: flow.date.to_string(),
            weekday: flow.date.weekday().to_string(),
            coupon: out.amount(flow.coupon),
            discount_factor: format!("{:.8}", flow.discount_factor),
            present_value: out.amount(flow.present_value),
        })
        .collect()
}

/// Execute the schedule command.
pub fn execute(args: ScheduleArgs, out: Output, config: &CliConfig) -> Result<()> {
    let bond = args.bond.build_bond(config)?;
    let schedule = ScheduleGenerator::generate_with_observer(&bond, &mut LogObserver)?;
    let flows = payment_flows(&bond, &schedule);

    match out.format {
        OutputFormat::Table | OutputFormat::Csv => {
            out.header(&format!(
                "Payment Schedule ({} {} coupons to {})",
                flows.len(),
                bond.frequency(),
                bond.maturity_date()
            ));
            out.rows(&payment_rows(&flows, &out))?;
        }
        OutputFormat::Json => print_json(&flows)?,
        OutputFormat::Minimal => {
            for flow in &flows {
                println!("{}", flow.date);
            }
        }
    }

    Ok(())
}
