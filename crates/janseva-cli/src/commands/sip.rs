use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use janseva_core::sip::{self, SipInput};

use crate::input;

/// Arguments for SIP future value calculation
#[derive(Args)]
pub struct SipArgs {
    /// Monthly investment amount
    #[arg(long)]
    pub monthly_investment: Option<Decimal>,

    /// Expected annual return as a fraction (e.g. 0.12 for 12% p.a.)
    #[arg(long)]
    pub annual_rate: Option<Decimal>,

    /// Tenure in months
    #[arg(long, conflicts_with = "years")]
    pub months: Option<u32>,

    /// Tenure in years (alternative to --months)
    #[arg(long)]
    pub years: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_sip(args: SipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sip_input: SipInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let months = match (args.months, args.years) {
            (Some(m), _) => m,
            (None, Some(y)) => y * 12,
            (None, None) => return Err("--months or --years is required (or provide --input)".into()),
        };
        SipInput {
            monthly_investment: args
                .monthly_investment
                .ok_or("--monthly-investment is required (or provide --input)")?,
            annual_rate: args
                .annual_rate
                .ok_or("--annual-rate is required (or provide --input)")?,
            months,
        }
    };
    let result = sip::calculate_sip(&sip_input)?;
    Ok(serde_json::to_value(result)?)
}
