use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use janseva_core::gst::{self, GstInput, GstMode};

use crate::input;

/// Arguments for GST calculation
#[derive(Args)]
pub struct GstArgs {
    /// Amount: pre-tax base (exclusive mode) or tax-inclusive total (inclusive mode)
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// GST rate as a fraction (e.g. 0.18 for 18%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Whether the amount already contains the tax
    #[arg(long, value_enum, default_value = "exclusive")]
    pub mode: ModeArg,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Exclusive,
    Inclusive,
}

impl From<ModeArg> for GstMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Exclusive => GstMode::Exclusive,
            ModeArg::Inclusive => GstMode::Inclusive,
        }
    }
}

pub fn run_gst(args: GstArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let gst_input: GstInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        GstInput {
            amount: args.amount.ok_or("--amount is required (or provide --input)")?,
            rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            mode: args.mode.into(),
        }
    };
    let result = gst::calculate_gst(&gst_input)?;
    Ok(serde_json::to_value(result)?)
}
