use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use janseva_core::tariffs::WaterSource;
use janseva_core::water::{self, WaterBillInput};

use crate::input;

/// Arguments for water bill calculation
#[derive(Args)]
pub struct WaterArgs {
    /// Kilolitres consumed
    #[arg(long)]
    pub kilolitres: Option<Decimal>,

    /// Supply source
    #[arg(long, value_enum, default_value = "municipal")]
    pub source: SourceArg,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SourceArg {
    Municipal,
    Borewell,
}

impl From<SourceArg> for WaterSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Municipal => WaterSource::Municipal,
            SourceArg::Borewell => WaterSource::Borewell,
        }
    }
}

pub fn run_water(args: WaterArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let bill_input: WaterBillInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        WaterBillInput {
            kilolitres: args
                .kilolitres
                .ok_or("--kilolitres is required (or provide --input)")?,
            source: args.source.into(),
        }
    };
    let result = water::calculate_water_bill(&bill_input)?;
    Ok(serde_json::to_value(result)?)
}
