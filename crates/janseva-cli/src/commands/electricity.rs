use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use janseva_core::electricity::{self, ElectricityBillInput};
use janseva_core::tariffs::ConnectionType;

use crate::input;

/// Arguments for electricity bill calculation
#[derive(Args)]
pub struct ElectricityArgs {
    /// Units consumed (kWh)
    #[arg(long)]
    pub units: Option<Decimal>,

    /// Connection type
    #[arg(long, value_enum, default_value = "domestic")]
    pub connection_type: ConnectionArg,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ConnectionArg {
    Domestic,
    Commercial,
    Industrial,
}

impl From<ConnectionArg> for ConnectionType {
    fn from(arg: ConnectionArg) -> Self {
        match arg {
            ConnectionArg::Domestic => ConnectionType::Domestic,
            ConnectionArg::Commercial => ConnectionType::Commercial,
            ConnectionArg::Industrial => ConnectionType::Industrial,
        }
    }
}

pub fn run_electricity(args: ElectricityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let bill_input: ElectricityBillInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        ElectricityBillInput {
            units: args.units.ok_or("--units is required (or provide --input)")?,
            connection_type: args.connection_type.into(),
        }
    };
    let result = electricity::calculate_electricity_bill(&bill_input)?;
    Ok(serde_json::to_value(result)?)
}
