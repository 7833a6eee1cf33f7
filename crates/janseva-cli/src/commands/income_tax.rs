use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use janseva_core::income_tax::{self, IncomeTaxInput};
use janseva_core::tariffs::TaxRegime;

use crate::input;

/// Arguments for income tax calculation
#[derive(Args)]
pub struct IncomeTaxArgs {
    /// Gross annual income
    #[arg(long)]
    pub gross_income: Option<Decimal>,

    /// Tax regime and age bracket
    #[arg(long, value_enum, default_value = "new")]
    pub regime: RegimeArg,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RegimeArg {
    New,
    OldBelow60,
    OldSenior,
    OldSuperSenior,
}

impl From<RegimeArg> for TaxRegime {
    fn from(arg: RegimeArg) -> Self {
        match arg {
            RegimeArg::New => TaxRegime::New,
            RegimeArg::OldBelow60 => TaxRegime::OldBelow60,
            RegimeArg::OldSenior => TaxRegime::OldSenior,
            RegimeArg::OldSuperSenior => TaxRegime::OldSuperSenior,
        }
    }
}

pub fn run_income_tax(args: IncomeTaxArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let tax_input: IncomeTaxInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        IncomeTaxInput {
            gross_income: args
                .gross_income
                .ok_or("--gross-income is required (or provide --input)")?,
            regime: args.regime.into(),
        }
    };
    let result = income_tax::calculate_income_tax(&tax_input)?;
    Ok(serde_json::to_value(result)?)
}
