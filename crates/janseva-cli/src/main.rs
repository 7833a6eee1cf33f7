mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::electricity::ElectricityArgs;
use commands::gst::GstArgs;
use commands::income_tax::IncomeTaxArgs;
use commands::sip::SipArgs;
use commands::water::WaterArgs;

/// Jan Seva Kendra municipal tariff and tax calculations
#[derive(Parser)]
#[command(
    name = "jsk",
    version,
    about = "Jan Seva Kendra municipal tariff and tax calculations",
    long_about = "A CLI for the Jan Seva Kendra calculation core: slab-based \
                  electricity and water bills, GST in both directions, income \
                  tax by regime, and SIP future value, all with decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate an electricity bill from units consumed
    Electricity(ElectricityArgs),
    /// Calculate a water bill from kilolitres consumed
    Water(WaterArgs),
    /// Calculate GST (exclusive or inclusive of tax)
    Gst(GstArgs),
    /// Calculate income tax by regime and age bracket
    IncomeTax(IncomeTaxArgs),
    /// Calculate SIP future value
    Sip(SipArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Electricity(args) => commands::electricity::run_electricity(args),
        Commands::Water(args) => commands::water::run_water(args),
        Commands::Gst(args) => commands::gst::run_gst(args),
        Commands::IncomeTax(args) => commands::income_tax::run_income_tax(args),
        Commands::Sip(args) => commands::sip::run_sip(args),
        Commands::Version => {
            println!("jsk {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
