use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::JanSevaError;
use crate::tariffs::{self, ConnectionType};
use crate::tiered::{compute_tiered_charge, BillBreakdown};
use crate::types::{with_metadata, ComputationOutput, Money, Quantity};
use crate::JanSevaResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElectricityBillInput {
    pub units: Quantity,
    pub connection_type: ConnectionType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElectricityBillOutput {
    pub connection_type: ConnectionType,
    pub units: Quantity,
    pub breakdown: BillBreakdown,
    pub energy_charge: Money,
    pub fixed_charge: Money,
    pub electricity_duty: Money,
    /// Grand total rounded to the paise; presentation value.
    pub amount_payable: Money,
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Compute an electricity bill from metered units and connection type.
///
/// Slab rates and the fixed charge come from the published tariff for the
/// connection type; electricity duty is levied on the energy charge alone.
pub fn calculate_electricity_bill(
    input: &ElectricityBillInput,
) -> JanSevaResult<ComputationOutput<ElectricityBillOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.units <= Decimal::ZERO {
        return Err(JanSevaError::InvalidInput {
            field: "units".into(),
            reason: "Units consumed must be positive".into(),
        });
    }

    let schedule = tariffs::electricity_tariff(input.connection_type);
    let breakdown = compute_tiered_charge(input.units, &schedule.tiers, &schedule.options)?;

    if let Some(last) = breakdown.lines.last() {
        if last.tier_label.starts_with("Above") {
            warnings.push(format!(
                "Consumption of {} units falls in the highest slab ({}).",
                input.units, last.tier_label
            ));
        }
    }

    let electricity_duty = breakdown
        .surcharges
        .iter()
        .map(|s| s.amount)
        .sum::<Decimal>();

    let output = ElectricityBillOutput {
        connection_type: input.connection_type,
        units: input.units,
        energy_charge: breakdown.tier_subtotal,
        fixed_charge: breakdown.fixed_charge,
        electricity_duty,
        amount_payable: breakdown.grand_total.round_dp(2),
        breakdown,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Electricity Bill: slab-wise energy charge, fixed charge, \
         and electricity duty on the energy charge",
        &serde_json::json!({
            "connection_type": input.connection_type,
            "units": input.units.to_string(),
            "duty_rate": tariffs::ELECTRICITY_DUTY_RATE.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
