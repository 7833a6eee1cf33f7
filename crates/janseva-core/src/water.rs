use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::JanSevaError;
use crate::tariffs::{self, WaterSource};
use crate::tiered::{compute_tiered_charge, BillBreakdown};
use crate::types::{with_metadata, ComputationOutput, Money, Quantity};
use crate::JanSevaResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterBillInput {
    pub kilolitres: Quantity,
    pub source: WaterSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterBillOutput {
    pub source: WaterSource,
    pub kilolitres: Quantity,
    pub breakdown: BillBreakdown,
    pub consumption_charge: Money,
    pub meter_rent: Money,
    pub service_tax: Money,
    /// Grand total rounded to the paise; presentation value.
    pub amount_payable: Money,
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Compute a water bill from metered kilolitres and supply source.
///
/// Unlike electricity duty, the service tax is levied on the running total:
/// slab charges plus meter rent.
pub fn calculate_water_bill(
    input: &WaterBillInput,
) -> JanSevaResult<ComputationOutput<WaterBillOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    if input.kilolitres <= Decimal::ZERO {
        return Err(JanSevaError::InvalidInput {
            field: "kilolitres".into(),
            reason: "Consumption must be positive".into(),
        });
    }

    let schedule = tariffs::water_tariff(input.source);
    let breakdown = compute_tiered_charge(input.kilolitres, &schedule.tiers, &schedule.options)?;

    let service_tax = breakdown
        .surcharges
        .iter()
        .map(|s| s.amount)
        .sum::<Decimal>();

    let output = WaterBillOutput {
        source: input.source,
        kilolitres: input.kilolitres,
        consumption_charge: breakdown.tier_subtotal,
        meter_rent: breakdown.fixed_charge,
        service_tax,
        amount_payable: breakdown.grand_total.round_dp(2),
        breakdown,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Water Bill: slab-wise consumption charge, meter rent, \
         and service tax on the running total",
        &serde_json::json!({
            "source": input.source,
            "kilolitres": input.kilolitres.to_string(),
            "service_tax_rate": tariffs::WATER_SERVICE_TAX_RATE.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_municipal_30_kilolitres() {
        let result = calculate_water_bill(&WaterBillInput {
            kilolitres: dec!(30),
            source: WaterSource::Municipal,
        })
        .unwrap();
        let out = &result.result;

        // 10×5 + 15×8 + 5×12 = 230; meter rent 25; tax 10% of 255 = 25.50
        assert_eq!(out.consumption_charge, dec!(230.00));
        assert_eq!(out.meter_rent, dec!(25));
        assert_eq!(out.service_tax, dec!(25.50));
        assert_eq!(out.amount_payable, dec!(280.50));
    }

    #[test]
    fn test_service_tax_includes_meter_rent() {
        let result = calculate_water_bill(&WaterBillInput {
            kilolitres: dec!(10),
            source: WaterSource::Municipal,
        })
        .unwrap();
        let out = &result.result;

        // 10×5 = 50; base for tax = 50 + 25 rent = 75; tax = 7.50
        assert_eq!(out.consumption_charge, dec!(50.00));
        assert_eq!(out.service_tax, dec!(7.50));
        assert_eq!(out.amount_payable, dec!(82.50));
    }

    #[test]
    fn test_borewell_uses_its_own_slabs() {
        let result = calculate_water_bill(&WaterBillInput {
            kilolitres: dec!(25),
            source: WaterSource::Borewell,
        })
        .unwrap();
        let out = &result.result;

        // 20×4 + 5×6 = 110; rent 15; tax 10% of 125 = 12.50
        assert_eq!(out.consumption_charge, dec!(110.00));
        assert_eq!(out.meter_rent, dec!(15));
        assert_eq!(out.amount_payable, dec!(137.50));
    }

    #[test]
    fn test_fractional_kilolitres() {
        let result = calculate_water_bill(&WaterBillInput {
            kilolitres: dec!(12.5),
            source: WaterSource::Municipal,
        })
        .unwrap();
        let out = &result.result;

        // 10×5 + 2.5×8 = 70
        assert_eq!(out.consumption_charge, dec!(70.0));
    }

    #[test]
    fn test_negative_consumption_rejected() {
        let result = calculate_water_bill(&WaterBillInput {
            kilolitres: dec!(-3),
            source: WaterSource::Borewell,
        });
        match result.unwrap_err() {
            JanSevaError::InvalidInput { field, .. } => assert_eq!(field, "kilolitres"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
