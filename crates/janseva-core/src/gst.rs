use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::JanSevaError;
use crate::tiered::{compute_tiered_charge, ChargeOptions, RateTier};
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::JanSevaResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Whether the supplied amount already contains the tax.
///
/// Inclusive mode is an explicit, caller-selected inverse calculation, not a
/// derived property of the forward one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GstMode {
    Exclusive,
    Inclusive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GstInput {
    pub amount: Money,
    pub rate: Rate,
    pub mode: GstMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GstOutput {
    pub mode: GstMode,
    pub rate: Rate,
    pub base_amount: Money,
    pub gst_amount: Money,
    pub cgst: Money,
    pub sgst: Money,
    pub total_amount: Money,
    /// Total rounded to the paise; presentation value.
    pub amount_payable: Money,
}

// ---------------------------------------------------------------------------
// Calculations
// ---------------------------------------------------------------------------

/// Recover the pre-tax base from a GST-inclusive total:
/// `base = total / (1 + rate)`, i.e. `total × 100 / (100 + rate_pct)`.
pub fn recover_base_from_inclusive_total(total: Money, rate: Rate) -> JanSevaResult<Money> {
    if total <= Decimal::ZERO {
        return Err(JanSevaError::InvalidInput {
            field: "amount".into(),
            reason: "Inclusive total must be positive".into(),
        });
    }
    if rate < Decimal::ZERO {
        return Err(JanSevaError::InvalidInput {
            field: "rate".into(),
            reason: "GST rate cannot be negative".into(),
        });
    }
    Ok(total / (Decimal::ONE + rate))
}

/// Compute GST in either direction.
///
/// Exclusive mode is the degenerate single-slab case of the tiered engine:
/// one open tier at the GST rate over the base amount. Inclusive mode
/// recovers the base first and takes the tax as the difference.
pub fn calculate_gst(input: &GstInput) -> JanSevaResult<ComputationOutput<GstOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.amount <= Decimal::ZERO {
        return Err(JanSevaError::InvalidInput {
            field: "amount".into(),
            reason: "Amount must be positive".into(),
        });
    }
    if input.rate < Decimal::ZERO {
        return Err(JanSevaError::InvalidInput {
            field: "rate".into(),
            reason: "GST rate cannot be negative".into(),
        });
    }
    if !crate::tariffs::GST_STANDARD_RATES.contains(&input.rate) {
        warnings.push(format!(
            "Rate {} is not one of the standard GST slabs (0%, 5%, 12%, 18%, 28%).",
            input.rate
        ));
    }

    let (base_amount, gst_amount, total_amount) = match input.mode {
        GstMode::Exclusive => {
            let tier = [RateTier::open(Decimal::ONE, input.rate)];
            let breakdown =
                compute_tiered_charge(input.amount, &tier, &ChargeOptions::default())?;
            let gst = breakdown.tier_subtotal;
            (input.amount, gst, input.amount + gst)
        }
        GstMode::Inclusive => {
            let base = recover_base_from_inclusive_total(input.amount, input.rate)?;
            (base, input.amount - base, input.amount)
        }
    };

    // Intra-state split: equal central and state halves.
    let half = gst_amount / Decimal::TWO;

    let output = GstOutput {
        mode: input.mode,
        rate: input.rate,
        base_amount,
        gst_amount,
        cgst: half,
        sgst: half,
        total_amount,
        amount_payable: total_amount.round_dp(2),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "GST: flat-rate tax, exclusive (base given) or inclusive \
         (base recovered from the tax-inclusive total)",
        &serde_json::json!({
            "mode": input.mode,
            "amount": input.amount.to_string(),
            "rate": input.rate.to_string(),
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
    use crate::tariffs::GST_STANDARD_RATES;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_exclusive_10000_at_18_pct() {
        let result = calculate_gst(&GstInput {
            amount: dec!(10_000),
            rate: dec!(0.18),
            mode: GstMode::Exclusive,
        })
        .unwrap();
        let out = &result.result;

        assert_eq!(out.base_amount, dec!(10_000));
        assert_eq!(out.gst_amount, dec!(1_800.00));
        assert_eq!(out.cgst, dec!(900.00));
        assert_eq!(out.sgst, dec!(900.00));
        assert_eq!(out.total_amount, dec!(11_800.00));
        assert_eq!(out.amount_payable, dec!(11_800.00));
    }

    #[test]
    fn test_inclusive_11800_at_18_pct() {
        let result = calculate_gst(&GstInput {
            amount: dec!(11_800),
            rate: dec!(0.18),
            mode: GstMode::Inclusive,
        })
        .unwrap();
        let out = &result.result;

        assert!((out.base_amount - dec!(10_000)).abs() < dec!(0.000001));
        assert!((out.gst_amount - dec!(1_800)).abs() < dec!(0.000001));
        assert_eq!(out.total_amount, dec!(11_800));
    }

    #[test]
    fn test_round_trip_across_standard_rates() {
        let base = dec!(2_499.99);
        for rate in GST_STANDARD_RATES {
            let forward = calculate_gst(&GstInput {
                amount: base,
                rate,
                mode: GstMode::Exclusive,
            })
            .unwrap();
            let recovered =
                recover_base_from_inclusive_total(forward.result.total_amount, rate).unwrap();
            assert!(
                (recovered - base).abs() < dec!(0.0001),
                "round trip drifted at rate {}: {}",
                rate,
                recovered
            );
        }
    }

    #[test]
    fn test_zero_rate_is_passthrough() {
        let result = calculate_gst(&GstInput {
            amount: dec!(500),
            rate: dec!(0),
            mode: GstMode::Exclusive,
        })
        .unwrap();
        let out = &result.result;

        assert_eq!(out.gst_amount, dec!(0));
        assert_eq!(out.total_amount, dec!(500));
    }

    #[test]
    fn test_non_standard_rate_warns() {
        let result = calculate_gst(&GstInput {
            amount: dec!(100),
            rate: dec!(0.07),
            mode: GstMode::Exclusive,
        })
        .unwrap();

        assert!(result.warnings.iter().any(|w| w.contains("standard GST slabs")));
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        for mode in [GstMode::Exclusive, GstMode::Inclusive] {
            let result = calculate_gst(&GstInput {
                amount: dec!(0),
                rate: dec!(0.18),
                mode,
            });
            match result.unwrap_err() {
                JanSevaError::InvalidInput { field, .. } => assert_eq!(field, "amount"),
                other => panic!("Expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_rejects_negative_rate() {
        let result = recover_base_from_inclusive_total(dec!(100), dec!(-0.05));
        assert!(matches!(
            result.unwrap_err(),
            JanSevaError::InvalidInput { .. }
        ));
    }
}
