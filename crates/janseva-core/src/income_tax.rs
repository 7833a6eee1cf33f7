use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::JanSevaError;
use crate::tariffs::{self, TaxRegime};
use crate::tiered::{compute_tiered_charge, ChargeLine, ChargeOptions, Surcharge, SurchargeBase};
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::JanSevaResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeTaxInput {
    pub gross_income: Money,
    pub regime: TaxRegime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeTaxOutput {
    pub regime: TaxRegime,
    pub gross_income: Money,
    pub exemption_limit: Money,
    pub taxable_income: Money,
    pub slab_lines: Vec<ChargeLine>,
    pub basic_tax: Money,
    pub cess: Money,
    pub total_tax: Money,
    pub effective_rate: Rate,
    /// Total tax rounded to the paise; presentation value.
    pub amount_payable: Money,
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Compute income tax for a regime and age bracket.
///
/// Taxable income is gross income less the regime's exemption limit, floored
/// at zero. The remainder goes through the slab engine; the 4% health &
/// education cess rides on the slab tax via the generic surcharge mechanism.
pub fn calculate_income_tax(
    input: &IncomeTaxInput,
) -> JanSevaResult<ComputationOutput<IncomeTaxOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.gross_income <= Decimal::ZERO {
        return Err(JanSevaError::InvalidInput {
            field: "gross_income".into(),
            reason: "Gross income must be positive".into(),
        });
    }

    let schedule = tariffs::income_tax_slabs(input.regime);
    let taxable_income = (input.gross_income - schedule.exemption_limit).max(Decimal::ZERO);

    let (slab_lines, basic_tax, cess) = if taxable_income.is_zero() {
        warnings.push(format!(
            "Gross income {} is within the exemption limit of {}; no tax payable.",
            input.gross_income, schedule.exemption_limit
        ));
        (Vec::new(), Decimal::ZERO, Decimal::ZERO)
    } else {
        let options = ChargeOptions {
            fixed_charge: Decimal::ZERO,
            surcharges: vec![Surcharge {
                name: "Health & Education Cess".into(),
                rate: tariffs::CESS_RATE,
                base: SurchargeBase::TierSubtotal,
            }],
        };
        let breakdown = compute_tiered_charge(taxable_income, &schedule.slabs, &options)?;
        let cess: Decimal = breakdown.surcharges.iter().map(|s| s.amount).sum();
        (breakdown.lines, breakdown.tier_subtotal, cess)
    };

    let total_tax = basic_tax + cess;
    let effective_rate = total_tax / input.gross_income;

    let output = IncomeTaxOutput {
        regime: input.regime,
        gross_income: input.gross_income,
        exemption_limit: schedule.exemption_limit,
        taxable_income,
        slab_lines,
        basic_tax,
        cess,
        total_tax,
        effective_rate,
        amount_payable: total_tax.round_dp(2),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Income Tax: exemption, slab-wise basic tax, and health & \
         education cess on the basic tax",
        &serde_json::json!({
            "regime": input.regime,
            "gross_income": input.gross_income.to_string(),
            "cess_rate": tariffs::CESS_RATE.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
