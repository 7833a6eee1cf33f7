use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::JanSevaError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::JanSevaResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipInput {
    pub monthly_investment: Money,
    /// Expected annual return as a fraction (0.12 = 12% p.a.).
    pub annual_rate: Rate,
    pub months: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipOutput {
    pub monthly_investment: Money,
    pub annual_rate: Rate,
    pub months: u32,
    pub invested_amount: Money,
    pub future_value: Money,
    pub wealth_gain: Money,
    /// Future value rounded to the paise; presentation value.
    pub maturity_value: Money,
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

fn compounding_overflow(input: &SipInput) -> JanSevaError {
    JanSevaError::InvalidInput {
        field: "annual_rate".into(),
        reason: format!(
            "Compounding {} months at {} p.a. exceeds the representable range; \
             lower the rate or the tenure",
            input.months, input.annual_rate
        ),
    }
}

/// Future value of a recurring monthly investment (annuity-due):
/// `FV = P × ((1+r)^n − 1)/r × (1+r)` with `r` the monthly rate.
///
/// At `r = 0` the closed form divides by zero; the limit `FV = P × n`
/// applies instead. `(1+r)^n` is built by iterative multiplication to avoid
/// powd precision drift. Compounding that exceeds the Decimal range returns
/// `InvalidInput` rather than overflowing.
pub fn calculate_sip(input: &SipInput) -> JanSevaResult<ComputationOutput<SipOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.monthly_investment <= Decimal::ZERO {
        return Err(JanSevaError::InvalidInput {
            field: "monthly_investment".into(),
            reason: "Monthly investment must be positive".into(),
        });
    }
    if input.months == 0 {
        return Err(JanSevaError::InvalidInput {
            field: "months".into(),
            reason: "Tenure must be at least 1 month".into(),
        });
    }
    if input.annual_rate < Decimal::ZERO {
        return Err(JanSevaError::InvalidInput {
            field: "annual_rate".into(),
            reason: "Expected return cannot be negative".into(),
        });
    }
    if input.annual_rate > Decimal::ONE {
        warnings.push(format!(
            "Annual return of {} exceeds 100%; check that the rate is a fraction, not a percentage.",
            input.annual_rate
        ));
    }

    let n = Decimal::from(input.months);
    let invested_amount = input.monthly_investment * n;

    let monthly_rate = input.annual_rate / dec!(12);
    let future_value = if monthly_rate.is_zero() {
        invested_amount
    } else {
        let growth = Decimal::ONE + monthly_rate;
        let mut compounded = Decimal::ONE;
        for _ in 0..input.months {
            compounded = compounded
                .checked_mul(growth)
                .ok_or_else(|| compounding_overflow(input))?;
        }
        let annuity_factor = (compounded - Decimal::ONE) / monthly_rate;
        input
            .monthly_investment
            .checked_mul(annuity_factor)
            .and_then(|v| v.checked_mul(growth))
            .ok_or_else(|| compounding_overflow(input))?
    };

    let output = SipOutput {
        monthly_investment: input.monthly_investment,
        annual_rate: input.annual_rate,
        months: input.months,
        invested_amount,
        wealth_gain: future_value - invested_amount,
        maturity_value: future_value.round_dp(2),
        future_value,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "SIP Future Value: annuity-due compounding of a fixed monthly \
         investment at the monthly rate",
        &serde_json::json!({
            "monthly_investment": input.monthly_investment.to_string(),
            "annual_rate": input.annual_rate.to_string(),
            "months": input.months,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
