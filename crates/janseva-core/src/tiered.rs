use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::JanSevaError;
use crate::types::{Money, Quantity, Rate};
use crate::JanSevaResult;

// ---------------------------------------------------------------------------
// Tier and Surcharge Types
// ---------------------------------------------------------------------------

/// A contiguous quantity range billed at a single unit rate.
///
/// `upper_bound: None` marks the open-ended final tier ("Above 200" style);
/// it is only valid in the last position. A bounded tier spans
/// `lower_bound..=upper_bound`, so its capacity is `upper - lower + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTier {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate: Rate,
}

impl RateTier {
    pub fn bounded(lower: Decimal, upper: Decimal, rate: Rate) -> Self {
        RateTier {
            lower_bound: lower,
            upper_bound: Some(upper),
            rate,
        }
    }

    pub fn open(lower: Decimal, rate: Rate) -> Self {
        RateTier {
            lower_bound: lower,
            upper_bound: None,
            rate,
        }
    }

    fn label(&self) -> String {
        match self.upper_bound {
            Some(upper) => format!("{}-{}", self.lower_bound, upper),
            None => format!("Above {}", self.lower_bound - Decimal::ONE),
        }
    }
}

/// Which amount a percentage surcharge is computed on.
///
/// Electricity duty is levied on the energy charge alone; water service tax
/// is levied on everything billed so far (slab charges + meter rent + any
/// earlier surcharge). Both stacking orders exist in the tariff orders, so
/// the base is a per-surcharge choice rather than a global rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurchargeBase {
    TierSubtotal,
    RunningTotal,
}

/// A named percentage surcharge applied after tier allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Surcharge {
    pub name: String,
    pub rate: Rate,
    pub base: SurchargeBase,
}

/// Fixed and percentage charges layered on top of the tier subtotal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChargeOptions {
    pub fixed_charge: Money,
    pub surcharges: Vec<Surcharge>,
}

// ---------------------------------------------------------------------------
// Breakdown Types
// ---------------------------------------------------------------------------

/// One line of the bill: how much quantity landed in a tier and what it cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeLine {
    pub tier_label: String,
    pub allocated_quantity: Quantity,
    pub rate: Rate,
    pub cost: Money,
}

/// An itemized surcharge as actually levied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeLine {
    pub name: String,
    pub rate: Rate,
    pub amount: Money,
}

/// Full per-tier breakdown of a single computation. Transient; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillBreakdown {
    pub lines: Vec<ChargeLine>,
    pub tier_subtotal: Money,
    pub fixed_charge: Money,
    pub surcharges: Vec<SurchargeLine>,
    pub grand_total: Money,
}

impl BillBreakdown {
    /// Presentation copy with all monetary fields rounded to 2 decimal
    /// places. The engine itself carries full precision; rounding happens
    /// only at the display boundary.
    pub fn rounded(&self) -> BillBreakdown {
        BillBreakdown {
            lines: self
                .lines
                .iter()
                .map(|l| ChargeLine {
                    tier_label: l.tier_label.clone(),
                    allocated_quantity: l.allocated_quantity,
                    rate: l.rate,
                    cost: l.cost.round_dp(2),
                })
                .collect(),
            tier_subtotal: self.tier_subtotal.round_dp(2),
            fixed_charge: self.fixed_charge.round_dp(2),
            surcharges: self
                .surcharges
                .iter()
                .map(|s| SurchargeLine {
                    name: s.name.clone(),
                    rate: s.rate,
                    amount: s.amount.round_dp(2),
                })
                .collect(),
            grand_total: self.grand_total.round_dp(2),
        }
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Allocate a quantity across ascending rate tiers and layer fixed and
/// percentage charges on top.
///
/// Tiers are walked in order; each bounded tier absorbs up to its capacity
/// (`upper - lower + 1`) and the walk stops as soon as the quantity is
/// exhausted. The final tier may be open-ended, in which case it absorbs
/// all remainder. Quantity left over after a bounded final tier is a tariff
/// configuration error, not a silent truncation.
///
/// Pure function: identical inputs produce identical breakdowns.
pub fn compute_tiered_charge(
    quantity: Quantity,
    tiers: &[RateTier],
    options: &ChargeOptions,
) -> JanSevaResult<BillBreakdown> {
    if quantity <= Decimal::ZERO {
        return Err(JanSevaError::InvalidInput {
            field: "quantity".into(),
            reason: "Quantity must be positive".into(),
        });
    }
    validate_tiers(tiers)?;
    validate_options(options)?;

    // Tier allocation
    let mut lines: Vec<ChargeLine> = Vec::new();
    let mut tier_subtotal = Decimal::ZERO;
    let mut remaining = quantity;

    for tier in tiers {
        let allocated = match tier.upper_bound {
            Some(upper) => remaining.min(upper - tier.lower_bound + Decimal::ONE),
            None => remaining,
        };

        let cost = allocated * tier.rate;
        lines.push(ChargeLine {
            tier_label: tier.label(),
            allocated_quantity: allocated,
            rate: tier.rate,
            cost,
        });

        tier_subtotal += cost;
        remaining -= allocated;
        if remaining <= Decimal::ZERO {
            break;
        }
    }

    if remaining > Decimal::ZERO {
        return Err(JanSevaError::InvalidConfiguration {
            context: "tiers".into(),
            reason: format!(
                "Quantity exceeds total tier capacity by {} and the final tier is bounded",
                remaining
            ),
        });
    }

    // Fixed charge, then surcharges in declared order
    let mut running_total = tier_subtotal + options.fixed_charge;
    let mut surcharges: Vec<SurchargeLine> = Vec::new();

    for surcharge in &options.surcharges {
        let base = match surcharge.base {
            SurchargeBase::TierSubtotal => tier_subtotal,
            SurchargeBase::RunningTotal => running_total,
        };
        let amount = base * surcharge.rate;
        surcharges.push(SurchargeLine {
            name: surcharge.name.clone(),
            rate: surcharge.rate,
            amount,
        });
        running_total += amount;
    }

    Ok(BillBreakdown {
        lines,
        tier_subtotal,
        fixed_charge: options.fixed_charge,
        surcharges,
        grand_total: running_total,
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_tiers(tiers: &[RateTier]) -> JanSevaResult<()> {
    if tiers.is_empty() {
        return Err(JanSevaError::InvalidConfiguration {
            context: "tiers".into(),
            reason: "Tier table must not be empty".into(),
        });
    }

    for (i, tier) in tiers.iter().enumerate() {
        if tier.rate < Decimal::ZERO {
            return Err(JanSevaError::InvalidConfiguration {
                context: "tiers".into(),
                reason: format!("Tier {} has a negative rate", i),
            });
        }
        if tier.lower_bound < Decimal::ZERO {
            return Err(JanSevaError::InvalidConfiguration {
                context: "tiers".into(),
                reason: format!("Tier {} has a negative lower bound", i),
            });
        }
        match tier.upper_bound {
            Some(upper) => {
                if upper < tier.lower_bound {
                    return Err(JanSevaError::InvalidConfiguration {
                        context: "tiers".into(),
                        reason: format!("Tier {} has upper bound below lower bound", i),
                    });
                }
            }
            None => {
                if i != tiers.len() - 1 {
                    return Err(JanSevaError::InvalidConfiguration {
                        context: "tiers".into(),
                        reason: format!("Tier {} is unbounded but is not the last tier", i),
                    });
                }
            }
        }

        if i > 0 {
            // Contiguity: each tier starts exactly one unit above the previous
            // tier's upper bound. Gaps and overlaps both fail here.
            let prev_upper = tiers[i - 1].upper_bound.ok_or_else(|| {
                JanSevaError::InvalidConfiguration {
                    context: "tiers".into(),
                    reason: format!("Tier {} is unbounded but is not the last tier", i - 1),
                }
            })?;
            if tier.lower_bound != prev_upper + Decimal::ONE {
                return Err(JanSevaError::InvalidConfiguration {
                    context: "tiers".into(),
                    reason: format!(
                        "Tier {} starts at {} but the previous tier ends at {}",
                        i, tier.lower_bound, prev_upper
                    ),
                });
            }
        }
    }

    Ok(())
}

fn validate_options(options: &ChargeOptions) -> JanSevaResult<()> {
    if options.fixed_charge < Decimal::ZERO {
        return Err(JanSevaError::InvalidConfiguration {
            context: "fixed_charge".into(),
            reason: "Fixed charge cannot be negative".into(),
        });
    }
    for surcharge in &options.surcharges {
        if surcharge.rate < Decimal::ZERO {
            return Err(JanSevaError::InvalidConfiguration {
                context: "surcharges".into(),
                reason: format!("Surcharge '{}' has a negative rate", surcharge.name),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
