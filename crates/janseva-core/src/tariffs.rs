//! Static tariff schedules as published in the municipal tariff orders.
//!
//! Schedules are immutable configuration: every constructor returns a fresh
//! copy and nothing here is mutated after construction. Amounts are rupees;
//! electricity slabs are per unit (kWh), water slabs per kilolitre, income
//! tax slabs per rupee of taxable income.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::tiered::{ChargeOptions, RateTier, Surcharge, SurchargeBase};
use crate::types::{Money, Rate};

/// A complete tariff: slab table plus the fixed and percentage charges that
/// ride on top of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TariffSchedule {
    pub tiers: Vec<RateTier>,
    pub options: ChargeOptions,
}

// ---------------------------------------------------------------------------
// Electricity
// ---------------------------------------------------------------------------

#[cfg(feature = "electricity")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    Domestic,
    Commercial,
    Industrial,
}

/// Electricity duty, levied on the energy charge alone.
#[cfg(feature = "electricity")]
pub const ELECTRICITY_DUTY_RATE: Rate = dec!(0.15);

#[cfg(feature = "electricity")]
pub fn electricity_tariff(connection: ConnectionType) -> TariffSchedule {
    let (tiers, fixed_charge) = match connection {
        ConnectionType::Domestic => (
            vec![
                RateTier::bounded(dec!(1), dec!(50), dec!(2.50)),
                RateTier::bounded(dec!(51), dec!(100), dec!(3.00)),
                RateTier::bounded(dec!(101), dec!(200), dec!(4.50)),
                RateTier::open(dec!(201), dec!(6.00)),
            ],
            dec!(50),
        ),
        ConnectionType::Commercial => (
            vec![
                RateTier::bounded(dec!(1), dec!(100), dec!(5.00)),
                RateTier::bounded(dec!(101), dec!(300), dec!(6.50)),
                RateTier::open(dec!(301), dec!(8.00)),
            ],
            dec!(150),
        ),
        ConnectionType::Industrial => (
            vec![
                RateTier::bounded(dec!(1), dec!(500), dec!(5.50)),
                RateTier::open(dec!(501), dec!(7.00)),
            ],
            dec!(300),
        ),
    };

    TariffSchedule {
        tiers,
        options: ChargeOptions {
            fixed_charge,
            surcharges: vec![Surcharge {
                name: "Electricity Duty".into(),
                rate: ELECTRICITY_DUTY_RATE,
                base: SurchargeBase::TierSubtotal,
            }],
        },
    }
}

// ---------------------------------------------------------------------------
// Water
// ---------------------------------------------------------------------------

#[cfg(feature = "water")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterSource {
    Municipal,
    Borewell,
}

/// Service tax on the running total (slab charges + meter rent).
#[cfg(feature = "water")]
pub const WATER_SERVICE_TAX_RATE: Rate = dec!(0.10);

#[cfg(feature = "water")]
pub fn water_tariff(source: WaterSource) -> TariffSchedule {
    let (tiers, meter_rent) = match source {
        WaterSource::Municipal => (
            vec![
                RateTier::bounded(dec!(1), dec!(10), dec!(5.00)),
                RateTier::bounded(dec!(11), dec!(25), dec!(8.00)),
                RateTier::bounded(dec!(26), dec!(50), dec!(12.00)),
                RateTier::open(dec!(51), dec!(15.00)),
            ],
            dec!(25),
        ),
        WaterSource::Borewell => (
            vec![
                RateTier::bounded(dec!(1), dec!(20), dec!(4.00)),
                RateTier::open(dec!(21), dec!(6.00)),
            ],
            dec!(15),
        ),
    };

    TariffSchedule {
        tiers,
        options: ChargeOptions {
            fixed_charge: meter_rent,
            surcharges: vec![Surcharge {
                name: "Service Tax".into(),
                rate: WATER_SERVICE_TAX_RATE,
                base: SurchargeBase::RunningTotal,
            }],
        },
    }
}

// ---------------------------------------------------------------------------
// Income Tax
// ---------------------------------------------------------------------------

#[cfg(feature = "income_tax")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRegime {
    New,
    OldBelow60,
    OldSenior,
    OldSuperSenior,
}

/// Health & education cess, levied on the slab tax alone.
#[cfg(feature = "income_tax")]
pub const CESS_RATE: Rate = dec!(0.04);

/// Slab table plus the exemption deducted from gross income before slabbing.
#[cfg(feature = "income_tax")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlabSchedule {
    pub exemption_limit: Money,
    pub slabs: Vec<RateTier>,
}

/// Slabs for each regime and age bracket.
///
/// The new regime has no separate exemption: its nil band is the zero-rate
/// first slab. The old-regime brackets deduct the age-dependent exemption
/// first and then slab the remainder.
#[cfg(feature = "income_tax")]
pub fn income_tax_slabs(regime: TaxRegime) -> SlabSchedule {
    match regime {
        TaxRegime::New => SlabSchedule {
            exemption_limit: dec!(0),
            slabs: vec![
                RateTier::bounded(dec!(1), dec!(300_000), dec!(0)),
                RateTier::bounded(dec!(300_001), dec!(600_000), dec!(0.05)),
                RateTier::bounded(dec!(600_001), dec!(900_000), dec!(0.10)),
                RateTier::bounded(dec!(900_001), dec!(1_200_000), dec!(0.15)),
                RateTier::bounded(dec!(1_200_001), dec!(1_500_000), dec!(0.20)),
                RateTier::open(dec!(1_500_001), dec!(0.30)),
            ],
        },
        TaxRegime::OldBelow60 => SlabSchedule {
            exemption_limit: dec!(250_000),
            slabs: vec![
                RateTier::bounded(dec!(1), dec!(250_000), dec!(0.05)),
                RateTier::bounded(dec!(250_001), dec!(750_000), dec!(0.20)),
                RateTier::open(dec!(750_001), dec!(0.30)),
            ],
        },
        TaxRegime::OldSenior => SlabSchedule {
            exemption_limit: dec!(300_000),
            slabs: vec![
                RateTier::bounded(dec!(1), dec!(200_000), dec!(0.05)),
                RateTier::bounded(dec!(200_001), dec!(700_000), dec!(0.20)),
                RateTier::open(dec!(700_001), dec!(0.30)),
            ],
        },
        TaxRegime::OldSuperSenior => SlabSchedule {
            exemption_limit: dec!(500_000),
            slabs: vec![
                RateTier::bounded(dec!(1), dec!(500_000), dec!(0.20)),
                RateTier::open(dec!(500_001), dec!(0.30)),
            ],
        },
    }
}

// ---------------------------------------------------------------------------
// GST
// ---------------------------------------------------------------------------

/// The standard GST rate slabs (as fractions, not percentages).
#[cfg(feature = "gst")]
pub const GST_STANDARD_RATES: [Rate; 5] = [
    dec!(0),
    dec!(0.05),
    dec!(0.12),
    dec!(0.18),
    dec!(0.28),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiered::{compute_tiered_charge, ChargeOptions};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[cfg(feature = "electricity")]
    #[test]
    fn test_every_electricity_schedule_is_valid() {
        for connection in [
            ConnectionType::Domestic,
            ConnectionType::Commercial,
            ConnectionType::Industrial,
        ] {
            let schedule = electricity_tariff(connection);
            // A large consumption exercises contiguity checks across every slab.
            let result = compute_tiered_charge(dec!(10_000), &schedule.tiers, &schedule.options);
            assert!(result.is_ok(), "schedule for {:?} failed validation", connection);
        }
    }

    #[cfg(feature = "water")]
    #[test]
    fn test_every_water_schedule_is_valid() {
        for source in [WaterSource::Municipal, WaterSource::Borewell] {
            let schedule = water_tariff(source);
            let result = compute_tiered_charge(dec!(1_000), &schedule.tiers, &schedule.options);
            assert!(result.is_ok(), "schedule for {:?} failed validation", source);
        }
    }

    #[cfg(feature = "income_tax")]
    #[test]
    fn test_every_slab_schedule_is_valid() {
        for regime in [
            TaxRegime::New,
            TaxRegime::OldBelow60,
            TaxRegime::OldSenior,
            TaxRegime::OldSuperSenior,
        ] {
            let schedule = income_tax_slabs(regime);
            assert!(schedule.exemption_limit >= Decimal::ZERO);
            let result = compute_tiered_charge(
                dec!(10_000_000),
                &schedule.slabs,
                &ChargeOptions::default(),
            );
            assert!(result.is_ok(), "slabs for {:?} failed validation", regime);
        }
    }

    #[cfg(feature = "income_tax")]
    #[test]
    fn test_new_regime_nil_band_is_a_zero_rate_slab() {
        let schedule = income_tax_slabs(TaxRegime::New);
        assert_eq!(schedule.exemption_limit, Decimal::ZERO);
        assert_eq!(schedule.slabs[0].rate, Decimal::ZERO);
        assert_eq!(schedule.slabs[0].upper_bound, Some(dec!(300_000)));
    }
}
