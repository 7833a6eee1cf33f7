#![cfg(all(feature = "gst", feature = "income_tax", feature = "sip"))]

use janseva_core::gst::{calculate_gst, recover_base_from_inclusive_total, GstInput, GstMode};
use janseva_core::income_tax::{calculate_income_tax, IncomeTaxInput};
use janseva_core::sip::{calculate_sip, SipInput};
use janseva_core::tariffs::{TaxRegime, GST_STANDARD_RATES};
use janseva_core::JanSevaError;
use rust_decimal_macros::dec;

// ===========================================================================
// GST
// ===========================================================================

#[test]
fn test_gst_exclusive_reference_invoice() {
    let result = calculate_gst(&GstInput {
        amount: dec!(10_000),
        rate: dec!(0.18),
        mode: GstMode::Exclusive,
    })
    .unwrap();
    let out = &result.result;

    assert_eq!(out.gst_amount, dec!(1_800.00));
    assert_eq!(out.total_amount, dec!(11_800.00));
    assert_eq!(out.cgst + out.sgst, out.gst_amount);
}

#[test]
fn test_gst_forward_then_inverse_recovers_base() {
    for rate in GST_STANDARD_RATES {
        for base in [dec!(1), dec!(999.99), dec!(10_000), dec!(123_456.78)] {
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
                "rate {} base {} recovered {}",
                rate,
                base,
                recovered
            );
        }
    }
}

#[test]
fn test_gst_inclusive_mode_is_explicitly_selected() {
    // Same amount, opposite directions: the mode flag decides, the engine
    // never infers inclusiveness from the value.
    let exclusive = calculate_gst(&GstInput {
        amount: dec!(11_800),
        rate: dec!(0.18),
        mode: GstMode::Exclusive,
    })
    .unwrap();
    assert_eq!(exclusive.result.total_amount, dec!(13_924.00));

    let inclusive = calculate_gst(&GstInput {
        amount: dec!(11_800),
        rate: dec!(0.18),
        mode: GstMode::Inclusive,
    })
    .unwrap();
    assert!((inclusive.result.base_amount - dec!(10_000)).abs() < dec!(0.000001));
}

// ===========================================================================
// Income tax
// ===========================================================================

#[test]
fn test_new_regime_12_lakh_reference_computation() {
    let result = calculate_income_tax(&IncomeTaxInput {
        gross_income: dec!(1_200_000),
        regime: TaxRegime::New,
    })
    .unwrap();
    let out = &result.result;

    assert_eq!(out.basic_tax, dec!(90_000.00));
    assert_eq!(out.cess, dec!(3_600.00));
    assert_eq!(out.total_tax, dec!(93_600.00));
}

#[test]
fn test_regime_choice_changes_liability() {
    let gross = dec!(800_000);
    let new = calculate_income_tax(&IncomeTaxInput {
        gross_income: gross,
        regime: TaxRegime::New,
    })
    .unwrap();
    let old = calculate_income_tax(&IncomeTaxInput {
        gross_income: gross,
        regime: TaxRegime::OldBelow60,
    })
    .unwrap();

    // New regime on 8L: 15,000 + 20,000 = 35,000 basic; old regime: 72,500.
    assert_eq!(new.result.basic_tax, dec!(35_000.00));
    assert_eq!(old.result.basic_tax, dec!(72_500.00));
    assert!(new.result.total_tax < old.result.total_tax);
}

#[test]
fn test_senior_exemptions_are_graded() {
    let gross = dec!(450_000);
    let below60 = calculate_income_tax(&IncomeTaxInput {
        gross_income: gross,
        regime: TaxRegime::OldBelow60,
    })
    .unwrap();
    let senior = calculate_income_tax(&IncomeTaxInput {
        gross_income: gross,
        regime: TaxRegime::OldSenior,
    })
    .unwrap();
    let super_senior = calculate_income_tax(&IncomeTaxInput {
        gross_income: gross,
        regime: TaxRegime::OldSuperSenior,
    })
    .unwrap();

    assert_eq!(below60.result.taxable_income, dec!(200_000));
    assert_eq!(senior.result.taxable_income, dec!(150_000));
    assert_eq!(super_senior.result.taxable_income, dec!(0));
    assert_eq!(super_senior.result.total_tax, dec!(0));
}

// ===========================================================================
// SIP
// ===========================================================================

#[test]
fn test_sip_zero_rate_edge_case() {
    // P = 5000, n = 24, r = 0 must be exactly the sum of installments.
    let result = calculate_sip(&SipInput {
        monthly_investment: dec!(5_000),
        annual_rate: dec!(0),
        months: 24,
    })
    .unwrap();

    assert_eq!(result.result.future_value, dec!(120_000));
}

#[test]
fn test_sip_future_value_exceeds_invested_at_positive_rate() {
    let result = calculate_sip(&SipInput {
        monthly_investment: dec!(5_000),
        annual_rate: dec!(0.12),
        months: 120,
    })
    .unwrap();
    let out = &result.result;

    assert_eq!(out.invested_amount, dec!(600_000));
    assert!(out.future_value > out.invested_amount);
    assert_eq!(out.wealth_gain, out.future_value - out.invested_amount);
}

// ===========================================================================
// Error taxonomy
// ===========================================================================

#[test]
fn test_all_calculators_reject_non_positive_amounts() {
    assert!(matches!(
        calculate_gst(&GstInput {
            amount: dec!(-1),
            rate: dec!(0.18),
            mode: GstMode::Exclusive,
        })
        .unwrap_err(),
        JanSevaError::InvalidInput { .. }
    ));
    assert!(matches!(
        calculate_income_tax(&IncomeTaxInput {
            gross_income: dec!(0),
            regime: TaxRegime::New,
        })
        .unwrap_err(),
        JanSevaError::InvalidInput { .. }
    ));
    assert!(matches!(
        calculate_sip(&SipInput {
            monthly_investment: dec!(0),
            annual_rate: dec!(0.10),
            months: 12,
        })
        .unwrap_err(),
        JanSevaError::InvalidInput { .. }
    ));
}
