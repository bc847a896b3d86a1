//! End-to-end tests across the calculators.
//!
//! Each test drives a calculator through its public input record the way
//! the command-line front end does, checking the reference examples and
//! the cross-calculator properties.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use calc_core::math::{DepreciationMethod, RepaymentMethod};
use calc_core::traits::Calculate;
use calc_core::types::money::format_krw;
use calc_core::types::{CalcError, Date, DayCount};

// =============================================================================
// Reference examples
// =============================================================================

#[test]
fn test_bmi_reference() {
    use calc_models::health::{BmiCategory, BmiInput};

    let result = BmiInput::new(170.0, 65.0).calculate().unwrap();
    assert_eq!(result.bmi, 22.49);
    assert_eq!(result.category, BmiCategory::Normal);
    assert_eq!(result.category.korean_name(), "정상체중");
}

#[test]
fn test_mortgage_reference() {
    use calc_models::loans::MortgageInput;

    let input = MortgageInput::new(300_000_000.0, 3.5, 30, RepaymentMethod::EqualPayment);
    let result = input.calculate().unwrap();
    assert_eq!(result.months, 360);
    assert_abs_diff_eq!(result.monthly_rate, 0.035 / 12.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.monthly_payment, 1_347_134.0, epsilon = 1.0);
    assert_eq!(format_krw(result.monthly_payment), "1,347,134원");
    assert_abs_diff_eq!(
        result.total_interest,
        result.monthly_payment * 360.0 - 300_000_000.0,
        epsilon = 1e-3
    );
}

#[test]
fn test_income_tax_reference() {
    use calc_models::tax::IncomeTaxInput;

    let result = IncomeTaxInput::taxable(50_000_000.0).calculate().unwrap();
    // 12M × 6% + 34M × 15% + 4M × 24%
    assert_eq!(result.calculated_tax, 720_000.0 + 5_100_000.0 + 960_000.0);
    assert_eq!(result.marginal_rate, 0.24);
}

// =============================================================================
// Loans
// =============================================================================

#[test]
fn test_equal_principal_costs_less_interest_than_equal_payment() {
    use calc_models::loans::MortgageInput;

    let payment = MortgageInput::new(200_000_000.0, 4.0, 20, RepaymentMethod::EqualPayment)
        .calculate()
        .unwrap();
    let principal = MortgageInput::new(200_000_000.0, 4.0, 20, RepaymentMethod::EqualPrincipal)
        .calculate()
        .unwrap();
    assert!(principal.total_interest < payment.total_interest);
    assert!(principal.max_payment > payment.max_payment);
}

#[test]
fn test_interim_interest_sorted_and_summed() {
    use calc_models::loans::{Installment, InterimInterestInput};

    let input = InterimInterestInput {
        installments: vec![
            Installment::new("2차", Date::from_ymd(2024, 7, 1).unwrap(), 50_000_000.0),
            Installment::new("1차", Date::from_ymd(2024, 1, 1).unwrap(), 50_000_000.0),
        ],
        move_in_date: Date::from_ymd(2025, 1, 1).unwrap(),
        annual_rate_percent: 5.0,
        day_count: DayCount::Actual365,
    };
    let result = input.calculate().unwrap();
    assert_eq!(result.rows[0].label, "1차");
    assert_eq!(result.rows[0].days, 366);
    assert_eq!(result.rows[1].days, 184);
    let sum: f64 = result.rows.iter().map(|r| r.interest).sum();
    assert_eq!(result.total_interest, sum);
    assert_eq!(result.total_principal, 100_000_000.0);
}

// =============================================================================
// Taxes
// =============================================================================

#[test]
fn test_gift_and_inheritance_share_rate_table() {
    use calc_models::tax::{GiftTaxInput, InheritanceTaxInput, Relationship};

    // 1B base: 10M + 80M + 150M
    let mut gift = GiftTaxInput::new(1_050_000_000.0, Relationship::LinealAscendant);
    gift.filed_on_time = false;
    let gift = gift.calculate().unwrap();

    let mut estate = InheritanceTaxInput::new(1_500_000_000.0);
    estate.funeral_expenses = 0.0;
    estate.debts = 0.0;
    estate.filed_on_time = false;
    let estate = estate.calculate().unwrap();

    assert_eq!(gift.tax_base, 1_000_000_000.0);
    assert_eq!(gift.calculated_tax, 240_000_000.0);
    // 1.5B − 5M minimum funeral deduction − 500M lump sum = 995M base
    assert_eq!(estate.tax_base, 995_000_000.0);
    assert_eq!(estate.calculated_tax, 238_500_000.0);
}

#[test]
fn test_property_tax_single_home_is_cheaper() {
    use calc_models::tax::PropertyTaxInput;

    let single = PropertyTaxInput::new(400_000_000.0, true).calculate().unwrap();
    let multi = PropertyTaxInput::new(400_000_000.0, false).calculate().unwrap();
    assert!(single.total < multi.total);
}

// =============================================================================
// Real estate and FX
// =============================================================================

#[test]
fn test_registration_total_is_sum_of_items() {
    use calc_models::real_estate::RegistrationInput;

    let result = RegistrationInput::housing(750_000_000.0, 100.0, 5.0)
        .calculate()
        .unwrap();
    let items = result.acquisition_tax
        + result.local_education_tax
        + result.rural_special_tax
        + result.stamp_duty
        + result.bond_discount_cost
        + result.application_fee
        + result.legal_fee;
    assert_eq!(result.total, items);
    assert_eq!(result.total, 19_327_500.0);
}

#[test]
fn test_transfer_rejects_krw() {
    use calc_core::types::Currency;
    use calc_models::fx::{Bank, TransferInput};

    let err = TransferInput::new(Bank::Woori, Currency::KRW, 1_000.0)
        .calculate()
        .unwrap_err();
    assert!(matches!(err, CalcError::InvalidInput { field: "currency", .. }));
}

// =============================================================================
// Business, education, time, conversion
// =============================================================================

#[test]
fn test_depreciation_every_method_reaches_salvage() {
    use calc_models::business::AssetDepreciationInput;

    for method in DepreciationMethod::ALL {
        let input =
            AssetDepreciationInput::new("forklift", 25_000_000.0, 2_500_000.0, 6, method, 2024);
        let result = input.calculate().unwrap();
        let last = result.rows.last().unwrap();
        assert_eq!(last.calendar_year, 2029);
        assert_relative_eq!(last.book_value, 2_500_000.0, epsilon = 1e-6);
        assert_relative_eq!(result.total_depreciation, 22_500_000.0, epsilon = 1e-6);
    }
}

#[test]
fn test_grade_scales_rank_consistently() {
    use calc_models::education::{Course, GradeInput, GradeScale, LetterGrade};

    let courses = vec![
        Course::new("Calculus", 3.0, LetterGrade::APlus),
        Course::new("Physics", 3.0, LetterGrade::BPlus),
    ];
    let on_45 = GradeInput::new(courses.clone(), GradeScale::Scale45).calculate().unwrap();
    let on_43 = GradeInput::new(courses, GradeScale::Scale43).calculate().unwrap();
    assert_eq!(on_45.gpa, 4.0);
    assert_eq!(on_43.gpa, 3.8);
}

#[test]
fn test_time_difference_round_trip() {
    use calc_models::time::TimeDifferenceInput;

    let start = "2024-06-30 08:15".parse().unwrap();
    let there = TimeDifferenceInput::new("Seoul", "Honolulu", start).calculate().unwrap();
    let back = TimeDifferenceInput::new("Honolulu", "Seoul", there.converted)
        .calculate()
        .unwrap();
    assert_eq!(back.converted, start);
    assert_eq!(there.day_shift, -1);
}

#[test]
fn test_pyeong_conversion() {
    use calc_models::conversion::UnitConversionInput;

    let result = UnitConversionInput::new(33.0, "평").to("m2").calculate().unwrap();
    assert_relative_eq!(result.conversions[0].value, 109.09090909, epsilon = 1e-6);
}

// =============================================================================
// Properties
// =============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn income_tax_is_monotone(a in 0.0f64..2e9, b in 0.0f64..2e9) {
            use calc_models::tax::IncomeTaxInput;

            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo = IncomeTaxInput::taxable(lo).calculate().unwrap();
            let hi = IncomeTaxInput::taxable(hi).calculate().unwrap();
            prop_assert!(lo.total_tax <= hi.total_tax);
        }

        #[test]
        fn bmi_category_matches_value(height in 120.0f64..210.0, weight in 30.0f64..180.0) {
            use calc_models::health::{BmiCategory, BmiInput};

            let result = BmiInput::new(height, weight).calculate().unwrap();
            prop_assert_eq!(result.category, BmiCategory::from_bmi(result.bmi));
        }

        #[test]
        fn jeonse_rent_scales_with_gap(
            jeonse in 100_000_000.0f64..1e9,
            share in 0.0f64..0.9,
            rate in 1.0f64..10.0,
        ) {
            use calc_models::real_estate::{JeonseInput, JeonseMode};

            let deposit = (jeonse * share).floor();
            let result = JeonseInput::new(JeonseMode::ToMonthly {
                jeonse_deposit: jeonse,
                deposit,
                rate_percent: rate,
            })
            .calculate()
            .unwrap();
            let expected = (jeonse - deposit) * rate / 100.0 / 12.0;
            prop_assert!((result.monthly_rent - expected).abs() <= 0.5 + 1e-6);
        }
    }
}
