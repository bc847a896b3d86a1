//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

use chrono::NaiveDate;

/// Engines are reachable both through their modules and the `math` re-exports.
#[test]
fn test_math_module_exports() {
    use calc_core::math::amortization::annuity_payment;
    use calc_core::math::interest::simple_interest;
    use calc_core::math::{
        AmortizationSchedule, BracketTable, DepreciationMethod, DepreciationSchedule,
        RepaymentMethod, TaxBracket,
    };
    use calc_core::types::{Date, DayCount};

    let table = BracketTable::new(vec![
        TaxBracket::new(0.0, Some(1_000.0), 0.1),
        TaxBracket::new(1_000.0, None, 0.2),
    ])
    .unwrap();
    assert!((table.tax(2_000.0) - 300.0).abs() < 1e-9);

    let schedule =
        AmortizationSchedule::generate(1_200.0, 0.0, 12, RepaymentMethod::EqualPrincipal).unwrap();
    assert_eq!(schedule.rows().len(), 12);
    assert_eq!(annuity_payment(1_200.0, 0.0, 12).unwrap(), 100.0);

    let dep = DepreciationSchedule::generate(1_000.0, 100.0, 3, DepreciationMethod::StraightLine)
        .unwrap();
    assert!((dep.total_depreciation() - 900.0).abs() < 1e-9);

    let start = Date::from_ymd(2024, 1, 1).unwrap();
    let end = Date::from_ymd(2024, 1, 31).unwrap();
    assert!(simple_interest(1_000.0, 0.1, start, end, DayCount::Actual365) > 0.0);
}

/// The `Calculate` contract can be implemented downstream.
#[test]
fn test_traits_module_exports() {
    use calc_core::traits::Calculate;
    use calc_core::types::error::CalcError;
    use calc_core::types::validate::ensure_positive;

    struct Doubler {
        value: f64,
    }

    impl Calculate for Doubler {
        type Output = f64;

        fn calculate(&self) -> Result<f64, CalcError> {
            Ok(ensure_positive("value", self.value)? * 2.0)
        }
    }

    assert_eq!(Doubler { value: 21.0 }.calculate().unwrap(), 42.0);
    assert!(matches!(
        Doubler { value: -1.0 }.calculate(),
        Err(CalcError::NonPositive { field: "value", .. })
    ));
}

/// Time types interoperate with chrono.
#[test]
fn test_time_module_exports() {
    use calc_core::types::time::{Date, DurationBreakdown, LocalDateTime};

    let date = Date::parse("2024-03-15").unwrap();
    assert_eq!(date.into_inner(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());

    let start = LocalDateTime::parse("2024-03-15 09:00").unwrap();
    let end = LocalDateTime::parse("2024-03-16 10:30").unwrap();
    let span = DurationBreakdown::between(start, end);
    assert_eq!((span.days, span.hours, span.minutes), (1, 1, 30));
}

/// Currency and exchange-rate types.
#[test]
fn test_currency_module_exports() {
    use calc_core::types::{Currency, CurrencyError, ExchangeRateSource, ExchangeRateTable};

    let table = ExchangeRateTable::from_pairs([("USD", 1_300.0), ("jpy", 9.5)]).unwrap();
    assert_eq!(table.krw_per_unit(Currency::USD).unwrap(), 1_300.0);
    assert!(table.is_overridden(Currency::JPY));
    assert!(!table.is_overridden(Currency::EUR));

    let err = ExchangeRateTable::from_pairs([("XYZ", 1.0)]).unwrap_err();
    assert!(matches!(err, CurrencyError::UnknownCurrency(_)));
}

/// Number and money helpers.
#[test]
fn test_number_module_exports() {
    use calc_core::types::money::{floor_to, format_krw, round_won};
    use calc_core::types::FormattedNumber;

    let n: FormattedNumber = "1,234,567원".parse().unwrap();
    assert_eq!(n.value(), 1_234_567.0);
    assert_eq!(n.to_string(), "1,234,567");
    assert_eq!(round_won(10.5), 11.0);
    assert_eq!(floor_to(123_456.0, 1_000.0), 123_000.0);
    assert_eq!(format_krw(1_000_000.0), "1,000,000원");
}

/// Unit converter and family tables.
#[test]
fn test_units_module_exports() {
    use calc_core::units::{convert_between, find_static_unit, UnitConverter, UnitFamily};

    let kg = find_static_unit("kg").unwrap();
    let lb = find_static_unit("lb").unwrap();
    assert_eq!(kg.family, UnitFamily::Weight);
    assert!((convert_between(1.0, lb, kg).unwrap() - 0.453_592_37).abs() < 1e-12);

    let converter = UnitConverter::default();
    let all = converter.convert_all(0.0, "°C").unwrap();
    assert_eq!(all.len(), 3);
}
