//! Unit conversion and unit listing commands

use calc_core::traits::Calculate;
use calc_core::types::number::group_thousands;
use calc_core::types::ExchangeRateTable;
use calc_core::units::{UnitConverter, UnitFamily};
use calc_models::conversion::UnitConversionInput;
use tracing::{debug, info};

use crate::output::{Report, Table};
use crate::Result;

/// Shortest readable form: grouped, up to six decimals, trailing zeros cut.
fn readable(value: f64) -> String {
    let text = group_thousands(value, 6);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() || text == "-" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Run the convert command
pub fn convert(
    value: f64,
    from: &str,
    to: Option<&str>,
    rates: ExchangeRateTable,
) -> Result<Report> {
    info!("Converting units...");
    let mut input = UnitConversionInput::new(value, from).with_rates(rates);
    if let Some(to) = to {
        input = input.to(to);
    }
    debug!(?input);
    let result = input.calculate()?;

    let mut report = Report::new("단위 변환", &result)?
        .field("종류", result.family.korean_name())
        .field("입력", format!("{} {}", readable(result.value), result.from.symbol));
    match result.conversions.as_slice() {
        [single] if to.is_some() => {
            report = report.field(
                "결과",
                format!("{} {}", readable(single.value), single.unit.symbol),
            );
        }
        conversions => {
            let mut table = Table::new(["단위", "기호", "값"]);
            for conversion in conversions {
                table.push([
                    conversion.unit.name.to_string(),
                    conversion.unit.symbol.to_string(),
                    readable(conversion.value),
                ]);
            }
            report = report.with_table(table);
        }
    }
    Ok(report)
}

/// Run the units command
pub fn units(family: Option<UnitFamily>, rates: ExchangeRateTable) -> Result<Report> {
    info!("Listing units...");
    let converter = UnitConverter::new(rates);
    let families = match family {
        Some(family) => vec![family],
        None => UnitFamily::ALL.to_vec(),
    };

    let mut table = Table::new(["종류", "단위", "기호", "별칭"]);
    let mut listed = Vec::new();
    for family in families {
        for unit in converter.units(family)? {
            table.push([
                family.korean_name().to_string(),
                unit.name.to_string(),
                unit.symbol.to_string(),
                unit.aliases.join(", "),
            ]);
            listed.push(unit);
        }
    }

    Ok(Report::new("지원 단위", &listed)?
        .field("단위 수", listed.len().to_string())
        .with_table(table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readable_trims_zeros() {
        assert_eq!(readable(109.090909090909), "109.090909");
        assert_eq!(readable(1000.0), "1,000");
        assert_eq!(readable(-40.0), "-40");
        assert_eq!(readable(0.0), "0");
        assert_eq!(readable(0.5), "0.5");
    }
}
