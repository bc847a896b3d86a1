//! Depreciation and scaffolding estimate commands

use calc_core::math::DepreciationMethod;
use calc_core::traits::Calculate;
use calc_core::types::money::format_percent;
use calc_models::business::{
    compare_first_year, AssetDepreciationInput, AssetDepreciationResult, ScaffoldType,
    ScaffoldingInput,
};
use chrono::Datelike;
use serde::Serialize;
use tracing::{debug, info};

use super::{quantity, won};
use crate::output::{Report, Table};
use crate::Result;

#[derive(Serialize)]
struct MethodExpense {
    method: DepreciationMethod,
    first_year: f64,
}

#[derive(Serialize)]
struct DepreciationReport<'a> {
    #[serde(flatten)]
    result: &'a AssetDepreciationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison: Option<Vec<MethodExpense>>,
}

/// Run the depreciation command
pub fn depreciation(
    name: &str,
    cost: f64,
    salvage: f64,
    life_years: u32,
    method: DepreciationMethod,
    year: Option<i32>,
    compare: bool,
) -> Result<Report> {
    info!("Building depreciation schedule...");
    let acquisition_year = year.unwrap_or_else(|| chrono::Local::now().year());
    let input = AssetDepreciationInput::new(name, cost, salvage, life_years, method, acquisition_year);
    debug!(?input);
    let result = input.calculate()?;

    let comparison = if compare {
        Some(
            compare_first_year(cost, salvage, life_years)?
                .into_iter()
                .map(|(method, first_year)| MethodExpense { method, first_year })
                .collect::<Vec<_>>(),
        )
    } else {
        None
    };

    let mut table = Table::new(["연도", "감가상각비", "누계액", "장부가액"]);
    for row in &result.rows {
        table.push([
            row.calendar_year.to_string(),
            won(row.depreciation),
            won(row.accumulated),
            won(row.book_value),
        ]);
    }

    let data = DepreciationReport {
        result: &result,
        comparison,
    };
    let mut report = Report::new("감가상각", &data)?
        .field("자산", result.asset_name.clone())
        .field("상각 방법", method.korean_name())
        .field("상각 대상액", won(result.depreciable_amount));
    if let Some(rate) = result.rate {
        report = report.field("상각률", format_percent(rate, 2));
    }
    report = report.field("상각 총액", won(result.total_depreciation));
    if let Some(comparison) = &data.comparison {
        for expense in comparison {
            report = report.field(
                format!("첫해 ({})", expense.method.korean_name()),
                won(expense.first_year),
            );
        }
    }
    Ok(report.with_table(table))
}

/// Run the scaffolding command
pub fn scaffolding(
    perimeter_m: f64,
    height_m: f64,
    scaffold_type: ScaffoldType,
    rental_months: u32,
    safety_net: bool,
    transport_fee: f64,
) -> Result<Report> {
    info!("Estimating scaffolding cost...");
    let mut input = ScaffoldingInput::new(perimeter_m, height_m, scaffold_type);
    input.rental_months = rental_months;
    input.safety_net = safety_net;
    input.transport_fee = transport_fee;
    debug!(?input);
    let result = input.calculate()?;

    let mut report = Report::new("비계 견적", &result)?
        .field("비계 종류", scaffold_type.korean_name())
        .field("비계 면적", quantity(result.area_m2, 1, "㎡"))
        .field("설치·해체비", won(result.install_cost))
        .field(format!("임대료 ({}개월)", rental_months), won(result.rental_cost));
    if safety_net {
        report = report.field("안전망", won(result.safety_net_cost));
    }
    if result.transport_fee > 0.0 {
        report = report.field("운반비", won(result.transport_fee));
    }
    Ok(report
        .field("공급가액", won(result.subtotal))
        .field("부가세", won(result.vat))
        .field("합계", won(result.total)))
}
