//! Jeonse conversion and registration cost commands

use calc_core::traits::Calculate;
use calc_core::types::money::format_percent;
use calc_core::types::validate::require;
use calc_models::real_estate::{JeonseInput, JeonseMode, PropertyKind, RegistrationInput, Region};
use tracing::{debug, info};

use super::won;
use crate::cli::JeonseDirection;
use crate::output::Report;
use crate::Result;

/// Run the jeonse command
///
/// Each direction needs a different pair of amounts; a missing one is
/// reported by name before anything is calculated.
pub fn jeonse(
    direction: JeonseDirection,
    jeonse: Option<f64>,
    deposit: f64,
    rent: Option<f64>,
    rate_percent: Option<f64>,
    base_rate_percent: Option<f64>,
) -> Result<Report> {
    info!("Converting between jeonse and monthly rent...");
    let mode = match direction {
        JeonseDirection::ToMonthly => JeonseMode::ToMonthly {
            jeonse_deposit: require("jeonse deposit", jeonse)?,
            deposit,
            rate_percent: require("conversion rate", rate_percent)?,
        },
        JeonseDirection::ToJeonse => JeonseMode::ToJeonse {
            deposit,
            monthly_rent: require("monthly rent", rent)?,
            rate_percent: require("conversion rate", rate_percent)?,
        },
        JeonseDirection::ImpliedRate => JeonseMode::ImpliedRate {
            jeonse_deposit: require("jeonse deposit", jeonse)?,
            deposit,
            monthly_rent: require("monthly rent", rent)?,
        },
    };
    let input = match base_rate_percent {
        Some(base) => JeonseInput::new(mode).with_base_rate(base),
        None => JeonseInput::new(mode),
    };
    debug!(?input);
    let result = input.calculate()?;

    let mut report = Report::new("전월세 전환", &result)?
        .field("전세 보증금", won(result.jeonse_deposit))
        .field("월세 보증금", won(result.deposit))
        .field("월세", won(result.monthly_rent))
        .field("전환율", format_percent(result.rate_percent / 100.0, 2));
    if let Some(cap) = result.statutory_cap_percent {
        let verdict = if result.exceeds_cap { "초과" } else { "이내" };
        report = report
            .field("법정 전환율 상한", format_percent(cap / 100.0, 2))
            .field("상한 대비", verdict);
    }
    Ok(report)
}

/// Run the registration command
pub fn registration(
    price: f64,
    area_m2: f64,
    kind: PropertyKind,
    region: Region,
    bond_discount_percent: f64,
    legal_fee: Option<f64>,
) -> Result<Report> {
    info!("Calculating acquisition and registration costs...");
    let input = RegistrationInput {
        price,
        kind,
        area_m2,
        region,
        bond_discount_percent,
        legal_fee,
    };
    debug!(?input);
    let result = input.calculate()?;

    Ok(Report::new("부동산 취득·등기 비용", &result)?
        .field("구분", kind.to_string())
        .field("취득세율", format_percent(result.acquisition_tax_rate, 2))
        .field("취득세", won(result.acquisition_tax))
        .field("지방교육세", won(result.local_education_tax))
        .field("농어촌특별세", won(result.rural_special_tax))
        .field("인지세", won(result.stamp_duty))
        .field("국민주택채권 매입액", won(result.bond_purchase))
        .field("채권 할인 비용", won(result.bond_discount_cost))
        .field("등기 신청 수수료", won(result.application_fee))
        .field("법무사 수수료", won(result.legal_fee))
        .field("세금 합계", won(result.total_taxes))
        .field("총 비용", won(result.total)))
}
