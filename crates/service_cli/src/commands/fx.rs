//! International transfer command

use calc_core::traits::Calculate;
use calc_core::types::{Currency, ExchangeRateTable};
use calc_models::fx::{Bank, TransferInput, TransferResult};
use tracing::{debug, info};

use super::{quantity, won};
use crate::output::{Report, Table};
use crate::Result;

/// Arguments shared by the single-bank and comparison forms.
#[derive(Debug, Clone, Copy)]
pub struct TransferArgs {
    /// Amount in the foreign currency
    pub amount: f64,
    /// Currency sent
    pub currency: Currency,
    /// Sending bank
    pub bank: Bank,
    /// Spread discount override in percent
    pub discount_percent: Option<f64>,
    /// Charge the intermediary bank fee
    pub include_intermediary_fee: bool,
}

fn calculate(args: &TransferArgs, bank: Bank, rates: &ExchangeRateTable) -> Result<TransferResult> {
    let mut input = TransferInput::new(bank, args.currency, args.amount);
    input.discount_percent = args.discount_percent;
    input.include_intermediary_fee = args.include_intermediary_fee;
    input.rates = rates.clone();
    debug!(bank = %bank, currency = %args.currency, amount = args.amount);
    Ok(input.calculate()?)
}

/// Run the transfer command for one bank
pub fn transfer(args: &TransferArgs, rates: &ExchangeRateTable) -> Result<Report> {
    info!("Calculating transfer cost...");
    let result = calculate(args, args.bank, rates)?;

    Ok(Report::new("해외송금 비용", &result)?
        .field("은행", result.bank_name.clone())
        .field(
            "송금액",
            format!("{} {}", quantity(result.amount, 2, ""), result.currency),
        )
        .field("기준 환율", quantity(result.base_rate, 2, "원"))
        .field("우대율", format!("{}%", result.discount_percent))
        .field("적용 환율", quantity(result.applied_rate, 2, "원"))
        .field("원화 환산액", won(result.amount_krw))
        .field("환전 비용", won(result.exchange_cost))
        .field("송금 수수료", won(result.remittance_fee))
        .field("전신료", won(result.cable_fee))
        .field("중계 수수료", won(result.intermediary_fee))
        .field("수수료 합계", won(result.total_fees))
        .field("총 비용", won(result.total_krw)))
}

/// Run the transfer command across every bank, cheapest first
pub fn compare_banks(args: &TransferArgs, rates: &ExchangeRateTable) -> Result<Report> {
    info!("Comparing transfer cost across banks...");
    let mut results = Bank::ALL
        .into_iter()
        .map(|bank| calculate(args, bank, rates))
        .collect::<Result<Vec<_>>>()?;
    results.sort_by(|a, b| a.total_krw.total_cmp(&b.total_krw));

    let mut table = Table::new(["은행", "적용 환율", "환전 비용", "수수료 합계", "총 비용"]);
    for result in &results {
        table.push([
            result.bank_name.clone(),
            quantity(result.applied_rate, 2, "원"),
            won(result.exchange_cost),
            won(result.total_fees),
            won(result.total_krw),
        ]);
    }

    let mut report = Report::new("해외송금 은행 비교", &results)?.field(
        "송금액",
        format!("{} {}", quantity(args.amount, 2, ""), args.currency),
    );
    if let (Some(cheapest), Some(dearest)) = (results.first(), results.last()) {
        report = report
            .field("최저 비용", format!("{} ({})", won(cheapest.total_krw), cheapest.bank_name))
            .field("최대 차이", won(dearest.total_krw - cheapest.total_krw));
    }
    Ok(report.with_table(table))
}
