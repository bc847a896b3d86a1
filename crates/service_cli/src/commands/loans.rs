//! Mortgage, car loan and interim interest commands

use calc_core::math::{AmortizationSchedule, RepaymentMethod};
use calc_core::traits::Calculate;
use calc_core::types::money::format_percent;
use calc_core::types::{Date, DayCount, FormattedNumber};
use calc_models::loans::{CarLoanInput, Installment, InterimInterestInput, MortgageInput};
use tracing::{debug, info};

use super::won;
use crate::output::{Report, Table};
use crate::{CliError, Result};

/// Run the mortgage command
pub fn mortgage(
    principal: f64,
    rate_percent: f64,
    years: u32,
    method: RepaymentMethod,
    grace_years: u32,
    schedule: bool,
) -> Result<Report> {
    info!("Calculating mortgage repayment...");
    let input =
        MortgageInput::new(principal, rate_percent, years, method).with_grace_years(grace_years);
    debug!(?input);
    let result = input.calculate()?;

    let mut report = Report::new("주택담보대출 상환", &result)?
        .field("상환 방식", method.korean_name())
        .field("대출 기간", format!("{}개월", result.months))
        .field("월 이자율", format_percent(result.monthly_rate, 4));
    if grace_years > 0 {
        report = report.field("거치기간 월 납입액", won(result.grace_payment));
    }
    report = report.field("월 상환액", won(result.monthly_payment));
    if method != RepaymentMethod::EqualPayment {
        report = report.field("최대 상환액", won(result.max_payment));
    }
    report = report
        .field("총 상환액", won(result.total_payment))
        .field("총 이자", won(result.total_interest));

    if schedule {
        report = report.with_table(schedule_table(&result.schedule));
    }
    Ok(report)
}

/// Arguments of the car-loan command.
#[derive(Debug, Clone, Copy)]
pub struct CarLoanArgs {
    /// Vehicle price
    pub price: f64,
    /// Down payment
    pub down_payment: f64,
    /// Annual rate in percent
    pub rate_percent: f64,
    /// Term in months
    pub months: u32,
    /// Repayment method
    pub method: RepaymentMethod,
    /// Compute the acquisition tax
    pub include_acquisition_tax: bool,
    /// Add the tax to the loan
    pub finance_acquisition_tax: bool,
    /// Attach the schedule
    pub schedule: bool,
}

/// Run the car-loan command
pub fn car_loan(args: CarLoanArgs) -> Result<Report> {
    info!("Calculating car loan...");
    let mut input = CarLoanInput::new(args.price, args.down_payment, args.rate_percent, args.months);
    input.method = args.method;
    input.include_acquisition_tax = args.include_acquisition_tax;
    input.finance_acquisition_tax = args.finance_acquisition_tax;
    debug!(?input);
    let result = input.calculate()?;

    let mut report = Report::new("자동차 할부", &result)?
        .field("취득세", won(result.acquisition_tax))
        .field("대출 원금", won(result.loan_amount))
        .field("초기 납입금", won(result.upfront_cash))
        .field("월 상환액", won(result.monthly_payment))
        .field("총 이자", won(result.total_interest))
        .field("총 비용", won(result.total_cost));
    if args.schedule {
        report = report.with_table(schedule_table(&result.schedule));
    }
    Ok(report)
}

fn schedule_table(schedule: &AmortizationSchedule) -> Table {
    let mut table = Table::new(["회차", "상환액", "원금", "이자", "잔액"]);
    for row in schedule.rows() {
        table.push([
            row.period.to_string(),
            won(row.payment),
            won(row.principal),
            won(row.interest),
            won(row.balance),
        ]);
    }
    table
}

/// Parses `label:YYYY-MM-DD:amount`.
pub fn parse_installment(text: &str) -> Result<Installment> {
    let mut parts = text.splitn(3, ':');
    let (Some(label), Some(date), Some(amount)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(CliError::invalid_argument(format!(
            "installment '{}' must look like label:YYYY-MM-DD:amount",
            text
        )));
    };
    let label = label.trim();
    if label.is_empty() {
        return Err(CliError::invalid_argument(format!(
            "installment '{}' has no label",
            text
        )));
    }
    let date: Date = date
        .trim()
        .parse()
        .map_err(|e| CliError::invalid_argument(format!("installment '{}': {}", text, e)))?;
    let amount = FormattedNumber::parse(amount)?;
    Ok(Installment::new(label, date, amount.value()))
}

/// Run the interim-interest command
pub fn interim_interest(
    move_in_date: Date,
    rate_percent: f64,
    installments: &[String],
    day_count: DayCount,
) -> Result<Report> {
    info!("Calculating interim-payment interest...");
    let input = InterimInterestInput {
        installments: installments
            .iter()
            .map(|s| parse_installment(s))
            .collect::<Result<_>>()?,
        move_in_date,
        annual_rate_percent: rate_percent,
        day_count,
    };
    debug!(?input);
    let result = input.calculate()?;

    let mut table = Table::new(["회차", "납입일", "금액", "일수", "이자"]);
    for row in &result.rows {
        table.push([
            row.label.clone(),
            row.date.to_string(),
            won(row.amount),
            row.days.to_string(),
            won(row.interest),
        ]);
    }

    Ok(Report::new("중도금 이자", &result)?
        .field("입주일", move_in_date.to_string())
        .field("일수 계산", day_count.to_string())
        .field("중도금 합계", won(result.total_principal))
        .field("이자 합계", won(result.total_interest))
        .with_table(table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_installment() {
        let installment = parse_installment("1차:2024-03-02:50,000,000").unwrap();
        assert_eq!(installment.label, "1차");
        assert_eq!(installment.date, Date::from_ymd(2024, 3, 2).unwrap());
        assert_eq!(installment.amount, 50_000_000.0);
    }

    #[test]
    fn test_parse_installment_rejects_malformed() {
        assert!(matches!(
            parse_installment("1차-2024-03-02"),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_installment(":2024-03-02:100"),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_installment("1차:2024-13-02:100"),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_installment("1차:2024-03-02:lots"),
            Err(CliError::Calc(_))
        ));
    }
}
