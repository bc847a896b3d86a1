//! Income, inheritance, gift and property tax commands

use calc_core::math::BracketEvaluation;
use calc_core::traits::Calculate;
use calc_core::types::money::format_percent;
use calc_models::tax::{
    GiftTaxInput, IncomeTaxInput, InheritanceTaxInput, PropertyTaxInput, Relationship,
};
use tracing::{debug, info};

use super::won;
use crate::output::{Report, Table};
use crate::Result;

/// Run the income-tax command
pub fn income(amount: f64, salary: bool, persons: u32, other_deductions: f64) -> Result<Report> {
    info!("Calculating income tax...");
    let mut input = if salary {
        IncomeTaxInput::salary(amount, persons)
    } else {
        IncomeTaxInput::taxable(amount)
    };
    input.other_deductions = other_deductions;
    debug!(?input);
    let result = input.calculate()?;

    let mut report = Report::new("종합소득세", &result)?;
    if let Some(gross) = result.gross_salary {
        report = report
            .field("총급여", won(gross))
            .field("근로소득공제", won(result.earned_income_deduction))
            .field("인적공제", won(result.personal_deduction));
    }
    if result.other_deductions > 0.0 {
        report = report.field("기타 공제", won(result.other_deductions));
    }
    report = report
        .field("과세표준", won(result.taxable_income))
        .field("산출세액", won(result.calculated_tax));
    if result.tax_credit > 0.0 {
        report = report.field("세액공제", won(result.tax_credit));
    }
    Ok(report
        .field("결정세액", won(result.determined_tax))
        .field("지방소득세", won(result.local_income_tax))
        .field("총 납부세액", won(result.total_tax))
        .field("한계세율", format_percent(result.marginal_rate, 0))
        .field("실효세율", format_percent(result.effective_rate, 2))
        .with_table(bracket_table(&result.breakdown)))
}

/// Run the inheritance-tax command
pub fn inheritance(
    estate: f64,
    debts: f64,
    funeral: f64,
    spouse_share: Option<f64>,
    filed_on_time: bool,
) -> Result<Report> {
    info!("Calculating inheritance tax...");
    let mut input = InheritanceTaxInput::new(estate);
    input.debts = debts;
    input.funeral_expenses = funeral;
    if let Some(share) = spouse_share {
        input.has_spouse = true;
        input.spouse_share = share;
    }
    input.filed_on_time = filed_on_time;
    debug!(?input);
    let result = input.calculate()?;

    let mut report = Report::new("상속세", &result)?
        .field("순 상속재산", won(result.net_estate))
        .field("장례비 공제", won(result.funeral_deduction))
        .field("일괄공제", won(result.lump_sum_deduction));
    if result.spouse_deduction > 0.0 {
        report = report.field("배우자 공제", won(result.spouse_deduction));
    }
    Ok(report
        .field("공제 합계", won(result.total_deductions))
        .field("과세표준", won(result.tax_base))
        .field("산출세액", won(result.calculated_tax))
        .field("신고세액공제", won(result.filing_credit))
        .field("납부세액", won(result.payable_tax))
        .with_table(bracket_table(&result.breakdown)))
}

/// Arguments of the gift-tax command.
#[derive(Debug, Clone, Copy)]
pub struct GiftArgs {
    /// Gift amount
    pub amount: f64,
    /// Donor's relationship to the recipient
    pub relationship: Relationship,
    /// Same-donor gifts in the prior 10 years
    pub prior_gifts: f64,
    /// Tax paid on those gifts
    pub prior_tax: f64,
    /// Recipient under 19
    pub minor: bool,
    /// Skips a generation
    pub generation_skipping: bool,
    /// Filed by the deadline
    pub filed_on_time: bool,
}

/// Run the gift-tax command
pub fn gift(args: GiftArgs) -> Result<Report> {
    info!("Calculating gift tax...");
    let mut input = GiftTaxInput::new(args.amount, args.relationship);
    input.prior_gifts = args.prior_gifts;
    input.prior_tax_paid = args.prior_tax;
    input.recipient_is_minor = args.minor;
    input.generation_skipping = args.generation_skipping;
    input.filed_on_time = args.filed_on_time;
    debug!(?input);
    let result = input.calculate()?;

    let mut report = Report::new("증여세", &result)?
        .field("관계", args.relationship.korean_name())
        .field("합산 증여액", won(result.aggregated_gifts))
        .field("증여재산공제", won(result.deduction))
        .field("과세표준", won(result.tax_base))
        .field("산출세액", won(result.calculated_tax));
    if result.surcharge > 0.0 {
        report = report.field("세대생략 할증", won(result.surcharge));
    }
    if result.prior_tax_credit > 0.0 {
        report = report.field("기납부세액공제", won(result.prior_tax_credit));
    }
    Ok(report
        .field("신고세액공제", won(result.filing_credit))
        .field("납부세액", won(result.payable_tax))
        .with_table(bracket_table(&result.breakdown)))
}

/// Run the property-tax command
pub fn property(official_price: f64, single_home: bool, urban_area: bool) -> Result<Report> {
    info!("Calculating property tax...");
    let mut input = PropertyTaxInput::new(official_price, single_home);
    input.urban_area = urban_area;
    debug!(?input);
    let result = input.calculate()?;

    let rates = if result.special_rates {
        "1세대 1주택 특례"
    } else {
        "표준세율"
    };
    Ok(Report::new("재산세", &result)?
        .field("공정시장가액비율", format_percent(result.fair_market_ratio, 0))
        .field("과세표준", won(result.tax_base))
        .field("세율", rates)
        .field("재산세", won(result.property_tax))
        .field("도시지역분", won(result.urban_area_tax))
        .field("지방교육세", won(result.local_education_tax))
        .field("합계", won(result.total))
        .with_table(bracket_table(&result.breakdown)))
}

fn bracket_table(evaluation: &BracketEvaluation) -> Table {
    let mut table = Table::new(["구간", "과세 금액", "세율", "세액"]);
    for line in &evaluation.lines {
        let band = match line.upper {
            Some(upper) => format!("{} ~ {}", won(line.lower), won(upper)),
            None => format!("{} 초과", won(line.lower)),
        };
        table.push([
            band,
            won(line.taxed_amount),
            format_percent(line.rate, 1),
            won(line.tax),
        ]);
    }
    table
}
