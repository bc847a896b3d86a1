//! CLI command implementations
//!
//! Each submodule turns parsed arguments into a calculator input, runs it
//! and presents the result as a [`Report`]. Nothing here prints; `main`
//! renders the report in the requested format.

use calc_core::types::money::format_krw;
use calc_core::types::number::group_thousands;

use crate::cli::Commands;
use crate::config::CliConfig;
use crate::output::Report;
use crate::Result;

pub mod business;
pub mod conversion;
pub mod education;
pub mod fx;
pub mod health;
pub mod loans;
pub mod real_estate;
pub mod tax;
pub mod time;

/// Run one subcommand.
pub fn run(command: &Commands, config: &CliConfig) -> Result<Report> {
    match command {
        Commands::Bmi { height, weight } => health::bmi(height.value(), weight.value()),
        Commands::Calorie {
            sex,
            age,
            height,
            weight,
            activity,
        } => health::calorie(*sex, age.value(), height.value(), weight.value(), *activity),
        Commands::Mortgage {
            principal,
            rate,
            years,
            method,
            grace_years,
            schedule,
        } => loans::mortgage(
            principal.value(),
            rate.value(),
            *years,
            *method,
            *grace_years,
            *schedule,
        ),
        Commands::CarLoan {
            price,
            down_payment,
            rate,
            months,
            method,
            no_acquisition_tax,
            finance_tax,
            schedule,
        } => loans::car_loan(loans::CarLoanArgs {
            price: price.value(),
            down_payment: down_payment.value(),
            rate_percent: rate.value(),
            months: *months,
            method: *method,
            include_acquisition_tax: !no_acquisition_tax,
            finance_acquisition_tax: *finance_tax,
            schedule: *schedule,
        }),
        Commands::InterimInterest {
            move_in,
            rate,
            installments,
            day_count,
        } => loans::interim_interest(*move_in, rate.value(), installments, *day_count),
        Commands::Depreciation {
            name,
            cost,
            salvage,
            life,
            method,
            year,
            compare,
        } => business::depreciation(
            name,
            cost.value(),
            salvage.value(),
            *life,
            *method,
            *year,
            *compare,
        ),
        Commands::Scaffolding {
            perimeter,
            height,
            scaffold_type,
            months,
            safety_net,
            transport,
        } => business::scaffolding(
            perimeter.value(),
            height.value(),
            *scaffold_type,
            *months,
            *safety_net,
            transport.value(),
        ),
        Commands::Grade { scale, courses } => education::grade(courses, *scale),
        Commands::IncomeTax {
            income,
            salary,
            persons,
            other_deductions,
        } => tax::income(income.value(), *salary, *persons, other_deductions.value()),
        Commands::InheritanceTax {
            estate,
            debts,
            funeral,
            spouse_share,
            late,
        } => tax::inheritance(
            estate.value(),
            debts.value(),
            funeral.value(),
            spouse_share.map(|s| s.value()),
            !late,
        ),
        Commands::GiftTax {
            amount,
            relationship,
            prior_gifts,
            prior_tax,
            minor,
            generation_skipping,
            late,
        } => tax::gift(tax::GiftArgs {
            amount: amount.value(),
            relationship: *relationship,
            prior_gifts: prior_gifts.value(),
            prior_tax: prior_tax.value(),
            minor: *minor,
            generation_skipping: *generation_skipping,
            filed_on_time: !late,
        }),
        Commands::PropertyTax {
            price,
            single_home,
            non_urban,
        } => tax::property(price.value(), *single_home, !non_urban),
        Commands::Transfer {
            amount,
            currency,
            bank,
            discount,
            no_intermediary,
            compare,
        } => {
            let currency = match currency {
                Some(currency) => *currency,
                None => config.default_currency()?,
            };
            let args = fx::TransferArgs {
                amount: amount.value(),
                currency,
                bank: *bank,
                discount_percent: discount.map(|d| d.value()),
                include_intermediary_fee: !no_intermediary,
            };
            let rates = config.exchange_rate_table()?;
            if *compare {
                fx::compare_banks(&args, &rates)
            } else {
                fx::transfer(&args, &rates)
            }
        }
        Commands::Jeonse {
            mode,
            jeonse,
            deposit,
            rent,
            rate,
            base_rate,
        } => real_estate::jeonse(
            *mode,
            jeonse.map(|v| v.value()),
            deposit.value(),
            rent.map(|v| v.value()),
            rate.map(|v| v.value()),
            base_rate
                .map(|v| v.value())
                .or(config.jeonse_base_rate_percent),
        ),
        Commands::Registration {
            price,
            area,
            kind,
            region,
            bond_discount,
            legal_fee,
        } => real_estate::registration(
            price.value(),
            area.value(),
            *kind,
            *region,
            bond_discount.value(),
            legal_fee.map(|v| v.value()),
        ),
        Commands::TimeDiff { from, to, at } => time::time_difference(from, to.as_deref(), *at),
        Commands::Duration { start, end } => time::duration(*start, *end),
        Commands::Convert { value, from, to } => {
            conversion::convert(value.value(), from, to.as_deref(), config.exchange_rate_table()?)
        }
        Commands::Units { family } => conversion::units(*family, config.exchange_rate_table()?),
    }
}

/// Won amount, e.g. `1,347,134원`.
pub(crate) fn won(amount: f64) -> String {
    format_krw(amount)
}

/// Grouped number with `decimals` places and a unit suffix.
pub(crate) fn quantity(value: f64, decimals: usize, unit: &str) -> String {
    format!("{}{}", group_thousands(value, decimals), unit)
}
