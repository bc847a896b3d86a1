//! Command-line arguments.
//!
//! Amounts accept thousands separators and a trailing `원` or `%`
//! (`300,000,000`, `3.5%`). Categorical options take Korean or English
//! names (`--method 원리금균등` or `--method equal-payment`).

use std::path::PathBuf;

use calc_core::math::{DepreciationMethod, RepaymentMethod};
use calc_core::types::{Currency, Date, DayCount, FormattedNumber, LocalDateTime};
use calc_core::units::UnitFamily;
use calc_models::business::ScaffoldType;
use calc_models::education::{Course, GradeScale};
use calc_models::fx::Bank;
use calc_models::health::{ActivityLevel, Sex};
use calc_models::real_estate::{PropertyKind, Region};
use calc_models::tax::Relationship;
use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Korean household calculators
#[derive(Debug, Parser)]
#[command(name = "gyesan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path (defaults to ./gyesan.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the configured one)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Jeonse conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum JeonseDirection {
    /// Jeonse deposit to monthly rent
    ToMonthly,
    /// Deposit and monthly rent to jeonse deposit
    ToJeonse,
    /// Conversion rate implied by both leases
    ImpliedRate,
}

/// One calculator per subcommand.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Body mass index
    Bmi {
        /// Height in cm
        #[arg(long)]
        height: FormattedNumber,
        /// Weight in kg
        #[arg(long)]
        weight: FormattedNumber,
    },

    /// Basal metabolic rate and daily calorie targets
    Calorie {
        /// male | female
        #[arg(long)]
        sex: Sex,
        /// Age in years
        #[arg(long)]
        age: FormattedNumber,
        /// Height in cm
        #[arg(long)]
        height: FormattedNumber,
        /// Weight in kg
        #[arg(long)]
        weight: FormattedNumber,
        /// sedentary | light | moderate | active | very-active (or 1-5)
        #[arg(long, default_value = "moderate")]
        activity: ActivityLevel,
    },

    /// Home mortgage repayment
    Mortgage {
        /// Loan principal (KRW)
        #[arg(long)]
        principal: FormattedNumber,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: FormattedNumber,
        /// Term in years (at most 50)
        #[arg(long)]
        years: u32,
        /// equal-payment | equal-principal | balloon
        #[arg(long, default_value = "equal-payment")]
        method: RepaymentMethod,
        /// Interest-only years before amortisation starts
        #[arg(long, default_value_t = 0)]
        grace_years: u32,
        /// Print every period
        #[arg(long)]
        schedule: bool,
    },

    /// Car loan including acquisition tax
    CarLoan {
        /// Vehicle price (KRW)
        #[arg(long)]
        price: FormattedNumber,
        /// Down payment (KRW)
        #[arg(long, default_value = "0")]
        down_payment: FormattedNumber,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: FormattedNumber,
        /// Term in months (at most 120)
        #[arg(long)]
        months: u32,
        /// equal-payment | equal-principal | balloon
        #[arg(long, default_value = "equal-payment")]
        method: RepaymentMethod,
        /// Leave the 7% acquisition tax out
        #[arg(long)]
        no_acquisition_tax: bool,
        /// Add the acquisition tax to the loan instead of paying it up front
        #[arg(long)]
        finance_tax: bool,
        /// Print every period
        #[arg(long)]
        schedule: bool,
    },

    /// Fixed-asset depreciation schedule
    Depreciation {
        /// Asset description
        #[arg(long, default_value = "자산")]
        name: String,
        /// Acquisition cost (KRW)
        #[arg(long)]
        cost: FormattedNumber,
        /// Salvage value (KRW)
        #[arg(long, default_value = "0")]
        salvage: FormattedNumber,
        /// Useful life in years
        #[arg(long)]
        life: u32,
        /// straight-line | double-declining | sum-of-years | fixed-rate
        #[arg(long, default_value = "straight-line")]
        method: DepreciationMethod,
        /// Acquisition year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Also show the first-year expense under every method
        #[arg(long)]
        compare: bool,
    },

    /// Grade point average
    Grade {
        /// 4.5 | 4.3 | 4.0
        #[arg(long, default_value = "4.5")]
        scale: GradeScale,
        /// Courses as name:credits:grade[:major], e.g. 자료구조:3:A+:major
        #[arg(required = true)]
        courses: Vec<Course>,
    },

    /// Income tax on taxable income or a gross salary
    IncomeTax {
        /// Taxable income, or gross salary with --salary (KRW)
        income: FormattedNumber,
        /// Treat the amount as a gross salary
        #[arg(long)]
        salary: bool,
        /// Persons for the personal deduction, taxpayer included
        #[arg(long, default_value_t = 1)]
        persons: u32,
        /// Other deductions (KRW)
        #[arg(long, default_value = "0")]
        other_deductions: FormattedNumber,
    },

    /// Inheritance tax
    InheritanceTax {
        /// Gross estate value (KRW)
        #[arg(long)]
        estate: FormattedNumber,
        /// Debts of the deceased (KRW)
        #[arg(long, default_value = "0")]
        debts: FormattedNumber,
        /// Funeral expenses (KRW)
        #[arg(long, default_value = "0")]
        funeral: FormattedNumber,
        /// Amount inherited by a surviving spouse (enables the spouse deduction)
        #[arg(long)]
        spouse_share: Option<FormattedNumber>,
        /// Filed after the deadline (no 3% credit)
        #[arg(long)]
        late: bool,
    },

    /// Gift tax
    GiftTax {
        /// Gift amount (KRW)
        #[arg(long)]
        amount: FormattedNumber,
        /// spouse | parent | child | relative | other
        #[arg(long)]
        relationship: Relationship,
        /// Gifts from the same donor in the prior 10 years (KRW)
        #[arg(long, default_value = "0")]
        prior_gifts: FormattedNumber,
        /// Gift tax already paid on the prior gifts (KRW)
        #[arg(long, default_value = "0")]
        prior_tax: FormattedNumber,
        /// Recipient is under 19
        #[arg(long)]
        minor: bool,
        /// Grandparent to grandchild
        #[arg(long)]
        generation_skipping: bool,
        /// Filed after the deadline (no 3% credit)
        #[arg(long)]
        late: bool,
    },

    /// Annual property tax on housing
    PropertyTax {
        /// Official price (KRW)
        #[arg(long)]
        price: FormattedNumber,
        /// The household's only home
        #[arg(long)]
        single_home: bool,
        /// Outside an urban area (no urban area tax)
        #[arg(long)]
        non_urban: bool,
    },

    /// Interest on pre-sale interim installments
    InterimInterest {
        /// Move-in date (YYYY-MM-DD)
        #[arg(long)]
        move_in: Date,
        /// Annual loan rate in percent
        #[arg(long)]
        rate: FormattedNumber,
        /// Installments as label:date:amount, e.g. 1차:2024-03-02:50,000,000
        #[arg(long = "installment", required = true)]
        installments: Vec<String>,
        /// ACT/365 | ACT/360
        #[arg(long, default_value = "ACT/365")]
        day_count: DayCount,
    },

    /// International transfer fees
    Transfer {
        /// Amount in the foreign currency
        #[arg(long)]
        amount: FormattedNumber,
        /// Currency code (defaults to the configured currency)
        #[arg(long)]
        currency: Option<Currency>,
        /// kb | shinhan | woori | hana | nh | kakao
        #[arg(long, default_value = "kb")]
        bank: Bank,
        /// Preferential discount on the spread in percent
        #[arg(long)]
        discount: Option<FormattedNumber>,
        /// No intermediary bank fee
        #[arg(long)]
        no_intermediary: bool,
        /// Compare every bank
        #[arg(long)]
        compare: bool,
    },

    /// Jeonse / monthly rent conversion
    Jeonse {
        /// What to solve for
        #[arg(long, value_enum)]
        mode: JeonseDirection,
        /// Jeonse deposit (KRW)
        #[arg(long)]
        jeonse: Option<FormattedNumber>,
        /// Monthly lease deposit (KRW)
        #[arg(long, default_value = "0")]
        deposit: FormattedNumber,
        /// Monthly rent (KRW)
        #[arg(long)]
        rent: Option<FormattedNumber>,
        /// Annual conversion rate in percent
        #[arg(long)]
        rate: Option<FormattedNumber>,
        /// Central-bank base rate (defaults to the configured one)
        #[arg(long)]
        base_rate: Option<FormattedNumber>,
    },

    /// Acquisition and registration costs
    Registration {
        /// Purchase price (KRW)
        #[arg(long)]
        price: FormattedNumber,
        /// Exclusive area in m²
        #[arg(long)]
        area: FormattedNumber,
        /// housing | non-housing
        #[arg(long, default_value = "housing")]
        kind: PropertyKind,
        /// metropolitan | other
        #[arg(long, default_value = "metropolitan")]
        region: Region,
        /// Discount when selling the housing bond immediately, in percent
        #[arg(long, default_value = "5")]
        bond_discount: FormattedNumber,
        /// Legal (법무사) fee
        #[arg(long)]
        legal_fee: Option<FormattedNumber>,
    },

    /// Scaffolding estimate
    Scaffolding {
        /// Building perimeter in m
        #[arg(long)]
        perimeter: FormattedNumber,
        /// Scaffold height in m
        #[arg(long)]
        height: FormattedNumber,
        /// steel-pipe | system | frame
        #[arg(long = "type", default_value = "steel-pipe")]
        scaffold_type: ScaffoldType,
        /// Rental months
        #[arg(long, default_value_t = 1)]
        months: u32,
        /// Install a safety net
        #[arg(long)]
        safety_net: bool,
        /// Transport fee (KRW)
        #[arg(long, default_value = "0")]
        transport: FormattedNumber,
    },

    /// Time in another city
    TimeDiff {
        /// Source city
        #[arg(long)]
        from: String,
        /// Target city
        #[arg(long)]
        to: Option<String>,
        /// Local time in the source city (YYYY-MM-DD HH:MM, defaults to now)
        #[arg(long)]
        at: Option<LocalDateTime>,
    },

    /// Elapsed time between two datetimes
    Duration {
        /// Start (YYYY-MM-DD HH:MM)
        #[arg(long)]
        start: LocalDateTime,
        /// End (YYYY-MM-DD HH:MM)
        #[arg(long)]
        end: LocalDateTime,
    },

    /// Unit conversion
    Convert {
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: FormattedNumber,
        /// Source unit
        from: String,
        /// Target unit (omit for every unit of the family)
        to: Option<String>,
    },

    /// List units
    Units {
        /// length | weight | area | volume | time | speed | data-size | temperature | currency
        family: Option<UnitFamily>,
    },
}
