//! Registration cost of a purchase (부동산 등기비용).
//!
//! | Item | Housing | Non-housing |
//! |---|---|---|
//! | Acquisition tax | ≤600M 1%, 600M–900M `(price × 2/300M − 3)%`, >900M 3% | 4% |
//! | Local education tax | 10% of acquisition tax | 0.4% of price |
//! | Rural special tax | 0.2% when area > 85㎡ | 0.2% |
//! | Stamp duty | ≤100M 0, ≤1B 150,000, >1B 350,000 | same |
//!
//! A national housing bond must be bought at a ratio of the price that
//! depends on the price band and region; most buyers sell it back at once,
//! so the cost is the bond amount times the discount rate. The court
//! application fee and an optional legal (법무사) fee complete the total.

use std::fmt;
use std::str::FromStr;

use calc_core::traits::Calculate;
use calc_core::types::money::{floor_to, round_won};
use calc_core::types::validate::{ensure_non_negative, ensure_percent, ensure_positive};
use calc_core::types::CalcError;

/// Court registration application fee.
pub const APPLICATION_FEE: f64 = 15_000.0;
/// Floor area above which housing pays rural special tax (㎡).
pub const RURAL_TAX_AREA_THRESHOLD: f64 = 85.0;
/// Rural special tax rate on the price.
pub const RURAL_SPECIAL_TAX_RATE: f64 = 0.002;

/// Bond purchase ratios: `(lower bound, metropolitan ratio, other ratio)`,
/// ascending. Prices below the first bound buy no bond.
const HOUSING_BOND_RATIOS: &[(f64, f64, f64)] = &[
    (20_000_000.0, 0.013, 0.013),
    (50_000_000.0, 0.019, 0.014),
    (100_000_000.0, 0.021, 0.016),
    (160_000_000.0, 0.023, 0.018),
    (260_000_000.0, 0.026, 0.021),
    (600_000_000.0, 0.031, 0.026),
];

const LAND_BOND_RATIOS: &[(f64, f64, f64)] = &[
    (5_000_000.0, 0.025, 0.020),
    (50_000_000.0, 0.040, 0.035),
    (100_000_000.0, 0.050, 0.045),
];

/// Kind of property purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyKind {
    /// 주택
    #[default]
    Housing,
    /// 토지·상가 등 주택 외
    NonHousing,
}

impl FromStr for PropertyKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "housing" | "house" | "주택" => Ok(PropertyKind::Housing),
            "non-housing" | "land" | "commercial" | "토지" | "상가" => Ok(PropertyKind::NonHousing),
            other => Err(CalcError::invalid(
                "property kind",
                format!("'{}' (expected housing or non-housing)", other),
            )),
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKind::Housing => f.write_str("주택"),
            PropertyKind::NonHousing => f.write_str("주택 외"),
        }
    }
}

/// Region for the bond purchase ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    /// Seoul and metropolitan cities
    #[default]
    Metropolitan,
    /// Elsewhere
    Other,
}

impl FromStr for Region {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metro" | "metropolitan" | "seoul" | "서울" | "광역시" => Ok(Region::Metropolitan),
            "other" | "기타" | "지방" => Ok(Region::Other),
            other => Err(CalcError::invalid(
                "region",
                format!("'{}' (expected metro or other)", other),
            )),
        }
    }
}

/// Housing acquisition tax rate (ratio) for a price.
pub fn housing_acquisition_tax_rate(price: f64) -> f64 {
    if price <= 600_000_000.0 {
        0.01
    } else if price <= 900_000_000.0 {
        let percent = price * 2.0 / 300_000_000.0 - 3.0;
        (percent * 100.0).round() / 10_000.0
    } else {
        0.03
    }
}

/// Stamp duty by price.
pub fn stamp_duty(price: f64) -> f64 {
    if price <= 100_000_000.0 {
        0.0
    } else if price <= 1_000_000_000.0 {
        150_000.0
    } else {
        350_000.0
    }
}

/// National housing bond purchase ratio.
pub fn bond_ratio(price: f64, kind: PropertyKind, region: Region) -> f64 {
    let table = match kind {
        PropertyKind::Housing => HOUSING_BOND_RATIOS,
        PropertyKind::NonHousing => LAND_BOND_RATIOS,
    };
    table
        .iter()
        .rev()
        .find(|(lower, _, _)| price >= *lower)
        .map_or(0.0, |&(_, metro, other)| match region {
            Region::Metropolitan => metro,
            Region::Other => other,
        })
}

/// Purchase details.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegistrationInput {
    /// Purchase price
    pub price: f64,
    /// Housing or not
    pub kind: PropertyKind,
    /// Exclusive floor area (㎡)
    pub area_m2: f64,
    /// Region for the bond ratio
    pub region: Region,
    /// Discount taken when selling the bond back immediately, in percent
    pub bond_discount_percent: f64,
    /// Legal (법무사) fee, if one is hired
    pub legal_fee: Option<f64>,
}

impl RegistrationInput {
    /// Housing purchase in a metropolitan area without a legal fee.
    pub fn housing(price: f64, area_m2: f64, bond_discount_percent: f64) -> Self {
        Self {
            price,
            kind: PropertyKind::Housing,
            area_m2,
            region: Region::Metropolitan,
            bond_discount_percent,
            legal_fee: None,
        }
    }
}

/// Each cost item and the total.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegistrationResult {
    /// Acquisition tax rate applied
    pub acquisition_tax_rate: f64,
    /// Acquisition tax
    pub acquisition_tax: f64,
    /// Local education tax
    pub local_education_tax: f64,
    /// Rural special tax
    pub rural_special_tax: f64,
    /// Stamp duty
    pub stamp_duty: f64,
    /// Bond purchase amount
    pub bond_purchase: f64,
    /// Cost of selling the bond back
    pub bond_discount_cost: f64,
    /// Application fee
    pub application_fee: f64,
    /// Legal fee
    pub legal_fee: f64,
    /// Sum of the taxes
    pub total_taxes: f64,
    /// Everything payable (the bond itself is excluded, only its discount)
    pub total: f64,
}

impl Calculate for RegistrationInput {
    type Output = RegistrationResult;

    fn calculate(&self) -> Result<RegistrationResult, CalcError> {
        let price = ensure_positive("price", self.price)?;
        let area = ensure_non_negative("area", self.area_m2)?;
        let discount = ensure_percent("bond discount", self.bond_discount_percent, 100.0)?;
        let legal_fee = self
            .legal_fee
            .map(|fee| ensure_non_negative("legal fee", fee))
            .transpose()?
            .unwrap_or(0.0);

        let (acquisition_tax_rate, local_education_tax_of) = match self.kind {
            PropertyKind::Housing => (housing_acquisition_tax_rate(price), None),
            PropertyKind::NonHousing => (0.04, Some(price * 0.004)),
        };
        let acquisition_tax = floor_to(price * acquisition_tax_rate, 10.0);
        let local_education_tax =
            floor_to(local_education_tax_of.unwrap_or(acquisition_tax * 0.1), 10.0);

        let rural_applies = match self.kind {
            PropertyKind::Housing => area > RURAL_TAX_AREA_THRESHOLD,
            PropertyKind::NonHousing => true,
        };
        let rural_special_tax = if rural_applies {
            floor_to(price * RURAL_SPECIAL_TAX_RATE, 10.0)
        } else {
            0.0
        };

        let stamp_duty = stamp_duty(price);
        let bond_purchase = (price * bond_ratio(price, self.kind, self.region) / 10_000.0).round() * 10_000.0;
        let bond_discount_cost = round_won(bond_purchase * discount);

        let total_taxes = acquisition_tax + local_education_tax + rural_special_tax + stamp_duty;
        let total = total_taxes + bond_discount_cost + APPLICATION_FEE + legal_fee;

        Ok(RegistrationResult {
            acquisition_tax_rate,
            acquisition_tax,
            local_education_tax,
            rural_special_tax,
            stamp_duty,
            bond_purchase,
            bond_discount_cost,
            application_fee: APPLICATION_FEE,
            legal_fee,
            total_taxes,
            total,
        })
    }
}
