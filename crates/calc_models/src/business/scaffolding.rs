//! Scaffolding cost estimate (비계 견적).
//!
//! Area is the building perimeter times the scaffold height. The estimate
//! adds installation and dismantling per ㎡, monthly rental per ㎡, an
//! optional safety net per ㎡ and a transport fee, then 10% VAT.

use std::fmt;
use std::str::FromStr;

use calc_core::traits::Calculate;
use calc_core::types::money::round_won;
use calc_core::types::validate::{ensure_non_negative, ensure_positive};
use calc_core::types::CalcError;

/// Value-added tax rate.
pub const VAT_RATE: f64 = 0.10;
/// Safety net price per ㎡.
pub const SAFETY_NET_PER_M2: f64 = 1_200.0;

/// Scaffold system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ScaffoldType {
    /// 강관비계
    #[default]
    SteelPipe,
    /// 시스템비계
    System,
    /// 틀비계
    Frame,
}

impl ScaffoldType {
    /// All types in display order.
    pub const ALL: [ScaffoldType; 3] = [
        ScaffoldType::SteelPipe,
        ScaffoldType::System,
        ScaffoldType::Frame,
    ];

    /// Installation plus dismantling per ㎡.
    pub fn install_price_per_m2(&self) -> f64 {
        match self {
            ScaffoldType::SteelPipe => 12_000.0,
            ScaffoldType::System => 18_000.0,
            ScaffoldType::Frame => 15_000.0,
        }
    }

    /// Rental per ㎡ per month.
    pub fn monthly_rental_per_m2(&self) -> f64 {
        match self {
            ScaffoldType::SteelPipe => 1_500.0,
            ScaffoldType::System => 2_500.0,
            ScaffoldType::Frame => 2_000.0,
        }
    }

    /// Korean trade name.
    pub fn korean_name(&self) -> &'static str {
        match self {
            ScaffoldType::SteelPipe => "강관비계",
            ScaffoldType::System => "시스템비계",
            ScaffoldType::Frame => "틀비계",
        }
    }
}

impl fmt::Display for ScaffoldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.korean_name())
    }
}

impl FromStr for ScaffoldType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "steel-pipe" | "steel" | "pipe" | "강관" | "강관비계" => Ok(ScaffoldType::SteelPipe),
            "system" | "시스템" | "시스템비계" => Ok(ScaffoldType::System),
            "frame" | "틀" | "틀비계" => Ok(ScaffoldType::Frame),
            other => Err(CalcError::invalid(
                "scaffold type",
                format!("'{}' (expected steel-pipe, system or frame)", other),
            )),
        }
    }
}

/// Site dimensions and options.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaffoldingInput {
    /// Building perimeter in metres
    pub perimeter_m: f64,
    /// Scaffold height in metres
    pub height_m: f64,
    /// Scaffold system
    pub scaffold_type: ScaffoldType,
    /// Rental period in months
    pub rental_months: u32,
    /// Whether a safety net is installed
    pub safety_net: bool,
    /// Transport fee (KRW)
    pub transport_fee: f64,
}

impl ScaffoldingInput {
    /// One month of rental, no net, no transport.
    pub fn new(perimeter_m: f64, height_m: f64, scaffold_type: ScaffoldType) -> Self {
        Self {
            perimeter_m,
            height_m,
            scaffold_type,
            rental_months: 1,
            safety_net: false,
            transport_fee: 0.0,
        }
    }
}

/// Line items, VAT and total.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaffoldingResult {
    /// Scaffold area in ㎡
    pub area_m2: f64,
    /// Installation and dismantling
    pub install_cost: f64,
    /// Rental for the whole period
    pub rental_cost: f64,
    /// Safety net
    pub safety_net_cost: f64,
    /// Transport
    pub transport_fee: f64,
    /// Sum before VAT
    pub subtotal: f64,
    /// VAT
    pub vat: f64,
    /// Total including VAT
    pub total: f64,
}

impl Calculate for ScaffoldingInput {
    type Output = ScaffoldingResult;

    fn calculate(&self) -> Result<ScaffoldingResult, CalcError> {
        let perimeter = ensure_positive("perimeter", self.perimeter_m)?;
        let height = ensure_positive("height", self.height_m)?;
        if self.rental_months == 0 {
            return Err(CalcError::NonPositive {
                field: "rental months",
                value: 0.0,
            });
        }
        let transport_fee = ensure_non_negative("transport fee", self.transport_fee)?;

        let area_m2 = perimeter * height;
        let install_cost = round_won(area_m2 * self.scaffold_type.install_price_per_m2());
        let rental_cost = round_won(
            area_m2 * self.scaffold_type.monthly_rental_per_m2() * self.rental_months as f64,
        );
        let safety_net_cost = if self.safety_net {
            round_won(area_m2 * SAFETY_NET_PER_M2)
        } else {
            0.0
        };

        let subtotal = install_cost + rental_cost + safety_net_cost + transport_fee;
        let vat = round_won(subtotal * VAT_RATE);

        Ok(ScaffoldingResult {
            area_m2,
            install_cost,
            rental_cost,
            safety_net_cost,
            transport_fee,
            subtotal,
            vat,
            total: subtotal + vat,
        })
    }
}
