//! Named baseline and shock presets, plus YAML scenario files.
//!
//! Presets are plain data fed into the engine; the engine itself knows
//! nothing about them. Company figures are rough published annual numbers
//! in whole currency units.

use resil_core::{BaselineInputs, ShockInputs};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Company preset names accepted by `--company`.
pub const COMPANIES: &[&str] = &[
    "custom",
    "alphabet",
    "amazon",
    "apple",
    "meta",
    "microsoft",
    "netflix",
    "tesla",
];

/// Shock preset names accepted by `--shock`.
pub const SHOCKS: &[&str] = &[
    "no-shock",
    "competitor-innovation",
    "fuel-price-spike",
    "payment-delays",
    "sudden-regulation",
];

/// Baseline financials for a named company preset.
pub fn company(name: &str) -> Option<BaselineInputs> {
    let inputs = |revenue: i64, fixed: i64, variable: i64, cash: i64| BaselineInputs {
        revenue: Decimal::from(revenue),
        fixed_costs: Decimal::from(fixed),
        variable_costs: Decimal::from(variable),
        initial_cash: Decimal::from(cash),
    };
    match name {
        "custom" => Some(inputs(120_000, 45_000, 30_000, 10_000)),
        "alphabet" => Some(inputs(
            307_000_000_000,
            50_000_000_000,
            150_000_000_000,
            108_000_000_000,
        )),
        "amazon" => Some(inputs(
            575_000_000_000,
            40_000_000_000,
            480_000_000_000,
            73_000_000_000,
        )),
        "apple" => Some(inputs(
            383_000_000_000,
            32_000_000_000,
            245_000_000_000,
            74_000_000_000,
        )),
        "meta" => Some(inputs(
            135_000_000_000,
            30_000_000_000,
            55_000_000_000,
            58_000_000_000,
        )),
        "microsoft" => Some(inputs(
            212_000_000_000,
            30_000_000_000,
            110_000_000_000,
            81_000_000_000,
        )),
        "netflix" => Some(inputs(
            34_000_000_000,
            5_000_000_000,
            24_000_000_000,
            7_000_000_000,
        )),
        "tesla" => Some(inputs(
            97_000_000_000,
            7_000_000_000,
            75_000_000_000,
            29_000_000_000,
        )),
        _ => None,
    }
}

/// Shock parameters for a named stress preset.
pub fn shock(name: &str) -> Option<ShockInputs> {
    let neutral = ShockInputs {
        demand_drop_pct: Decimal::ZERO,
        variable_cost_increase_pct: Decimal::ZERO,
        payment_delay_months: 0,
        one_off_regulation_cost: Decimal::ZERO,
    };
    match name {
        "no-shock" => Some(neutral),
        "competitor-innovation" => Some(ShockInputs {
            demand_drop_pct: Decimal::from(15),
            ..neutral
        }),
        "fuel-price-spike" => Some(ShockInputs {
            variable_cost_increase_pct: Decimal::from(30),
            ..neutral
        }),
        "payment-delays" => Some(ShockInputs {
            payment_delay_months: 3,
            ..neutral
        }),
        "sudden-regulation" => Some(ShockInputs {
            one_off_regulation_cost: Decimal::from(8_000_000_000i64),
            ..neutral
        }),
        _ => None,
    }
}

/// A scenario file pairing baseline financials with a shock, as loaded from
/// YAML via `--scenario-file`. A missing horizon falls back to the
/// `--horizon` flag.
#[derive(Debug, Deserialize)]
pub struct ScenarioFile {
    pub baseline: BaselineInputs,
    pub shock: ShockInputs,
    #[serde(default)]
    pub horizon_months: Option<u32>,
}
