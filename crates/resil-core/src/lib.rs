#![deny(warnings)]

//! Core domain models and input validation for the resilience simulator.
//!
//! This crate defines the serializable value records exchanged with the
//! projection engine, the categorical insight tags it derives, and validation
//! helpers that reject bad inputs before any computation runs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Annual financials of the unshocked business.
///
/// All amounts are in the same currency unit and must be non-negative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaselineInputs {
    /// Annual revenue.
    pub revenue: Decimal,
    /// Annual fixed costs.
    pub fixed_costs: Decimal,
    /// Annual variable costs.
    pub variable_costs: Decimal,
    /// Cash on hand when the projection starts.
    pub initial_cash: Decimal,
}

/// Market-shock parameters applied on top of the baseline.
///
/// Percentage shocks hold for the whole horizon; the payment delay is
/// time-limited and the regulatory cost is charged once, in month 1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShockInputs {
    /// Revenue reduction in percent, within [0, 100].
    pub demand_drop_pct: Decimal,
    /// Variable-cost increase in percent, within [0, 100].
    pub variable_cost_increase_pct: Decimal,
    /// Months at the start of the horizon with no incoming payments.
    /// May exceed the horizon, which suppresses income throughout.
    pub payment_delay_months: u32,
    /// One-off regulatory charge deducted in month 1.
    pub one_off_regulation_cost: Decimal,
}

/// Projection parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of months to project (>= 1). Typical values: 12, 24, 48.
    pub horizon_months: u32,
}

/// Cash balances of both scenarios at the end of one month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBalancePoint {
    /// Month index, 1-based.
    pub month: u32,
    /// Unshocked running balance.
    pub baseline_balance: Decimal,
    /// Shocked running balance. May be negative.
    pub shock_balance: Decimal,
}

/// Categorical resilience tags derived from a completed projection.
///
/// Classification yields exactly two tags, profitability first, then
/// solvency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Insight {
    /// Shocked annual profit is negative.
    Unprofitable,
    /// Shocked profit matches or exceeds the baseline.
    ProfitImproved,
    /// Profit drop below 10% of baseline profit.
    MinorImpact,
    /// Profit drop of at least 10% but below 30%.
    ModerateImpact,
    /// Profit drop of 30% or more.
    MajorImpact,
    /// Shocked balance dips negative; the payload is the first month at
    /// which the series reaches its overall minimum.
    InsolventAtMonth(u32),
    /// Cash stays non-negative and the shocked scenario remains profitable.
    SolventAndProfitable,
    /// Cash stays non-negative but the shocked scenario loses money.
    SolventButUnprofitable,
}

/// Full output of one projection run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Annual profit of the unshocked scenario.
    pub annual_baseline_profit: Decimal,
    /// Annual profit of the shocked scenario.
    pub annual_shock_profit: Decimal,
    /// Monthly balances, exactly `horizon_months` entries with `month`
    /// running 1, 2, ... in order.
    pub months: Vec<MonthlyBalancePoint>,
    /// Two tags: profitability axis, then solvency axis.
    pub insights: Vec<Insight>,
}

impl SimulationResult {
    /// Balances at the final month of the horizon, if any.
    pub fn end_of_horizon(&self) -> Option<&MonthlyBalancePoint> {
        self.months.last()
    }
}

/// Validation errors for simulation inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// Monetary inputs must be non-negative.
    #[error("negative monetary value in `{0}`")]
    NegativeMoney(&'static str),
    /// Percentage inputs must lie within [0, 100].
    #[error("percentage `{0}` is outside [0, 100]")]
    PercentOutOfRange(&'static str),
    /// The projection needs at least one month.
    #[error("horizon must be at least one month")]
    ZeroHorizon,
}

/// Validate baseline financials.
pub fn validate_baseline(b: &BaselineInputs) -> Result<(), InputError> {
    if b.revenue < Decimal::ZERO {
        return Err(InputError::NegativeMoney("revenue"));
    }
    if b.fixed_costs < Decimal::ZERO {
        return Err(InputError::NegativeMoney("fixed_costs"));
    }
    if b.variable_costs < Decimal::ZERO {
        return Err(InputError::NegativeMoney("variable_costs"));
    }
    if b.initial_cash < Decimal::ZERO {
        return Err(InputError::NegativeMoney("initial_cash"));
    }
    Ok(())
}

/// Validate shock parameters.
pub fn validate_shock(s: &ShockInputs) -> Result<(), InputError> {
    let percent = Decimal::ZERO..=Decimal::ONE_HUNDRED;
    if !percent.contains(&s.demand_drop_pct) {
        return Err(InputError::PercentOutOfRange("demand_drop_pct"));
    }
    if !percent.contains(&s.variable_cost_increase_pct) {
        return Err(InputError::PercentOutOfRange("variable_cost_increase_pct"));
    }
    if s.one_off_regulation_cost < Decimal::ZERO {
        return Err(InputError::NegativeMoney("one_off_regulation_cost"));
    }
    Ok(())
}

/// Validate projection parameters.
pub fn validate_config(c: &SimulationConfig) -> Result<(), InputError> {
    if c.horizon_months == 0 {
        return Err(InputError::ZeroHorizon);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn baseline() -> BaselineInputs {
        BaselineInputs {
            revenue: Decimal::from(120_000),
            fixed_costs: Decimal::from(45_000),
            variable_costs: Decimal::from(30_000),
            initial_cash: Decimal::from(10_000),
        }
    }

    fn shock() -> ShockInputs {
        ShockInputs {
            demand_drop_pct: Decimal::from(15),
            variable_cost_increase_pct: Decimal::ZERO,
            payment_delay_months: 3,
            one_off_regulation_cost: Decimal::ZERO,
        }
    }

    #[test]
    fn serde_roundtrip_inputs() {
        let b = baseline();
        let s = serde_json::to_string(&b).unwrap();
        let back: BaselineInputs = serde_json::from_str(&s).unwrap();
        assert_eq!(back, b);

        let sh = shock();
        let s = serde_json::to_string(&sh).unwrap();
        let back: ShockInputs = serde_json::from_str(&s).unwrap();
        assert_eq!(back, sh);
    }

    #[test]
    fn serde_roundtrip_result() {
        let result = SimulationResult {
            annual_baseline_profit: Decimal::from(45_000),
            annual_shock_profit: Decimal::from(27_000),
            months: vec![MonthlyBalancePoint {
                month: 1,
                baseline_balance: Decimal::from(13_750),
                shock_balance: Decimal::from(3_750),
            }],
            insights: vec![Insight::MajorImpact, Insight::InsolventAtMonth(3)],
        };
        let s = serde_json::to_string_pretty(&result).unwrap();
        let back: SimulationResult = serde_json::from_str(&s).unwrap();
        assert_eq!(back, result);
        assert_eq!(back.end_of_horizon().map(|p| p.month), Some(1));
    }

    #[test]
    fn baseline_rejects_negative_money() {
        let mut b = baseline();
        b.revenue = Decimal::from(-1);
        assert_eq!(validate_baseline(&b), Err(InputError::NegativeMoney("revenue")));

        let mut b = baseline();
        b.initial_cash = Decimal::new(-1, 2);
        assert_eq!(
            validate_baseline(&b),
            Err(InputError::NegativeMoney("initial_cash"))
        );
    }

    #[test]
    fn shock_rejects_out_of_range_percentages() {
        let mut s = shock();
        s.demand_drop_pct = Decimal::new(1005, 1); // 100.5
        assert_eq!(
            validate_shock(&s),
            Err(InputError::PercentOutOfRange("demand_drop_pct"))
        );

        let mut s = shock();
        s.variable_cost_increase_pct = Decimal::from(-5);
        assert_eq!(
            validate_shock(&s),
            Err(InputError::PercentOutOfRange("variable_cost_increase_pct"))
        );
    }

    #[test]
    fn shock_accepts_boundary_percentages() {
        let mut s = shock();
        s.demand_drop_pct = Decimal::ONE_HUNDRED;
        s.variable_cost_increase_pct = Decimal::ZERO;
        assert!(validate_shock(&s).is_ok());
    }

    #[test]
    fn config_rejects_zero_horizon() {
        assert_eq!(
            validate_config(&SimulationConfig { horizon_months: 0 }),
            Err(InputError::ZeroHorizon)
        );
        assert!(validate_config(&SimulationConfig { horizon_months: 1 }).is_ok());
    }

    proptest! {
        #[test]
        fn non_negative_money_validates(rev in 0i64..1_000_000_000_000,
                                        fixed in 0i64..1_000_000_000_000,
                                        var in 0i64..1_000_000_000_000,
                                        cash in 0i64..1_000_000_000_000) {
            let b = BaselineInputs {
                revenue: Decimal::from(rev),
                fixed_costs: Decimal::from(fixed),
                variable_costs: Decimal::from(var),
                initial_cash: Decimal::from(cash),
            };
            prop_assert!(validate_baseline(&b).is_ok());
        }

        #[test]
        fn percentages_within_range_validate(drop_bps in 0i64..=10_000, inc_bps in 0i64..=10_000) {
            // basis points, scaled to percents with two fractional digits
            let s = ShockInputs {
                demand_drop_pct: Decimal::new(drop_bps, 2),
                variable_cost_increase_pct: Decimal::new(inc_bps, 2),
                payment_delay_months: 0,
                one_off_regulation_cost: Decimal::ZERO,
            };
            prop_assert!(validate_shock(&s).is_ok());
        }
    }
}
