//! Unit economics: acquisition cost, lifetime value, payback, break-even
//!
//! All figures derive from the first forecast year plus the full EBITDA
//! series. Metrics that are legitimately undefined are value-level
//! signals (`None`, `f64::INFINITY`), never errors.

use serde::{Deserialize, Serialize};

use crate::config::Configuration;
use crate::projection::YearResult;

/// Survival below this fraction contributes nothing worth summing.
const LTV_SURVIVAL_FLOOR: f64 = 0.01;

/// Hard cap on the LTV horizon in years.
const LTV_MAX_PERIODS: f64 = 20.0;

/// Customer-level economics of the plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitEconomics {
    /// Cost to acquire one customer, including prescriber-loaded marketing
    pub cac: f64,

    /// Discounted lifetime gross profit of one customer
    pub ltv: f64,

    /// Months of gross profit needed to recover CAC;
    /// `f64::INFINITY` when per-customer gross profit is non-positive
    pub payback_months: f64,

    /// First year index with non-negative EBITDA, if reached within the
    /// forecast horizon
    pub break_even_year: Option<usize>,

    /// Rentals per year needed to cover the fixed cost base
    pub break_even_units: f64,
}

/// Compute unit economics from the first-year results and the EBITDA series.
pub fn unit_economics(
    config: &Configuration,
    years: &[YearResult],
    customers_per_year: &[f64],
) -> UnitEconomics {
    let customers = customers_per_year.first().copied().unwrap_or(0.0);

    let cac = acquisition_cost(config, customers);
    let ltv = lifetime_value(config, years, customers);
    let payback_months = payback_months(config, years, customers, cac);

    UnitEconomics {
        cac,
        ltv,
        payback_months,
        break_even_year: years.iter().position(|y| y.ebitda >= 0.0),
        break_even_units: break_even_units(config, years),
    }
}

/// Marketing spend per acquired customer, with each prescriber channel's
/// commission loading applied on top. Zero when nobody was acquired.
fn acquisition_cost(config: &Configuration, customers: f64) -> f64 {
    if customers <= 0.0 {
        return 0.0;
    }

    let channel_load: f64 = config
        .prescribers
        .iter()
        .map(|p| config.marketing_spend * p.share * p.commission)
        .sum();

    config.marketing_spend / customers + channel_load / customers
}

/// Yearly revenue one customer brings in, from first-year realized prices.
fn annual_revenue_per_customer(config: &Configuration, first_year: &YearResult) -> f64 {
    let rentals: f64 = first_year.products.iter().map(|p| p.actual_rentals).sum();
    if rentals <= 0.0 {
        return 0.0;
    }

    first_year.revenue / rentals * config.rentals_per_customer
}

/// Gross margin of the first forecast year.
fn gross_margin(first_year: &YearResult) -> f64 {
    (first_year.revenue - first_year.variable_costs) / first_year.revenue
}

/// Discounted-cash-flow value of one customer over a capped horizon.
///
/// The horizon is three expected lifetimes (`1 / churn`), never more than
/// 20 periods; the sum exits early once survival falls below 1%.
fn lifetime_value(config: &Configuration, years: &[YearResult], customers: f64) -> f64 {
    let Some(first_year) = years.first() else {
        return 0.0;
    };
    if first_year.revenue <= 0.0 || customers <= 0.0 {
        return 0.0;
    }

    let yearly_revenue = annual_revenue_per_customer(config, first_year);
    let margin = gross_margin(first_year);

    let horizon = if config.churn > 0.0 {
        (3.0 / config.churn).min(LTV_MAX_PERIODS).ceil() as usize
    } else {
        LTV_MAX_PERIODS as usize
    };

    let mut value = 0.0;
    for period in 0..horizon {
        let survival = (1.0 - config.churn).powi(period as i32);
        if survival < LTV_SURVIVAL_FLOOR {
            break;
        }
        let discount = (1.0 + config.discount_rate).powi(period as i32).recip();
        value += yearly_revenue * survival * discount * margin;
    }

    value
}

/// Months of per-customer gross profit needed to recover CAC.
fn payback_months(
    config: &Configuration,
    years: &[YearResult],
    customers: f64,
    cac: f64,
) -> f64 {
    let Some(first_year) = years.first() else {
        return f64::INFINITY;
    };
    if first_year.revenue <= 0.0 || customers <= 0.0 {
        return f64::INFINITY;
    }

    let monthly_gross_profit =
        annual_revenue_per_customer(config, first_year) * gross_margin(first_year) / 12.0;
    if monthly_gross_profit <= 0.0 {
        // A customer losing money never recovers their acquisition cost.
        return f64::INFINITY;
    }

    cac / monthly_gross_profit
}

/// First-year fixed costs over the units-weighted average per-rental
/// contribution margin.
fn break_even_units(config: &Configuration, years: &[YearResult]) -> f64 {
    let Some(first_year) = years.first() else {
        return f64::INFINITY;
    };

    let total_units: u32 = config.products.iter().map(|p| p.units).sum();
    if total_units == 0 {
        return f64::INFINITY;
    }

    let weighted_margin: f64 = config
        .products
        .iter()
        .map(|p| p.units as f64 * p.contribution_margin())
        .sum::<f64>()
        / total_units as f64;
    if weighted_margin <= 0.0 {
        return f64::INFINITY;
    }

    first_year.structural_costs / weighted_margin
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::compute_projection;
    use approx::assert_relative_eq;

    #[test]
    fn test_baseline_cac() {
        let result = compute_projection(&Configuration::baseline()).unwrap();

        // 18000 / 240 + 18000 * (0.25*0.10 + 0.15*0.08) / 240
        assert_relative_eq!(result.unit_economics.cac, 77.775, max_relative = 1e-9);
    }

    #[test]
    fn test_cac_zero_when_no_customers() {
        let mut config = Configuration::baseline();
        config.new_customers = 0.0;
        let result = compute_projection(&config).unwrap();

        assert_eq!(result.unit_economics.cac, 0.0);
        assert_eq!(result.unit_economics.ltv, 0.0);
        assert!(result.unit_economics.payback_months.is_infinite());
    }

    #[test]
    fn test_baseline_ltv_exceeds_cac() {
        let result = compute_projection(&Configuration::baseline()).unwrap();
        let ue = &result.unit_economics;

        assert_relative_eq!(ue.ltv, 497.51, max_relative = 1e-3);
        assert!(ue.ltv > 3.0 * ue.cac, "LTV/CAC below 3: {}", ue.ltv / ue.cac);
    }

    #[test]
    fn test_baseline_payback_months() {
        let result = compute_projection(&Configuration::baseline()).unwrap();

        assert_relative_eq!(
            result.unit_economics.payback_months,
            6.06,
            max_relative = 1e-2
        );
    }

    #[test]
    fn test_payback_infinite_when_margin_negative() {
        let mut config = Configuration::baseline();
        for product in &mut config.products {
            product.variable_cost = 500.0;
        }
        let result = compute_projection(&config).unwrap();

        assert!(result.unit_economics.payback_months.is_infinite());
        assert!(result.unit_economics.break_even_units.is_infinite());
    }

    #[test]
    fn test_baseline_break_even_year() {
        let result = compute_projection(&Configuration::baseline()).unwrap();
        assert_eq!(result.unit_economics.break_even_year, Some(2));
    }

    #[test]
    fn test_break_even_unreached_within_horizon() {
        let mut config = Configuration::baseline();
        config.forecast_years = 2;
        let result = compute_projection(&config).unwrap();

        // Both early years run at a loss; no break-even inside the window.
        assert_eq!(result.unit_economics.break_even_year, None);
    }

    #[test]
    fn test_baseline_break_even_units() {
        let result = compute_projection(&Configuration::baseline()).unwrap();

        // 85400 fixed over a (40*63 + 15*111) / 55 = 76.09 weighted margin
        assert_relative_eq!(
            result.unit_economics.break_even_units,
            1_122.34,
            max_relative = 1e-3
        );
    }
}
