//! Variable, structural, and commission cost models

use crate::config::{Configuration, Prescriber, Product};

/// Direct costs for one product in one period: per-rental cost and
/// shipping, inflated and scaled with business growth.
pub fn variable_costs_for_product(
    product: &Product,
    period: usize,
    growth: f64,
    inflation: f64,
    actual_rentals: f64,
) -> f64 {
    let growth_factor = (1.0 + growth).powi(period as i32);
    let inflation_factor = (1.0 + inflation).powi(period as i32);

    actual_rentals * (product.variable_cost + product.shipping_cost) * inflation_factor * growth_factor
}

/// Fixed cost base for one period, inflated.
///
/// Marketing spend sits here as a structural cost even though it also
/// feeds customer acquisition cost; the double duty is intentional.
pub fn structural_costs(period: usize, config: &Configuration) -> f64 {
    let base = config.employees as f64 * config.salary
        + config.infra_cost
        + config.web_maint
        + config.marketing_spend;

    base * (1.0 + config.inflation).powi(period as i32)
}

/// Total prescriber commissions on a period's revenue.
///
/// Shares are taken as entered: a share sum above 1 yields commissions
/// larger than the single-attribution total.
pub fn prescriber_commissions(revenue: f64, prescribers: &[Prescriber]) -> f64 {
    prescribers
        .iter()
        .map(|p| revenue * p.share * p.commission)
        .sum()
}

/// Director commission on a period's revenue.
pub fn director_commission(revenue: f64, rate: f64) -> f64 {
    revenue * rate
}
