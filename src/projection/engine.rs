//! Core projection engine for multi-year business plan forecasts
//!
//! A single pass per call: customer series once, then per-period
//! aggregation of product revenue and costs, then the cash-flow series and
//! its investment metrics. Pure function of the configuration; nothing is
//! carried between calls.

use crate::config::{validate, Configuration, InvalidConfiguration};
use crate::metrics::unit_economics;
use crate::model::{capacity, costs, customers, revenue};

use super::irr::{build_cash_flows, internal_rate_of_return, npv};
use super::results::{ProductYear, ProjectResult, YearResult};

/// Main projection engine
///
/// Validates its configuration once at construction; every subsequent
/// `run` is infallible.
pub struct ProjectionEngine {
    config: Configuration,
}

impl ProjectionEngine {
    /// Create an engine for a validated configuration.
    pub fn new(config: Configuration) -> Result<Self, InvalidConfiguration> {
        validate(&config)?;
        Ok(Self { config })
    }

    /// Run the full projection.
    pub fn run(&self) -> ProjectResult {
        project(&self.config)
    }

    /// The configuration this engine projects.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }
}

/// Validate and project in one call.
pub fn compute_projection(config: &Configuration) -> Result<ProjectResult, InvalidConfiguration> {
    validate(config)?;
    Ok(project(config))
}

/// Project a configuration already known to be valid.
///
/// Sensitivity analyses call this directly for their perturbed variants:
/// the base configuration is validated once at entry, and a perturbed
/// value pushed past a validation bound (an occupancy cap scaled above 1,
/// say) must still compute the permissive result.
pub(crate) fn project(config: &Configuration) -> ProjectResult {
    let customers_per_year = customers::customers_per_year(
        config.new_customers,
        config.churn,
        config.growth,
        config.forecast_years,
    );

    let mut years = Vec::with_capacity(customers_per_year.len());

    for (period, &customers) in customers_per_year.iter().enumerate() {
        years.push(project_year(config, period, customers));
    }

    let cash_by_year: Vec<f64> = years.iter().map(|y| y.cash).collect();
    let cash_flows = build_cash_flows(&cash_by_year, config.initial_investment);
    let npv = npv(&cash_flows, config.discount_rate);
    let irr = internal_rate_of_return(&cash_flows);
    let unit_economics = unit_economics(config, &years, &customers_per_year);

    ProjectResult {
        years,
        customers_per_year,
        cash_flows,
        npv,
        irr,
        unit_economics,
    }
}

/// Aggregate one period across products.
fn project_year(config: &Configuration, period: usize, customers: f64) -> YearResult {
    let mut product_rows = Vec::with_capacity(config.products.len());
    let mut total_revenue = 0.0;
    let mut product_costs = 0.0;

    for product in &config.products {
        let util = capacity::utilization(product, customers, config.rentals_per_customer);
        let product_revenue =
            revenue::revenue_for_product(product, period, config.growth, util.actual_rentals);

        total_revenue += product_revenue;
        product_costs += costs::variable_costs_for_product(
            product,
            period,
            config.growth,
            config.inflation,
            util.actual_rentals,
        );

        product_rows.push(ProductYear {
            name: product.name.clone(),
            revenue: product_revenue,
            demand: util.demand,
            capacity: util.capacity,
            real_occupancy: util.real_occupancy,
            actual_rentals: util.actual_rentals,
            lost_demand: util.lost_demand,
        });
    }

    let prescriber_costs = costs::prescriber_commissions(total_revenue, &config.prescribers);
    let director_cost = costs::director_commission(total_revenue, config.director_commission);
    let structural_costs = costs::structural_costs(period, config);

    let variable_costs = product_costs + prescriber_costs + director_cost;
    let ebitda = total_revenue - variable_costs - structural_costs;

    YearResult {
        year: period as u32,
        customers,
        revenue: total_revenue,
        product_costs,
        prescriber_costs,
        director_cost,
        variable_costs,
        structural_costs,
        ebitda,
        cash: ebitda,
        products: product_rows,
    }
}
