//! Projection output structures

use serde::{Deserialize, Serialize};

use crate::metrics::UnitEconomics;

/// Per-product figures for one projection year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductYear {
    pub name: String,
    pub revenue: f64,
    pub demand: f64,
    pub capacity: f64,
    pub real_occupancy: f64,
    pub actual_rentals: f64,
    pub lost_demand: f64,
}

/// Aggregated figures for one projection year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearResult {
    /// Year index, 0 = first forecast year
    pub year: u32,

    /// Customer base in this year
    pub customers: f64,

    /// Total revenue across products
    pub revenue: f64,

    /// Direct product costs (per-rental and shipping)
    pub product_costs: f64,

    /// Prescriber channel commissions
    pub prescriber_costs: f64,

    /// Director commission
    pub director_cost: f64,

    /// product_costs + prescriber_costs + director_cost
    pub variable_costs: f64,

    /// Inflated fixed cost base
    pub structural_costs: f64,

    /// revenue - variable_costs - structural_costs
    pub ebitda: f64,

    /// Cash generated in the year; simplified to equal EBITDA
    pub cash: f64,

    /// Per-product breakdown, in configuration order
    pub products: Vec<ProductYear>,
}

/// Complete multi-year projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResult {
    /// Yearly results, index 0 = first forecast year
    pub years: Vec<YearResult>,

    /// Customer counts per year
    pub customers_per_year: Vec<f64>,

    /// Cash-flow series: the upfront investment outflow followed by
    /// yearly cash
    pub cash_flows: Vec<f64>,

    /// Net present value of the cash-flow series at the discount rate
    pub npv: f64,

    /// Internal rate of return; `None` when the series admits no real rate
    pub irr: Option<f64>,

    /// Derived unit economics
    pub unit_economics: UnitEconomics,
}

impl ProjectResult {
    /// EBITDA of the final forecast year, the headline sensitivity figure.
    pub fn final_ebitda(&self) -> f64 {
        self.years.last().map(|y| y.ebitda).unwrap_or(0.0)
    }

    /// Summary statistics for report generators.
    pub fn summary(&self) -> ProjectionSummary {
        let total_revenue: f64 = self.years.iter().map(|y| y.revenue).sum();
        let total_ebitda: f64 = self.years.iter().map(|y| y.ebitda).sum();
        let cumulative_cash: f64 = self.cash_flows.iter().sum();

        ProjectionSummary {
            forecast_years: self.years.len() as u32,
            total_revenue,
            total_ebitda,
            final_ebitda: self.final_ebitda(),
            cumulative_cash,
            npv: self.npv,
            irr: self.irr,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub forecast_years: u32,
    pub total_revenue: f64,
    pub total_ebitda: f64,
    pub final_ebitda: f64,
    pub cumulative_cash: f64,
    pub npv: f64,
    pub irr: Option<f64>,
}
