//! Rental capacity and demand model
//!
//! Demand is aggregate: every product sees the same customer demand figure
//! rather than a per-product allocation. Realized occupancy is the demand
//! pressure on a product's inventory, capped at its operational ceiling.

use crate::config::{PricingMode, Product};

/// Per-product utilization figures for one period
#[derive(Debug, Clone, Copy)]
pub struct Utilization {
    /// Rentals demanded by the customer base
    pub demand: f64,
    /// Rentals the inventory can serve
    pub capacity: f64,
    /// Realized occupancy after capping (0-1)
    pub real_occupancy: f64,
    /// Rentals actually served
    pub actual_rentals: f64,
    /// Demand the inventory could not serve
    pub lost_demand: f64,
}

/// Maximum rentals a single unit can serve per year.
///
/// Daily pricing turns units as fast as the minimum rental length allows;
/// monthly pricing runs on a fixed 12-rentals-per-year cadence.
pub fn max_rentals_per_unit(product: &Product) -> f64 {
    match product.pricing_mode {
        PricingMode::Daily => 365.0 / product.min_days as f64,
        PricingMode::Monthly => 12.0,
    }
}

/// Total rentals the product's inventory can serve per year.
pub fn potential_capacity(product: &Product) -> f64 {
    product.units as f64 * max_rentals_per_unit(product)
}

/// Rentals demanded by the customer base in one period.
pub fn demand_rentals(customers: f64, rentals_per_customer: f64) -> f64 {
    customers * rentals_per_customer
}

/// Realized occupancy: demand pressure capped at the operational ceiling.
/// Zero capacity means zero occupancy, never NaN.
pub fn real_occupancy(demand: f64, capacity: f64, occupancy_cap: f64) -> f64 {
    if capacity <= 0.0 {
        return 0.0;
    }
    (demand / capacity).min(occupancy_cap)
}

/// Rentals actually served at the realized occupancy.
pub fn actual_rentals(real_occupancy: f64, capacity: f64) -> f64 {
    real_occupancy * capacity
}

/// Demand left unserved once capacity and the occupancy cap bind.
pub fn lost_demand(demand: f64, actual_rentals: f64) -> f64 {
    (demand - actual_rentals).max(0.0)
}

/// Compute the full utilization snapshot for one product in one period.
pub fn utilization(product: &Product, customers: f64, rentals_per_customer: f64) -> Utilization {
    let demand = demand_rentals(customers, rentals_per_customer);
    let capacity = potential_capacity(product);
    let occupancy = real_occupancy(demand, capacity, product.occupancy_cap);
    let actual = actual_rentals(occupancy, capacity);

    Utilization {
        demand,
        capacity,
        real_occupancy: occupancy,
        actual_rentals: actual,
        lost_demand: lost_demand(demand, actual),
    }
}
