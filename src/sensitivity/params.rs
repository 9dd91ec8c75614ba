//! Perturbable parameter enumeration
//!
//! A closed set of parameters the sensitivity analyses may vary, each
//! knowing how to scale itself on a cloned configuration. No field lookup
//! by name anywhere: adding a parameter means adding a variant and its
//! `apply` arm.

use serde::{Deserialize, Serialize};

use crate::config::{Configuration, PricingMode};

/// A business assumption varied by sensitivity analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    /// Occupancy ceiling of every product
    Occupancy,
    /// Active price of every product (daily or monthly, whichever applies)
    Price,
    /// Per-rental variable cost of every product
    VariableCost,
    MarketingSpend,
    Growth,
    Salary,
    Churn,
}

impl Parameter {
    /// All parameters, in tornado reporting order.
    pub const ALL: [Parameter; 7] = [
        Parameter::Occupancy,
        Parameter::Price,
        Parameter::VariableCost,
        Parameter::MarketingSpend,
        Parameter::Growth,
        Parameter::Salary,
        Parameter::Churn,
    ];

    /// Parameters varied jointly by the Monte Carlo simulation.
    pub const MONTE_CARLO: [Parameter; 6] = [
        Parameter::Occupancy,
        Parameter::Price,
        Parameter::VariableCost,
        Parameter::Growth,
        Parameter::MarketingSpend,
        Parameter::Churn,
    ];

    /// Stable display name.
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Occupancy => "occupancy",
            Parameter::Price => "price",
            Parameter::VariableCost => "variable_cost",
            Parameter::MarketingSpend => "marketing_spend",
            Parameter::Growth => "growth",
            Parameter::Salary => "salary",
            Parameter::Churn => "churn",
        }
    }

    /// Scale this parameter by `multiplier` in place.
    ///
    /// Values are scaled without re-clamping: a cap pushed above 1 or a
    /// churn above 1 computes the permissive result the projection already
    /// tolerates. Callers perturb a clone, never the caller's original.
    pub fn apply(&self, config: &mut Configuration, multiplier: f64) {
        match self {
            Parameter::Occupancy => {
                for product in &mut config.products {
                    product.occupancy *= multiplier;
                    product.occupancy_cap *= multiplier;
                }
            }
            Parameter::Price => {
                for product in &mut config.products {
                    match product.pricing_mode {
                        PricingMode::Daily => {
                            if let Some(price) = product.price_per_day.as_mut() {
                                *price *= multiplier;
                            }
                        }
                        PricingMode::Monthly => {
                            if let Some(price) = product.price_per_month.as_mut() {
                                *price *= multiplier;
                            }
                        }
                    }
                }
            }
            Parameter::VariableCost => {
                for product in &mut config.products {
                    product.variable_cost *= multiplier;
                }
            }
            Parameter::MarketingSpend => config.marketing_spend *= multiplier,
            Parameter::Growth => config.growth *= multiplier,
            Parameter::Salary => config.salary *= multiplier,
            Parameter::Churn => config.churn *= multiplier,
        }
    }
}
