//! Venture Forecast - financial projection engine for rental business plans
//!
//! This library provides:
//! - Multi-year revenue, cost, and EBITDA forecasts from business assumptions
//! - Customer growth, capacity, and demand modeling
//! - Investment metrics: NPV, IRR, CAC, LTV, payback, break-even
//! - Sensitivity analyses: tornado ranking and Monte Carlo simulation
//!
//! The engine is a stateless function library: same configuration in,
//! same result out. Callers own caching, persistence, and presentation.

pub mod config;
pub mod metrics;
pub mod model;
pub mod projection;
pub mod scenario;
pub mod sensitivity;

// Re-export commonly used types
pub use config::{Configuration, InvalidConfiguration, Prescriber, PricingMode, Product};
pub use metrics::UnitEconomics;
pub use projection::{compute_projection, ProjectResult, ProjectionEngine, YearResult};
pub use scenario::ScenarioRunner;
pub use sensitivity::{
    run_monte_carlo_simulation, run_tornado_analysis, MonteCarloResult, Parameter, TornadoItem,
};

/// Baseline scenario used to initialize new sessions.
pub fn default_configuration() -> Configuration {
    Configuration::baseline()
}
