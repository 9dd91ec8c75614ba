//! Sensitivity analyses layered on top of the projection engine
//!
//! Both analyses deep-clone the baseline configuration per perturbation;
//! the caller's original is never mutated.

mod monte_carlo;
mod params;
mod tornado;

pub use monte_carlo::{run_monte_carlo_simulation, MonteCarloResult, DEFAULT_RUNS};
pub(crate) use monte_carlo::monte_carlo_of_validated;
pub use params::Parameter;
pub use tornado::{run_tornado_analysis, TornadoItem};
pub(crate) use tornado::tornado_of_validated;
