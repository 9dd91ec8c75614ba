//! Multi-year projection engine and investment numerics

mod engine;
mod irr;
mod results;

pub use engine::{compute_projection, ProjectionEngine};
pub(crate) use engine::project;
pub use irr::{build_cash_flows, internal_rate_of_return, npv};
pub use results::{ProductYear, ProjectResult, ProjectionSummary, YearResult};
