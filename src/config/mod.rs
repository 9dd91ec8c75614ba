//! Business plan configuration and validation

mod data;
mod validate;

pub use data::{Configuration, Prescriber, PricingMode, Product};
pub use validate::{validate, InvalidConfiguration};
