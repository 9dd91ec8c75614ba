//! Tornado analysis: one-at-a-time sensitivity ranking
//!
//! Each parameter is perturbed -10% and +10% in isolation on a clone of
//! the baseline; the fractional change in final-year EBITDA is recorded
//! and the parameters are ranked by combined impact magnitude.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{validate, Configuration, InvalidConfiguration};
use crate::projection::project;

use super::params::Parameter;

/// Relative perturbation applied on each side.
const PERTURBATION: f64 = 0.10;

/// Impact of one parameter on final-year EBITDA
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TornadoItem {
    pub parameter: Parameter,

    /// Fractional EBITDA change under the -10% perturbation
    pub negative_impact: f64,

    /// Fractional EBITDA change under the +10% perturbation
    pub positive_impact: f64,
}

impl TornadoItem {
    /// Combined magnitude used for ranking.
    pub fn combined_impact(&self) -> f64 {
        self.negative_impact.abs() + self.positive_impact.abs()
    }
}

/// Run the tornado analysis, largest driver first.
pub fn run_tornado_analysis(
    config: &Configuration,
) -> Result<Vec<TornadoItem>, InvalidConfiguration> {
    validate(config)?;
    Ok(tornado_of_validated(config))
}

/// Tornado analysis for a configuration already known to be valid.
pub(crate) fn tornado_of_validated(config: &Configuration) -> Vec<TornadoItem> {
    let base_ebitda = project(config).final_ebitda();

    let mut items: Vec<TornadoItem> = Parameter::ALL
        .iter()
        .map(|&parameter| {
            let negative_impact = perturbed_impact(config, parameter, 1.0 - PERTURBATION, base_ebitda);
            let positive_impact = perturbed_impact(config, parameter, 1.0 + PERTURBATION, base_ebitda);
            debug!(
                "tornado {}: -10% => {negative_impact:.4}, +10% => {positive_impact:.4}",
                parameter.name()
            );

            TornadoItem {
                parameter,
                negative_impact,
                positive_impact,
            }
        })
        .collect();

    items.sort_by(|a, b| b.combined_impact().total_cmp(&a.combined_impact()));
    items
}

/// Recompute the projection with one parameter scaled, and report the
/// fractional final-year EBITDA change. A zero baseline reports zero
/// impact rather than letting infinity into the sorted output.
fn perturbed_impact(
    config: &Configuration,
    parameter: Parameter,
    multiplier: f64,
    base_ebitda: f64,
) -> f64 {
    if base_ebitda == 0.0 {
        return 0.0;
    }

    let mut variant = config.clone();
    parameter.apply(&mut variant, multiplier);

    (project(&variant).final_ebitda() - base_ebitda) / base_ebitda.abs()
}
