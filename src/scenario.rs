//! Scenario runner for batch what-if analysis
//!
//! Validates a base configuration once, then serves projections,
//! copy-with-override variants, and sensitivity analyses without
//! re-validating on every call.

use crate::config::{validate, Configuration, InvalidConfiguration};
use crate::projection::{project, ProjectResult};
use crate::sensitivity::{
    monte_carlo_of_validated, tornado_of_validated, MonteCarloResult, TornadoItem,
};

/// Pre-validated scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(config)?;
///
/// let base = runner.project();
/// let optimistic = runner.project_variant(|c| c.growth = 0.20)?;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: Configuration,
}

impl ScenarioRunner {
    /// Create a runner for a validated base configuration.
    pub fn new(base: Configuration) -> Result<Self, InvalidConfiguration> {
        validate(&base)?;
        Ok(Self { base })
    }

    /// Create a runner on the baseline scenario.
    pub fn baseline() -> Self {
        Self {
            base: Configuration::baseline(),
        }
    }

    /// The base configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.base
    }

    /// Replace the base configuration, re-validating.
    pub fn set_configuration(&mut self, base: Configuration) -> Result<(), InvalidConfiguration> {
        validate(&base)?;
        self.base = base;
        Ok(())
    }

    /// Project the base configuration.
    pub fn project(&self) -> ProjectResult {
        project(&self.base)
    }

    /// Project a variant: the base is cloned, the override applied, and
    /// the result validated before projecting. The base stays untouched.
    pub fn project_variant(
        &self,
        apply: impl FnOnce(&mut Configuration),
    ) -> Result<ProjectResult, InvalidConfiguration> {
        let mut variant = self.base.clone();
        apply(&mut variant);
        validate(&variant)?;
        Ok(project(&variant))
    }

    /// Tornado analysis of the base configuration.
    pub fn tornado(&self) -> Vec<TornadoItem> {
        tornado_of_validated(&self.base)
    }

    /// Monte Carlo simulation of the base configuration.
    pub fn monte_carlo(
        &self,
        runs: usize,
        seed: u64,
    ) -> Result<MonteCarloResult, InvalidConfiguration> {
        if runs == 0 {
            return Err(InvalidConfiguration::NoTrials);
        }
        Ok(monte_carlo_of_validated(&self.base, runs, seed))
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::baseline()
    }
}
