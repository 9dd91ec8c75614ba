//! Monte Carlo simulation of final-year EBITDA
//!
//! Each trial draws independent uniform multipliers in [1-r, 1+r] for the
//! jointly-perturbed parameters, recomputes the full projection, and
//! collects final-year EBITDA. Percentiles are read off the sorted
//! outcomes by index, floor(runs * p), with no interpolation.
//!
//! Trials are independent and share no mutable state, so they run in
//! parallel under rayon. Each trial seeds its own generator from the base
//! seed and the trial index, which keeps a seeded run bit-identical
//! regardless of how the pool schedules it.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{validate, Configuration, InvalidConfiguration};
use crate::projection::project;

use super::params::Parameter;

/// Trials run when the caller does not say otherwise.
pub const DEFAULT_RUNS: usize = 1000;

/// Half-width of the uniform multiplicative perturbation.
const PERTURBATION_RANGE: f64 = 0.20;

/// Empirical percentiles of final-year EBITDA across trials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonteCarloResult {
    pub p5: f64,
    pub p50: f64,
    pub p95: f64,
}

/// Run the Monte Carlo simulation.
///
/// Passing a seed makes the result reproducible; without one, a fresh
/// seed is drawn from the operating system.
pub fn run_monte_carlo_simulation(
    config: &Configuration,
    runs: usize,
    seed: Option<u64>,
) -> Result<MonteCarloResult, InvalidConfiguration> {
    validate(config)?;
    if runs == 0 {
        return Err(InvalidConfiguration::NoTrials);
    }

    let base_seed = seed.unwrap_or_else(|| rand::rng().random());
    debug!("monte carlo: {runs} trials, base seed {base_seed}");

    Ok(monte_carlo_of_validated(config, runs, base_seed))
}

/// Simulation for a configuration already known to be valid.
pub(crate) fn monte_carlo_of_validated(
    config: &Configuration,
    runs: usize,
    base_seed: u64,
) -> MonteCarloResult {
    let mut outcomes: Vec<f64> = (0..runs)
        .into_par_iter()
        .map(|trial| {
            let mut rng = ChaCha20Rng::seed_from_u64(derive_seed(base_seed, trial as u64));
            let mut variant = config.clone();

            for parameter in Parameter::MONTE_CARLO {
                let multiplier =
                    rng.random_range(1.0 - PERTURBATION_RANGE..=1.0 + PERTURBATION_RANGE);
                parameter.apply(&mut variant, multiplier);
            }

            project(&variant).final_ebitda()
        })
        .collect();

    outcomes.sort_by(f64::total_cmp);

    MonteCarloResult {
        p5: percentile(&outcomes, 0.05),
        p50: percentile(&outcomes, 0.50),
        p95: percentile(&outcomes, 0.95),
    }
}

/// Coarse empirical percentile: index floor(n * p) into the sorted slice.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let index = (sorted.len() as f64 * p).floor() as usize;
    sorted[index.min(sorted.len() - 1)]
}

/// splitmix64 finalizer over base seed and trial index.
fn derive_seed(base_seed: u64, trial: u64) -> u64 {
    let mut z = base_seed ^ trial.wrapping_mul(0x9E3779B97F4A7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentiles_ordered() {
        let result =
            run_monte_carlo_simulation(&Configuration::baseline(), 40, Some(7)).unwrap();

        assert!(result.p5 <= result.p50);
        assert!(result.p50 <= result.p95);
    }

    #[test]
    fn test_same_seed_reproduces_result() {
        let config = Configuration::baseline();
        let a = run_monte_carlo_simulation(&config, 64, Some(42)).unwrap();
        let b = run_monte_carlo_simulation(&config, 64, Some(42)).unwrap();

        assert_eq!(a.p5, b.p5);
        assert_eq!(a.p50, b.p50);
        assert_eq!(a.p95, b.p95);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let config = Configuration::baseline();
        let a = run_monte_carlo_simulation(&config, 64, Some(1)).unwrap();
        let b = run_monte_carlo_simulation(&config, 64, Some(2)).unwrap();

        assert_ne!(a.p50, b.p50);
    }

    #[test]
    fn test_zero_runs_rejected() {
        assert!(matches!(
            run_monte_carlo_simulation(&Configuration::baseline(), 0, Some(1)),
            Err(InvalidConfiguration::NoTrials)
        ));
    }

    #[test]
    fn test_percentile_index_floor() {
        let sorted: Vec<f64> = (0..100).map(f64::from).collect();

        assert_eq!(percentile(&sorted, 0.05), 5.0);
        assert_eq!(percentile(&sorted, 0.50), 50.0);
        assert_eq!(percentile(&sorted, 0.95), 95.0);
        // Top percentile clamps to the last element
        assert_eq!(percentile(&sorted, 1.0), 99.0);
    }

    #[test]
    fn test_derive_seed_spreads_trials() {
        let a = derive_seed(42, 0);
        let b = derive_seed(42, 1);
        let c = derive_seed(43, 0);

        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
