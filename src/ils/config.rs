//! Iterated Local Search configuration.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::constructive::{best_fit, first_fit};
use crate::error::Error;
use crate::models::Packing;

/// Heuristic used to build the starting packing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Construction {
    /// [`best_fit`]
    #[default]
    BestFit,
    /// [`first_fit`]
    FirstFit,
}

impl Construction {
    /// Builds an initial packing of `items`.
    pub fn build(&self, items: &[f64], capacity: f64) -> Packing {
        match self {
            Construction::BestFit => best_fit(items, capacity),
            Construction::FirstFit => first_fit(items, capacity),
        }
    }
}

/// Which packing the next iteration perturbs when the last one did not improve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Acceptance {
    /// Always continue from the latest local optimum.
    #[default]
    RandomWalk,
    /// Go back to the best packing found so far.
    RestartFromBest,
}

/// Configuration parameters for Iterated Local Search.
///
/// # Examples
///
/// ```
/// use u_binpack::ils::IlsConfig;
///
/// let config = IlsConfig::default()
///     .with_time_budget(2.0)
///     .with_perturbation_fraction(0.05)
///     .with_seed(42);
/// assert_eq!(config.perturbation_strength(100), 5);
/// assert_eq!(config.perturbation_strength(10), 1);
/// assert!(config.validate().is_ok());
///
/// assert!(IlsConfig::default().with_time_budget(0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IlsConfig {
    /// Wall-clock budget per instance, in seconds.
    pub time_budget: f64,
    /// Fraction of the items removed and reinserted by each perturbation.
    pub perturbation_fraction: f64,
    /// Upper bound on a single local search run, in seconds.
    pub local_search_slice: f64,
    /// Random seed (None for an entropy-seeded generator).
    pub seed: Option<u64>,
    /// Initial packing heuristic.
    pub construction: Construction,
    /// Acceptance rule for non-improving iterations.
    pub acceptance: Acceptance,
    /// Stop early once the bin count reaches the instance lower bound.
    pub stop_at_lower_bound: bool,
}

impl Default for IlsConfig {
    fn default() -> Self {
        Self {
            time_budget: 1.0,
            perturbation_fraction: 0.1,
            local_search_slice: 0.1,
            seed: None,
            construction: Construction::BestFit,
            acceptance: Acceptance::RandomWalk,
            stop_at_lower_bound: true,
        }
    }
}

impl IlsConfig {
    /// Sets the time budget per instance, in seconds.
    pub fn with_time_budget(mut self, seconds: f64) -> Self {
        self.time_budget = seconds;
        self
    }

    /// Sets the perturbation fraction.
    pub fn with_perturbation_fraction(mut self, fraction: f64) -> Self {
        self.perturbation_fraction = fraction;
        self
    }

    /// Sets the local search time slice, in seconds.
    pub fn with_local_search_slice(mut self, seconds: f64) -> Self {
        self.local_search_slice = seconds;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the construction heuristic.
    pub fn with_construction(mut self, construction: Construction) -> Self {
        self.construction = construction;
        self
    }

    /// Sets the acceptance rule.
    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    /// Enables or disables the lower-bound early exit.
    pub fn with_stop_at_lower_bound(mut self, stop: bool) -> Self {
        self.stop_at_lower_bound = stop;
        self
    }

    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] naming the first parameter out of range.
    pub fn validate(&self) -> Result<(), Error> {
        if Duration::try_from_secs_f64(self.time_budget).is_err() || self.time_budget <= 0.0 {
            return Err(Error::InvalidConfiguration {
                parameter: "time_budget",
                value: self.time_budget,
                expected: "a positive finite number of seconds",
            });
        }
        if !(self.perturbation_fraction > 0.0 && self.perturbation_fraction <= 1.0) {
            return Err(Error::InvalidConfiguration {
                parameter: "perturbation_fraction",
                value: self.perturbation_fraction,
                expected: "a fraction in (0, 1]",
            });
        }
        if Duration::try_from_secs_f64(self.local_search_slice).is_err()
            || self.local_search_slice <= 0.0
        {
            return Err(Error::InvalidConfiguration {
                parameter: "local_search_slice",
                value: self.local_search_slice,
                expected: "a positive finite number of seconds",
            });
        }
        Ok(())
    }

    /// Number of items each perturbation removes for an instance of `num_items`.
    ///
    /// At least one, so every iteration moves something.
    pub fn perturbation_strength(&self, num_items: usize) -> usize {
        ((num_items as f64 * self.perturbation_fraction).floor() as usize).max(1)
    }

    pub(crate) fn time_budget_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.time_budget).unwrap_or(Duration::MAX)
    }

    pub(crate) fn local_search_slice_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.local_search_slice).unwrap_or(Duration::MAX)
    }

    /// Creates the random generator for a run.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
