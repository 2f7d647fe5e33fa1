//! Iterated Local Search driver.

use std::time::Duration;

use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use super::clock::{Clock, Deadline, SystemClock};
use super::config::{Acceptance, IlsConfig};
use crate::error::Error;
use crate::evaluation::{fitness, Fitness};
use crate::local_search::singleton_relocate;
use crate::models::{Instance, Packing};
use crate::perturbation::perturb;

/// Progress event emitted each time the best packing improves.
///
/// Purely observational: handlers cannot influence the search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Improvement {
    /// Bins in the new best packing.
    pub bin_count: usize,
    /// Total waste of the new best packing.
    pub waste: f64,
    /// Time since the instance started.
    pub elapsed: Duration,
    /// 1-based iteration that produced the improvement.
    pub iteration: usize,
}

/// Result of an ILS run on one instance.
#[derive(Debug, Clone)]
pub struct IlsResult {
    /// Best packing found.
    pub packing: Packing,
    /// Fitness of `packing`.
    pub fitness: Fitness,
    /// Fitness of the constructed starting packing.
    pub initial_fitness: Fitness,
    /// Number of perturb + local search iterations performed.
    pub iterations: usize,
    /// Time spent on the instance.
    pub elapsed: Duration,
}

/// Result for one instance of a batch.
#[derive(Debug, Clone)]
pub struct InstanceReport {
    /// Identifier of the instance.
    pub id: String,
    /// Search outcome.
    pub result: IlsResult,
}

/// Iterated Local Search for one-dimensional bin packing.
///
/// Each iteration perturbs the current packing, runs
/// [`singleton_relocate`] on it under a bounded time slice, and replaces
/// the best packing on strict lexicographic improvement. With
/// [`Acceptance::RandomWalk`] the next iteration always starts from the
/// latest local optimum, improving or not.
///
/// # Examples
///
/// ```
/// use u_binpack::models::Instance;
/// use u_binpack::ils::{IlsConfig, IlsRunner};
///
/// let instance = Instance::new("u1", 10.0, vec![6.0, 5.0, 4.0, 3.0, 2.0, 8.0]).unwrap();
/// let config = IlsConfig::default().with_time_budget(0.05).with_seed(42);
///
/// let result = IlsRunner::run(&instance, &config).unwrap();
/// assert_eq!(result.fitness.bin_count, 3);
/// assert_eq!(result.packing.num_items(), 6);
/// ```
pub struct IlsRunner;

impl IlsRunner {
    /// Solves one instance on the wall clock with the configured seed.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if `config` does not validate; no
    /// search is started in that case.
    pub fn run(instance: &Instance, config: &IlsConfig) -> Result<IlsResult, Error> {
        config.validate()?;
        let clock = SystemClock::new();
        let mut rng = config.rng();
        Ok(Self::search(instance, config, &clock, &mut rng, &mut |_: &Improvement| {}))
    }

    /// Solves one instance with an injected clock, generator and progress handler.
    ///
    /// `config.seed` is ignored; randomness comes from `rng`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if `config` does not validate.
    pub fn run_with<C, R, F>(
        instance: &Instance,
        config: &IlsConfig,
        clock: &C,
        rng: &mut R,
        mut on_improvement: F,
    ) -> Result<IlsResult, Error>
    where
        C: Clock + ?Sized,
        R: Rng + ?Sized,
        F: FnMut(&Improvement),
    {
        config.validate()?;
        Ok(Self::search(instance, config, clock, rng, &mut on_improvement))
    }

    /// Solves instances one after another with a single generator.
    ///
    /// Every instance gets the full time budget, starting when its own
    /// search starts. The handler receives the instance id with each event.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if `config` does not validate.
    pub fn run_batch<F>(
        instances: &[Instance],
        config: &IlsConfig,
        mut on_improvement: F,
    ) -> Result<Vec<InstanceReport>, Error>
    where
        F: FnMut(&str, &Improvement),
    {
        config.validate()?;
        let clock = SystemClock::new();
        let mut rng = config.rng();

        let mut reports = Vec::with_capacity(instances.len());
        for instance in instances {
            let result = Self::search(
                instance,
                config,
                &clock,
                &mut rng,
                &mut |event: &Improvement| on_improvement(instance.id(), event),
            );
            reports.push(InstanceReport {
                id: instance.id().to_string(),
                result,
            });
        }
        Ok(reports)
    }

    fn search<C, R, F>(
        instance: &Instance,
        config: &IlsConfig,
        clock: &C,
        rng: &mut R,
        on_improvement: &mut F,
    ) -> IlsResult
    where
        C: Clock + ?Sized,
        R: Rng + ?Sized,
        F: FnMut(&Improvement),
    {
        let capacity = instance.capacity();
        let start = clock.elapsed();
        let deadline = Deadline::at(start.saturating_add(config.time_budget_duration()));
        let slice = config.local_search_slice_duration();
        let strength = config.perturbation_strength(instance.len());
        let lower_bound = instance.lower_bound();

        let mut best = config.construction.build(instance.items(), capacity);
        let mut best_fitness = fitness(&best, capacity);
        let initial_fitness = best_fitness;
        let mut current = best.clone();
        let mut iterations = 0;

        debug!(
            "[ILS] instance '{}': {} items, lower bound {}, initial {} bins (waste {:.4})",
            instance.id(),
            instance.len(),
            lower_bound,
            best_fitness.bin_count,
            best_fitness.total_waste
        );

        loop {
            if config.stop_at_lower_bound && best_fitness.bin_count <= lower_bound {
                debug!("[ILS] instance '{}': lower bound reached", instance.id());
                break;
            }
            if deadline.is_expired(clock) {
                break;
            }
            iterations += 1;

            let shaken = perturb(current, capacity, rng, strength);
            let ls_deadline = Deadline::after(clock, slice).min(deadline);
            let local = singleton_relocate(shaken, capacity, clock, ls_deadline);
            let local_fitness = fitness(&local, capacity);

            if local_fitness.is_better_than(&best_fitness) {
                best = local.clone();
                best_fitness = local_fitness;
                let event = Improvement {
                    bin_count: best_fitness.bin_count,
                    waste: best_fitness.total_waste,
                    elapsed: clock.elapsed().saturating_sub(start),
                    iteration: iterations,
                };
                debug!(
                    "[ILS] instance '{}': {} bins (waste {:.4}) at iteration {} after {:.3}s",
                    instance.id(),
                    event.bin_count,
                    event.waste,
                    event.iteration,
                    event.elapsed.as_secs_f64()
                );
                on_improvement(&event);
                current = local;
            } else {
                current = match config.acceptance {
                    Acceptance::RandomWalk => local,
                    Acceptance::RestartFromBest => best.clone(),
                };
            }
        }

        let elapsed = clock.elapsed().saturating_sub(start);
        info!(
            "[ILS] instance '{}': {} bins after {} iterations in {:.3}s",
            instance.id(),
            best_fitness.bin_count,
            iterations,
            elapsed.as_secs_f64()
        );

        IlsResult {
            packing: best,
            fitness: best_fitness,
            initial_fitness,
            iterations,
            elapsed,
        }
    }
}

/// Solves one instance with [`IlsRunner::run`].
///
/// # Errors
///
/// [`Error::InvalidConfiguration`] if `config` does not validate.
pub fn solve(instance: &Instance, config: &IlsConfig) -> Result<IlsResult, Error> {
    IlsRunner::run(instance, config)
}
