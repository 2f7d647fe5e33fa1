//! Iterated Local Search (ILS) for one-dimensional bin packing.
//!
//! Starts from a constructed packing and repeats perturb → local search →
//! accept until the time budget runs out, keeping the best packing seen.
//!
//! - [`IlsConfig`] — Budget, perturbation strength, construction and acceptance settings
//! - [`IlsRunner`] — Single-instance, injected-clock and batch drivers
//! - [`Clock`], [`Deadline`] — Time boxing; [`StepClock`] makes runs reproducible
//!
//! # References
//!
//! - Lourenço, H. R., Martin, O. C. & Stützle, T. (2003). "Iterated Local
//!   Search", *Handbook of Metaheuristics*, 321-353.

mod clock;
mod config;
mod runner;

pub use clock::{Clock, Deadline, StepClock, SystemClock};
pub use config::{Acceptance, Construction, IlsConfig};
pub use runner::{solve, IlsResult, IlsRunner, Improvement, InstanceReport};
