//! # u-binpack
//!
//! One-dimensional bin packing by Iterated Local Search: build a packing
//! with a greedy heuristic, then repeatedly perturb it and repair it with
//! local search, keeping the best packing found within a time budget.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Bin, Packing, Instance)
//! - [`evaluation`] — Lexicographic fitness (bin count, then waste)
//! - [`constructive`] — Constructive heuristics (Best-Fit, First-Fit)
//! - [`local_search`] — Singleton-bin relocation
//! - [`perturbation`] — Random removal and Best-Fit reinsertion
//! - [`ils`] — Iterated Local Search driver, configuration and clocks
//! - [`io`] — Instance readers, result reporters and CLI arguments
//!
//! ## Example
//!
//! ```
//! use u_binpack::{solve, IlsConfig};
//! use u_binpack::models::Instance;
//!
//! let instance = Instance::new("demo", 10.0, vec![3.0, 3.0, 3.0, 7.0, 7.0, 7.0]).unwrap();
//! let result = solve(&instance, &IlsConfig::default().with_time_budget(0.1)).unwrap();
//! assert_eq!(result.fitness.bin_count, 3);
//! ```

pub mod constructive;
pub mod error;
pub mod evaluation;
pub mod ils;
pub mod io;
pub mod local_search;
pub mod models;
pub mod perturbation;

pub use error::Error;
pub use ils::{solve, IlsConfig, IlsResult};
