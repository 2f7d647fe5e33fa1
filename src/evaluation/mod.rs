//! Packing evaluation.
//!
//! - [`fitness`] — Scores a packing as `(bin_count, total_waste)`
//! - [`Fitness`] — Lexicographically ordered score used for every comparison

mod fitness;

pub use fitness::{fitness, Fitness};
