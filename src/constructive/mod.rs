//! Constructive heuristics for building initial packings.
//!
//! - [`best_fit`] — Best-Fit: tightest feasible bin per item, O(n·m)
//! - [`first_fit`] — First-Fit: first feasible bin per item, O(n·m)
//!
//! [`best_fit_position`] and [`insert_best_fit`] expose the Best-Fit
//! placement rule for operators that reinsert items into an existing packing.

mod best_fit;
mod first_fit;

pub use best_fit::{best_fit, best_fit_position, insert_best_fit};
pub use first_fit::first_fit;
