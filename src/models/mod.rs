//! Domain model types for one-dimensional bin packing.
//!
//! Provides the core abstractions: bins as ordered multisets of item sizes
//! with an incrementally tracked load, packings as collections of non-empty
//! bins, and validated problem instances.

mod bin;
mod instance;
mod packing;

pub use bin::{Bin, EPSILON};
pub use instance::Instance;
pub use packing::Packing;
