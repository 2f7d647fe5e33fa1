//! Local search operators for improving packings.
//!
//! - [`singleton_relocate`] — Empties single-item bins into other bins (first improvement, Best-Fit target)

mod singleton_relocate;

pub use singleton_relocate::singleton_relocate;
