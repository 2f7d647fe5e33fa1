//! Bin type.

use serde::{Deserialize, Serialize};

/// Slack allowed when comparing a load against the bin capacity.
///
/// Loads are sums of `f64` sizes, so a bin filled exactly to capacity may
/// overshoot by a few ulps depending on summation order.
pub const EPSILON: f64 = 1e-9;

/// A single container holding an ordered multiset of item sizes.
///
/// The load is maintained incrementally as items are pushed.
///
/// # Examples
///
/// ```
/// use u_binpack::models::Bin;
///
/// let mut bin = Bin::with_item(6.0);
/// assert!(bin.fits(4.0, 10.0));
/// bin.push(4.0);
/// assert_eq!(bin.len(), 2);
/// assert!((bin.load() - 10.0).abs() < 1e-10);
/// assert!(!bin.fits(0.5, 10.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<f64>", into = "Vec<f64>")]
pub struct Bin {
    items: Vec<f64>,
    load: f64,
}

impl Bin {
    /// Creates an empty bin.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            load: 0.0,
        }
    }

    /// Creates a bin holding a single item.
    pub fn with_item(size: f64) -> Self {
        Self {
            items: vec![size],
            load: size,
        }
    }

    /// Creates a bin from a list of item sizes.
    pub fn from_items(items: Vec<f64>) -> Self {
        let load = items.iter().sum();
        Self { items, load }
    }

    /// Appends an item to this bin.
    pub fn push(&mut self, size: f64) {
        self.items.push(size);
        self.load += size;
    }

    /// Returns the item sizes in insertion order.
    pub fn items(&self) -> &[f64] {
        &self.items
    }

    /// Consumes the bin and returns its items.
    pub fn into_items(self) -> Vec<f64> {
        self.items
    }

    /// Number of items in this bin.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this bin holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the item sizes.
    pub fn load(&self) -> f64 {
        self.load
    }

    /// Free space left for the given capacity.
    pub fn residual(&self, capacity: f64) -> f64 {
        capacity - self.load
    }

    /// Returns `true` if an item of `size` can be added without exceeding `capacity`.
    pub fn fits(&self, size: f64, capacity: f64) -> bool {
        self.load + size <= capacity + EPSILON
    }

    /// Returns `true` if the load respects `capacity`.
    pub fn is_feasible(&self, capacity: f64) -> bool {
        self.load <= capacity + EPSILON
    }
}

impl Default for Bin {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<f64>> for Bin {
    fn from(items: Vec<f64>) -> Self {
        Self::from_items(items)
    }
}

impl From<Bin> for Vec<f64> {
    fn from(bin: Bin) -> Self {
        bin.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_empty() {
        let b = Bin::new();
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(b.load(), 0.0);
        assert_eq!(b.residual(10.0), 10.0);
    }

    #[test]
    fn test_bin_push_tracks_load() {
        let mut b = Bin::new();
        b.push(5.0);
        b.push(3.0);
        b.push(2.0);
        assert_eq!(b.items(), &[5.0, 3.0, 2.0]);
        assert!((b.load() - 10.0).abs() < 1e-10);
        assert!(b.residual(10.0).abs() < 1e-10);
    }

    #[test]
    fn test_bin_fits_exactly_full() {
        let b = Bin::from_items(vec![0.1, 0.2]);
        // 0.1 + 0.2 + 0.7 lands just above 1.0 in f64
        assert!(b.fits(0.7, 1.0));
        assert!(!b.fits(0.71, 1.0));
    }

    #[test]
    fn test_bin_feasibility() {
        assert!(Bin::from_items(vec![4.0, 6.0]).is_feasible(10.0));
        assert!(!Bin::from_items(vec![4.0, 6.5]).is_feasible(10.0));
    }

    #[test]
    fn test_bin_serde_as_item_list() {
        let b = Bin::from_items(vec![6.0, 4.0]);
        let json = serde_json::to_string(&b).expect("serialize");
        assert_eq!(json, "[6.0,4.0]");
        let back: Bin = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, b);
    }
}
