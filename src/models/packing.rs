//! Packing (solution) type.

use serde::{Deserialize, Serialize};

use super::Bin;

/// A complete assignment of items to bins.
///
/// Every operator that mutates a packing prunes empty bins before handing
/// it back, so a packing returned by this crate never contains an empty bin.
///
/// # Examples
///
/// ```
/// use u_binpack::models::{Bin, Packing};
///
/// let mut packing = Packing::new();
/// packing.add_bin(Bin::from_items(vec![6.0, 4.0]));
/// packing.add_bin(Bin::with_item(8.0));
/// assert_eq!(packing.num_bins(), 2);
/// assert_eq!(packing.num_items(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Bin>", into = "Vec<Bin>")]
pub struct Packing {
    bins: Vec<Bin>,
}

impl Packing {
    /// Creates an empty packing.
    pub fn new() -> Self {
        Self { bins: Vec::new() }
    }

    /// Creates a packing from bins, dropping any empty ones.
    pub fn from_bins(bins: Vec<Bin>) -> Self {
        let mut packing = Self { bins };
        packing.remove_empty_bins();
        packing
    }

    /// Adds a bin to this packing.
    pub fn add_bin(&mut self, bin: Bin) {
        self.bins.push(bin);
    }

    /// Returns the bins.
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Returns a mutable reference to the bins.
    ///
    /// Callers must not leave an empty bin behind.
    pub(crate) fn bins_mut(&mut self) -> &mut Vec<Bin> {
        &mut self.bins
    }

    /// Consumes the packing and returns its bins.
    pub fn into_bins(self) -> Vec<Bin> {
        self.bins
    }

    /// Number of bins in use.
    pub fn num_bins(&self) -> usize {
        self.bins.len()
    }

    /// Total number of packed items.
    pub fn num_items(&self) -> usize {
        self.bins.iter().map(|b| b.len()).sum()
    }

    /// Returns `true` if no bins are in use.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Drops bins that hold no items.
    pub fn remove_empty_bins(&mut self) {
        self.bins.retain(|b| !b.is_empty());
    }

    /// All packed item sizes, bin by bin.
    pub fn items(&self) -> Vec<f64> {
        self.bins
            .iter()
            .flat_map(|b| b.items().iter().copied())
            .collect()
    }

    /// Returns `true` if every bin respects `capacity`.
    pub fn is_feasible(&self, capacity: f64) -> bool {
        self.bins.iter().all(|b| b.is_feasible(capacity))
    }
}

impl From<Vec<Bin>> for Packing {
    fn from(bins: Vec<Bin>) -> Self {
        Self::from_bins(bins)
    }
}

impl From<Packing> for Vec<Bin> {
    fn from(packing: Packing) -> Self {
        packing.bins
    }
}
