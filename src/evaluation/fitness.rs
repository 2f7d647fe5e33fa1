//! Lexicographic packing fitness.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::Packing;

/// Score of a packing: number of bins first, total waste second.
///
/// Lower is better. Fewer bins always wins regardless of waste; among equal
/// bin counts the lower total waste wins. Waste is compared with
/// [`f64::total_cmp`], so the ordering is total.
///
/// # Examples
///
/// ```
/// use u_binpack::evaluation::Fitness;
///
/// let a = Fitness::new(3, 2.0);
/// let b = Fitness::new(4, 0.0);
/// let c = Fitness::new(3, 1.5);
/// assert!(a < b);
/// assert!(c < a);
/// assert!(c.is_better_than(&b));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fitness {
    /// Number of bins in use.
    pub bin_count: usize,
    /// Sum of `capacity - load` over all bins.
    pub total_waste: f64,
}

impl Fitness {
    /// Creates a fitness value.
    pub fn new(bin_count: usize, total_waste: f64) -> Self {
        Self {
            bin_count,
            total_waste,
        }
    }

    /// Returns `true` if `self` is strictly better than `other`.
    pub fn is_better_than(&self, other: &Fitness) -> bool {
        self < other
    }
}

impl PartialEq for Fitness {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fitness {}

impl PartialOrd for Fitness {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fitness {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bin_count
            .cmp(&other.bin_count)
            .then_with(|| self.total_waste.total_cmp(&other.total_waste))
    }
}

/// Evaluates a packing against a bin capacity.
///
/// Pure and O(total items). An empty packing scores `(0, 0.0)`.
///
/// # Examples
///
/// ```
/// use u_binpack::models::{Bin, Packing};
/// use u_binpack::evaluation::fitness;
///
/// let packing = Packing::from_bins(vec![
///     Bin::from_items(vec![6.0, 4.0]),
///     Bin::from_items(vec![5.0, 3.0, 2.0]),
///     Bin::with_item(8.0),
/// ]);
/// let f = fitness(&packing, 10.0);
/// assert_eq!(f.bin_count, 3);
/// assert!((f.total_waste - 2.0).abs() < 1e-10);
/// ```
pub fn fitness(packing: &Packing, capacity: f64) -> Fitness {
    let total_waste = packing
        .bins()
        .iter()
        .map(|b| capacity - b.items().iter().fold(0.0, |acc, &x| acc + x))
        .fold(0.0, |acc, w| acc + w);
    Fitness::new(packing.num_bins(), total_waste)
}
