//! Best-Fit constructive heuristic.
//!
//! Places each item, in input order, into the open bin that leaves the
//! least free space after insertion. Opens a new bin when nothing fits.
//!
//! # Complexity
//!
//! O(n·m) where n = items and m = bins opened so far.
//!
//! # Reference
//!
//! Johnson, D. S. (1974). "Fast Algorithms for Bin Packing", *Journal of
//! Computer and System Sciences* 8(3), 272-314.

use crate::models::{Bin, Packing};

/// Finds the bin with the smallest residual capacity that can still hold `size`.
///
/// The bin at index `skip`, if any, is never selected. Ties keep the first
/// bin found. Returns `None` if no bin can take the item.
///
/// # Examples
///
/// ```
/// use u_binpack::models::Bin;
/// use u_binpack::constructive::best_fit_position;
///
/// let bins = vec![Bin::with_item(2.0), Bin::with_item(5.0), Bin::with_item(8.0)];
/// assert_eq!(best_fit_position(&bins, 4.0, 10.0, None), Some(1));
/// assert_eq!(best_fit_position(&bins, 4.0, 10.0, Some(1)), Some(0));
/// assert_eq!(best_fit_position(&bins, 9.0, 10.0, None), None);
/// ```
pub fn best_fit_position(bins: &[Bin], size: f64, capacity: f64, skip: Option<usize>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, bin) in bins.iter().enumerate() {
        if Some(i) == skip || !bin.fits(size, capacity) {
            continue;
        }
        let residual = bin.residual(capacity) - size;
        if best.as_ref().is_none_or(|b| residual < b.1) {
            best = Some((i, residual));
        }
    }

    best.map(|(i, _)| i)
}

/// Inserts one item into `packing` using the Best-Fit rule.
///
/// Opens a new bin if no existing bin can take the item. Returns the index
/// of the bin that received it.
pub fn insert_best_fit(packing: &mut Packing, size: f64, capacity: f64) -> usize {
    match best_fit_position(packing.bins(), size, capacity, None) {
        Some(i) => {
            packing.bins_mut()[i].push(size);
            i
        }
        None => {
            packing.add_bin(Bin::with_item(size));
            packing.num_bins() - 1
        }
    }
}

/// Constructs a packing with the Best-Fit heuristic.
///
/// Deterministic for a given item order.
///
/// # Examples
///
/// ```
/// use u_binpack::constructive::best_fit;
///
/// let packing = best_fit(&[6.0, 5.0, 4.0, 3.0, 2.0, 8.0], 10.0);
/// assert_eq!(packing.num_bins(), 3);
/// assert_eq!(packing.bins()[0].items(), &[6.0, 4.0]);
/// assert_eq!(packing.bins()[1].items(), &[5.0, 3.0, 2.0]);
/// assert_eq!(packing.bins()[2].items(), &[8.0]);
/// ```
pub fn best_fit(items: &[f64], capacity: f64) -> Packing {
    let mut packing = Packing::new();
    for &size in items {
        insert_best_fit(&mut packing, size, capacity);
    }
    packing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::fitness;

    #[test]
    fn test_best_fit_empty() {
        let p = best_fit(&[], 10.0);
        assert!(p.is_empty());
    }

    #[test]
    fn test_best_fit_reference_instance() {
        let p = best_fit(&[6.0, 5.0, 4.0, 3.0, 2.0, 8.0], 10.0);
        let bins: Vec<Vec<f64>> = p.bins().iter().map(|b| b.items().to_vec()).collect();
        assert_eq!(bins, vec![vec![6.0, 4.0], vec![5.0, 3.0, 2.0], vec![8.0]]);

        let f = fitness(&p, 10.0);
        assert_eq!(f.bin_count, 3);
        assert!((f.total_waste - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_best_fit_prefers_tightest_bin() {
        // After 5 and 7 are placed, 3 fits both; the 7-bin is tighter
        let p = best_fit(&[5.0, 7.0, 3.0], 10.0);
        assert_eq!(p.bins()[0].items(), &[5.0]);
        assert_eq!(p.bins()[1].items(), &[7.0, 3.0]);
    }

    #[test]
    fn test_best_fit_tie_keeps_first() {
        let p = best_fit(&[6.0, 6.0, 4.0], 10.0);
        assert_eq!(p.bins()[0].items(), &[6.0, 4.0]);
        assert_eq!(p.bins()[1].items(), &[6.0]);
    }

    #[test]
    fn test_best_fit_single_item_equal_capacity() {
        let p = best_fit(&[10.0], 10.0);
        assert_eq!(p.num_bins(), 1);
        assert!(fitness(&p, 10.0).total_waste.abs() < 1e-10);
    }

    #[test]
    fn test_best_fit_respects_capacity() {
        let items = [0.3, 0.7, 0.2, 0.8, 0.55, 0.45, 0.9, 0.1, 0.6];
        let p = best_fit(&items, 1.0);
        assert!(p.is_feasible(1.0));
        assert_eq!(p.num_items(), items.len());
    }

    #[test]
    fn test_insert_best_fit_opens_new_bin() {
        let mut p = best_fit(&[9.0], 10.0);
        let idx = insert_best_fit(&mut p, 2.0, 10.0);
        assert_eq!(idx, 1);
        assert_eq!(p.num_bins(), 2);
        let idx = insert_best_fit(&mut p, 1.0, 10.0);
        assert_eq!(idx, 0);
    }

    #[test]
    fn test_best_fit_position_skip() {
        let bins = vec![Bin::with_item(9.0)];
        assert_eq!(best_fit_position(&bins, 1.0, 10.0, Some(0)), None);
    }
}
