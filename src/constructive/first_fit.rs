//! First-Fit constructive heuristic.
//!
//! Places each item into the first open bin with enough room, opening a
//! new bin when none has. Kept as a baseline for Best-Fit.
//!
//! # Complexity
//!
//! O(n·m) where n = items and m = bins opened so far.

use crate::models::{Bin, Packing};

/// Constructs a packing with the First-Fit heuristic.
///
/// # Examples
///
/// ```
/// use u_binpack::constructive::first_fit;
///
/// let packing = first_fit(&[5.0, 7.0, 3.0], 10.0);
/// assert_eq!(packing.bins()[0].items(), &[5.0, 3.0]);
/// assert_eq!(packing.bins()[1].items(), &[7.0]);
/// ```
pub fn first_fit(items: &[f64], capacity: f64) -> Packing {
    let mut packing = Packing::new();

    for &size in items {
        match packing
            .bins_mut()
            .iter_mut()
            .find(|b| b.fits(size, capacity))
        {
            Some(bin) => bin.push(size),
            None => packing.add_bin(Bin::with_item(size)),
        }
    }

    packing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::best_fit;

    #[test]
    fn test_first_fit_empty() {
        assert!(first_fit(&[], 10.0).is_empty());
    }

    #[test]
    fn test_first_fit_takes_first_room() {
        let p = first_fit(&[5.0, 7.0, 3.0], 10.0);
        assert_eq!(p.num_bins(), 2);
        assert_eq!(p.bins()[0].items(), &[5.0, 3.0]);
    }

    #[test]
    fn test_first_fit_vs_best_fit() {
        // 4 goes to the first bin under First-Fit, blocking the 5
        let items = [5.0, 6.0, 4.0, 5.0];
        let ff = first_fit(&items, 10.0);
        let bf = best_fit(&items, 10.0);
        assert_eq!(ff.num_bins(), 3);
        assert_eq!(bf.num_bins(), 2);
        assert_eq!(ff.bins()[0].items(), &[5.0, 4.0]);
        assert_eq!(bf.bins()[1].items(), &[6.0, 4.0]);
    }

    #[test]
    fn test_first_fit_preserves_items() {
        let items = [0.5, 0.7, 0.5, 0.1, 0.4, 0.2, 0.5];
        let p = first_fit(&items, 1.0);
        let mut got = p.items();
        let mut want = items.to_vec();
        got.sort_by(f64::total_cmp);
        want.sort_by(f64::total_cmp);
        assert_eq!(got, want);
        assert!(p.is_feasible(1.0));
    }
}
