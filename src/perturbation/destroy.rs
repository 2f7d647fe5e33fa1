//! Random item removal.

use rand::Rng;

use crate::models::{Bin, Packing};

/// Removes `count` items chosen uniformly at random without replacement.
///
/// Every (bin, item) coordinate of the packing is equally likely. If the
/// packing holds fewer than `count` items, all of them are removed. Removal
/// is a single rebuild pass over the bins, so positions never shift while
/// items are being taken out; bins left empty are dropped.
///
/// Returns the remaining packing and the removed sizes in bin order.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_binpack::models::{Bin, Packing};
/// use u_binpack::perturbation::random_removal;
///
/// let packing = Packing::from_bins(vec![
///     Bin::from_items(vec![6.0, 4.0]),
///     Bin::from_items(vec![5.0, 3.0, 2.0]),
/// ]);
/// let mut rng = StdRng::seed_from_u64(42);
/// let (rest, removed) = random_removal(packing, 2, &mut rng);
/// assert_eq!(removed.len(), 2);
/// assert_eq!(rest.num_items(), 3);
/// ```
pub fn random_removal<R: Rng + ?Sized>(
    packing: Packing,
    count: usize,
    rng: &mut R,
) -> (Packing, Vec<f64>) {
    let total = packing.num_items();
    if count == 0 || total == 0 {
        return (Packing::from_bins(packing.into_bins()), Vec::new());
    }

    let amount = count.min(total);
    let mut selected = vec![false; total];
    for idx in rand::seq::index::sample(rng, total, amount) {
        selected[idx] = true;
    }

    let mut removed = Vec::with_capacity(amount);
    let mut bins = Vec::with_capacity(packing.num_bins());
    let mut flat = 0;
    for bin in packing.into_bins() {
        let mut kept = Vec::with_capacity(bin.len());
        for size in bin.into_items() {
            if selected[flat] {
                removed.push(size);
            } else {
                kept.push(size);
            }
            flat += 1;
        }
        bins.push(Bin::from_items(kept));
    }

    (Packing::from_bins(bins), removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> Packing {
        Packing::from_bins(vec![
            Bin::from_items(vec![1.0, 2.0]),
            Bin::with_item(3.0),
            Bin::from_items(vec![4.0, 5.0, 6.0]),
        ])
    }

    fn sorted(mut v: Vec<f64>) -> Vec<f64> {
        v.sort_by(f64::total_cmp);
        v
    }

    #[test]
    fn test_random_removal_zero_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let (rest, removed) = random_removal(setup(), 0, &mut rng);
        assert!(removed.is_empty());
        assert_eq!(rest, setup());
    }

    #[test]
    fn test_random_removal_empty_packing() {
        let mut rng = StdRng::seed_from_u64(42);
        let (rest, removed) = random_removal(Packing::new(), 5, &mut rng);
        assert!(rest.is_empty());
        assert!(removed.is_empty());
    }

    #[test]
    fn test_random_removal_preserves_all_items() {
        let mut rng = StdRng::seed_from_u64(7);
        let (rest, removed) = random_removal(setup(), 3, &mut rng);
        assert_eq!(removed.len(), 3);
        let mut all = rest.items();
        all.extend(&removed);
        assert_eq!(sorted(all), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_random_removal_more_than_available() {
        let mut rng = StdRng::seed_from_u64(42);
        let (rest, removed) = random_removal(setup(), 100, &mut rng);
        assert!(rest.is_empty());
        // bin order is kept when everything goes
        assert_eq!(removed, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_random_removal_prunes_emptied_bins() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let (rest, _) = random_removal(setup(), 2, &mut rng);
            assert!(rest.bins().iter().all(|b| !b.is_empty()));
            for bin in rest.bins() {
                let recomputed: f64 = bin.items().iter().sum();
                assert!((bin.load() - recomputed).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_random_removal_distinct_coordinates() {
        // equal sizes would hide duplicate picks, so use a packing of distinct values
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let (_, removed) = random_removal(setup(), 4, &mut rng);
            let mut s = sorted(removed);
            s.dedup();
            assert_eq!(s.len(), 4);
        }
    }
}
