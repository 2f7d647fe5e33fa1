//! Best-Fit reinsertion.

use crate::constructive::insert_best_fit;
use crate::models::Packing;

/// Reinserts `items`, in the given order, with the Best-Fit rule.
///
/// Each item goes to the bin with the least residual capacity that can
/// hold it, against the loads left by the previous insertions; a new bin
/// is opened when none can. Reinserting into an empty packing is exactly
/// [`best_fit`](crate::constructive::best_fit) on the same item order.
///
/// # Examples
///
/// ```
/// use u_binpack::models::{Bin, Packing};
/// use u_binpack::perturbation::best_fit_reinsertion;
///
/// let partial = Packing::from_bins(vec![Bin::with_item(6.0), Bin::with_item(8.0)]);
/// let repaired = best_fit_reinsertion(partial, &[2.0, 4.0, 3.0], 10.0);
/// assert_eq!(repaired.bins()[1].items(), &[8.0, 2.0]);
/// assert_eq!(repaired.bins()[0].items(), &[6.0, 4.0]);
/// assert_eq!(repaired.bins()[2].items(), &[3.0]);
/// ```
pub fn best_fit_reinsertion(packing: Packing, items: &[f64], capacity: f64) -> Packing {
    let mut packing = packing;
    for &size in items {
        insert_best_fit(&mut packing, size, capacity);
    }
    packing
}
