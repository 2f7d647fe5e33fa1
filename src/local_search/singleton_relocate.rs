//! Singleton-bin relocation operator.
//!
//! # Algorithm
//!
//! Scans bins in index order for one holding exactly one item. The first
//! such bin whose item fits into some other bin triggers a move: the item
//! goes to the feasible bin with the least residual capacity after
//! insertion (Best-Fit), and the emptied bin is dropped. Repeats until a
//! full pass finds no move or the deadline passes.
//!
//! Only singleton bins are candidates: moving an item out of a bin that
//! keeps other items leaves both bin count and total waste unchanged, so
//! it can never improve the fitness.
//!
//! # Complexity
//!
//! O(m²) per move where m = number of bins; each move removes a bin, so a
//! call performs at most m moves.

use log::trace;

use crate::constructive::best_fit_position;
use crate::ils::{Clock, Deadline};
use crate::models::{Bin, Packing};

/// A relocation of the sole item of `from_bin` into `to_bin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RelocateMove {
    from_bin: usize,
    to_bin: usize,
}

/// Empties singleton bins into other bins until no move remains or `deadline` passes.
///
/// The deadline is checked before each move; a move that has started is
/// always completed. If the deadline has already passed on entry, the
/// packing is returned unchanged apart from pruning empty bins.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_binpack::models::{Bin, Packing};
/// use u_binpack::ils::{Deadline, SystemClock};
/// use u_binpack::local_search::singleton_relocate;
///
/// let packing = Packing::from_bins(vec![
///     Bin::with_item(3.0),
///     Bin::with_item(6.0),
///     Bin::with_item(5.0),
/// ]);
/// let clock = SystemClock::new();
/// let deadline = Deadline::after(&clock, Duration::from_secs(1));
///
/// let improved = singleton_relocate(packing, 10.0, &clock, deadline);
/// assert_eq!(improved.num_bins(), 2);
/// assert_eq!(improved.bins()[0].items(), &[6.0, 3.0]);
/// ```
pub fn singleton_relocate<C: Clock + ?Sized>(
    packing: Packing,
    capacity: f64,
    clock: &C,
    deadline: Deadline,
) -> Packing {
    let mut packing = packing;
    packing.remove_empty_bins();

    while !deadline.is_expired(clock) {
        let Some(mv) = find_singleton_move(packing.bins(), capacity) else {
            break;
        };
        trace!("[LS] bin {} -> bin {}", mv.from_bin, mv.to_bin);
        apply_move(&mut packing, mv);
    }
    packing
}

/// Returns the first improving move over singleton bins in index order.
fn find_singleton_move(bins: &[Bin], capacity: f64) -> Option<RelocateMove> {
    bins.iter().enumerate().find_map(|(i, bin)| {
        if bin.len() != 1 {
            return None;
        }
        best_fit_position(bins, bin.items()[0], capacity, Some(i)).map(|j| RelocateMove {
            from_bin: i,
            to_bin: j,
        })
    })
}

fn apply_move(packing: &mut Packing, mv: RelocateMove) {
    let bins = packing.bins_mut();
    let size = bins[mv.from_bin].items()[0];
    bins[mv.to_bin].push(size);
    bins.remove(mv.from_bin);
}
