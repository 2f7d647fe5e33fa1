//! Problem instance.

use serde::{Deserialize, Serialize};

use super::bin::EPSILON;
use crate::error::Error;

/// A bin packing instance: a bin capacity and the items to pack.
///
/// Construction validates the data, so a value of this type always has a
/// positive finite capacity and items that are positive, finite and no
/// larger than a bin.
///
/// # Examples
///
/// ```
/// use u_binpack::models::Instance;
///
/// let inst = Instance::new("u1", 10.0, vec![6.0, 5.0, 4.0, 3.0, 2.0, 8.0]).unwrap();
/// assert_eq!(inst.len(), 6);
/// assert_eq!(inst.lower_bound(), 3);
///
/// assert!(Instance::new("bad", 10.0, vec![11.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInstance")]
pub struct Instance {
    id: String,
    capacity: f64,
    items: Vec<f64>,
}

/// Unvalidated mirror of [`Instance`] used for deserialization.
#[derive(Deserialize)]
struct RawInstance {
    #[serde(default)]
    id: String,
    capacity: f64,
    items: Vec<f64>,
}

impl TryFrom<RawInstance> for Instance {
    type Error = Error;

    fn try_from(raw: RawInstance) -> Result<Self, Self::Error> {
        Instance::new(raw.id, raw.capacity, raw.items)
    }
}

impl Instance {
    /// Creates a validated instance.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidCapacity`] if `capacity` is not positive and finite
    /// - [`Error::InvalidItem`] if an item size is not positive and finite
    /// - [`Error::ItemExceedsCapacity`] if an item is larger than `capacity`
    pub fn new(id: impl Into<String>, capacity: f64, items: Vec<f64>) -> Result<Self, Error> {
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(Error::InvalidCapacity { capacity });
        }
        for (index, &size) in items.iter().enumerate() {
            if !size.is_finite() || size <= 0.0 {
                return Err(Error::InvalidItem { index, size });
            }
            if size > capacity + EPSILON {
                return Err(Error::ItemExceedsCapacity {
                    index,
                    size,
                    capacity,
                });
            }
        }
        Ok(Self {
            id: id.into(),
            capacity,
            items,
        })
    }

    /// Instance identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Bin capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Item sizes in input order.
    pub fn items(&self) -> &[f64] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there is nothing to pack.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item sizes.
    pub fn total_size(&self) -> f64 {
        self.items.iter().sum()
    }

    /// Continuous lower bound on the number of bins, `⌈Σ sizes / capacity⌉`.
    ///
    /// Measured against `capacity + EPSILON`, the most a bin may hold, so no
    /// feasible packing uses fewer bins.
    pub fn lower_bound(&self) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        (self.total_size() / (self.capacity + EPSILON)).ceil().max(1.0) as usize
    }
}
