//! Error type shared by instance validation, configuration and I/O.

use std::fmt;

/// Errors reported before the search starts.
///
/// The search itself is infallible: every kernel operates on an instance
/// that already passed validation, so degenerate inputs (empty instance,
/// zero perturbation strength) are handled as no-ops rather than errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A solver parameter is out of range.
    InvalidConfiguration {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Value that was supplied.
        value: f64,
        /// Accepted range, in words.
        expected: &'static str,
    },
    /// Bin capacity is not a positive finite number.
    InvalidCapacity {
        /// Capacity that was supplied.
        capacity: f64,
    },
    /// An item size is not a positive finite number.
    InvalidItem {
        /// Position of the item in the instance.
        index: usize,
        /// Size that was supplied.
        size: f64,
    },
    /// An item can never be packed because it is larger than a bin.
    ItemExceedsCapacity {
        /// Position of the item in the instance.
        index: usize,
        /// Item size.
        size: f64,
        /// Bin capacity.
        capacity: f64,
    },
    /// Malformed instance input.
    Parse {
        /// Description of what was expected and where.
        message: String,
    },
}

impl Error {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration {
                parameter,
                value,
                expected,
            } => write!(f, "invalid configuration: {parameter} = {value}, expected {expected}"),
            Error::InvalidCapacity { capacity } => {
                write!(f, "bin capacity must be positive and finite, got {capacity}")
            }
            Error::InvalidItem { index, size } => {
                write!(f, "item {index} must have a positive finite size, got {size}")
            }
            Error::ItemExceedsCapacity {
                index,
                size,
                capacity,
            } => write!(f, "item {index} of size {size} exceeds bin capacity {capacity}"),
            Error::Parse { message } => write!(f, "parse error: {message}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_item_exceeds_capacity() {
        let e = Error::ItemExceedsCapacity {
            index: 3,
            size: 12.0,
            capacity: 10.0,
        };
        assert_eq!(e.to_string(), "item 3 of size 12 exceeds bin capacity 10");
    }

    #[test]
    fn test_display_invalid_configuration() {
        let e = Error::InvalidConfiguration {
            parameter: "time_budget",
            value: 0.0,
            expected: "a positive number of seconds",
        };
        assert!(e.to_string().contains("time_budget = 0"));
    }

    #[test]
    fn test_parse_helper() {
        let e = Error::parse("missing capacity");
        assert_eq!(
            e,
            Error::Parse {
                message: "missing capacity".to_string()
            }
        );
    }
}
