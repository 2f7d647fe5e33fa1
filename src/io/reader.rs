//! Instance readers.

use std::io::Read;
use std::str::{FromStr, SplitWhitespace};

use log::warn;

use crate::error::Error;
use crate::models::Instance;

/// Reads a batch of instances in the whitespace-separated text format.
///
/// ```text
/// P
/// id_1 capacity_1 n_1 item_1 ... item_n1
/// ...
/// id_P capacity_P n_P item_1 ... item_nP
/// ```
///
/// Tokens may be split across lines freely. Anything after the last
/// instance is ignored.
///
/// # Errors
///
/// - [`Error::Parse`] if the input cannot be read, or a token is missing
///   or malformed; the message names the instance and the field
/// - The validation errors of [`Instance::new`] for out-of-range values
pub fn read_instances<R: Read>(mut reader: R) -> Result<Vec<Instance>, Error> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| Error::parse(format!("failed to read input: {e}")))?;
    parse_instances(&input)
}

/// Parses a batch of instances from text. See [`read_instances`].
///
/// # Examples
///
/// ```
/// use u_binpack::io::parse_instances;
///
/// let instances = parse_instances("2\nu1 10 3 6 5 4\nu2 1.0 2\n0.5 0.5\n").unwrap();
/// assert_eq!(instances.len(), 2);
/// assert_eq!(instances[0].id(), "u1");
/// assert_eq!(instances[1].items(), &[0.5, 0.5]);
/// ```
pub fn parse_instances(input: &str) -> Result<Vec<Instance>, Error> {
    let mut tokens = Tokens {
        inner: input.split_whitespace(),
    };
    let count: usize = tokens.next_value("instance count")?;

    let mut instances = Vec::with_capacity(count.min(1024));
    for p in 1..=count {
        let id = tokens
            .next_token()
            .ok_or_else(|| Error::parse(format!("instance {p}: missing id")))?
            .to_string();
        let capacity: f64 = tokens.next_value_for(&id, "capacity")?;
        let n: usize = tokens.next_value_for(&id, "item count")?;
        let items = (1..=n)
            .map(|k| tokens.next_value_for(&id, &format!("item {k}")))
            .collect::<Result<Vec<f64>, _>>()?;
        instances.push(Instance::new(id, capacity, items)?);
    }

    if tokens.next_token().is_some() {
        warn!("[IO] Ignoring input after the last of {count} instances");
    }
    Ok(instances)
}

/// Reads a JSON array of `{ "id", "capacity", "items" }` objects.
///
/// # Errors
///
/// [`Error::Parse`] on malformed JSON or invalid instance values.
pub fn read_instances_json<R: Read>(reader: R) -> Result<Vec<Instance>, Error> {
    serde_json::from_reader(reader).map_err(|e| Error::parse(format!("invalid JSON instances: {e}")))
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn next_token(&mut self) -> Option<&'a str> {
        self.inner.next()
    }

    fn next_value<T: FromStr>(&mut self, field: &str) -> Result<T, Error> {
        let token = self
            .next_token()
            .ok_or_else(|| Error::parse(format!("missing {field}")))?;
        token
            .parse()
            .map_err(|_| Error::parse(format!("invalid {field} '{token}'")))
    }

    fn next_value_for<T: FromStr>(&mut self, id: &str, field: &str) -> Result<T, Error> {
        let token = self
            .next_token()
            .ok_or_else(|| Error::parse(format!("instance {id}: missing {field}")))?;
        token
            .parse()
            .map_err(|_| Error::parse(format!("instance {id}: invalid {field} '{token}'")))
    }
}
