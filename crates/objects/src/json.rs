//! JSON round trips for plain objects.
//!
//! Serialization goes through serde. Reconstruction does not: the parsed JSON is
//! flattened into its own values, in JavaScript property enumeration order, and
//! those values are handed positionally to the target type's [`Constructor`].
//! Nothing checks that the positions line up with the constructor's parameters.

use anyhow::{Result, anyhow};
use log::trace;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::vec::IntoIter;

/// Serialize `value` to compact JSON. Object keys follow field declaration order.
///
/// # Errors
/// Propagates the serializer's error, e.g. for maps with non-string keys.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// A type that can be built from positional arguments.
pub trait Constructor: Sized {
    /// Build an instance from arguments in parameter order.
    ///
    /// # Errors
    /// Returns an error when an argument has the wrong JSON type.
    fn construct(args: Arguments) -> Result<Self>;
}

/// Parse `json` and construct a `T` from the parsed value's own values.
///
/// Objects contribute their values with array-index keys first (ascending), then
/// the remaining keys in insertion order. Arrays contribute their elements,
/// strings their characters, and other scalars nothing.
///
/// # Errors
/// A malformed document yields the underlying [`serde_json::Error`] (recoverable
/// with `downcast_ref`). Otherwise errors come from [`Constructor::construct`].
pub fn from_json<T: Constructor>(json: &str) -> Result<T> {
    let parsed: Value = serde_json::from_str(json)?;
    let values = own_values(parsed);
    trace!("constructing from {} positional values", values.len());
    T::construct(Arguments::new(values))
}

/// Own enumerable values of a parsed JSON value.
pub fn own_values(value: Value) -> Vec<Value> {
    match value {
        Value::Object(map) => {
            let (mut indexed, named): (Vec<_>, Vec<_>) = map
                .into_iter()
                .partition(|(key, _)| array_index(key).is_some());
            indexed.sort_by_key(|(key, _)| array_index(key));
            indexed
                .into_iter()
                .chain(named)
                .map(|(_, item)| item)
                .collect()
        }
        Value::Array(items) => items,
        Value::String(text) => text
            .chars()
            .map(|character| Value::String(character.to_string()))
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) => Vec::new(),
    }
}

/// Canonical array index (`0`..`2^32 - 2`, no leading zeros), which enumerates first.
fn array_index(key: &str) -> Option<u32> {
    let index: u32 = key.parse().ok()?;
    (index != u32::MAX && index.to_string() == key).then_some(index)
}

/// Positional constructor arguments.
#[derive(Debug)]
pub struct Arguments {
    values: IntoIter<Value>,
    position: usize,
}

impl Arguments {
    pub fn new(values: Vec<Value>) -> Self {
        Self {
            values: values.into_iter(),
            position: 0,
        }
    }

    /// Number of arguments not yet taken.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Take the next argument without interpreting it. Missing arguments are `None`.
    pub fn next_value(&mut self) -> Option<Value> {
        self.position = self.position.saturating_add(1);
        self.values.next()
    }

    /// Take the next argument as a number. Missing and `null` arguments are `None`.
    ///
    /// # Errors
    /// Fails if the argument is present but not a number.
    pub fn next_f64(&mut self, name: &str) -> Result<Option<f64>> {
        let position = self.position;
        match self.next_value() {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(number)) => number
                .as_f64()
                .map(Some)
                .ok_or_else(|| anyhow!("argument {position} (`{name}`) is not representable as f64")),
            Some(other) => Err(anyhow!(
                "argument {position} (`{name}`) expected a number, got {other}"
            )),
        }
    }
}

/// Serialize an `f64` the way JavaScript prints numbers: integral values below
/// `1e21` in full decimal form (`1e16` prints as `10000000000000000`), non-finite
/// values as `null`.
///
/// From `1e21` on JavaScript switches to exponent form; those values go through
/// serde_json's float formatting, which writes `1e21` where JavaScript writes `1e+21`.
///
/// # Errors
/// Propagates the serializer's error.
#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde's serialize_with passes fields by reference"
)]
pub fn serialize_js_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const EXPONENT_THRESHOLD: f64 = 1e21;
    if !value.is_finite() {
        return serializer.serialize_none();
    }
    if value.fract() != 0.0 || value.abs() >= EXPONENT_THRESHOLD {
        return serializer.serialize_f64(*value);
    }
    // Integral and below 1e21, so the conversion is exact.
    let integer = *value as i128;
    if let Ok(small) = i64::try_from(integer) {
        serializer.serialize_i64(small)
    } else if let Ok(unsigned) = u64::try_from(integer) {
        serializer.serialize_u64(unsigned)
    } else {
        serializer.serialize_i128(integer)
    }
}
