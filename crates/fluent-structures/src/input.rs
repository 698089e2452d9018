//! Normalization of untyped list input.
//!
//! Typed lists and slices need no help: they are collected into a `Vec` in
//! order. Untyped lists are checked element by element and rejected on the
//! first element of the wrong type.

use model_engine::{Value, ValueElement};
use tracing::debug;

use crate::error::BuildError;

/// Extract every element of `values` as `T`, preserving order.
pub fn typed_values<T: ValueElement>(values: &[Value]) -> Result<Vec<T>, BuildError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            T::from_value(value).ok_or_else(|| {
                debug!(
                    index,
                    expected = T::TYPE_NAME,
                    actual = value.type_name(),
                    "rejecting untyped list"
                );
                BuildError::ContractViolation {
                    index,
                    expected: T::TYPE_NAME,
                    actual: value.type_name(),
                }
            })
        })
        .collect()
}
