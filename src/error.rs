//! Error taxonomy for tree operations.
//!
//! Only shape mismatches are errors. Duplicate names on `add` (defined
//! overwrite), unknown payload keys, and children missing from a payload
//! (defined silent skip) are policies, not failures.

use thiserror::Error;

use crate::value::ValueShape;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    /// Value assignment type does not match the node kind. Fatal to the
    /// failing `set_value` call; siblings already assigned keep their values.
    #[error("shape mismatch at '{name}': expected {expected}, got {found}")]
    ShapeMismatch {
        name: String,
        expected: ValueShape,
        found: ValueShape,
    },
}

/// Result type for tree operations.
pub type ElementResult<T> = Result<T, ElementError>;
