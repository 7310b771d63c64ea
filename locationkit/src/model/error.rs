//! Errors raised while populating model shapes.

use thiserror::Error;

/// Errors that can occur while building a model shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A map entry was added under a key that is already present.
    #[error("Duplicated key '{key}' provided for {field}")]
    DuplicateKey { field: &'static str, key: String },
}
