//! Schema errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A kind name was registered twice in one run.
    #[error("kind `{name}` is already registered at position {first}")]
    DuplicateKind { name: String, first: usize },
}
