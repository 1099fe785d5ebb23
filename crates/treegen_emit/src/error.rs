//! Errors raised while generating.

use std::path::PathBuf;
use thiserror::Error;
use treegen_schema::SchemaError;

#[derive(Debug, Error)]
pub enum GenError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("kind `{0}` is not registered")]
    UnknownKind(String),

    #[error("kind `{0}` is closed and cannot take hand-written members")]
    ClosedKind(String),

    #[error("failed to read config `{}`", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config `{}`", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
