//! treegen_core: Shared utilities for the treegen code generator.
//!
//! Provides the insertion-ordered map backing the schema registry, the
//! indented text writer every emitter writes through, and the identifier
//! helpers that turn kind and field names into Rust identifiers.

pub mod collections;
pub mod naming;
pub mod writer;

// Re-export commonly used types
pub use collections::OrderedMap;
pub use writer::{CodeWriter, WriterOptions};
