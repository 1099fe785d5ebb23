//! treegen_schema: Declarative node-kind descriptors and the schema registry.
//!
//! A schema is an ordered sequence of [`TypeDescriptor`]s. Each names one
//! node kind, lists its fields, and optionally points at a parent which is
//! either a stateless capability or a concrete base carrying shared state.
//! The [`Registry`] collects descriptors for a single generation run.

pub mod descriptor;
pub mod error;
pub mod registry;

pub use descriptor::{FieldDefault, FieldDescriptor, Parent, TypeDescriptor};
pub use error::SchemaError;
pub use registry::Registry;
