//! Rust source emitters for syntax-tree node kinds.
//!
//! A [`GenerationRun`] owns the schema registry and the output stream. Kinds
//! are registered and emitted one at a time, then the kind set, the visitor
//! and any number of dispatchers are emitted over everything registered.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod kinds;
pub mod map;
pub mod node;
pub mod run;
pub mod syntax_tree;
pub mod visitor;

pub use config::GeneratorConfig;
pub use error::GenError;
pub use run::GenerationRun;
pub use syntax_tree::{syntax_tree, syntax_tree_run};
