//! The compiler's syntax tree, generated at build time from the built-in
//! schema.
//!
//! [`tree`] holds every node kind, the [`tree::Node`] sum type, the visitor
//! and the dispatchers. [`location`] and [`token`] are the hand-written types
//! the generated code refers to.

pub mod location;
pub mod token;

#[allow(clippy::all, missing_docs)]
pub mod tree {
    include!(concat!(env!("OUT_DIR"), "/syntax.rs"));
}

pub use location::SourceLocation;
pub use token::TokenType;
