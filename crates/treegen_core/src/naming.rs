//! Identifier helpers for emitted Rust code.

use convert_case::{Case, Casing};
use std::borrow::Cow;

/// Strict and reserved Rust keywords that can be used as raw identifiers.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// `name` as a Rust identifier, using the raw form for keywords.
///
/// `self`, `Self`, `super` and `crate` have no raw form and are returned as is.
pub fn ident(name: &str) -> Cow<'_, str> {
    if is_keyword(name) {
        Cow::Owned(format!("r#{name}"))
    } else {
        Cow::Borrowed(name)
    }
}

pub fn snake_case(name: &str) -> String {
    name.to_case(Case::Snake)
}

/// Name of the visitor and dispatcher method for kind `kind`.
pub fn visit_method(kind: &str) -> String {
    format!("visit_{}", snake_case(kind))
}

/// `text` as a Rust string literal, quotes included.
pub fn string_literal(text: &str) -> String {
    format!("{text:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_method_names() {
        assert_eq!(visit_method("BinaryExpr"), "visit_binary_expr");
        assert_eq!(visit_method("Name"), "visit_name");
        assert_eq!(visit_method("ForOfStmt"), "visit_for_of_stmt");
    }

    #[test]
    fn test_keywords_become_raw() {
        assert_eq!(ident("type"), "r#type");
        assert_eq!(ident("ref"), "r#ref");
        assert_eq!(ident("left"), "left");
        assert!(!is_keyword("self_"));
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal(""), "\"\"");
        assert_eq!(string_literal("a\"b"), "\"a\\\"b\"");
        assert_eq!(string_literal("line\n"), "\"line\\n\"");
    }
}
