//! The closed kind set: a fieldless tag enum and the node sum type.

use crate::config::GeneratorConfig;
use treegen_core::naming::string_literal;
use treegen_core::CodeWriter;
use treegen_schema::Registry;

/// Emit the tag enum, its parse error and the node sum type.
pub fn emit_kind_set(w: &mut CodeWriter, registry: &Registry, config: &GeneratorConfig) {
    emit_kind_enum(w, registry, config);
    emit_unknown_kind(w, config);
    emit_node_enum(w, registry, config);
}

fn emit_kind_enum(w: &mut CodeWriter, registry: &Registry, config: &GeneratorConfig) {
    let tag = &config.kind_enum;

    w.line("/// Dispatch tag of every registered kind.");
    w.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]");
    w.open(&format!("pub enum {tag}"));
    for name in registry.names() {
        w.line(&format!("{name},"));
    }
    w.close();
    w.blank_line();

    w.open(&format!("impl {tag}"));
    w.line("/// Every kind, in registration order.");
    w.line(&format!("pub const ALL: &'static [{tag}] = &["));
    w.increase_indent();
    for name in registry.names() {
        w.line(&format!("{tag}::{name},"));
    }
    w.decrease_indent();
    w.line("];");
    w.blank_line();
    w.line("/// Registered name of the kind.");
    w.open("pub const fn as_str(self) -> &'static str");
    if registry.is_empty() {
        w.line("match self {}");
    } else {
        w.open("match self");
        for name in registry.names() {
            w.line(&format!("{tag}::{name} => {},", string_literal(name)));
        }
        w.close();
    }
    w.close();
    w.close();
    w.blank_line();

    w.lines(
        &r#"
        impl std::fmt::Display for @TAG@ {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
        "#
        .replace("@TAG@", tag),
    );
    w.blank_line();

    w.open(&format!("impl std::str::FromStr for {tag}"));
    w.line(&format!("type Err = {};", config.unknown_kind_error()));
    w.blank_line();
    w.open("fn from_str(tag: &str) -> Result<Self, Self::Err>");
    w.open("match tag");
    for name in registry.names() {
        w.line(&format!("{} => Ok({tag}::{name}),", string_literal(name)));
    }
    w.line(&format!("_ => Err({}(tag.to_string())),", config.unknown_kind_error()));
    w.close();
    w.close();
    w.close();
    w.blank_line();
}

fn emit_unknown_kind(w: &mut CodeWriter, config: &GeneratorConfig) {
    w.lines(
        &r#"
        /// A tag that names no registered kind.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct @ERR@(pub String);

        impl std::fmt::Display for @ERR@ {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "unknown node kind `{}`", self.0)
            }
        }

        impl std::error::Error for @ERR@ {}
        "#
        .replace("@ERR@", &config.unknown_kind_error()),
    );
    w.blank_line();
}

fn emit_node_enum(w: &mut CodeWriter, registry: &Registry, config: &GeneratorConfig) {
    let node = &config.node_enum;

    w.line("/// Any registered node.");
    if let Some(attr) = config.derive_attr(&[]) {
        w.line(&attr);
    }
    w.open(&format!("pub enum {node}"));
    for name in registry.names() {
        w.line(&format!("{name}({name}),"));
    }
    w.close();
    w.blank_line();

    let location = &config.location_field;
    w.open(&format!("impl {} for {node}", config.root_capability));
    forward(w, registry, node, &format!("fn kind(&self) -> {}", config.kind_enum), "kind()");
    w.blank_line();
    forward(
        w,
        registry,
        node,
        &format!("fn {location}(&self) -> &{}", config.location_type),
        &format!("{location}()"),
    );
    w.blank_line();
    forward(
        w,
        registry,
        node,
        &format!("fn accept<V: {} + ?Sized>(&self, visitor: &mut V) -> V::Output", config.visitor),
        "accept(visitor)",
    );
    w.close();
    w.blank_line();

    for name in registry.names() {
        w.open(&format!("impl From<{name}> for {node}"));
        w.open(&format!("fn from(node: {name}) -> Self"));
        w.line(&format!("{node}::{name}(node)"));
        w.close();
        w.close();
        w.blank_line();
    }
}

/// A method whose body matches every variant and calls `call` on the payload.
fn forward(w: &mut CodeWriter, registry: &Registry, node: &str, signature: &str, call: &str) {
    w.open(signature);
    if registry.is_empty() {
        w.line("match *self {}");
    } else {
        w.open("match self");
        for name in registry.names() {
            w.line(&format!("{node}::{name}(node) => node.{call},"));
        }
        w.close();
    }
    w.close();
}
