//! Routers from a `Node` to per-kind methods with a fixed result type.

use crate::config::GeneratorConfig;
use treegen_core::naming::visit_method;
use treegen_core::CodeWriter;
use treegen_schema::Registry;

/// Whether `output` names the unit type.
fn is_unit(output: &str) -> bool {
    matches!(output.trim(), "" | "()")
}

/// Emit trait `name`: one required method per registered kind returning
/// `output`, plus a provided `dispatch` that routes an optional node.
pub fn emit_dispatcher(
    w: &mut CodeWriter,
    registry: &Registry,
    config: &GeneratorConfig,
    name: &str,
    output: &str,
) {
    let node = &config.node_enum;
    let unit = is_unit(output);
    let ret = if unit { String::new() } else { format!(" -> {output}") };

    w.line(&format!("/// Routes a [`{node}`] to the method of its kind."));
    w.open(&format!("pub trait {name}"));
    for kind in registry.names() {
        w.line(&format!("fn {}(&mut self, node: &{kind}){ret};", visit_method(kind)));
        w.blank_line();
    }

    if unit {
        w.line("/// Routes `node` to its kind's method; an absent node is ignored.");
        w.open(&format!("fn dispatch(&mut self, node: Option<&{node}>)"));
        w.line("let Some(node) = node else {");
        w.increase_indent();
        w.line("return;");
        w.decrease_indent();
        w.line("};");
        emit_match(w, registry, node, "");
    } else {
        w.line("/// Routes `node` to its kind's method; an absent node yields `None`.");
        w.open(&format!(
            "fn dispatch(&mut self, node: Option<&{node}>) -> Option<{output}>"
        ));
        w.line("let node = node?;");
        emit_match(w, registry, node, &format!("let result: {output} = "));
        w.line("Some(result)");
    }
    w.close();
    w.close();
    w.blank_line();
}

fn emit_match(w: &mut CodeWriter, registry: &Registry, node: &str, binding: &str) {
    let end = if binding.is_empty() { "" } else { ";" };
    if registry.is_empty() {
        w.line(&format!("{binding}match *node {{}}{end}"));
        return;
    }
    w.write(binding);
    w.open("match node");
    for kind in registry.names() {
        w.line(&format!("{node}::{kind}(node) => self.{}(node),", visit_method(kind)));
    }
    w.decrease_indent();
    w.line(&format!("}}{end}"));
}
