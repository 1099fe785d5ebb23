//! The visitor trait and its no-op implementation.

use crate::config::GeneratorConfig;
use treegen_core::naming::visit_method;
use treegen_core::CodeWriter;
use treegen_schema::Registry;

/// Emit a visitor with one provided method per registered kind.
pub fn emit_visitor(w: &mut CodeWriter, registry: &Registry, config: &GeneratorConfig) {
    w.line("/// Visitor over every registered kind.");
    w.line("///");
    w.line("/// Each method does nothing and returns `Output::default()` unless overridden.");
    w.open(&format!("pub trait {}", config.visitor));
    w.line("/// Value produced by each visit.");
    w.line("type Output: Default;");
    for name in registry.names() {
        w.blank_line();
        w.open(&format!(
            "fn {}(&mut self, _node: &{name}) -> Self::Output",
            visit_method(name)
        ));
        w.line("Self::Output::default()");
        w.close();
    }
    w.close();
    w.blank_line();

    w.line("/// Visitor that ignores every node.");
    w.line("#[derive(Debug, Default, Clone, Copy)]");
    w.line(&format!("pub struct {};", config.noop_visitor));
    w.blank_line();
    w.open(&format!("impl {} for {}", config.visitor, config.noop_visitor));
    w.line("type Output = ();");
    w.close();
    w.blank_line();
}
