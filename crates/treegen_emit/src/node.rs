//! Per-kind emission: struct, constructors, capability impls.

use crate::config::GeneratorConfig;
use treegen_core::naming::{ident, string_literal, visit_method};
use treegen_core::CodeWriter;
use treegen_schema::{FieldDefault, FieldDescriptor, Parent, TypeDescriptor};

/// Constructors above this arity carry a clippy allowance.
const MAX_QUIET_ARITY: usize = 7;

/// Emit the complete definition of one registered kind.
///
/// `contract` replaces the capability name in the marker impl when the
/// capability is itself a kind, whose struct cannot be implemented.
pub fn emit_node(
    w: &mut CodeWriter,
    desc: &TypeDescriptor,
    config: &GeneratorConfig,
    contract: Option<&str>,
) {
    emit_struct(w, desc, config);
    w.blank_line();
    emit_constructors(w, desc, config);
    w.blank_line();
    emit_root_impl(w, desc, config);
    match desc.parent() {
        Some(Parent::Capability(capability)) => {
            let capability = contract.unwrap_or(capability);
            w.blank_line();
            w.line(&format!("impl {capability} for {} {{}}", desc.name()));
        }
        Some(Parent::Base(base)) => {
            w.blank_line();
            emit_deref(w, desc.name(), base, config);
        }
        None => {}
    }
    w.blank_line();
}

/// Emit the marker trait standing in for kind `kind` as a capability, and
/// its impl for the kind itself.
pub fn emit_contract(w: &mut CodeWriter, kind: &str, contract: &str, config: &GeneratorConfig) {
    w.line(&format!("/// Kinds declared to implement `{kind}`, and `{kind}` itself."));
    w.line(&format!("pub trait {contract}: {} {{}}", config.root_capability));
    w.blank_line();
    w.line(&format!("impl {contract} for {kind} {{}}"));
    w.blank_line();
}

/// Emit a labelled block of hand-written members for `kind`.
pub fn emit_extension(w: &mut CodeWriter, kind: &str, members: &str) {
    w.line(&format!("// Hand-written members of `{kind}`."));
    w.open(&format!("impl {kind}"));
    w.lines(members);
    w.close();
    w.blank_line();
}

/// Emit a labelled hand-written impl of `trait_path` for `kind`.
pub fn emit_trait_extension(w: &mut CodeWriter, kind: &str, trait_path: &str, members: &str) {
    w.line(&format!("// Hand-written `{trait_path}` for `{kind}`."));
    w.open(&format!("impl {trait_path} for {kind}"));
    w.lines(members);
    w.close();
    w.blank_line();
}

fn emit_struct(w: &mut CodeWriter, desc: &TypeDescriptor, config: &GeneratorConfig) {
    w.line(&format!("/// Syntax node of kind `{}`.", desc.name()));
    if let Some(attr) = config.derive_attr(&[]) {
        w.line(&attr);
    }
    w.open(&format!("pub struct {}", desc.name()));
    if let Some(base) = desc.base() {
        w.line(&format!("pub {}: {base},", ident(&config.base_field)));
    }
    for field in desc.stored_fields() {
        w.line(&format!("pub {}: {},", ident(&field.name), field.ty));
    }
    w.close();
}

fn param(field: &FieldDescriptor) -> String {
    format!("{}: {}", ident(&field.name), field.ty)
}

fn default_of(field: &FieldDescriptor) -> String {
    field
        .default
        .as_ref()
        .map_or_else(|| "Default::default()".to_string(), FieldDefault::to_rust)
}

fn emit_constructors(w: &mut CodeWriter, desc: &TypeDescriptor, config: &GeneratorConfig) {
    let params: Vec<String> = desc.ctor_fields().map(param).collect();

    w.open(&format!("impl {}", desc.name()));
    w.line("/// Registered name of this kind.");
    w.line(&format!(
        "pub const KIND: &'static str = {};",
        string_literal(desc.name())
    ));
    w.blank_line();

    if params.len() > MAX_QUIET_ARITY {
        w.line("#[allow(clippy::too_many_arguments)]");
    }
    w.open(&format!("pub fn new({}) -> Self", params.join(", ")));
    w.open("Self");
    if let Some(base) = desc.base() {
        let args: Vec<String> = desc
            .forwarded_fields()
            .map(|f| ident(&f.name).into_owned())
            .collect();
        w.line(&format!(
            "{}: {base}::new({}),",
            ident(&config.base_field),
            args.join(", ")
        ));
    }
    for field in desc.stored_fields() {
        let name = ident(&field.name);
        if field.ctor {
            w.line(&format!("{name},"));
        } else {
            w.line(&format!("{name}: {},", default_of(field)));
        }
    }
    w.close();
    w.close();

    emit_with_defaults(w, desc);
    w.close();
}

/// `with_defaults` drops the trailing run of defaulted parameters.
fn emit_with_defaults(w: &mut CodeWriter, desc: &TypeDescriptor) {
    let tail = desc.defaulted_tail();
    if tail == 0 {
        return;
    }
    let declared: Vec<&FieldDescriptor> = desc.ctor_fields().filter(|f| !f.implicit).collect();
    let implicit: Vec<&FieldDescriptor> = desc.ctor_fields().filter(|f| f.implicit).collect();
    let (kept, defaulted) = declared.split_at(declared.len() - tail);

    let params: Vec<String> = kept.iter().chain(&implicit).map(|f| param(f)).collect();
    let args: Vec<String> = kept
        .iter()
        .map(|f| ident(&f.name).into_owned())
        .chain(defaulted.iter().map(|f| default_of(f)))
        .chain(implicit.iter().map(|f| ident(&f.name).into_owned()))
        .collect();

    w.blank_line();
    w.line("/// Builds the node with its trailing optional parameters defaulted.");
    if params.len() > MAX_QUIET_ARITY {
        w.line("#[allow(clippy::too_many_arguments)]");
    }
    w.open(&format!("pub fn with_defaults({}) -> Self", params.join(", ")));
    w.line(&format!("Self::new({})", args.join(", ")));
    w.close();
}

fn emit_root_impl(w: &mut CodeWriter, desc: &TypeDescriptor, config: &GeneratorConfig) {
    let name = desc.name();
    let location = ident(&config.location_field);

    w.open(&format!("impl {} for {name}", config.root_capability));
    w.open(&format!("fn kind(&self) -> {}", config.kind_enum));
    w.line(&format!("{}::{name}", config.kind_enum));
    w.close();
    w.blank_line();
    w.open(&format!("fn {location}(&self) -> &{}", config.location_type));
    w.line(&format!("&self.{location}"));
    w.close();
    w.blank_line();
    w.open(&format!(
        "fn accept<V: {} + ?Sized>(&self, visitor: &mut V) -> V::Output",
        config.visitor
    ));
    w.line(&format!("visitor.{}(self)", visit_method(name)));
    w.close();
    w.close();
}

fn emit_deref(w: &mut CodeWriter, name: &str, base: &str, config: &GeneratorConfig) {
    let field = ident(&config.base_field);

    w.open(&format!("impl std::ops::Deref for {name}"));
    w.line(&format!("type Target = {base};"));
    w.blank_line();
    w.open(&format!("fn deref(&self) -> &{base}"));
    w.line(&format!("&self.{field}"));
    w.close();
    w.close();
    w.blank_line();
    w.open(&format!("impl std::ops::DerefMut for {name}"));
    w.open(&format!("fn deref_mut(&mut self) -> &mut {base}"));
    w.line(&format!("&mut self.{field}"));
    w.close();
    w.close();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use treegen_schema::Registry;

    fn emit(desc: TypeDescriptor) -> String {
        let mut registry = Registry::new();
        let desc = registry.register(desc).unwrap();
        let mut w = CodeWriter::new();
        emit_node(&mut w, desc, &GeneratorConfig::default(), None);
        w.finish()
    }

    #[test]
    fn test_plain_kind() {
        let out = emit(TypeDescriptor::new("Group").field(FieldDescriptor::new("expr", "Box<Node>")));
        assert_eq!(
            out,
            r#"/// Syntax node of kind `Group`.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub expr: Box<Node>,
    pub location: SourceLocation,
}

impl Group {
    /// Registered name of this kind.
    pub const KIND: &'static str = "Group";

    pub fn new(expr: Box<Node>, location: SourceLocation) -> Self {
        Self {
            expr,
            location,
        }
    }
}

impl SyntaxNode for Group {
    fn kind(&self) -> NodeKind {
        NodeKind::Group
    }

    fn location(&self) -> &SourceLocation {
        &self.location
    }

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_group(self)
    }
}

"#
        );
    }

    #[test]
    fn test_base_parent_forwards_and_derefs() {
        let out = emit(
            TypeDescriptor::new("VariableStmt")
                .extends("DeclBase")
                .field(FieldDescriptor::new("name", "Name").forwarded())
                .field(FieldDescriptor::new("type", "Option<TypeRef>"))
                .field(FieldDescriptor::new("accessor", "Option<Accessor>").forwarded().default_expr("None"))
                .field(FieldDescriptor::new("uid", "String").default_text("").computed()),
        );

        assert!(out.contains("pub struct VariableStmt {\n    pub base: DeclBase,\n    pub r#type: Option<TypeRef>,\n    pub uid: String,\n    pub location: SourceLocation,\n}"));
        assert!(out.contains(
            "pub fn new(name: Name, r#type: Option<TypeRef>, accessor: Option<Accessor>, location: SourceLocation) -> Self {\n        Self {\n            base: DeclBase::new(name, accessor),\n            r#type,\n            uid: String::from(\"\"),\n            location,\n        }"
        ));
        assert!(out.contains(
            "pub fn with_defaults(name: Name, r#type: Option<TypeRef>, location: SourceLocation) -> Self {\n        Self::new(name, r#type, None, location)\n    }"
        ));
        assert!(out.contains("impl std::ops::Deref for VariableStmt {\n    type Target = DeclBase;"));
        assert!(out.contains("fn deref_mut(&mut self) -> &mut DeclBase {\n        &mut self.base\n    }"));
    }

    #[test]
    fn test_capability_parent_and_forward_without_base() {
        let out = emit(
            TypeDescriptor::new("ReturnStmt")
                .implements("Statement")
                .field(FieldDescriptor::new("expr", "Option<Box<Node>>").forwarded()),
        );
        assert!(out.contains("impl Statement for ReturnStmt {}"));
        assert!(out.contains("    pub expr: Option<Box<Node>>,\n"));
        assert!(out.contains("        Self {\n            expr,\n"));
        assert!(!out.contains("Deref"));
        assert!(!out.contains("with_defaults"));
    }

    #[test]
    fn test_kind_capability_goes_through_contract() {
        let mut registry = Registry::new();
        let desc = registry
            .register(TypeDescriptor::new("B").implements("A").field(FieldDescriptor::new("left", "A")))
            .unwrap();
        let mut w = CodeWriter::new();
        emit_contract(&mut w, "A", "ACapability", &GeneratorConfig::default());
        emit_node(&mut w, desc, &GeneratorConfig::default(), Some("ACapability"));
        let out = w.finish();

        assert!(out.starts_with(
            "/// Kinds declared to implement `A`, and `A` itself.\npub trait ACapability: SyntaxNode {}\n\nimpl ACapability for A {}\n\n"
        ));
        assert!(out.contains("impl ACapability for B {}"));
        assert!(!out.contains("impl A for B"));
    }

    #[test]
    fn test_base_without_forwarded_fields() {
        let out = emit(TypeDescriptor::new("NullLiteral").extends("ExprBase"));
        assert!(out.contains("pub fn new(location: SourceLocation) -> Self {"));
        assert!(out.contains("base: ExprBase::new(),"));
    }

    #[test]
    fn test_wide_constructor_is_allowed() {
        let fields = (0..8).map(|i| FieldDescriptor::new(format!("f{i}"), "u32"));
        let out = emit(TypeDescriptor::new("Wide").fields(fields));
        assert!(out.contains("    #[allow(clippy::too_many_arguments)]\n    pub fn new("));
    }

    #[test]
    fn test_extension_block() {
        let mut w = CodeWriter::new();
        emit_extension(
            &mut w,
            "Accessor",
            "
            pub fn is_static(&self) -> bool {
                self.values.contains(&TokenType::Static)
            }
            ",
        );
        assert_eq!(
            w.finish(),
            "// Hand-written members of `Accessor`.\nimpl Accessor {\n    pub fn is_static(&self) -> bool {\n        self.values.contains(&TokenType::Static)\n    }\n}\n\n"
        );
    }

    #[test]
    fn test_trait_extension_block() {
        let mut w = CodeWriter::new();
        emit_trait_extension(
            &mut w,
            "Name",
            "std::fmt::Display",
            "
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.qualified())
            }
            ",
        );
        assert_eq!(
            w.finish(),
            "// Hand-written `std::fmt::Display` for `Name`.\nimpl std::fmt::Display for Name {\n    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {\n        f.write_str(&self.qualified())\n    }\n}\n\n"
        );
    }
}
