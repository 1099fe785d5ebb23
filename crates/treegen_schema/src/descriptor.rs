//! Node-kind and field descriptors.

use treegen_core::naming::string_literal;

/// The single parent a kind may declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parent {
    /// A behavioural contract without stored state.
    Capability(String),
    /// A concrete struct whose state the kind embeds.
    Base(String),
}

impl Parent {
    pub fn name(&self) -> &str {
        match self {
            Parent::Capability(name) | Parent::Base(name) => name,
        }
    }
}

/// Default or initial value of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDefault {
    /// A Rust expression, copied verbatim.
    Expr(String),
    /// Text for a `String` field, emitted as an escaped literal.
    Text(String),
}

impl FieldDefault {
    /// The default as a Rust expression.
    pub fn to_rust(&self) -> String {
        match self {
            FieldDefault::Expr(expr) => expr.clone(),
            FieldDefault::Text(text) => format!("String::from({})", string_literal(text)),
        }
    }
}

/// One field of a node kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    /// Declared type, a verbatim Rust type.
    pub ty: String,
    pub default: Option<FieldDefault>,
    /// Assigned through the constructor rather than initialised in place.
    pub ctor: bool,
    /// Forwarded to the parent constructor instead of stored locally.
    pub forward: bool,
    /// Appended by the registry rather than declared by the schema.
    pub implicit: bool,
}

impl FieldDescriptor {
    /// A constructor-assigned field without a default.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default: None,
            ctor: true,
            forward: false,
            implicit: false,
        }
    }

    pub(crate) fn location(name: &str, ty: &str) -> Self {
        Self {
            implicit: true,
            ..Self::new(name, ty)
        }
    }

    pub fn default_expr(mut self, expr: impl Into<String>) -> Self {
        self.default = Some(FieldDefault::Expr(expr.into()));
        self
    }

    pub fn default_text(mut self, text: impl Into<String>) -> Self {
        self.default = Some(FieldDefault::Text(text.into()));
        self
    }

    /// Initialise the field in place instead of taking it as a parameter.
    pub fn computed(mut self) -> Self {
        self.ctor = false;
        self
    }

    /// Hand the field to the parent constructor.
    pub fn forwarded(mut self) -> Self {
        self.forward = true;
        self
    }
}

/// Declarative description of one node kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: String,
    fields: Vec<FieldDescriptor>,
    parent: Option<Parent>,
    keep_open: bool,
    index: Option<usize>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            parent: None,
            keep_open: false,
            index: None,
        }
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Declare that the kind satisfies capability `name`.
    pub fn implements(mut self, name: impl Into<String>) -> Self {
        self.parent = Some(Parent::Capability(name.into()));
        self
    }

    /// Declare that the kind embeds the concrete base `name`.
    pub fn extends(mut self, name: impl Into<String>) -> Self {
        self.parent = Some(Parent::Base(name.into()));
        self
    }

    /// Accept a companion block of hand-written members after emission.
    pub fn keep_open(mut self) -> Self {
        self.keep_open = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All fields in declaration order, the implicit location field last.
    pub fn all_fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn parent(&self) -> Option<&Parent> {
        self.parent.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.keep_open
    }

    /// Position in the registry, `None` until registered.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Name of the concrete base, if the parent is one.
    pub fn base(&self) -> Option<&str> {
        match &self.parent {
            Some(Parent::Base(name)) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Whether `field` goes to the parent constructor.
    ///
    /// Only a concrete base has a constructor to forward to; without one a
    /// forwarded field is stored locally.
    pub fn is_forwarded(&self, field: &FieldDescriptor) -> bool {
        field.forward && field.ctor && !field.implicit && self.base().is_some()
    }

    /// Constructor parameters, in order.
    pub fn ctor_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.ctor)
    }

    /// Parameters handed to the parent constructor, in order.
    pub fn forwarded_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| self.is_forwarded(f))
    }

    /// Fields stored on the kind itself, in order.
    pub fn stored_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| !self.is_forwarded(f))
    }

    /// Number of trailing declared constructor parameters that all carry a
    /// default. The implicit location parameter is not counted.
    pub fn defaulted_tail(&self) -> usize {
        self.ctor_fields()
            .filter(|f| !f.implicit)
            .collect::<Vec<_>>()
            .iter()
            .rev()
            .take_while(|f| f.default.is_some())
            .count()
    }

    pub(crate) fn register_as(&mut self, index: usize, location: FieldDescriptor) {
        self.index = Some(index);
        self.fields.push(location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn function_stmt() -> TypeDescriptor {
        TypeDescriptor::new("FunctionStmt")
            .extends("DeclBase")
            .field(FieldDescriptor::new("name", "Name").forwarded())
            .field(FieldDescriptor::new("body", "Option<BlockStmt>"))
            .field(FieldDescriptor::new("accessor", "Option<Accessor>").forwarded().default_expr("None"))
            .field(FieldDescriptor::new("uid", "String").default_text("").computed())
    }

    #[test]
    fn test_forwarded_fields_need_a_base() {
        let desc = function_stmt();
        let forwarded: Vec<_> = desc.forwarded_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(forwarded, vec!["name", "accessor"]);

        let stored: Vec<_> = desc.stored_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(stored, vec!["body", "uid"]);

        let capability = TypeDescriptor::new("X")
            .implements("Statement")
            .field(FieldDescriptor::new("name", "Name").forwarded());
        assert_eq!(capability.forwarded_fields().count(), 0);
        assert_eq!(capability.stored_fields().count(), 1);
    }

    #[test]
    fn test_defaulted_tail() {
        assert_eq!(function_stmt().defaulted_tail(), 1);

        let gap = TypeDescriptor::new("Gap")
            .field(FieldDescriptor::new("a", "u32").default_expr("0"))
            .field(FieldDescriptor::new("b", "u32"));
        assert_eq!(gap.defaulted_tail(), 0);

        let all = TypeDescriptor::new("All")
            .field(FieldDescriptor::new("a", "u32").default_expr("0"))
            .field(FieldDescriptor::new("b", "u32").default_expr("1"));
        assert_eq!(all.defaulted_tail(), 2);
    }

    #[test]
    fn test_text_default_is_quoted() {
        let field = FieldDescriptor::new("uid", "String").default_text("a\"b");
        assert_eq!(field.default.unwrap().to_rust(), "String::from(\"a\\\"b\")");
        assert_eq!(FieldDefault::Expr("None".into()).to_rust(), "None");
    }

    #[test]
    fn test_parent_accessors() {
        let desc = function_stmt();
        assert_eq!(desc.base(), Some("DeclBase"));
        assert_eq!(desc.parent().map(Parent::name), Some("DeclBase"));
        assert!(!desc.is_open());
        assert!(TypeDescriptor::new("Name").keep_open().is_open());
    }

    #[test]
    fn test_index_is_unset_until_registered() {
        let mut desc = TypeDescriptor::new("Name");
        assert_eq!(desc.index(), None);

        desc.register_as(0, FieldDescriptor::location("location", "SourceLocation"));
        assert_eq!(desc.index(), Some(0));
    }
}
