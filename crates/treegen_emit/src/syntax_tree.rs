//! The built-in schema for the compiler's syntax tree.
//!
//! Kinds are registered in source order; the framing they rely on
//! (`SyntaxNode`, `Statement`, `ExprBase`, `DeclBase`) is written first as
//! literal text. Expression fields hold `Box<Node>`, statement lists hold
//! `Vec<Node>`, and optional children are `Option<Box<Node>>`.

use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::run::GenerationRun;
use treegen_schema::{FieldDescriptor as F, TypeDescriptor as T};

const FRAMING: &str = r#"use crate::location::@LOCATION_TYPE@;
use crate::token::TokenType;

/// Behaviour shared by every syntax tree node.
pub trait @ROOT@ {
    /// Dispatch tag of this node.
    fn kind(&self) -> @KIND@;

    /// Where the node starts in its source file.
    fn @LOCATION_FIELD@(&self) -> &@LOCATION_TYPE@;

    /// Hands this node to the visitor method of its kind.
    fn accept<V: @VISITOR@ + ?Sized>(&self, visitor: &mut V) -> V::Output;

    /// Registered name of this node's kind.
    fn class_name(&self) -> &'static str {
        self.kind().as_str()
    }
}

/// Statement kinds.
pub trait Statement: @ROOT@ {}

/// State shared by every expression kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExprBase {
    /// Type assigned during inference.
    pub resolved_type: Option<Box<TypeRef>>,
}

impl ExprBase {
    pub fn new() -> Self {
        Self::default()
    }
}

/// State shared by named declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclBase {
    pub name: Name,
    pub accessor: Option<Accessor>,
}

impl DeclBase {
    pub fn new(name: Name, accessor: Option<Accessor>) -> Self {
        Self { name, accessor }
    }

    pub fn is_static(&self) -> bool {
        self.accessor.as_ref().is_some_and(Accessor::is_static)
    }
}
"#;

const NAME_MEMBERS: &str = r#"
    /// Lexemes joined with dots.
    pub fn qualified(&self) -> String {
        self.lexemes.join(".")
    }

    /// Last lexeme, or an empty string.
    pub fn canonical(&self) -> &str {
        self.lexemes.last().map_or("", String::as_str)
    }

    pub fn push(&mut self, lexeme: impl Into<String>) {
        self.lexemes.push(lexeme.into());
    }

    pub fn append(&mut self, other: &Name) {
        self.lexemes.extend(other.lexemes.iter().cloned());
    }

    /// This name without its last lexeme.
    pub fn parent(&self) -> Name {
        let mut name = self.clone();
        name.lexemes.pop();
        name
    }
"#;

const ACCESSOR_MEMBERS: &str = r#"
    pub fn is_static(&self) -> bool {
        self.values.contains(&TokenType::Static)
    }
"#;

const TYPE_REF_MEMBERS: &str = r#"
    /// Source form: generic arguments, `[]` per dimension and a trailing
    /// `?` when nullable. With `qualified` the full dotted name is used.
    pub fn render(&self, qualified: bool) -> String {
        let mut out = if qualified {
            self.name.qualified()
        } else {
            self.name.canonical().to_string()
        };
        if !self.generics.is_empty() {
            let args: Vec<String> = self.generics.iter().map(|g| g.render(qualified)).collect();
            out.push('<');
            out.push_str(&args.join(","));
            out.push('>');
        }
        for _ in 0..self.dims {
            out.push_str("[]");
        }
        if self.nullable {
            out.push('?');
        }
        out
    }

    pub fn qualified(&self) -> String {
        self.render(true)
    }

    pub fn canonical(&self) -> String {
        self.render(false)
    }

    pub fn is_generic(&self) -> bool {
        !self.generics.is_empty()
    }

    /// `boolean` or `number`, judged by name alone.
    pub fn is_primitive(&self) -> bool {
        matches!(self.name.qualified().as_str(), "boolean" | "number")
    }

    /// Whether the resolved class derives from `qname`. False while unresolved.
    pub fn is_derived(&self, qname: &str) -> bool {
        self.r#ref.as_deref().is_some_and(|class| class.is_derived(qname))
    }

    fn well_known(name: &str, nullable: bool) -> TypeRef {
        let name = Name::new(vec![name.to_string()], Default::default());
        TypeRef::new(name, Vec::new(), 0, nullable, Default::default())
    }

    pub fn void() -> TypeRef {
        Self::well_known("void", false)
    }

    pub fn number() -> TypeRef {
        Self::well_known("number", false)
    }

    /// `string?`: strings are nullable.
    pub fn string() -> TypeRef {
        Self::well_known("string", true)
    }

    pub fn boolean() -> TypeRef {
        Self::well_known("boolean", false)
    }

    pub fn null() -> TypeRef {
        Self::well_known("null", false)
    }

    pub fn any() -> TypeRef {
        Self::well_known("any", false)
    }
"#;

const NAME_DISPLAY: &str = r#"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.qualified())
    }
"#;

const TYPE_REF_DISPLAY: &str = r#"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.qualified())
    }
"#;

const FUNCTION_MEMBERS: &str = r#"
    /// A function without a body.
    pub fn is_abstract(&self) -> bool {
        self.body.is_none()
    }

    pub fn is_generic(&self) -> bool {
        !self.generics.is_empty()
    }

    /// `name(params):type`, prefixed with `get ` or `set ` for properties.
    pub fn signature(&self) -> String {
        let prefix = match self.property {
            Some(TokenType::Get) => "get ",
            Some(TokenType::Set) => "set ",
            _ => "",
        };
        let params: Vec<String> = self
            .params
            .iter()
            .map(|param| {
                let spread = if param.vararg { "..." } else { "" };
                let ty = param.r#type.as_ref().map(TypeRef::qualified).unwrap_or_default();
                format!("{spread}{}:{ty}", param.name.qualified())
            })
            .collect();
        let ret = self.r#type.as_ref().map(TypeRef::qualified).unwrap_or_default();
        format!("{prefix}{}({}):{ret}", self.name.qualified(), params.join(","))
    }
"#;

const CLASS_MEMBERS: &str = r#"
    pub fn is_generic(&self) -> bool {
        !self.generics.is_empty()
    }

    /// Whether `qname` names this class's base or one of its interfaces,
    /// or, through the base's resolved class, any of their ancestors.
    /// Generic arguments are ignored.
    pub fn is_derived(&self, qname: &str) -> bool {
        if self.extended.as_ref().is_some_and(|base| base.name.qualified() == qname) {
            return true;
        }
        if self.implemented.iter().any(|t| t.name.qualified() == qname) {
            return true;
        }
        self.extended.as_ref().is_some_and(|base| base.is_derived(qname))
    }
"#;

const CLASS_DISPLAY: &str = r#"
    /// `Name extends Base implements A, B`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(base) = &self.extended {
            write!(f, " extends {base}")?;
        }
        if !self.implemented.is_empty() {
            let names: Vec<String> = self.implemented.iter().map(TypeRef::qualified).collect();
            write!(f, " implements {}", names.join(", "))?;
        }
        Ok(())
    }
"#;

const VARIABLE_MEMBERS: &str = r#"
    /// Declaring keyword in source form.
    pub fn keyword(&self) -> &'static str {
        if self.constant {
            "const"
        } else {
            "let"
        }
    }
"#;

const VARIABLE_DISPLAY: &str = r#"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.keyword(), self.name)?;
        if let Some(ty) = &self.r#type {
            write!(f, " : {ty}")?;
        }
        Ok(())
    }
"#;

const PROPERTY_DISPLAY: &str = r#"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(ty) = &self.r#type {
            write!(f, " : {ty}")?;
        }
        Ok(())
    }
"#;

const DISPLAY: &str = "std::fmt::Display";

fn expr(name: &str) -> T {
    T::new(name).extends("ExprBase")
}

fn stmt(name: &str) -> T {
    T::new(name).implements("Statement")
}

fn decl(name: &str) -> T {
    T::new(name)
        .extends("DeclBase")
        .field(F::new("name", "Name").forwarded())
}

fn accessor() -> F {
    F::new("accessor", "Option<Accessor>")
        .forwarded()
        .default_expr("None")
}

fn uid() -> F {
    F::new("uid", "String").default_text("").computed()
}

fn operation(name: &str) -> T {
    expr(name).fields([
        F::new("left", "Box<Node>"),
        F::new("oper", "TokenType"),
        F::new("right", "Box<Node>"),
    ])
}

/// Framing text with the configured names substituted.
fn framing(config: &GeneratorConfig) -> String {
    FRAMING
        .replace("@ROOT@", &config.root_capability)
        .replace("@KIND@", &config.kind_enum)
        .replace("@VISITOR@", &config.visitor)
        .replace("@LOCATION_FIELD@", &config.location_field)
        .replace("@LOCATION_TYPE@", &config.location_type)
}

/// Run the built-in schema and return the finished run.
pub fn syntax_tree_run(config: GeneratorConfig) -> Result<GenerationRun, GenError> {
    let mut run = GenerationRun::new(config);
    let framing = framing(run.config());
    run.literal(&framing);

    run.node(expr("Name").field(F::new("lexemes", "Vec<String>")).keep_open())?;
    run.extend("Name", NAME_MEMBERS)?;
    run.extend_trait("Name", DISPLAY, NAME_DISPLAY)?;

    run.node(expr("StringLiteral").fields([F::new("value", "String"), F::new("type", "TokenType")]))?;
    run.node(expr("NumberLiteral").fields([F::new("value", "String"), F::new("converted", "f64")]))?;
    run.node(expr("BoolLiteral").field(F::new("converted", "bool")))?;
    run.node(expr("NameLiteral").field(F::new("value", "String")))?;
    run.node(expr("Group").field(F::new("expr", "Box<Node>")))?;
    run.node(expr("NullLiteral"))?;
    run.node(operation("LogicalExpr"))?;
    run.node(operation("BinaryExpr"))?;
    run.node(operation("AssignExpr"))?;
    run.node(expr("UnaryExpr").fields([
        F::new("oper", "TokenType"),
        F::new("expr", "Box<Node>"),
        F::new("post", "bool"),
    ]))?;
    run.node(expr("TypeCastExpr").fields([F::new("type", "TypeRef"), F::new("expr", "Box<Node>")]))?;
    run.node(expr("CallExpr").fields([F::new("callee", "Box<Node>"), F::new("args", "Vec<Node>")]))?;
    run.node(expr("ArrayExpr").field(F::new("values", "Vec<Node>")))?;
    run.node(expr("ArrayAccessExpr").fields([F::new("callee", "Box<Node>"), F::new("index", "Box<Node>")]))?;
    run.node(expr("FieldExpr").fields([F::new("callee", "Box<Node>"), F::new("name", "Name")]))?;
    run.node(expr("NewExpr").fields([F::new("type", "TypeRef"), F::new("args", "Vec<Node>")]))?;

    run.node(T::new("Accessor").field(F::new("values", "Vec<TokenType>")).keep_open())?;
    run.extend("Accessor", ACCESSOR_MEMBERS)?;

    run.node(stmt("BlockStmt").field(F::new("stmts", "Vec<Node>")))?;
    run.node(stmt("ReturnStmt").field(F::new("expr", "Option<Box<Node>>")))?;
    run.node(stmt("NamespaceStmt").fields([
        F::new("name", "Name"),
        F::new("stmts", "Vec<Node>"),
        F::new("accessor", "Option<Accessor>").default_expr("None"),
    ]))?;

    run.node(
        T::new("TypeRef")
            .fields([
                F::new("name", "Name"),
                F::new("generics", "Vec<TypeRef>"),
                F::new("dims", "u32"),
                F::new("nullable", "bool"),
                F::new("ref", "Option<Box<ClassStmt>>").default_expr("None").computed(),
            ])
            .keep_open(),
    )?;
    run.extend("TypeRef", TYPE_REF_MEMBERS)?;
    run.extend_trait("TypeRef", DISPLAY, TYPE_REF_DISPLAY)?;

    run.node(stmt("CaseStmt").fields([F::new("expr", "Option<Box<Node>>"), F::new("stmts", "Vec<Node>")]))?;
    run.node(stmt("SwitchStmt").fields([F::new("expr", "Box<Node>"), F::new("cases", "Vec<CaseStmt>")]))?;
    run.node(stmt("IfStmt").fields([
        F::new("condition", "Box<Node>"),
        F::new("then_side", "Box<Node>"),
        F::new("else_side", "Option<Box<Node>>").default_expr("None"),
    ]))?;
    run.node(stmt("ForOfStmt").fields([
        F::new("variable", "Box<VariableStmt>"),
        F::new("expr", "Box<Node>"),
        F::new("stmt", "Box<Node>"),
    ]))?;
    run.node(stmt("ForStmt").fields([
        F::new("init", "Option<Box<Node>>"),
        F::new("condition", "Option<Box<Node>>"),
        F::new("fexpr", "Option<Box<Node>>"),
        F::new("stmt", "Box<Node>"),
    ]))?;
    run.node(stmt("DoWhileStmt").fields([F::new("stmt", "Box<Node>"), F::new("condition", "Box<Node>")]))?;
    run.node(stmt("WhileStmt").fields([F::new("condition", "Box<Node>"), F::new("stmt", "Box<Node>")]))?;
    run.node(T::new("Parameter").fields([
        F::new("name", "Name"),
        F::new("type", "Option<TypeRef>"),
        F::new("init", "Option<Box<Node>>"),
        F::new("vararg", "bool"),
    ]))?;
    run.node(expr("ExpandExpr").field(F::new("name", "Name")))?;

    run.node(
        decl("FunctionStmt")
            .fields([
                F::new("generics", "Vec<Name>"),
                F::new("params", "Vec<Parameter>"),
                F::new("type", "Option<TypeRef>"),
                F::new("body", "Option<BlockStmt>"),
                accessor(),
                F::new("property", "Option<TokenType>").default_expr("None").computed(),
                uid(),
            ])
            .keep_open(),
    )?;
    run.extend("FunctionStmt", FUNCTION_MEMBERS)?;

    run.node(
        decl("ClassStmt")
            .fields([
                F::new("generics", "Vec<Name>"),
                F::new("extended", "Option<TypeRef>"),
                F::new("implemented", "Vec<TypeRef>"),
                F::new("stmts", "Vec<Node>"),
                accessor(),
                uid(),
            ])
            .keep_open(),
    )?;
    run.extend("ClassStmt", CLASS_MEMBERS)?;
    run.extend_trait("ClassStmt", DISPLAY, CLASS_DISPLAY)?;

    run.node(stmt("ExprStmt").field(F::new("expr", "Box<Node>")))?;
    run.node(stmt("BreakStmt"))?;
    run.node(stmt("ContinueStmt"))?;
    run.node(stmt("ImportStmt").fields([F::new("names", "Vec<Name>"), F::new("source", "String")]))?;

    run.node(
        decl("VariableStmt")
            .fields([
                F::new("type", "Option<TypeRef>"),
                F::new("init", "Option<Box<Node>>"),
                F::new("constant", "bool"),
                accessor(),
                uid(),
            ])
            .keep_open(),
    )?;
    run.extend("VariableStmt", VARIABLE_MEMBERS)?;
    run.extend_trait("VariableStmt", DISPLAY, VARIABLE_DISPLAY)?;

    run.node(
        decl("PropertyStmt")
            .fields([
                F::new("type", "Option<TypeRef>"),
                F::new("init", "Option<Box<Node>>"),
                accessor(),
            ])
            .keep_open(),
    )?;
    run.extend_trait("PropertyStmt", DISPLAY, PROPERTY_DISPLAY)?;
    run.node(stmt("TryCatchStmt").fields([
        F::new("block", "BlockStmt"),
        F::new("variable", "Option<Name>"),
        F::new("cblock", "Option<BlockStmt>"),
        F::new("fblock", "Option<BlockStmt>"),
    ]))?;
    run.node(stmt("ThrowStmt").field(F::new("expr", "Box<Node>")))?;

    run.map("StrNodeMap", "String", "Node");
    run.map("StrUnitMap", "String", "Unit");
    run.map("StrVarMap", "String", "VariableStmt");
    run.map("StrClassMap", "String", "ClassStmt");
    run.map("StrFuncMap", "String", "FunctionStmt");

    run.node(T::new("Unit").fields([
        F::new("file_name", "String").default_text("").computed(),
        F::new("stmts", "Vec<Node>"),
        F::new("imports", "Vec<ImportStmt>"),
        F::new("variables", "StrVarMap").default_expr("StrVarMap::new()").computed(),
        F::new("types", "StrClassMap").default_expr("StrClassMap::new()").computed(),
        F::new("generics", "StrNodeMap").default_expr("StrNodeMap::new()").computed(),
        F::new("functions", "StrFuncMap").default_expr("StrFuncMap::new()").computed(),
        F::new("imported", "StrUnitMap").default_expr("StrUnitMap::new()").computed(),
    ]))?;

    run.visitor();
    run.dispatcher("TypeRefDispatcher", "TypeRef");
    run.dispatcher("Dispatcher", "()");
    Ok(run)
}

/// Generate the built-in syntax tree as Rust source.
pub fn syntax_tree(config: GeneratorConfig) -> Result<String, GenError> {
    syntax_tree_run(config).map(GenerationRun::finish)
}
