//! Visitor and dispatcher routing over the generated tree.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use treegen_syntax::tree::*;
use treegen_syntax::TokenType;

/// Records the kind of every node routed to it.
#[derive(Default)]
struct Recorder {
    calls: Vec<&'static str>,
}

/// Answers every node with a type named after its kind.
struct KindTyper;

macro_rules! route_all {
    ($($method:ident: $kind:ident),* $(,)?) => {
        impl Dispatcher for Recorder {
            $(
                fn $method(&mut self, _node: &$kind) {
                    self.calls.push(stringify!($kind));
                }
            )*
        }

        impl TypeRefDispatcher for KindTyper {
            $(
                fn $method(&mut self, _node: &$kind) -> TypeRef {
                    type_ref(&[stringify!($kind)])
                }
            )*
        }
    };
}

route_all! {
    visit_name: Name,
    visit_string_literal: StringLiteral,
    visit_number_literal: NumberLiteral,
    visit_bool_literal: BoolLiteral,
    visit_name_literal: NameLiteral,
    visit_group: Group,
    visit_null_literal: NullLiteral,
    visit_logical_expr: LogicalExpr,
    visit_binary_expr: BinaryExpr,
    visit_assign_expr: AssignExpr,
    visit_unary_expr: UnaryExpr,
    visit_type_cast_expr: TypeCastExpr,
    visit_call_expr: CallExpr,
    visit_array_expr: ArrayExpr,
    visit_array_access_expr: ArrayAccessExpr,
    visit_field_expr: FieldExpr,
    visit_new_expr: NewExpr,
    visit_accessor: Accessor,
    visit_block_stmt: BlockStmt,
    visit_return_stmt: ReturnStmt,
    visit_namespace_stmt: NamespaceStmt,
    visit_type_ref: TypeRef,
    visit_case_stmt: CaseStmt,
    visit_switch_stmt: SwitchStmt,
    visit_if_stmt: IfStmt,
    visit_for_of_stmt: ForOfStmt,
    visit_for_stmt: ForStmt,
    visit_do_while_stmt: DoWhileStmt,
    visit_while_stmt: WhileStmt,
    visit_parameter: Parameter,
    visit_expand_expr: ExpandExpr,
    visit_function_stmt: FunctionStmt,
    visit_class_stmt: ClassStmt,
    visit_expr_stmt: ExprStmt,
    visit_break_stmt: BreakStmt,
    visit_continue_stmt: ContinueStmt,
    visit_import_stmt: ImportStmt,
    visit_variable_stmt: VariableStmt,
    visit_property_stmt: PropertyStmt,
    visit_try_catch_stmt: TryCatchStmt,
    visit_throw_stmt: ThrowStmt,
    visit_unit: Unit,
}

/// Overrides only the binary expression method.
#[derive(Default)]
struct BinaryWatcher {
    seen: Vec<*const BinaryExpr>,
}

impl Visitor for BinaryWatcher {
    type Output = ();

    fn visit_binary_expr(&mut self, node: &BinaryExpr) {
        self.seen.push(node);
    }
}

/// Counts literal leaves, returning the count from each visit.
struct LiteralCounter;

impl Visitor for LiteralCounter {
    type Output = usize;

    fn visit_number_literal(&mut self, _node: &NumberLiteral) -> usize {
        1
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpr) -> usize {
        node.left.accept(self) + node.right.accept(self)
    }
}

#[test]
fn test_noop_visitor_accepts_every_kind() {
    let nodes: Vec<Node> = vec![
        binary(1.0, TokenType::Plus, 2.0).into(),
        BreakStmt::new(loc()).into(),
        variable("x", false).into(),
        Unit::new(Vec::new(), Vec::new(), loc()).into(),
    ];
    let before = nodes.clone();
    let mut visitor = NoopVisitor;
    for node in &nodes {
        node.accept(&mut visitor);
    }
    assert_eq!(nodes, before);
}

#[test]
fn test_overriding_visitor_sees_the_instance_once() {
    let expr = binary(1.0, TokenType::Star, 3.0);
    let mut watcher = BinaryWatcher::default();
    expr.accept(&mut watcher);
    number(5.0).accept(&mut watcher);

    assert_eq!(watcher.seen.len(), 1);
    assert!(std::ptr::eq(watcher.seen[0], &expr));
}

#[test]
fn test_visitor_output_flows_back() {
    let expr = BinaryExpr::new(
        Box::new(binary(1.0, TokenType::Plus, 2.0).into()),
        TokenType::Minus,
        Box::new(number(3.0).into()),
        loc(),
    );
    assert_eq!(expr.accept(&mut LiteralCounter), 3);
    assert_eq!(BreakStmt::new(loc()).accept(&mut LiteralCounter), 0);
}

#[test]
fn test_dispatch_routes_to_the_node_kind_only() {
    // A binary expression over two number literals: only the binary method
    // runs, the operands are not visited.
    let node: Node = binary(2.0, TokenType::Plus, 2.0).into();
    let mut recorder = Recorder::default();
    recorder.dispatch(Some(&node));
    assert_eq!(recorder.calls, vec!["BinaryExpr"]);

    recorder.dispatch(Some(&Node::from(number(1.0))));
    assert_eq!(recorder.calls, vec!["BinaryExpr", "NumberLiteral"]);
}

#[test]
fn test_dispatch_of_absent_node_does_nothing() {
    let mut recorder = Recorder::default();
    recorder.dispatch(None);
    assert!(recorder.calls.is_empty());

    assert_eq!(KindTyper.dispatch(None), None);
}

#[test]
fn test_value_dispatcher_returns_method_result() {
    let node = Node::from(ContinueStmt::new(loc()));
    let ty = KindTyper.dispatch(Some(&node)).map(|t| t.qualified());
    assert_eq!(ty.as_deref(), Some("ContinueStmt"));

    let node = Node::from(type_ref(&["app", "User"]));
    assert_eq!(KindTyper.dispatch(Some(&node)).map(|t| t.qualified()).as_deref(), Some("TypeRef"));
}

#[test]
fn test_every_kind_dispatches_to_its_own_method() {
    let nodes: Vec<Node> = vec![
        name(&["a"]).into(),
        StringLiteral::new("s".to_string(), TokenType::DoubleQuote, loc()).into(),
        NullLiteral::new(loc()).into(),
        UnaryExpr::new(TokenType::Bang, Box::new(number(0.0).into()), false, loc()).into(),
        Accessor::new(vec![TokenType::Static], loc()).into(),
        type_ref(&["number"]).into(),
        ForStmt::new(None, None, None, Box::new(BreakStmt::new(loc()).into()), loc()).into(),
        ImportStmt::new(vec![name(&["x"])], "./x".to_string(), loc()).into(),
        ThrowStmt::new(Box::new(NullLiteral::new(loc()).into()), loc()).into(),
    ];
    let mut recorder = Recorder::default();
    for node in &nodes {
        recorder.dispatch(Some(node));
    }
    let kinds: Vec<&str> = nodes.iter().map(|n| n.kind().as_str()).collect();
    assert_eq!(recorder.calls, kinds);
}
