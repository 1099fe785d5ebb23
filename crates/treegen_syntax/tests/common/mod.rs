//! Node builders shared by the syntax tree tests.

#![allow(dead_code)]

use treegen_syntax::tree::*;
use treegen_syntax::{SourceLocation, TokenType};

pub fn loc() -> SourceLocation {
    SourceLocation::new(1, 1)
}

pub fn name(lexemes: &[&str]) -> Name {
    Name::new(lexemes.iter().map(|l| l.to_string()).collect(), loc())
}

pub fn type_ref(lexemes: &[&str]) -> TypeRef {
    TypeRef::new(name(lexemes), Vec::new(), 0, false, loc())
}

pub fn number(value: f64) -> NumberLiteral {
    NumberLiteral::new(value.to_string(), value, loc())
}

pub fn binary(left: f64, oper: TokenType, right: f64) -> BinaryExpr {
    BinaryExpr::new(
        Box::new(number(left).into()),
        oper,
        Box::new(number(right).into()),
        loc(),
    )
}

pub fn variable(ident: &str, constant: bool) -> VariableStmt {
    VariableStmt::with_defaults(name(&[ident]), None, None, constant, loc())
}
