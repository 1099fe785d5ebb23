//! Generates the syntax tree from the built-in schema, plus the two-kind
//! tree compiled by the scenario tests.

use std::path::{Path, PathBuf};
use treegen_emit::{syntax_tree, GenError, GenerationRun, GeneratorConfig};
use treegen_schema::{FieldDescriptor, TypeDescriptor};

const SCENARIO_FRAMING: &str = r#"use treegen_syntax::SourceLocation;

/// Behaviour shared by every scenario node.
pub trait SyntaxNode {
    fn kind(&self) -> NodeKind;

    fn location(&self) -> &SourceLocation;

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output;
}
"#;

/// Kind `A` holds a value; kind `B` implements `A` over two `A` operands.
fn scenario() -> Result<String, GenError> {
    let mut run = GenerationRun::default();
    run.literal(SCENARIO_FRAMING);
    run.node(TypeDescriptor::new("A").field(FieldDescriptor::new("value", "f64")))?;
    run.node(
        TypeDescriptor::new("B")
            .implements("A")
            .fields([FieldDescriptor::new("left", "A"), FieldDescriptor::new("right", "A")]),
    )?;
    run.visitor();
    run.dispatcher("Dispatcher", "()");
    Ok(run.finish())
}

fn generate(out_dir: &Path, file: &str, source: Result<String, GenError>) {
    let source = match source {
        Ok(source) => source,
        Err(err) => panic!("generating {file} failed: {err}"),
    };
    let path = out_dir.join(file);
    if let Err(err) = std::fs::write(&path, source) {
        panic!("failed to write {}: {err}", path.display());
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = match std::env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => panic!("OUT_DIR is not set"),
    };
    generate(&out_dir, "syntax.rs", syntax_tree(GeneratorConfig::default()));
    generate(&out_dir, "scenario.rs", scenario());
}
