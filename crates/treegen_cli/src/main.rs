//! treegen: syntax-tree code generator CLI.
//!
//! Usage:
//!   treegen [--config FILE] [--out FILE] [--list-kinds]
//!   treegen map NAME KEY VALUE
//!
//! Generated code goes to stdout unless `--out` is given; logs go to stderr
//! and are filtered with `RUST_LOG`.

use clap::{Parser as ClapParser, Subcommand};
use miette::{Context, IntoDiagnostic};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use treegen_emit::{syntax_tree_run, GenerationRun, GeneratorConfig};
use treegen_schema::{Parent, Registry};

#[derive(ClapParser, Debug)]
#[command(name = "treegen", version, about = "Generates Rust syntax-tree node types from a schema")]
struct Cli {
    /// Generator config (JSON).
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write output to FILE instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Print the registered kinds instead of code.
    #[arg(long = "list-kinds")]
    list_kinds: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Emit a single map type.
    Map {
        /// Name of the map type.
        name: String,
        /// Key type.
        key: String,
        /// Value type.
        value: String,
    },
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => GeneratorConfig::load(path).into_diagnostic()?,
        None => GeneratorConfig::default(),
    };

    let output = match &cli.command {
        Some(Command::Map { name, key, value }) => {
            let mut run = GenerationRun::new(config);
            run.map(name, key, value);
            run.finish()
        }
        None => {
            let run = syntax_tree_run(config)
                .into_diagnostic()
                .wrap_err("built-in schema failed")?;
            if cli.list_kinds {
                list_kinds(run.registry())
            } else {
                run.finish()
            }
        }
    };

    write_output(cli.out.as_deref(), &output)
}

/// One line per kind: index, name, parent, constructor arity and the number
/// of kinds deriving from it.
fn list_kinds(registry: &Registry) -> String {
    let mut out = String::new();
    for desc in registry.iter() {
        let parent = match desc.parent() {
            Some(Parent::Capability(name)) => format!("impl {name}"),
            Some(Parent::Base(name)) => format!("base {name}"),
            None => "-".to_string(),
        };
        let index = desc.index().map_or_else(|| "-".to_string(), |i| i.to_string());
        out.push_str(&format!(
            "{:>3}  {:<18} {:<16} arity={} children={}\n",
            index,
            desc.name(),
            parent,
            desc.ctor_fields().count(),
            registry.children(desc.name()).count(),
        ));
    }
    out
}

fn write_output(path: Option<&Path>, text: &str) -> miette::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, text)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = text.len(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes()).into_diagnostic()?;
            stdout.flush().into_diagnostic()?;
        }
    }
    Ok(())
}
