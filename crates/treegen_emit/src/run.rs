//! One generation run: a registry and the stream written from it.

use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::{dispatcher, kinds, map, node, visitor};
use treegen_core::CodeWriter;
use treegen_schema::{Parent, Registry, TypeDescriptor};

/// First line of every generated stream.
pub const HEADER: &str = "// @generated by treegen. Do not edit by hand.";

/// Registers kinds and writes their Rust definitions, in call order.
///
/// A failed call leaves the run usable but the stream incomplete; callers
/// discard the run on error.
#[derive(Debug)]
pub struct GenerationRun {
    config: GeneratorConfig,
    registry: Registry,
    writer: CodeWriter,
    /// Kinds whose contract trait has been emitted.
    contracts: Vec<String>,
}

impl GenerationRun {
    pub fn new(config: GeneratorConfig) -> Self {
        let registry = Registry::with_location(&config.location_field, &config.location_type);
        let mut writer = CodeWriter::with_options(config.writer_options());
        writer.line(HEADER);
        writer.blank_line();
        Self {
            config,
            registry,
            writer,
            contracts: Vec::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Append hand-written framing text verbatim.
    pub fn literal(&mut self, text: &str) {
        self.writer.raw(text);
        self.writer.blank_line();
    }

    /// Register `desc` and emit its definition.
    ///
    /// A capability naming an already registered kind is emitted as that
    /// kind's contract trait, written once before its first implementor.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = desc.name()))]
    pub fn node(&mut self, desc: TypeDescriptor) -> Result<(), GenError> {
        let contract_kind = match desc.parent() {
            Some(Parent::Capability(kind)) if self.registry.contains(kind) => Some(kind.clone()),
            _ => None,
        };
        let desc = self.registry.register(desc)?;

        let contract = contract_kind.map(|kind| self.config.contract_trait(&kind));
        if let (Some(kind), Some(name)) = (desc.parent().map(Parent::name), contract.as_deref()) {
            if !self.contracts.iter().any(|k| k == kind) {
                tracing::debug!(kind, contract = name, "emitting contract trait");
                node::emit_contract(&mut self.writer, kind, name, &self.config);
                self.contracts.push(kind.to_string());
            }
        }
        node::emit_node(&mut self.writer, desc, &self.config, contract.as_deref());
        Ok(())
    }

    /// Emit hand-written `members` for an open kind.
    pub fn extend(&mut self, kind: &str, members: &str) -> Result<(), GenError> {
        self.check_open(kind)?;
        node::emit_extension(&mut self.writer, kind, members);
        Ok(())
    }

    /// Emit a hand-written impl of `trait_path` for an open kind.
    pub fn extend_trait(&mut self, kind: &str, trait_path: &str, members: &str) -> Result<(), GenError> {
        self.check_open(kind)?;
        node::emit_trait_extension(&mut self.writer, kind, trait_path, members);
        Ok(())
    }

    fn check_open(&self, kind: &str) -> Result<(), GenError> {
        let desc = self
            .registry
            .get(kind)
            .ok_or_else(|| GenError::UnknownKind(kind.to_string()))?;
        if !desc.is_open() {
            return Err(GenError::ClosedKind(kind.to_string()));
        }
        Ok(())
    }

    pub fn map(&mut self, name: &str, key: &str, value: &str) {
        map::emit_map(&mut self.writer, name, key, value, &self.config);
    }

    /// Emit the kind set and the visitor over every kind registered so far.
    #[tracing::instrument(level = "debug", skip_all, fields(kinds = self.registry.len()))]
    pub fn visitor(&mut self) {
        kinds::emit_kind_set(&mut self.writer, &self.registry, &self.config);
        visitor::emit_visitor(&mut self.writer, &self.registry, &self.config);
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn dispatcher(&mut self, name: &str, output: &str) {
        dispatcher::emit_dispatcher(&mut self.writer, &self.registry, &self.config, name, output);
    }

    /// The stream written so far.
    pub fn output(&self) -> &str {
        self.writer.as_str()
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn finish(self) -> String {
        tracing::debug!(
            kinds = self.registry.len(),
            bytes = self.writer.len(),
            "generation finished"
        );
        self.writer.finish()
    }
}

impl Default for GenerationRun {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
