//! Generator configuration.
//!
//! Every name the emitters write into generated code comes from here, so a
//! consumer crate can rename the framing without touching the schema.

use crate::error::GenError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use treegen_core::WriterOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Trait every kind implements.
    pub root_capability: String,
    /// Sum type holding any node.
    pub node_enum: String,
    /// Fieldless dispatch tag enum.
    pub kind_enum: String,
    pub visitor: String,
    pub noop_visitor: String,
    /// Name of the implicit source location field.
    pub location_field: String,
    pub location_type: String,
    /// Name of the embedded field holding a concrete base.
    pub base_field: String,
    /// Suffix of the marker trait emitted for a kind used as a capability.
    pub contract_suffix: String,
    /// Derives on every node struct.
    pub derives: Vec<String>,
    pub indent: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root_capability: "SyntaxNode".to_string(),
            node_enum: "Node".to_string(),
            kind_enum: "NodeKind".to_string(),
            visitor: "Visitor".to_string(),
            noop_visitor: "NoopVisitor".to_string(),
            location_field: "location".to_string(),
            location_type: "SourceLocation".to_string(),
            base_field: "base".to_string(),
            contract_suffix: "Capability".to_string(),
            derives: vec!["Debug".to_string(), "Clone".to_string(), "PartialEq".to_string()],
            indent: "    ".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a JSON config. Missing keys keep their defaults.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn load(path: &Path) -> Result<Self, GenError> {
        let content = std::fs::read_to_string(path).map_err(|source| GenError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| GenError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Name of the error returned when parsing an unknown kind tag.
    pub fn unknown_kind_error(&self) -> String {
        format!("Unknown{}", self.kind_enum)
    }

    /// Marker trait standing in for kind `kind` as a capability.
    pub fn contract_trait(&self, kind: &str) -> String {
        format!("{kind}{}", self.contract_suffix)
    }

    /// `#[derive(...)]` over the configured derives plus `extra`.
    pub(crate) fn derive_attr(&self, extra: &[&str]) -> Option<String> {
        let mut derives: Vec<&str> = self.derives.iter().map(String::as_str).collect();
        for name in extra {
            if !derives.contains(name) {
                derives.push(name);
            }
        }
        if derives.is_empty() {
            None
        } else {
            Some(format!("#[derive({})]", derives.join(", ")))
        }
    }

    pub(crate) fn writer_options(&self) -> WriterOptions {
        WriterOptions {
            indent_str: self.indent.clone(),
            ..WriterOptions::default()
        }
    }
}
