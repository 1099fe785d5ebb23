//! The schema registry for one generation run.

use crate::descriptor::{FieldDescriptor, TypeDescriptor};
use crate::error::SchemaError;
use treegen_core::OrderedMap;

/// Append-only, ordered set of kinds registered during one run.
///
/// Registration appends the implicit location field and records the
/// registration index; a registered descriptor is never modified again.
#[derive(Debug, Clone)]
pub struct Registry {
    kinds: OrderedMap<String, TypeDescriptor>,
    location_field: String,
    location_type: String,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_location("location", "SourceLocation")
    }

    /// A registry whose implicit location field is `field: ty`.
    pub fn with_location(field: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            kinds: OrderedMap::new(),
            location_field: field.into(),
            location_type: ty.into(),
        }
    }

    /// Append `desc` to the run.
    ///
    /// A name that is already registered is rejected and the registry is left
    /// unchanged.
    pub fn register(&mut self, mut desc: TypeDescriptor) -> Result<&TypeDescriptor, SchemaError> {
        let index = self.kinds.len();
        desc.register_as(
            index,
            FieldDescriptor::location(&self.location_field, &self.location_type),
        );
        let name = desc.name().to_string();
        let field_count = desc.all_fields().len();

        match self.kinds.try_insert(name, desc) {
            Ok(registered) => {
                tracing::debug!(kind = registered.name(), index, field_count, "registered kind");
                Ok(registered)
            }
            Err((first, rejected)) => Err(SchemaError::DuplicateKind {
                name: rejected.name().to_string(),
                first,
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.kinds.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// Registered kinds in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.kinds.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }

    /// Kinds whose parent is `parent`, in registration order.
    pub fn children<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = &'a TypeDescriptor> + 'a {
        self.iter()
            .filter(move |desc| desc.parent().is_some_and(|p| p.name() == parent))
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn location_field(&self) -> &str {
        &self.location_field
    }

    pub fn location_type(&self) -> &str {
        &self.location_type
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
