//! Small associative containers over parallel key and value vectors.

use crate::config::GeneratorConfig;
use treegen_core::CodeWriter;

const MAP_TEMPLATE: &str = r#"
/// Map from `@KEY@` to `@VALUE@` over two parallel sequences.
///
/// Lookups scan linearly. Removal moves the last entry into the freed slot.
@DERIVE@
pub struct @NAME@ {
    keys: Vec<@KEY@>,
    items: Vec<@VALUE@>,
}

impl @NAME@ {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            items: Vec::new(),
        }
    }

    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        @KEY@: std::borrow::Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.keys
            .iter()
            .position(|k| <@KEY@ as std::borrow::Borrow<Q>>::borrow(k) == key)
    }

    /// Value stored under `key`, or `None` when absent.
    pub fn get<Q>(&self, key: &Q) -> Option<&@VALUE@>
    where
        @KEY@: std::borrow::Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(key).map(|i| &self.items[i])
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut @VALUE@>
    where
        @KEY@: std::borrow::Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self.position(key) {
            Some(i) => Some(&mut self.items[i]),
            None => None,
        }
    }

    /// Overwrite the value under `key` in place, or append a new pair.
    pub fn set(&mut self, key: @KEY@, value: @VALUE@) {
        match self.position(&key) {
            Some(i) => self.items[i] = value,
            None => {
                self.keys.push(key);
                self.items.push(value);
            }
        }
    }

    pub fn has<Q>(&self, key: &Q) -> bool
    where
        @KEY@: std::borrow::Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Remove `key`, returning its value. The last pair takes its slot.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<@VALUE@>
    where
        @KEY@: std::borrow::Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let i = self.position(key)?;
        self.keys.swap_remove(i);
        Some(self.items.swap_remove(i))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[@KEY@] {
        &self.keys
    }

    /// The live value sequence.
    pub fn values(&self) -> &[@VALUE@] {
        &self.items
    }

    pub fn values_mut(&mut self) -> &mut [@VALUE@] {
        &mut self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = (&@KEY@, &@VALUE@)> {
        self.keys.iter().zip(self.items.iter())
    }
}
"#;

/// Emit map type `name` from `key` to `value`.
pub fn emit_map(w: &mut CodeWriter, name: &str, key: &str, value: &str, config: &GeneratorConfig) {
    let derive = config.derive_attr(&["Default"]).unwrap_or_default();
    tracing::debug!(map = name, key, value, "emitting map");
    let text = MAP_TEMPLATE
        .replace("@DERIVE@", &derive)
        .replace("@NAME@", name)
        .replace("@KEY@", key)
        .replace("@VALUE@", value);
    w.lines(&text);
    w.blank_line();
}
