//! Custom-property registry.
//!
//! Variables are defined once during application setup and read on every
//! resolution. The registry is an explicit store so tests and theme scopes
//! can hold isolated instances; [`VariableRegistry::global`] provides the
//! process-wide default that matches the usual "define at module init,
//! resolve at render" lifecycle.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

/// A literal value stored for a custom property.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// A numeric token.
    Number(f64),
    /// A string token.
    String(String),
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        TokenValue::Number(value)
    }
}

impl From<i32> for TokenValue {
    fn from(value: i32) -> Self {
        TokenValue::Number(value as f64)
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::String(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::String(value)
    }
}

/// A read-only snapshot of custom-property values, resolved against during
/// one resolution call.
pub type CustomProperties = HashMap<String, TokenValue>;

/// Look up a custom property, tolerating a leading `--`.
pub(crate) fn lookup_custom_property<'a>(
    properties: &'a CustomProperties,
    name: &str,
) -> Option<&'a TokenValue> {
    let name = name.strip_prefix("--").unwrap_or(name);
    properties.get(name)
}

/// Store for custom-property definitions.
///
/// Writes happen during an explicit setup phase; resolution reads a
/// [`CustomProperties`] snapshot through the context. Defining variables
/// concurrently with resolution is a usage-contract violation, not something
/// the registry guards against beyond lock consistency.
#[derive(Debug, Default)]
pub struct VariableRegistry {
    values: RwLock<HashMap<String, TokenValue>>,
    counter: AtomicU64,
}

impl VariableRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide default registry.
    pub fn global() -> &'static VariableRegistry {
        static REGISTRY: OnceLock<VariableRegistry> = OnceLock::new();
        REGISTRY.get_or_init(VariableRegistry::new)
    }

    /// Define a group of variables.
    ///
    /// Each key receives a registry-unique generated name; the returned map
    /// goes from the original key to the `var(--...)` reference string to use
    /// in style definitions. Must run before any resolution that references
    /// the result; violating that ordering surfaces later as
    /// unresolved-reference diagnostics.
    pub fn define_vars<K, V>(
        &self,
        tokens: impl IntoIterator<Item = (K, V)>,
    ) -> HashMap<String, String>
    where
        K: Into<String>,
        V: Into<TokenValue>,
    {
        let mut references = HashMap::new();
        let mut values = self.values.write();
        for (key, value) in tokens {
            let key = key.into();
            let id = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
            let unique_name = format!("{key}__id__{id}");
            references.insert(key, format!("var(--{unique_name})"));
            values.insert(unique_name, value.into());
        }
        references
    }

    /// Get a variable's value, tolerating a leading `--`.
    pub fn lookup(&self, name: &str) -> Option<TokenValue> {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.values.read().get(name).cloned()
    }

    /// Check if a variable exists.
    pub fn contains(&self, name: &str) -> bool {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.values.read().contains_key(name)
    }

    /// Snapshot all definitions for use in a resolution context.
    pub fn snapshot(&self) -> CustomProperties {
        self.values.read().clone()
    }

    /// Number of defined variables.
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Check whether no variables are defined.
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}
