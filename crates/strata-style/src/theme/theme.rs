//! Theme overrides for defined variables.

use std::collections::HashMap;

use crate::theme::{CustomProperties, TokenValue};

/// A set of custom-property overrides keyed by generated unique name.
///
/// Produced by [`create_theme`]; the newtype marks the map as a theme payload
/// for whatever merges themes into a resolution snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeTokens(HashMap<String, TokenValue>);

impl ThemeTokens {
    /// Merge these overrides onto a custom-property snapshot.
    pub fn apply_to(&self, target: &mut CustomProperties) {
        for (name, value) in &self.0 {
            target.insert(name.clone(), value.clone());
        }
    }

    /// Iterate over the overrides.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of overridden variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the theme overrides nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build a theme from base variable references and override literals.
///
/// For each base key, the `var(--...)` reference syntax is stripped to
/// recover the generated unique name, which is then mapped to the caller's
/// override value. Base keys the caller does not override are skipped.
pub fn create_theme<K, V>(
    base_tokens: &HashMap<String, String>,
    overrides: impl IntoIterator<Item = (K, V)>,
) -> ThemeTokens
where
    K: Into<String>,
    V: Into<TokenValue>,
{
    let overrides: HashMap<String, TokenValue> = overrides
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();

    let mut tokens = HashMap::new();
    for (key, reference) in base_tokens {
        let Some(name) = strip_reference(reference) else {
            tracing::warn!("malformed variable reference \"{}\" for key \"{}\"", reference, key);
            continue;
        };
        if let Some(value) = overrides.get(key) {
            tokens.insert(name.to_string(), value.clone());
        }
    }
    ThemeTokens(tokens)
}

fn strip_reference(reference: &str) -> Option<&str> {
    reference.strip_prefix("var(--")?.strip_suffix(")")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::VariableRegistry;

    #[test]
    fn theme_overrides_by_unique_name() {
        let registry = VariableRegistry::new();
        let base = registry.define_vars([
            ("accent", TokenValue::from("#007AFF")),
            ("spacing", TokenValue::from(8.0)),
        ]);

        let theme = create_theme(&base, [("accent", "#BF5AF2")]);
        assert_eq!(theme.len(), 1);

        let mut snapshot = registry.snapshot();
        theme.apply_to(&mut snapshot);

        let name = base["accent"]
            .strip_prefix("var(--")
            .and_then(|s| s.strip_suffix(")"))
            .unwrap();
        assert_eq!(snapshot[name], TokenValue::String("#BF5AF2".to_string()));
    }

    #[test]
    fn unoverridden_keys_are_skipped() {
        let registry = VariableRegistry::new();
        let base = registry.define_vars([("a", 1.0), ("b", 2.0)]);

        let theme = create_theme(&base, [("a", 10.0)]);
        assert_eq!(theme.len(), 1);
    }
}
