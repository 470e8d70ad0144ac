//! Fragment flattening.

use crate::types::{CompiledStyle, MediaQueryValue, StyleValue};

/// Flatten an ordered list of style fragments into one map.
///
/// `None` fragments are skipped. Later fragments overwrite earlier entries
/// with the same name, except media-query nodes for the same property, which
/// merge their matched sub-styles into a newly constructed node (later
/// fragment wins per inner key). Conditional styling composed from multiple
/// sources survives flattening this way instead of the last source clobbering
/// the rest.
pub fn flatten_fragments(fragments: &[Option<&CompiledStyle>]) -> CompiledStyle {
    let mut flat = CompiledStyle::new();
    for fragment in fragments.iter().flatten() {
        merge_into(&mut flat, fragment);
    }
    flat
}

pub(crate) fn merge_into(target: &mut CompiledStyle, source: &CompiledStyle) {
    for (name, value) in source.iter() {
        let merged = match (target.get(name), value) {
            (Some(StyleValue::Query(existing)), StyleValue::Query(incoming)) => {
                Some(merge_query_nodes(existing, incoming))
            }
            _ => None,
        };
        match merged {
            Some(node) => target.insert(name, StyleValue::Query(node)),
            None => target.insert(name, value.clone()),
        }
    }
}

fn merge_query_nodes(existing: &MediaQueryValue, incoming: &MediaQueryValue) -> MediaQueryValue {
    let mut matched = existing.matched.clone();
    merge_into(&mut matched, &incoming.matched);
    MediaQueryValue {
        predicate: existing.predicate.clone(),
        matched,
    }
}
