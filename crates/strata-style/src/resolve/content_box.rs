//! `boxSizing: content-box` emulation.
//!
//! The host platform sizes elements border-box: declared widths and heights
//! include padding and border. Emulating content-box means growing each
//! declared dimension by the padding and border on that axis.

use crate::types::{CompiledStyle, StyleValue};

const HORIZONTAL_SIZING: &[&str] = &["width", "minWidth", "maxWidth"];
const VERTICAL_SIZING: &[&str] = &["height", "minHeight", "maxHeight"];

/// Grow numeric sizing properties by the padding and border on their axis.
///
/// Edge values fall back to their shorthand (`padding`, `borderWidth`) when
/// the specific property is absent. Non-numeric dimensions (percentages,
/// keywords) cannot be adjusted and are left alone with a diagnostic.
pub(crate) fn fix_content_box(style: &mut CompiledStyle) {
    let horizontal = edge(style, "paddingLeft", "padding")
        + edge(style, "paddingRight", "padding")
        + edge(style, "borderLeftWidth", "borderWidth")
        + edge(style, "borderRightWidth", "borderWidth");
    let vertical = edge(style, "paddingTop", "padding")
        + edge(style, "paddingBottom", "padding")
        + edge(style, "borderTopWidth", "borderWidth")
        + edge(style, "borderBottomWidth", "borderWidth");

    adjust_sizing(style, HORIZONTAL_SIZING, horizontal);
    adjust_sizing(style, VERTICAL_SIZING, vertical);
}

fn adjust_sizing(style: &mut CompiledStyle, properties: &[&str], extra: f64) {
    for name in properties {
        let Some(value) = style.get(name) else {
            continue;
        };
        match value.as_number() {
            Some(size) => style.insert(*name, StyleValue::Number(size + extra)),
            None => {
                tracing::warn!(
                    "cannot apply content-box sizing to non-numeric \"{}\"",
                    name
                );
            }
        }
    }
}

fn edge(style: &CompiledStyle, specific: &str, shorthand: &str) -> f64 {
    style
        .get(specific)
        .and_then(StyleValue::as_number)
        .or_else(|| style.get(shorthand).and_then(StyleValue::as_number))
        .unwrap_or(0.0)
}
