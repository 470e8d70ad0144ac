//! Logical-to-physical property fallbacks.
//!
//! The host platform has no built-in support for CSS logical properties, so
//! names that miss the allow-list are mapped onto physical (or host-native
//! directional) equivalents. Each mapping is a table row pairing the target
//! names with a write policy; the policies differ by property family, and the
//! distinction is load-bearing:
//!
//! - Block/inline shorthands yield to any physical value already present
//!   ([`WritePolicy::FirstWins`]).
//! - `*-start`/`*-end` endpoints of block-axis and inset properties restore
//!   the author's explicit physical value if one was declared anywhere in the
//!   flattened style, regardless of write order ([`WritePolicy::KeepAuthored`]).
//! - Inline-axis endpoints map onto the host's own directional names and
//!   always write ([`WritePolicy::Overwrite`]).

use crate::types::{CompiledStyle, StyleValue};

/// How a fallback writes its target properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WritePolicy {
    /// Write only targets with no current value.
    FirstWins,
    /// Write the authored (pre-pass) value of the target if the author set
    /// one, otherwise the fallback value.
    KeepAuthored,
    /// Write unconditionally.
    Overwrite,
}

/// One row of the fallback table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FallbackRule {
    /// Physical or host-native property names to write.
    pub targets: &'static [&'static str],
    /// Write policy for every target.
    pub policy: WritePolicy,
}

const fn first_wins(targets: &'static [&'static str]) -> FallbackRule {
    FallbackRule {
        targets,
        policy: WritePolicy::FirstWins,
    }
}

const fn keep_authored(targets: &'static [&'static str]) -> FallbackRule {
    FallbackRule {
        targets,
        policy: WritePolicy::KeepAuthored,
    }
}

const fn overwrite(targets: &'static [&'static str]) -> FallbackRule {
    FallbackRule {
        targets,
        policy: WritePolicy::Overwrite,
    }
}

/// Look up the fallback rule for an unsupported property name.
pub(crate) fn fallback_rule(name: &str) -> Option<FallbackRule> {
    let rule = match name {
        // Sizing
        "blockSize" => first_wins(&["height"]),
        "inlineSize" => first_wins(&["width"]),
        "maxBlockSize" => first_wins(&["maxHeight"]),
        "minBlockSize" => first_wins(&["minHeight"]),
        "maxInlineSize" => first_wins(&["maxWidth"]),
        "minInlineSize" => first_wins(&["minWidth"]),

        // Block-axis borders
        "borderBlockColor" => first_wins(&["borderTopColor", "borderBottomColor"]),
        "borderBlockStyle" => first_wins(&["borderTopStyle", "borderBottomStyle"]),
        "borderBlockWidth" => first_wins(&["borderTopWidth", "borderBottomWidth"]),
        "borderBlockEndColor" => keep_authored(&["borderBottomColor"]),
        "borderBlockEndStyle" => keep_authored(&["borderBottomStyle"]),
        "borderBlockEndWidth" => keep_authored(&["borderBottomWidth"]),
        "borderBlockStartColor" => keep_authored(&["borderTopColor"]),
        "borderBlockStartStyle" => keep_authored(&["borderTopStyle"]),
        "borderBlockStartWidth" => keep_authored(&["borderTopWidth"]),

        // Inline-axis borders
        "borderInlineColor" => first_wins(&["borderStartColor", "borderEndColor"]),
        "borderInlineStyle" => first_wins(&["borderStartStyle", "borderEndStyle"]),
        "borderInlineWidth" => first_wins(&["borderStartWidth", "borderEndWidth"]),
        "borderInlineEndColor" => overwrite(&["borderEndColor"]),
        "borderInlineEndStyle" => overwrite(&["borderEndStyle"]),
        "borderInlineEndWidth" => overwrite(&["borderEndWidth"]),
        "borderInlineStartColor" => overwrite(&["borderStartColor"]),
        "borderInlineStartStyle" => overwrite(&["borderStartStyle"]),
        "borderInlineStartWidth" => overwrite(&["borderStartWidth"]),

        // Corner radii
        "borderStartStartRadius" => overwrite(&["borderTopStartRadius"]),
        "borderEndStartRadius" => overwrite(&["borderBottomStartRadius"]),
        "borderStartEndRadius" => overwrite(&["borderTopEndRadius"]),
        "borderEndEndRadius" => overwrite(&["borderBottomEndRadius"]),

        // Insets
        "inset" => first_wins(&["top", "start", "end", "bottom"]),
        "insetBlock" => first_wins(&["top", "bottom"]),
        "insetBlockEnd" => keep_authored(&["bottom"]),
        "insetBlockStart" => keep_authored(&["top"]),
        "insetInline" => first_wins(&["end", "start"]),
        "insetInlineEnd" => keep_authored(&["end"]),
        "insetInlineStart" => keep_authored(&["start"]),

        // Margins
        "marginBlock" => overwrite(&["marginVertical"]),
        "marginBlockStart" => first_wins(&["marginTop"]),
        "marginBlockEnd" => first_wins(&["marginBottom"]),
        "marginInline" => overwrite(&["marginHorizontal"]),
        "marginInlineStart" => overwrite(&["marginStart"]),
        "marginInlineEnd" => overwrite(&["marginEnd"]),

        // Padding
        "paddingBlock" => overwrite(&["paddingVertical"]),
        "paddingBlockStart" => first_wins(&["paddingTop"]),
        "paddingBlockEnd" => first_wins(&["paddingBottom"]),
        "paddingInline" => overwrite(&["paddingHorizontal"]),
        "paddingInlineStart" => overwrite(&["paddingStart"]),
        "paddingInlineEnd" => overwrite(&["paddingEnd"]),

        _ => return None,
    };
    Some(rule)
}

/// Apply a fallback rule against the working style.
///
/// `authored` is the pre-pass snapshot of the flattened style, consulted by
/// [`WritePolicy::KeepAuthored`] so an explicit physical declaration beats the
/// fallback no matter where it appeared.
pub(crate) fn apply_fallback(
    rule: &FallbackRule,
    value: StyleValue,
    working: &mut CompiledStyle,
    authored: &CompiledStyle,
) {
    for target in rule.targets {
        match rule.policy {
            WritePolicy::FirstWins => {
                if !working.contains_key(target) {
                    working.insert(*target, value.clone());
                }
            }
            WritePolicy::KeepAuthored => {
                let kept = authored.get(target).cloned().unwrap_or_else(|| value.clone());
                working.insert(*target, kept);
            }
            WritePolicy::Overwrite => {
                working.insert(*target, value.clone());
            }
        }
    }
}
