//! Compile-time style preprocessing.
//!
//! Normalizes an authored [`RawStyle`] into a [`CompiledStyle`]: media-query
//! properties become typed nodes wrapping a recursively preprocessed
//! sub-style, shadow shorthands are decomposed into their physical
//! components, and string values carrying `var()` or length-unit syntax
//! become typed placeholders. Runs once per distinct style definition,
//! ideally at module-initialization time; resolution re-uses the result on
//! every render.

use crate::parser::{is_media_query, parse_length, parse_shadow_list};
use crate::types::{
    BranchedValue, CompiledStyle, LengthValue, MediaQueryValue, RawStyle, RawValue, ShadowOffset,
    StyleValue, VarRef,
};

enum Carried {
    Raw(RawValue),
    Typed(StyleValue),
}

/// Preprocess one authored style definition.
pub fn preprocess(style: &RawStyle) -> CompiledStyle {
    let mut carried: Vec<(String, Carried)> = vec![];

    for (name, value) in style.iter() {
        if is_media_query(name)
            && let RawValue::Nested(sub_style) = value
        {
            let node = MediaQueryValue {
                predicate: name.to_string(),
                matched: preprocess(sub_style),
            };
            carried.push((name.to_string(), Carried::Typed(StyleValue::Query(node))));
            continue;
        }

        // The native shadow model cannot express box-shadow
        if name == "boxShadow" && matches!(value, RawValue::String(_)) {
            tracing::warn!("\"boxShadow\" is not supported by the native style target");
            continue;
        }

        // Text shadows are supported, but only decomposed and only one
        if name == "textShadow"
            && let RawValue::String(shorthand) = value
        {
            decompose_text_shadow(shorthand, &mut carried);
            continue;
        }

        carried.push((name.to_string(), Carried::Raw(value.clone())));
    }

    let mut compiled = CompiledStyle::new();
    for (name, entry) in carried {
        match entry {
            Carried::Typed(value) => compiled.insert(name, value),
            Carried::Raw(raw) => {
                let raw = if name == "lineHeight" {
                    polyfill_line_height(raw)
                } else {
                    raw
                };
                match normalize_value(&raw) {
                    Some(value) => compiled.insert(name, value),
                    None => {
                        tracing::warn!("ignoring unsupported value shape for \"{}\"", name);
                    }
                }
            }
        }
    }
    compiled
}

/// Wrap a style factory so each invocation is normalized afresh.
///
/// Factories are re-normalized on every call; nothing is cached across calls
/// with different arguments.
pub fn preprocess_fn<A, F>(factory: F) -> impl Fn(A) -> CompiledStyle
where
    F: Fn(A) -> RawStyle,
{
    move |args| preprocess(&factory(args))
}

/// Keyframe animations have no native equivalent: diagnostic, then the input
/// is returned unchanged.
pub fn keyframes(definition: &RawStyle) -> RawStyle {
    tracing::error!("keyframes are not supported by the native style target");
    definition.clone()
}

/// Return the first candidate value.
///
/// The native target has no runtime feature detection, so the first (most
/// preferred) candidate always wins.
pub fn first_that_works<T>(values: impl IntoIterator<Item = T>) -> Option<T> {
    values.into_iter().next()
}

fn decompose_text_shadow(shorthand: &str, carried: &mut Vec<(String, Carried)>) {
    let shadows = match parse_shadow_list(shorthand) {
        Ok(shadows) => shadows,
        Err(e) => {
            tracing::warn!("failed to parse \"textShadow\": {}", e);
            return;
        }
    };
    let Some(shadow) = shadows.first() else {
        tracing::warn!("empty \"textShadow\" value");
        return;
    };
    if shadows.len() > 1 {
        tracing::warn!("multiple \"textShadow\" values are not supported; keeping the first");
    }

    if let Some(color) = &shadow.color {
        // Kept raw so var() and length syntax in the color re-normalizes below
        carried.push((
            "textShadowColor".to_string(),
            Carried::Raw(RawValue::String(color.clone())),
        ));
    }
    carried.push((
        "textShadowOffset".to_string(),
        Carried::Typed(StyleValue::Offset(ShadowOffset {
            width: shadow.offset_x,
            height: shadow.offset_y,
        })),
    ));
    carried.push((
        "textShadowRadius".to_string(),
        Carried::Raw(RawValue::Number(shadow.blur_radius)),
    ));
}

/// Unitless line-height polyfill.
///
/// The native target reads a bare number as pixels, while authoring
/// semantics treat it as a font-size multiple. Bare numbers and unitless
/// numeric strings become em lengths; anything else is left alone.
fn polyfill_line_height(value: RawValue) -> RawValue {
    match value {
        RawValue::Number(n) => RawValue::String(format!("{n}em")),
        RawValue::String(s) => {
            if parse_length(&s).is_none() && s.trim().parse::<f64>().is_ok() {
                RawValue::String(format!("{}em", s.trim()))
            } else {
                RawValue::String(s)
            }
        }
        other => other,
    }
}

/// Normalize one raw value into the typed representation.
///
/// Returns `None` for nested shapes that are neither a branch set nor a
/// width/height pair.
fn normalize_value(value: &RawValue) -> Option<StyleValue> {
    match value {
        RawValue::Number(n) => Some(StyleValue::Number(*n)),
        RawValue::String(s) => Some(normalize_string(s)),
        RawValue::Nested(map) => {
            if let Some(branches) = branches_from_raw(map) {
                return Some(StyleValue::Branches(branches));
            }
            shadow_offset_from_raw(map).map(StyleValue::Offset)
        }
    }
}

/// Normalize a string value: `var()` syntax wins, then length-with-unit
/// (native px collapses to a plain number), otherwise the string passes
/// through.
pub(crate) fn normalize_string(input: &str) -> StyleValue {
    if let Some(reference) = parse_var_reference(input) {
        return StyleValue::Var(reference);
    }
    match parse_length(input) {
        Some(LengthValue::Px(v)) => StyleValue::Number(v),
        Some(length) => StyleValue::Length(length),
        None => StyleValue::String(input.to_string()),
    }
}

/// Parse `var(--name)` or `var(--name, fallback)` syntax.
pub(crate) fn parse_var_reference(input: &str) -> Option<VarRef> {
    let inner = input.trim().strip_prefix("var(")?.strip_suffix(")")?;

    // Split at the first comma outside parentheses
    let mut depth = 0usize;
    let mut split = None;
    for (index, ch) in inner.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                split = Some(index);
                break;
            }
            _ => {}
        }
    }

    let (name_part, default_part) = match split {
        Some(index) => (&inner[..index], Some(inner[index + 1..].trim())),
        None => (inner, None),
    };
    let name = name_part.trim().strip_prefix("--")?;
    if name.is_empty() {
        return None;
    }

    let default = default_part
        .filter(|s| !s.is_empty())
        .map(|s| Box::new(normalize_string(s)));
    Some(VarRef {
        name: name.to_string(),
        default,
    })
}

fn branches_from_raw(map: &RawStyle) -> Option<BranchedValue> {
    let default = scalar_branch_value(map.get("default")?)?;
    let mut branches = vec![];
    for (key, value) in map.iter() {
        if key == "default" {
            continue;
        }
        match scalar_branch_value(value) {
            Some(branch) => branches.push((key.to_string(), branch)),
            None => {
                tracing::warn!("ignoring non-scalar conditional branch \"{}\"", key);
            }
        }
    }
    Some(BranchedValue::new(default, branches))
}

fn scalar_branch_value(value: &RawValue) -> Option<StyleValue> {
    match value {
        RawValue::Nested(_) => None,
        RawValue::Number(n) => Some(StyleValue::Number(*n)),
        RawValue::String(s) => Some(normalize_string(s)),
    }
}

fn shadow_offset_from_raw(map: &RawStyle) -> Option<ShadowOffset> {
    if map.len() != 2 {
        return None;
    }
    match (map.get("width")?, map.get("height")?) {
        (RawValue::Number(width), RawValue::Number(height)) => Some(ShadowOffset {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}
