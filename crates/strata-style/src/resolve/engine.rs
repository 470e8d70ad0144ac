//! Render-time style resolution.
//!
//! [`resolve_style`] turns an ordered list of preprocessed style fragments
//! plus a [`ResolutionContext`] into the flat, literal-only property map the
//! host platform accepts, along with a small set of derived non-style
//! outputs. Every rejection path degrades to a diagnostic plus a dropped
//! property; a malformed declaration never halts rendering.

use crate::parser::{parse_media_predicate, parse_time_value};
use crate::preprocess::normalize_string;
use crate::resolve::allowlist::{is_native_property, is_native_value};
use crate::resolve::content_box::fix_content_box;
use crate::resolve::context::ResolutionContext;
use crate::resolve::fallbacks::{apply_fallback, fallback_rule};
use crate::resolve::flatten::flatten_fragments;
use crate::theme::{lookup_custom_property, TokenValue};
use crate::types::{CompiledStyle, NativeStyle, StyleValue};

/// Bound on chained custom-property dereferences.
///
/// A reference chain longer than this is treated as a cycle: diagnostic,
/// property dropped.
const MAX_REFERENCE_DEPTH: usize = 32;

/// Properties whose string values are parsed into millisecond numbers.
const TIME_VALUED_PROPERTIES: &[&str] = &[
    "animationDelay",
    "animationDuration",
    "transitionDelay",
    "transitionDuration",
];

/// The resolved output: a native style map plus derived non-style outputs.
///
/// Every field is omitted (`None`) when not triggered; `style` is omitted
/// entirely when no properties survive resolution. Surviving entries are
/// always concrete literals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NativeProps {
    /// The flat native style map.
    pub style: Option<NativeStyle>,
    /// Maximum line count, derived from `lineClamp`.
    pub number_of_lines: Option<u32>,
    /// Hidden from assistive technology, derived from `visibility`.
    pub aria_hidden: Option<bool>,
    /// Pointer-interaction mode, derived from `visibility`.
    pub pointer_events: Option<String>,
    /// Focus-order override, derived from `visibility`.
    pub tab_index: Option<i32>,
}

/// Resolve a list of style fragments against the given context.
///
/// The pipeline: flatten the fragments, resolve conditional and indirection
/// values per property, map unsupported names through the logical-property
/// fallback table, filter names and values against the platform allow-lists,
/// apply whole-style platform quirks, and emit the literal-only output.
///
/// Resolution is a pure function of the fragment list and the context;
/// repeated calls with the same inputs produce identical output.
pub fn resolve_style(
    fragments: &[Option<&CompiledStyle>],
    ctx: &ResolutionContext<'_>,
) -> NativeProps {
    let mut flat = flatten_fragments(fragments);
    let line_clamp = flat.remove("lineClamp");

    // Snapshot before any fallback writes; KeepAuthored endpoints consult it.
    let authored = flat.clone();
    let mut props = NativeProps::default();

    // Keys added by fallback writes during this pass are not revisited; the
    // fallback targets are host-native names written with final values.
    let names: Vec<String> = flat.keys().map(String::from).collect();
    for name in &names {
        let Some(value) = flat.get(name).cloned() else {
            continue;
        };

        // Property-level media queries wait for the whole-style pass.
        if matches!(value, StyleValue::Query(_)) {
            continue;
        }

        let Some(finalized) = finalize_value(name, value, ctx) else {
            flat.remove(name);
            continue;
        };

        if is_native_property(name) || is_passthrough(ctx, name) {
            if !is_native_value(&finalized) {
                warn_unsupported_value(name, &finalized);
                flat.remove(name);
            } else {
                flat.insert(name, finalized);
            }
            continue;
        }

        if name == "visibility" {
            if matches!(finalized.as_str(), Some("hidden") | Some("collapse")) {
                flat.insert("opacity", StyleValue::Number(0.0));
                props.aria_hidden = Some(true);
                props.pointer_events = Some("none".to_string());
                props.tab_index = Some(-1);
            }
            flat.remove(name);
            continue;
        }

        match fallback_rule(name) {
            Some(rule) => apply_fallback(&rule, finalized, &mut flat, &authored),
            None => {
                tracing::warn!("ignoring unsupported style property \"{}\"", name);
            }
        }
        flat.remove(name);
    }

    if !flat.is_empty() {
        resolve_query_nodes(&mut flat, ctx);

        // content-box sizing has no native equivalent; boxSizing itself
        // never reaches the host.
        if flat.get("boxSizing").and_then(StyleValue::as_str) == Some("content-box") {
            fix_content_box(&mut flat);
        }
        flat.remove("boxSizing");

        // borderStyle "none" means no border, which the host spells as a
        // zero-width one.
        if flat.get("borderStyle").and_then(StyleValue::as_str) == Some("none") {
            flat.insert("borderWidth", StyleValue::Number(0.0));
            flat.remove("borderStyle");
        }

        if let Some(weight) = flat.get("fontWeight").and_then(StyleValue::as_number) {
            flat.insert("fontWeight", StyleValue::String(format_font_weight(weight)));
        }

        if flat.get("objectFit").and_then(StyleValue::as_str) == Some("none") {
            tracing::warn!(
                "\"objectFit\" value of \"none\" is not supported; falling back to \"scale-down\""
            );
            flat.insert("objectFit", StyleValue::String("scale-down".to_string()));
        }

        match flat.get("position").and_then(StyleValue::as_str) {
            Some("fixed") => {
                tracing::warn!(
                    "\"position\" value of \"fixed\" is not supported; falling back to \"absolute\""
                );
                flat.insert("position", StyleValue::String("absolute".to_string()));
            }
            Some("sticky") => {
                tracing::warn!(
                    "\"position\" value of \"sticky\" is not supported; falling back to \"relative\""
                );
                flat.insert("position", StyleValue::String("relative".to_string()));
            }
            _ => {}
        }

        for name in TIME_VALUED_PROPERTIES {
            if let Some(StyleValue::String(text)) = flat.get(name) {
                match parse_time_value(text) {
                    Ok(milliseconds) => {
                        flat.insert(*name, StyleValue::Number(milliseconds));
                    }
                    Err(e) => {
                        tracing::warn!("ignoring \"{}\": {}", name, e);
                        flat.remove(name);
                    }
                }
            }
        }

        let style = into_native_style(&flat, ctx);
        if !style.is_empty() {
            props.style = Some(style);
        }
    }

    if let Some(value) = line_clamp
        && let Some(finalized) = finalize_value("lineClamp", value, ctx)
    {
        match finalized.as_number() {
            Some(count) if count >= 0.0 => props.number_of_lines = Some(count as u32),
            _ => {
                tracing::warn!("ignoring non-numeric \"lineClamp\" value");
            }
        }
    }

    props
}

/// Resolve one value to a final literal (or length placeholder ready for the
/// output conversion).
///
/// Branch sets collapse to the active branch, custom-property references
/// dereference through the context snapshot with the chain bounded by
/// [`MAX_REFERENCE_DEPTH`], and length units convert to pixel numbers.
/// Returns `None` when the value must be dropped; the diagnostic has already
/// been emitted.
fn finalize_value(
    name: &str,
    value: StyleValue,
    ctx: &ResolutionContext<'_>,
) -> Option<StyleValue> {
    let mut value = match value {
        StyleValue::Branches(branches) => branches.select(ctx.hover).clone(),
        other => other,
    };

    let mut depth = 0;
    while let StyleValue::Var(reference) = value {
        if depth >= MAX_REFERENCE_DEPTH {
            tracing::error!(
                "custom property \"--{}\" for \"{}\" exceeds {} chained references; \
                 dropping (reference cycle?)",
                reference.name,
                name,
                MAX_REFERENCE_DEPTH
            );
            return None;
        }
        depth += 1;

        match lookup_custom_property(ctx.custom_properties, &reference.name) {
            Some(token) => value = normalize_token(token),
            None => match reference.default {
                Some(default) => value = *default,
                None => {
                    tracing::error!("unrecognized custom property \"--{}\"", reference.name);
                    return None;
                }
            },
        }
    }

    if let StyleValue::Length(length) = value {
        value = StyleValue::Number(length.to_px(
            ctx.font_size,
            ctx.root_font_size,
            ctx.viewport_width,
            ctx.viewport_height,
        ));
    }
    Some(value)
}

/// Resolve the property-level media-query nodes left after the per-property
/// pass.
///
/// Nodes are taken in mapping order; the first matching predicate wins per
/// inner property, matched entries overwrite base values, and non-matching
/// predicates leave base values standing. Merged entries run through the same
/// finalize, name-filter, and value-filter pipeline as directly authored
/// properties.
fn resolve_query_nodes(flat: &mut CompiledStyle, ctx: &ResolutionContext<'_>) {
    let authored = flat.clone();
    let mut claimed: Vec<String> = vec![];

    loop {
        let Some(key) = flat
            .iter()
            .find(|(_, value)| matches!(value, StyleValue::Query(_)))
            .map(|(key, _)| key.to_string())
        else {
            break;
        };
        let Some(StyleValue::Query(node)) = flat.remove(&key) else {
            continue;
        };

        let predicate = match parse_media_predicate(&node.predicate) {
            Ok(predicate) => predicate,
            Err(e) => {
                tracing::warn!("ignoring media query \"{}\": {}", node.predicate, e);
                continue;
            }
        };
        if !predicate.matches(ctx.viewport_width, ctx.viewport_height, ctx.writing_direction) {
            continue;
        }

        for (inner, value) in node.matched.iter() {
            if claimed.iter().any(|c| c == inner) {
                continue;
            }
            merge_query_entry(inner, value.clone(), flat, &authored, &mut claimed, ctx);
        }
    }
}

fn merge_query_entry(
    name: &str,
    value: StyleValue,
    flat: &mut CompiledStyle,
    authored: &CompiledStyle,
    claimed: &mut Vec<String>,
    ctx: &ResolutionContext<'_>,
) {
    // A nested query is queued for the outer loop and claimed so a later
    // predicate cannot replace it.
    if matches!(value, StyleValue::Query(_)) {
        flat.insert(name, value);
        claimed.push(name.to_string());
        return;
    }

    let Some(finalized) = finalize_value(name, value, ctx) else {
        return;
    };

    if is_native_property(name) || is_passthrough(ctx, name) {
        if !is_native_value(&finalized) {
            warn_unsupported_value(name, &finalized);
            return;
        }
        flat.insert(name, finalized);
        claimed.push(name.to_string());
        return;
    }

    match fallback_rule(name) {
        Some(rule) => {
            apply_fallback(&rule, finalized, flat, authored);
            for target in rule.targets {
                claimed.push((*target).to_string());
            }
        }
        None => {
            tracing::warn!("ignoring unsupported style property \"{}\"", name);
        }
    }
}

/// Convert the surviving style into the literal-only output map.
///
/// Values written outside the per-property pass (fallback snapshot restores,
/// merged query entries) may still carry placeholders; they are finalized
/// here, so no unresolved placeholder can escape.
fn into_native_style(flat: &CompiledStyle, ctx: &ResolutionContext<'_>) -> NativeStyle {
    let mut style = NativeStyle::new();
    for (name, value) in flat.iter() {
        let value = if value.is_literal() {
            value.clone()
        } else {
            match finalize_value(name, value.clone(), ctx) {
                Some(finalized) => finalized,
                None => continue,
            }
        };
        match value.into_native() {
            Some(native) => style.insert(name, native),
            None => {
                tracing::warn!("dropping unresolved value for style property \"{}\"", name);
            }
        }
    }
    style
}

fn normalize_token(token: &TokenValue) -> StyleValue {
    match token {
        TokenValue::Number(value) => StyleValue::Number(*value),
        TokenValue::String(text) => normalize_string(text),
    }
}

fn is_passthrough(ctx: &ResolutionContext<'_>, name: &str) -> bool {
    ctx.passthrough_properties.iter().any(|p| p.as_str() == name)
}

fn warn_unsupported_value(name: &str, value: &StyleValue) {
    let shown = match value {
        StyleValue::String(s) => s.clone(),
        StyleValue::Number(n) => n.to_string(),
        other => format!("{other:?}"),
    };
    tracing::warn!(
        "ignoring unsupported style value \"{}\" for property \"{}\"",
        shown,
        name
    );
}

fn format_font_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{}", weight as i64)
    } else {
        weight.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocess::preprocess;
    use crate::theme::CustomProperties;
    use crate::types::{NativeValue, RawStyle, WritingDirection};

    fn resolve_one(style: &RawStyle, ctx: &ResolutionContext<'_>) -> NativeProps {
        let compiled = preprocess(style);
        resolve_style(&[Some(&compiled)], ctx)
    }

    #[test]
    fn literals_pass_through() {
        let snapshot = CustomProperties::new();
        let ctx = ResolutionContext::new(&snapshot);
        let props = resolve_one(&RawStyle::new().set("color", "red").set("width", 10.0), &ctx);

        let style = props.style.unwrap();
        assert_eq!(style.get("color"), Some(&NativeValue::String("red".into())));
        assert_eq!(style.get("width"), Some(&NativeValue::Number(10.0)));
    }

    #[test]
    fn empty_input_omits_style() {
        let snapshot = CustomProperties::new();
        let ctx = ResolutionContext::new(&snapshot);
        let props = resolve_style(&[], &ctx);
        assert_eq!(props, NativeProps::default());
    }

    #[test]
    fn hover_branch_selection() {
        let snapshot = CustomProperties::new();
        let style = RawStyle::new().set(
            "color",
            RawStyle::new().set("default", "red").set(":hover", "blue"),
        );

        let ctx = ResolutionContext::new(&snapshot);
        let props = resolve_one(&style, &ctx);
        assert_eq!(
            props.style.unwrap().get("color"),
            Some(&NativeValue::String("red".into()))
        );

        let hover_ctx = ResolutionContext {
            hover: true,
            ..ResolutionContext::new(&snapshot)
        };
        let props = resolve_one(&style, &hover_ctx);
        assert_eq!(
            props.style.unwrap().get("color"),
            Some(&NativeValue::String("blue".into()))
        );
    }

    #[test]
    fn chained_references_resolve() {
        let mut snapshot = CustomProperties::new();
        snapshot.insert("inner__id__1".into(), TokenValue::String("2rem".into()));
        snapshot.insert(
            "outer__id__2".into(),
            TokenValue::String("var(--inner__id__1)".into()),
        );

        let ctx = ResolutionContext::new(&snapshot);
        let props = resolve_one(
            &RawStyle::new().set("fontSize", "var(--outer__id__2)"),
            &ctx,
        );

        assert_eq!(
            props.style.unwrap().get("fontSize"),
            Some(&NativeValue::Number(32.0))
        );
    }

    #[test]
    fn cyclic_references_are_dropped() {
        let mut snapshot = CustomProperties::new();
        snapshot.insert("a__id__1".into(), TokenValue::String("var(--b__id__2)".into()));
        snapshot.insert("b__id__2".into(), TokenValue::String("var(--a__id__1)".into()));

        let ctx = ResolutionContext::new(&snapshot);
        let props = resolve_one(&RawStyle::new().set("color", "var(--a__id__1)"), &ctx);

        assert!(props.style.is_none());
    }

    #[test]
    fn reference_default_applies_when_undefined() {
        let snapshot = CustomProperties::new();
        let ctx = ResolutionContext::new(&snapshot);
        let props = resolve_one(
            &RawStyle::new().set("gap", "var(--missing__id__9, 1.5rem)"),
            &ctx,
        );

        assert_eq!(
            props.style.unwrap().get("gap"),
            Some(&NativeValue::Number(24.0))
        );
    }

    #[test]
    fn matching_query_overrides_base() {
        let snapshot = CustomProperties::new();
        let style = RawStyle::new().set("width", 100.0).set(
            "@media (min-width: 600px)",
            RawStyle::new().set("width", 200.0),
        );

        let narrow = ResolutionContext {
            viewport_width: 400.0,
            ..ResolutionContext::new(&snapshot)
        };
        let props = resolve_one(&style, &narrow);
        assert_eq!(
            props.style.unwrap().get("width"),
            Some(&NativeValue::Number(100.0))
        );

        let wide = ResolutionContext {
            viewport_width: 800.0,
            ..ResolutionContext::new(&snapshot)
        };
        let props = resolve_one(&style, &wide);
        assert_eq!(
            props.style.unwrap().get("width"),
            Some(&NativeValue::Number(200.0))
        );
    }

    #[test]
    fn first_matching_predicate_wins_per_property() {
        let snapshot = CustomProperties::new();
        let style = RawStyle::new()
            .set(
                "@media (min-width: 100px)",
                RawStyle::new().set("width", 1.0),
            )
            .set(
                "@media (min-width: 200px)",
                RawStyle::new().set("width", 2.0).set("height", 3.0),
            );

        let ctx = ResolutionContext {
            viewport_width: 500.0,
            ..ResolutionContext::new(&snapshot)
        };
        let props = resolve_one(&style, &ctx);

        let style = props.style.unwrap();
        assert_eq!(style.get("width"), Some(&NativeValue::Number(1.0)));
        assert_eq!(style.get("height"), Some(&NativeValue::Number(3.0)));
    }

    #[test]
    fn direction_query_follows_context() {
        let snapshot = CustomProperties::new();
        let style = RawStyle::new().set("textAlign", "left").set(
            "@media (direction: rtl)",
            RawStyle::new().set("textAlign", "right"),
        );

        let ctx = ResolutionContext {
            writing_direction: WritingDirection::Rtl,
            ..ResolutionContext::new(&snapshot)
        };
        let props = resolve_one(&style, &ctx);
        assert_eq!(
            props.style.unwrap().get("textAlign"),
            Some(&NativeValue::String("right".into()))
        );
    }

    #[test]
    fn visibility_hidden_derives_flags() {
        let snapshot = CustomProperties::new();
        let ctx = ResolutionContext::new(&snapshot);
        let props = resolve_one(&RawStyle::new().set("visibility", "hidden"), &ctx);

        assert_eq!(props.aria_hidden, Some(true));
        assert_eq!(props.pointer_events.as_deref(), Some("none"));
        assert_eq!(props.tab_index, Some(-1));
        assert_eq!(
            props.style.unwrap().get("opacity"),
            Some(&NativeValue::Number(0.0))
        );
    }

    #[test]
    fn visibility_visible_is_dropped_quietly() {
        let snapshot = CustomProperties::new();
        let ctx = ResolutionContext::new(&snapshot);
        let props = resolve_one(&RawStyle::new().set("visibility", "visible"), &ctx);

        assert!(props.style.is_none());
        assert_eq!(props.aria_hidden, None);
    }

    #[test]
    fn line_clamp_becomes_number_of_lines() {
        let snapshot = CustomProperties::new();
        let ctx = ResolutionContext::new(&snapshot);
        let props = resolve_one(
            &RawStyle::new().set("lineClamp", 3.0).set("color", "red"),
            &ctx,
        );

        assert_eq!(props.number_of_lines, Some(3));
        assert!(props.style.unwrap().get("lineClamp").is_none());
    }

    #[test]
    fn font_weight_number_becomes_string() {
        let snapshot = CustomProperties::new();
        let ctx = ResolutionContext::new(&snapshot);
        let props = resolve_one(&RawStyle::new().set("fontWeight", 700.0), &ctx);

        assert_eq!(
            props.style.unwrap().get("fontWeight"),
            Some(&NativeValue::String("700".into()))
        );
    }

    #[test]
    fn position_keywords_substitute() {
        let snapshot = CustomProperties::new();
        let ctx = ResolutionContext::new(&snapshot);

        let props = resolve_one(&RawStyle::new().set("position", "fixed"), &ctx);
        assert_eq!(
            props.style.unwrap().get("position"),
            Some(&NativeValue::String("absolute".into()))
        );

        let props = resolve_one(&RawStyle::new().set("position", "sticky"), &ctx);
        assert_eq!(
            props.style.unwrap().get("position"),
            Some(&NativeValue::String("relative".into()))
        );
    }

    #[test]
    fn border_style_none_zeroes_width() {
        let snapshot = CustomProperties::new();
        let ctx = ResolutionContext::new(&snapshot);
        let props = resolve_one(
            &RawStyle::new()
                .set("borderStyle", "none")
                .set("borderWidth", 4.0),
            &ctx,
        );

        let style = props.style.unwrap();
        assert_eq!(style.get("borderWidth"), Some(&NativeValue::Number(0.0)));
        assert!(style.get("borderStyle").is_none());
    }

    #[test]
    fn time_values_parse_to_milliseconds() {
        let snapshot = CustomProperties::new();
        let ctx = ResolutionContext::new(&snapshot);
        let props = resolve_one(
            &RawStyle::new()
                .set("transitionDuration", "0.5s")
                .set("transitionDelay", "100ms"),
            &ctx,
        );

        let style = props.style.unwrap();
        assert_eq!(
            style.get("transitionDuration"),
            Some(&NativeValue::Number(500.0))
        );
        assert_eq!(style.get("transitionDelay"), Some(&NativeValue::Number(100.0)));
    }

    #[test]
    fn passthrough_names_survive() {
        let snapshot = CustomProperties::new();
        let passthrough = vec!["experimentalGlow".to_string()];
        let ctx = ResolutionContext {
            passthrough_properties: &passthrough,
            ..ResolutionContext::new(&snapshot)
        };
        let props = resolve_one(&RawStyle::new().set("experimentalGlow", "warm"), &ctx);

        assert_eq!(
            props.style.unwrap().get("experimentalGlow"),
            Some(&NativeValue::String("warm".into()))
        );
    }

    #[test]
    fn font_weight_formatting() {
        assert_eq!(format_font_weight(700.0), "700");
        assert_eq!(format_font_weight(550.5), "550.5");
    }
}
