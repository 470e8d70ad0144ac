//! Native property and value allow-lists.
//!
//! The property list is the versioned contract with the host platform:
//! changing it changes what the host is promised to accept.

use crate::types::StyleValue;

/// Property names the host platform accepts, sorted for binary search.
pub(crate) const STYLE_PROPERTY_ALLOWLIST: &[&str] = &[
    "alignContent",
    "alignItems",
    "alignSelf",
    "animationDelay",
    "animationDuration",
    "aspectRatio",
    "backfaceVisibility",
    "backgroundColor",
    "borderBottomColor",
    "borderBottomLeftRadius",
    "borderBottomRightRadius",
    "borderBottomStyle",
    "borderBottomWidth",
    "borderColor",
    "borderLeftColor",
    "borderLeftStyle",
    "borderLeftWidth",
    "borderRadius",
    "borderRightColor",
    "borderRightStyle",
    "borderRightWidth",
    "borderStyle",
    "borderTopColor",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderTopStyle",
    "borderTopWidth",
    "borderWidth",
    "bottom",
    "boxSizing",
    "color",
    "direction",
    "display",
    "end",
    "flex",
    "flexBasis",
    "flexDirection",
    "flexGrow",
    "flexShrink",
    "flexWrap",
    "fontFamily",
    "fontSize",
    "fontStyle",
    "fontVariant",
    "fontWeight",
    "gap",
    "gapColumn",
    "gapRow",
    "height",
    "justifyContent",
    "left",
    "letterSpacing",
    "lineHeight",
    "margin",
    "marginBottom",
    "marginLeft",
    "marginRight",
    "marginTop",
    "maxHeight",
    "maxWidth",
    "minHeight",
    "minWidth",
    "objectFit",
    "opacity",
    "overflow",
    "padding",
    "paddingBottom",
    "paddingLeft",
    "paddingRight",
    "paddingTop",
    "pointerEvents",
    "position",
    "resizeMode",
    "right",
    "shadowColor",
    "shadowOffset",
    "shadowOpacity",
    "shadowRadius",
    "shadowWidth",
    "start",
    "textAlign",
    "textDecorationColor",
    "textDecorationLine",
    "textDecorationStyle",
    "textShadowColor",
    "textShadowOffset",
    "textShadowRadius",
    "textTransform",
    "tintColor",
    "top",
    "transform",
    "transformOrigin",
    "transitionDelay",
    "transitionDuration",
    "userSelect",
    "verticalAlign",
    "width",
    "zIndex",
];

/// Check whether a property name is accepted by the host platform.
///
/// `--`-prefixed names pass so custom-property declarations can travel
/// through styles.
pub fn is_native_property(name: &str) -> bool {
    name.starts_with("--") || STYLE_PROPERTY_ALLOWLIST.binary_search(&name).is_ok()
}

/// Check whether a literal value is accepted by the host platform.
///
/// The host has no `inherit`/`initial` keywords, rejects explicit `px`
/// suffixes, and has no calc support.
pub fn is_native_value(value: &StyleValue) -> bool {
    match value {
        StyleValue::String(s) => {
            s != "inherit" && s != "initial" && !s.ends_with("px") && !s.contains("calc(")
        }
        _ => true,
    }
}
