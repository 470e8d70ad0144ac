//! Style value types.
//!
//! Authored styles are plain [`RawValue`] maps. The preprocessor normalizes
//! them into [`StyleValue`], the typed intermediate representation the
//! resolver works on: literals pass through, while length units, custom
//! property references, and conditional branches become typed placeholders
//! resolved at render time.
//!
//! # Example
//!
//! ```
//! use strata_style::types::LengthValue;
//!
//! // Resolve relative units given context
//! let em = LengthValue::Em(1.5);
//! assert_eq!(em.to_px(14.0, 16.0, 1280.0, 720.0), 21.0); // 1.5 * 14
//!
//! let vw = LengthValue::Vw(50.0);
//! assert_eq!(vw.to_px(14.0, 16.0, 1280.0, 720.0), 640.0); // 50% of 1280
//! ```

use crate::types::OrderedMap;

/// An authored style definition: property name to raw value, in authoring
/// order. Consumed by the preprocessor.
pub type RawStyle = OrderedMap<RawValue>;

/// A preprocessed style definition: property name to typed value.
pub type CompiledStyle = OrderedMap<StyleValue>;

/// A raw, author-facing style value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// A plain number.
    Number(f64),
    /// A string value, possibly carrying length-unit or `var()` syntax.
    String(String),
    /// A nested map: a conditional branch set (`default` / `:hover` / media
    /// predicates) or the sub-style of a media-query property.
    Nested(RawStyle),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::String(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::String(value)
    }
}

impl From<RawStyle> for RawValue {
    fn from(value: RawStyle) -> Self {
        RawValue::Nested(value)
    }
}

impl RawStyle {
    /// Set a property, chaining by value. Builder-style authoring sugar.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(name, value.into());
        self
    }
}

/// A typed style value produced by preprocessing.
///
/// Literal variants (`Number`, `String`, `Offset`) are final; the rest are
/// placeholders the resolver replaces using the resolution context.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A plain numeric literal.
    Number(f64),
    /// A plain string literal.
    String(String),
    /// A length with a relative unit, resolved to pixels at render time.
    Length(LengthValue),
    /// A reference to a custom property.
    Var(VarRef),
    /// A value-level conditional branch set (`default` / `:hover` / ...).
    Branches(BranchedValue),
    /// A media-query node: predicate plus nested sub-style.
    Query(MediaQueryValue),
    /// A width/height pair, used for decomposed shadow offsets.
    Offset(ShadowOffset),
}

impl StyleValue {
    /// Check whether this value is a final literal.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            StyleValue::Number(_) | StyleValue::String(_) | StyleValue::Offset(_)
        )
    }

    /// Get the string content if this is a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get the numeric content if this is a number literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Convert into an output value. Returns `None` for unresolved
    /// placeholder variants.
    pub fn into_native(self) -> Option<NativeValue> {
        match self {
            StyleValue::Number(v) => Some(NativeValue::Number(v)),
            StyleValue::String(s) => Some(NativeValue::String(s)),
            StyleValue::Offset(o) => Some(NativeValue::Offset(o)),
            _ => None,
        }
    }
}

/// CSS-like length values with relative units.
///
/// Pixel lengths collapse to plain numbers during preprocessing; the `Px`
/// variant exists so parsers can report the unit they saw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthValue {
    /// Absolute pixels.
    Px(f64),
    /// Relative to current font size.
    Em(f64),
    /// Relative to root font size.
    Rem(f64),
    /// Percentage of viewport width.
    Vw(f64),
    /// Percentage of viewport height.
    Vh(f64),
    /// Percentage of the smaller viewport dimension.
    Vmin(f64),
    /// Percentage of the larger viewport dimension.
    Vmax(f64),
}

impl LengthValue {
    /// Resolve to pixels given the context.
    ///
    /// # Arguments
    /// * `font_size` - Current element's font size (for em)
    /// * `root_font_size` - Root element's font size (for rem)
    /// * `viewport_width` / `viewport_height` - Viewport dimensions (for v* units)
    pub fn to_px(
        &self,
        font_size: f64,
        root_font_size: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) -> f64 {
        match self {
            LengthValue::Px(v) => *v,
            LengthValue::Em(v) => v * font_size,
            LengthValue::Rem(v) => v * root_font_size,
            LengthValue::Vw(v) => v / 100.0 * viewport_width,
            LengthValue::Vh(v) => v / 100.0 * viewport_height,
            LengthValue::Vmin(v) => v / 100.0 * viewport_width.min(viewport_height),
            LengthValue::Vmax(v) => v / 100.0 * viewport_width.max(viewport_height),
        }
    }
}

/// A reference to a custom property, with an optional inline default.
///
/// `name` is the generated unique name, without the `--` prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct VarRef {
    /// The unique variable name.
    pub name: String,
    /// The inline fallback, already normalized.
    pub default: Option<Box<StyleValue>>,
}

/// A value-level conditional branch set.
///
/// The `default` branch is mandatory and held separately, so selection can
/// never come up empty.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchedValue {
    default: Box<StyleValue>,
    branches: Vec<(String, StyleValue)>,
}

impl BranchedValue {
    /// Create a branch set from the default value and the remaining branches.
    pub fn new(default: StyleValue, branches: Vec<(String, StyleValue)>) -> Self {
        Self {
            default: Box::new(default),
            branches,
        }
    }

    /// The default branch value.
    pub fn default_value(&self) -> &StyleValue {
        &self.default
    }

    /// Look up a non-default branch by key.
    pub fn branch(&self, key: &str) -> Option<&StyleValue> {
        self.branches
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Select the active branch for the given interaction state.
    ///
    /// Only the hover state participates here; predicate-keyed branches fall
    /// back to the default until a later pass handles them.
    pub fn select(&self, hover: bool) -> &StyleValue {
        if hover
            && let Some(value) = self.branch(":hover")
        {
            return value;
        }
        &self.default
    }
}

/// A media-query node: the predicate it was keyed by, plus the preprocessed
/// sub-style that applies when the predicate matches.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaQueryValue {
    /// The raw predicate string, e.g. `"@media (min-width: 600px)"`.
    pub predicate: String,
    /// The nested style applied on match.
    pub matched: CompiledStyle,
}

/// A width/height pair for shadow offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowOffset {
    /// Horizontal offset in pixels.
    pub width: f64,
    /// Vertical offset in pixels.
    pub height: f64,
}

/// Writing direction for logical-property and media-predicate resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritingDirection {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl WritingDirection {
    /// Parse from CSS string.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ltr" => Some(Self::Ltr),
            "rtl" => Some(Self::Rtl),
            _ => None,
        }
    }
}

/// The flat native style map produced by resolution.
pub type NativeStyle = OrderedMap<NativeValue>;

/// A final output value: always a concrete literal.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    /// A numeric value.
    Number(f64),
    /// A string value.
    String(String),
    /// A width/height pair (shadow offsets).
    Offset(ShadowOffset),
}

impl NativeValue {
    /// Get the numeric content if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            NativeValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the string content if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NativeValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<f64> for NativeValue {
    fn from(value: f64) -> Self {
        NativeValue::Number(value)
    }
}

impl From<&str> for NativeValue {
    fn from(value: &str) -> Self {
        NativeValue::String(value.to_string())
    }
}
