//! Per-call resolution context.

use crate::theme::CustomProperties;
use crate::types::WritingDirection;

const NO_PASSTHROUGH: &[String] = &[];

/// Environmental inputs for one resolution call.
///
/// Immutable for the duration of the call; resolution is a pure function of
/// the fragment list plus this context.
#[derive(Debug, Clone)]
pub struct ResolutionContext<'a> {
    /// Viewport width in pixels (for media queries and vw/vmin/vmax units).
    pub viewport_width: f64,
    /// Viewport height in pixels (for media queries and vh/vmin/vmax units).
    pub viewport_height: f64,
    /// Writing direction.
    pub writing_direction: WritingDirection,
    /// Whether the hover interaction state is active.
    pub hover: bool,
    /// Current font size in pixels (for em units).
    pub font_size: f64,
    /// Root font size in pixels (for rem units).
    pub root_font_size: f64,
    /// Extra property names allowed through the name filter unchanged.
    pub passthrough_properties: &'a [String],
    /// Custom-property snapshot to resolve references against.
    pub custom_properties: &'a CustomProperties,
}

impl<'a> ResolutionContext<'a> {
    /// Create a context with defaults: zero viewport, LTR, no hover, 16px
    /// font sizes, no passthrough properties.
    pub fn new(custom_properties: &'a CustomProperties) -> Self {
        Self {
            viewport_width: 0.0,
            viewport_height: 0.0,
            writing_direction: WritingDirection::Ltr,
            hover: false,
            font_size: 16.0,
            root_font_size: 16.0,
            passthrough_properties: NO_PASSTHROUGH,
            custom_properties,
        }
    }
}
