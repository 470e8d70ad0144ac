//! CSS-like style resolution for restricted native render targets.
//!
//! This crate translates declarative, CSS-like style definitions into flat,
//! platform-native style objects, featuring:
//!
//! - **Preprocessing**: compile-time normalization of authored styles into a
//!   typed intermediate representation
//! - **Custom properties**: a define/lookup variable registry with theme
//!   overrides
//! - **Conditional values**: `:hover` branch sets and `@media` query nodes
//! - **Length units**: em/rem/viewport units resolved against the render
//!   context
//! - **Logical properties**: direction-agnostic names mapped onto the
//!   physical equivalents the host platform accepts
//!
//! # Example
//!
//! ```
//! use strata_style::prelude::*;
//!
//! // Define variables once, during setup
//! let registry = VariableRegistry::new();
//! let tokens = registry.define_vars([("accent", "#007AFF")]);
//!
//! // Preprocess style definitions at module-initialization time
//! let card = preprocess(
//!     &RawStyle::new()
//!         .set("backgroundColor", tokens["accent"].as_str())
//!         .set("paddingInlineStart", "1rem"),
//! );
//!
//! // Resolve per render against the current context
//! let snapshot = registry.snapshot();
//! let ctx = ResolutionContext::new(&snapshot);
//! let props = resolve_style(&[Some(&card)], &ctx);
//!
//! let style = props.style.unwrap();
//! assert_eq!(
//!     style.get("backgroundColor"),
//!     Some(&NativeValue::String("#007AFF".into()))
//! );
//! assert_eq!(style.get("paddingStart"), Some(&NativeValue::Number(16.0)));
//! ```

pub mod parser;
pub mod preprocess;
pub mod resolve;
pub mod theme;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::preprocess::{first_that_works, keyframes, preprocess, preprocess_fn};
    pub use crate::resolve::{
        flatten_fragments, is_native_property, is_native_value, resolve_style, NativeProps,
        ResolutionContext,
    };
    pub use crate::theme::{create_theme, CustomProperties, ThemeTokens, TokenValue, VariableRegistry};
    pub use crate::types::{
        CompiledStyle, LengthValue, NativeStyle, NativeValue, RawStyle, RawValue, StyleValue,
        WritingDirection,
    };
}
