//! Render-time style resolution.

mod allowlist;
mod content_box;
mod context;
mod engine;
mod fallbacks;
mod flatten;

pub use allowlist::{is_native_property, is_native_value};
pub use context::ResolutionContext;
pub use engine::{resolve_style, NativeProps};
pub use flatten::flatten_fragments;
