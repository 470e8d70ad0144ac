//! Custom-property registry and theme overrides.

mod registry;
mod theme;

pub(crate) use registry::lookup_custom_property;
pub use registry::{CustomProperties, TokenValue, VariableRegistry};
pub use theme::{create_theme, ThemeTokens};
