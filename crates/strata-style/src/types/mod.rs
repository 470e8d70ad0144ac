//! Core value and container types.

mod map;
mod value;

pub use map::OrderedMap;
pub use value::{
    BranchedValue, CompiledStyle, LengthValue, MediaQueryValue, NativeStyle, NativeValue, RawStyle,
    RawValue, ShadowOffset, StyleValue, VarRef, WritingDirection,
};
