//! Style value syntax parsers.

mod length;
mod media;
mod shadow;
mod time;

pub use length::parse_length;
pub use media::{
    is_media_query, parse_media_predicate, MediaCondition, MediaPredicate, Orientation,
};
pub use shadow::{parse_shadow_list, Shadow};
pub use time::parse_time_value;
