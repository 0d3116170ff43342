// Guitar catalog entities
//
// - Builder, GuitarType, Wood: closed enums with fixed display labels
// - GuitarSpec: immutable description used for matching
// - Guitar: a stocked instrument (identity + price + spec)

pub mod builder;
pub mod guitar;
pub mod guitar_spec;
pub mod guitar_type;
pub mod wood;

pub use builder::Builder;
pub use guitar::Guitar;
pub use guitar_spec::{GuitarSpec, MatchOptions, ModelMatching, SpecField};
pub use guitar_type::GuitarType;
pub use wood::Wood;
