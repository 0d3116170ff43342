// Guitar Catalog - Core Library
// Exposes the catalog types for the finder CLI and for tests

pub mod entities;
pub mod error;
pub mod inventory;

// Re-export commonly used types
pub use entities::{
    Builder, Guitar, GuitarSpec, GuitarType, MatchOptions, ModelMatching, SpecField, Wood,
};
pub use error::CatalogError;
pub use inventory::Inventory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
