// ⚠️ Catalog errors
// One error type for the library; the binary wraps it in anyhow

// ============================================================================
// CATALOG ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A required argument was missing or empty
    InvalidArgument(String),

    /// Text did not name any variant of a closed enum
    UnknownVariant { kind: &'static str, value: String },

    /// Serial number already stocked
    DuplicateSerial(String),

    /// No guitar with this serial number
    GuitarNotFound(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CatalogError::UnknownVariant { kind, value } => {
                write!(f, "Unknown {}: '{}'", kind, value)
            }
            CatalogError::DuplicateSerial(serial) => {
                write!(f, "Guitar with serial number {} already in inventory", serial)
            }
            CatalogError::GuitarNotFound(serial) => write!(f, "Guitar not found: {}", serial),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Normalize enum input: "indian rosewood" / "Indian-Rosewood" → "INDIAN_ROSEWOOD"
pub(crate) fn normalize_variant(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}
