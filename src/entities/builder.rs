// 🎸 Builder - Guitar makers known to the shop
//
// Display labels are a fixed table, not derived from variant names:
// two makers (Olson, Ryan) are shown in mixed case.

use crate::error::{normalize_variant, CatalogError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// BUILDER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Builder {
    Fender,
    Martin,
    Gibson,
    Collings,
    Olson,
    Ryan,
    Prs,

    /// Placeholder maker; compared like any other value when matching
    Any,
}

impl Builder {
    /// Display label shown to customers
    pub fn as_str(&self) -> &'static str {
        match self {
            Builder::Fender => "FENDER",
            Builder::Martin => "MARTIN",
            Builder::Gibson => "GIBSON",
            Builder::Collings => "COLLINGS",
            Builder::Olson => "Olson",
            Builder::Ryan => "Ryan",
            Builder::Prs => "PRS",
            Builder::Any => "Unspecified",
        }
    }

    /// Variant name as written in catalog data ("FENDER", "ANY")
    pub fn name(&self) -> &'static str {
        match self {
            Builder::Fender => "FENDER",
            Builder::Martin => "MARTIN",
            Builder::Gibson => "GIBSON",
            Builder::Collings => "COLLINGS",
            Builder::Olson => "OLSON",
            Builder::Ryan => "RYAN",
            Builder::Prs => "PRS",
            Builder::Any => "ANY",
        }
    }

    pub fn all() -> [Builder; 8] {
        [
            Builder::Fender,
            Builder::Martin,
            Builder::Gibson,
            Builder::Collings,
            Builder::Olson,
            Builder::Ryan,
            Builder::Prs,
            Builder::Any,
        ]
    }
}

impl std::fmt::Display for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Builder {
    type Err = CatalogError;

    /// Accepts the variant name ("any") or the display label ("Unspecified")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_variant(s);
        Builder::all()
            .into_iter()
            .find(|b| b.name() == wanted || b.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownVariant {
                kind: "builder",
                value: s.to_string(),
            })
    }
}
