// Guitar body type (acoustic / electric)

use crate::error::{normalize_variant, CatalogError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuitarType {
    Acoustic,
    Electric,
}

impl GuitarType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuitarType::Acoustic => "acoustic",
            GuitarType::Electric => "electric",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GuitarType::Acoustic => "ACOUSTIC",
            GuitarType::Electric => "ELECTRIC",
        }
    }

    pub fn all() -> [GuitarType; 2] {
        [GuitarType::Acoustic, GuitarType::Electric]
    }
}

impl std::fmt::Display for GuitarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuitarType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_variant(s);
        GuitarType::all()
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| CatalogError::UnknownVariant {
                kind: "guitar type",
                value: s.to_string(),
            })
    }
}
