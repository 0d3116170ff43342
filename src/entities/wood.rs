// 🌳 Wood - Tonewoods for back/sides and tops

use crate::error::{normalize_variant, CatalogError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Wood {
    IndianRosewood,
    BrazilianRosewood,
    Mahogany,
    Maple,
    Cocobolo,
    Cedar,
    Adirondack,
    Alder,
    Sitka,
}

impl Wood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Wood::IndianRosewood => "Indian Rosewood",
            Wood::BrazilianRosewood => "Brazilian Rosewood",
            Wood::Mahogany => "Mahogany",
            Wood::Maple => "Maple",
            Wood::Cocobolo => "Cocobolo",
            Wood::Cedar => "Cedar",
            Wood::Adirondack => "Adirondack",
            Wood::Alder => "Alder",
            Wood::Sitka => "Sitka",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Wood::IndianRosewood => "INDIAN_ROSEWOOD",
            Wood::BrazilianRosewood => "BRAZILIAN_ROSEWOOD",
            Wood::Mahogany => "MAHOGANY",
            Wood::Maple => "MAPLE",
            Wood::Cocobolo => "COCOBOLO",
            Wood::Cedar => "CEDAR",
            Wood::Adirondack => "ADIRONDACK",
            Wood::Alder => "ALDER",
            Wood::Sitka => "SITKA",
        }
    }

    pub fn all() -> [Wood; 9] {
        [
            Wood::IndianRosewood,
            Wood::BrazilianRosewood,
            Wood::Mahogany,
            Wood::Maple,
            Wood::Cocobolo,
            Wood::Cedar,
            Wood::Adirondack,
            Wood::Alder,
            Wood::Sitka,
        ]
    }
}

impl std::fmt::Display for Wood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Wood {
    type Err = CatalogError;

    /// Accepts "INDIAN_ROSEWOOD", "indian-rosewood" or "Indian Rosewood"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_variant(s);
        Wood::all()
            .into_iter()
            .find(|w| w.name() == wanted)
            .ok_or_else(|| CatalogError::UnknownVariant {
                kind: "wood",
                value: s.to_string(),
            })
    }
}
