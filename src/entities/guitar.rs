// 🎸 Guitar Entity - One physical instrument in stock
//
// Identity: UUID (never changes) + the maker's serial number
// Values: price (can change), spec (fixed)

use crate::entities::GuitarSpec;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guitar {
    /// Stable identity (UUID) - NEVER changes
    id: String,

    /// Serial number stamped by the builder
    serial_number: String,

    price: f64,

    spec: GuitarSpec,

    /// When the guitar entered the inventory
    added_at: DateTime<Utc>,
}

impl Guitar {
    pub fn new(serial_number: impl Into<String>, price: f64, spec: GuitarSpec) -> Self {
        Guitar {
            id: uuid::Uuid::new_v4().to_string(),
            serial_number: serial_number.into(),
            price,
            spec,
            added_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// The only value that changes once a guitar is stocked
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn spec(&self) -> &GuitarSpec {
        &self.spec
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }
}

impl std::fmt::Display for Guitar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} for ${:.2}", self.serial_number, self.spec, self.price)
    }
}
