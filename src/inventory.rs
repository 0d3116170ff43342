// 🏪 Inventory - Guitars in stock and spec search
//
// In-memory only. Search is a linear walk over the stock list in
// insertion order; each stocked guitar's spec is asked whether it
// matches the customer's spec (stocked.matches(wanted)).

use crate::entities::{Builder, Guitar, GuitarSpec, GuitarType, MatchOptions, Wood};
use crate::error::CatalogError;

// ============================================================================
// INVENTORY
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    guitars: Vec<Guitar>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Inventory {
            guitars: Vec::new(),
        }
    }

    /// Build an inventory from existing guitars (serials must be unique)
    pub fn with_guitars<I>(guitars: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = Guitar>,
    {
        let mut inventory = Inventory::new();
        for guitar in guitars {
            inventory.add(guitar)?;
        }
        Ok(inventory)
    }

    /// Inventory stocked with the shop's demo guitars
    pub fn sample() -> Self {
        let mut inventory = Inventory::new();
        inventory.register_sample_guitars();
        inventory
    }

    fn register_sample_guitars(&mut self) {
        use Builder::*;
        use GuitarType::*;
        use Wood::*;

        let stock = [
            ("11277", 3999.95, Collings, "CJ", Acoustic, IndianRosewood, Sitka),
            ("V95693", 1499.95, Fender, "Stratocastor", Electric, Alder, Alder),
            ("V9512", 1549.95, Fender, "Stratocastor", Electric, Alder, Alder),
            ("122784", 5495.95, Martin, "D-18", Acoustic, Mahogany, Adirondack),
            ("76531", 6295.95, Martin, "OM-28", Acoustic, BrazilianRosewood, Adirondack),
            ("70108276", 2295.95, Gibson, "Les Paul", Electric, Mahogany, Maple),
            ("82765501", 1890.95, Gibson, "SG '61 Reissue", Electric, Mahogany, Mahogany),
            ("77023", 6275.95, Martin, "D-28", Acoustic, BrazilianRosewood, Adirondack),
            ("1092", 12995.95, Olson, "SJ", Acoustic, IndianRosewood, Cedar),
            ("566-62", 8999.95, Ryan, "Cathedral", Acoustic, Cocobolo, Cedar),
            ("6 29584", 2100.95, Prs, "Dave Navarro Signature", Electric, Mahogany, Maple),
        ];

        for (serial, price, builder, model, guitar_type, back, top) in stock {
            let spec = GuitarSpec::new(builder, model, guitar_type, 6, back, top);
            self.guitars.push(Guitar::new(serial, price, spec));
        }
    }

    /// Stock a guitar built from its parts
    pub fn add_guitar(
        &mut self,
        serial_number: &str,
        price: f64,
        spec: GuitarSpec,
    ) -> Result<&Guitar, CatalogError> {
        self.add(Guitar::new(serial_number, price, spec))
    }

    /// Stock an existing guitar; serial numbers are unique and non-empty
    pub fn add(&mut self, guitar: Guitar) -> Result<&Guitar, CatalogError> {
        if guitar.serial_number().trim().is_empty() {
            return Err(CatalogError::InvalidArgument(
                "serial number must not be empty".to_string(),
            ));
        }
        if self.get_guitar(guitar.serial_number()).is_some() {
            return Err(CatalogError::DuplicateSerial(
                guitar.serial_number().to_string(),
            ));
        }

        self.guitars.push(guitar);
        let last = self.guitars.len() - 1;
        Ok(&self.guitars[last])
    }

    /// Find guitar by exact serial number
    pub fn get_guitar(&self, serial_number: &str) -> Option<&Guitar> {
        self.guitars
            .iter()
            .find(|g| g.serial_number() == serial_number)
    }

    pub fn get_guitar_mut(&mut self, serial_number: &str) -> Option<&mut Guitar> {
        self.guitars
            .iter_mut()
            .find(|g| g.serial_number() == serial_number)
    }

    /// Remove a sold guitar from stock
    pub fn remove_guitar(&mut self, serial_number: &str) -> Result<Guitar, CatalogError> {
        let pos = self
            .guitars
            .iter()
            .position(|g| g.serial_number() == serial_number)
            .ok_or_else(|| CatalogError::GuitarNotFound(serial_number.to_string()))?;

        Ok(self.guitars.remove(pos))
    }

    /// All guitars whose spec matches `wanted` (historical model rule)
    pub fn search(&self, wanted: &GuitarSpec) -> Vec<&Guitar> {
        self.search_with(wanted, &MatchOptions::default())
    }

    pub fn search_with(&self, wanted: &GuitarSpec, options: &MatchOptions) -> Vec<&Guitar> {
        self.guitars
            .iter()
            .filter(|g| g.spec().matches_with(wanted, options))
            .collect()
    }

    /// Guitars by one maker
    pub fn by_builder(&self, builder: Builder) -> Vec<&Guitar> {
        self.guitars
            .iter()
            .filter(|g| g.spec().builder() == builder)
            .collect()
    }

    pub fn guitars(&self) -> impl Iterator<Item = &Guitar> {
        self.guitars.iter()
    }

    pub fn count(&self) -> usize {
        self.guitars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guitars.is_empty()
    }

    /// Sum of all asking prices
    pub fn total_value(&self) -> f64 {
        self.guitars.iter().map(|g| g.price()).sum()
    }
}

// ============================================================================
// TESTS
// ============================================================================
