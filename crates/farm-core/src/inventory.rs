//! # Inventory
//!
//! Stock storage behind the [`Inventory`] trait.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Inventory Implementations                          │
//! │                                                                         │
//! │  BasicInventory                    FancyInventory                       │
//! │  ──────────────                    ──────────────                       │
//! │  • one product at a time           • quantities on add and remove      │
//! │  • listing in stocking order       • listing grouped by catalog order  │
//! │  • removes first match             • removes highest quality first     │
//! │  • quantity calls fail             • stocked_quantity(barcode)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::cmp::Reverse;
use std::fmt::Debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{Barcode, Product, Quality};
use crate::validation::validate_quantity;

/// Storage for the farm's stock.
pub trait Inventory: Debug {
    /// Stocks one product.
    fn add_product(&mut self, barcode: Barcode, quality: Quality);

    /// Stocks `quantity` identical products.
    fn add_product_quantity(
        &mut self,
        barcode: Barcode,
        quality: Quality,
        quantity: i64,
    ) -> CoreResult<()>;

    /// True if at least one product with this barcode is in stock.
    fn exists_product(&self, barcode: Barcode) -> bool;

    /// Every product currently in stock.
    fn all_products(&self) -> Vec<Product>;

    /// Takes one product with this barcode out of stock. Empty if none.
    fn remove_product(&mut self, barcode: Barcode) -> Vec<Product>;

    /// Takes up to `quantity` products with this barcode out of stock.
    fn remove_product_quantity(
        &mut self,
        barcode: Barcode,
        quantity: i64,
    ) -> CoreResult<Vec<Product>>;

    /// Whether the quantity operations are available.
    fn supports_quantities(&self) -> bool;
}

// =============================================================================
// Basic Inventory
// =============================================================================

/// Single-item inventory.
#[derive(Debug, Clone, Default)]
pub struct BasicInventory {
    products: Vec<Product>,
}

impl BasicInventory {
    pub fn new() -> Self {
        BasicInventory::default()
    }
}

impl Inventory for BasicInventory {
    fn add_product(&mut self, barcode: Barcode, quality: Quality) {
        self.products.push(Product::new(barcode, quality));
    }

    fn add_product_quantity(&mut self, _: Barcode, _: Quality, _: i64) -> CoreResult<()> {
        Err(CoreError::not_fancy("supply"))
    }

    fn exists_product(&self, barcode: Barcode) -> bool {
        self.products.iter().any(|p| p.barcode() == barcode)
    }

    fn all_products(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn remove_product(&mut self, barcode: Barcode) -> Vec<Product> {
        match self.products.iter().position(|p| p.barcode() == barcode) {
            Some(index) => vec![self.products.remove(index)],
            None => Vec::new(),
        }
    }

    fn remove_product_quantity(&mut self, _: Barcode, _: i64) -> CoreResult<Vec<Product>> {
        Err(CoreError::not_fancy("purchase"))
    }

    fn supports_quantities(&self) -> bool {
        false
    }
}

// =============================================================================
// Fancy Inventory
// =============================================================================

/// Quantity-capable inventory that sells its best stock first.
#[derive(Debug, Clone, Default)]
pub struct FancyInventory {
    products: Vec<Product>,
}

impl FancyInventory {
    pub fn new() -> Self {
        FancyInventory::default()
    }

    /// Number of products with this barcode in stock.
    pub fn stocked_quantity(&self, barcode: Barcode) -> usize {
        self.products
            .iter()
            .filter(|p| p.barcode() == barcode)
            .count()
    }

    /// Stock indices for `barcode`, best quality first. Ties keep stocking order.
    fn indices_by_quality(&self, barcode: Barcode) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .products
            .iter()
            .enumerate()
            .filter(|(_, p)| p.barcode() == barcode)
            .map(|(i, _)| i)
            .collect();
        indices.sort_by_key(|&i| Reverse(self.products[i].quality()));
        indices
    }

    fn take_indices(&mut self, chosen: &[usize]) -> Vec<Product> {
        let taken: Vec<Product> = chosen.iter().map(|&i| self.products[i]).collect();

        let mut descending = chosen.to_vec();
        descending.sort_unstable_by(|a, b| b.cmp(a));
        for index in descending {
            self.products.remove(index);
        }
        taken
    }
}

impl Inventory for FancyInventory {
    fn add_product(&mut self, barcode: Barcode, quality: Quality) {
        self.products.push(Product::new(barcode, quality));
    }

    fn add_product_quantity(
        &mut self,
        barcode: Barcode,
        quality: Quality,
        quantity: i64,
    ) -> CoreResult<()> {
        validate_quantity(quantity)?;
        let product = Product::new(barcode, quality);
        self.products
            .extend(std::iter::repeat(product).take(quantity as usize));
        Ok(())
    }

    fn exists_product(&self, barcode: Barcode) -> bool {
        self.products.iter().any(|p| p.barcode() == barcode)
    }

    fn all_products(&self) -> Vec<Product> {
        Barcode::ALL
            .iter()
            .flat_map(|&barcode| self.products.iter().filter(move |p| p.barcode() == barcode))
            .copied()
            .collect()
    }

    fn remove_product(&mut self, barcode: Barcode) -> Vec<Product> {
        match self.indices_by_quality(barcode).first() {
            Some(&index) => vec![self.products.remove(index)],
            None => Vec::new(),
        }
    }

    fn remove_product_quantity(
        &mut self,
        barcode: Barcode,
        quantity: i64,
    ) -> CoreResult<Vec<Product>> {
        validate_quantity(quantity)?;
        let mut chosen = self.indices_by_quality(barcode);
        chosen.truncate(quantity as usize);
        Ok(self.take_indices(&chosen))
    }

    fn supports_quantities(&self) -> bool {
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::MAX_QUANTITY;

    #[test]
    fn test_basic_inventory_single_items() {
        let mut inventory = BasicInventory::new();
        inventory.add_product(Barcode::Milk, Quality::Regular);
        inventory.add_product(Barcode::Egg, Quality::Gold);

        assert!(inventory.exists_product(Barcode::Egg));
        assert!(!inventory.exists_product(Barcode::Wool));
        assert_eq!(inventory.all_products()[0].barcode(), Barcode::Milk);

        let removed = inventory.remove_product(Barcode::Egg);
        assert_eq!(removed, vec![Product::new(Barcode::Egg, Quality::Gold)]);
        assert!(inventory.remove_product(Barcode::Egg).is_empty());
    }

    #[test]
    fn test_basic_inventory_rejects_quantities() {
        let mut inventory = BasicInventory::new();
        assert!(!inventory.supports_quantities());
        assert!(matches!(
            inventory.add_product_quantity(Barcode::Egg, Quality::Regular, 3),
            Err(CoreError::UnsupportedStockOperation { .. })
        ));
        assert!(matches!(
            inventory.remove_product_quantity(Barcode::Egg, 3),
            Err(CoreError::UnsupportedStockOperation { .. })
        ));
    }

    #[test]
    fn test_fancy_inventory_lists_in_catalog_order() {
        let mut inventory = FancyInventory::new();
        inventory.add_product(Barcode::Wool, Quality::Regular);
        inventory.add_product(Barcode::Egg, Quality::Regular);
        inventory.add_product(Barcode::Jam, Quality::Regular);
        inventory.add_product(Barcode::Egg, Quality::Silver);

        let barcodes: Vec<Barcode> = inventory.all_products().iter().map(|p| p.barcode()).collect();
        assert_eq!(
            barcodes,
            vec![Barcode::Egg, Barcode::Egg, Barcode::Jam, Barcode::Wool]
        );
    }

    #[test]
    fn test_fancy_inventory_removes_best_quality_first() {
        let mut inventory = FancyInventory::new();
        inventory.add_product(Barcode::Egg, Quality::Silver);
        inventory.add_product(Barcode::Egg, Quality::Iridium);
        inventory.add_product(Barcode::Egg, Quality::Regular);
        inventory.add_product(Barcode::Egg, Quality::Gold);

        let first = inventory.remove_product(Barcode::Egg);
        assert_eq!(first[0].quality(), Quality::Iridium);

        let next_two = inventory.remove_product_quantity(Barcode::Egg, 2).unwrap();
        let qualities: Vec<Quality> = next_two.iter().map(|p| p.quality()).collect();
        assert_eq!(qualities, vec![Quality::Gold, Quality::Silver]);

        assert_eq!(inventory.stocked_quantity(Barcode::Egg), 1);
        assert_eq!(inventory.all_products()[0].quality(), Quality::Regular);
    }

    #[test]
    fn test_fancy_inventory_removes_only_what_is_stocked() {
        let mut inventory = FancyInventory::new();
        inventory
            .add_product_quantity(Barcode::Jam, Quality::Regular, 3)
            .unwrap();
        inventory.add_product(Barcode::Milk, Quality::Regular);

        let removed = inventory.remove_product_quantity(Barcode::Jam, 10).unwrap();
        assert_eq!(removed.len(), 3);
        assert_eq!(inventory.stocked_quantity(Barcode::Jam), 0);
        assert_eq!(inventory.stocked_quantity(Barcode::Milk), 1);
    }

    #[test]
    fn test_fancy_inventory_validates_quantity() {
        let mut inventory = FancyInventory::new();
        assert!(matches!(
            inventory.add_product_quantity(Barcode::Jam, Quality::Regular, 0),
            Err(CoreError::Validation(_))
        ));
        assert!(inventory.remove_product_quantity(Barcode::Jam, -1).is_err());
    }

    #[test]
    fn test_fancy_inventory_caps_quantity() {
        let mut inventory = FancyInventory::new();
        inventory
            .add_product_quantity(Barcode::Egg, Quality::Regular, MAX_QUANTITY)
            .unwrap();
        assert_eq!(inventory.stocked_quantity(Barcode::Egg), MAX_QUANTITY as usize);

        let err = inventory
            .add_product_quantity(Barcode::Egg, Quality::Regular, 9_999_999_999_999)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
        assert_eq!(inventory.stocked_quantity(Barcode::Egg), MAX_QUANTITY as usize);

        assert!(inventory
            .remove_product_quantity(Barcode::Egg, MAX_QUANTITY + 1)
            .is_err());
        assert_eq!(inventory.stocked_quantity(Barcode::Egg), MAX_QUANTITY as usize);
    }
}
