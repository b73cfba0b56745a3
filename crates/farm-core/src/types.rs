//! # Domain Types
//!
//! Catalog and product types used throughout the farm shop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Barcode      │   │    Quality      │   │    Product      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Egg     50c    │   │  Regular        │   │  barcode        │       │
//! │  │  Milk    60c    │   │  Silver         │   │  quality        │       │
//! │  │  Jam    300c    │   │  Gold           │   │  base_price     │       │
//! │  │  Wool  3000c    │   │  Iridium        │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Catalog Order
//! `Barcode::ALL` is the one place the catalog order is written down.
//! Receipts, inventory listings and popularity tie-breaks all iterate it
//! rather than relying on whatever order a collection happens to produce.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Barcode
// =============================================================================

/// The closed set of product types the farm sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Barcode {
    Egg,
    Milk,
    Jam,
    Wool,
}

impl Barcode {
    /// Every barcode, in catalog order.
    pub const ALL: [Barcode; 4] = [Barcode::Egg, Barcode::Milk, Barcode::Jam, Barcode::Wool];

    /// Name shown on receipts and listings.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Barcode::Egg => "Egg",
            Barcode::Milk => "Milk",
            Barcode::Jam => "Jam",
            Barcode::Wool => "Wool",
        }
    }

    /// Base sale price of one unit.
    pub const fn base_price(&self) -> Money {
        match self {
            Barcode::Egg => Money::from_cents(50),
            Barcode::Milk => Money::from_cents(60),
            Barcode::Jam => Money::from_cents(300),
            Barcode::Wool => Money::from_cents(3000),
        }
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Parses a product name as typed at the shop front (`egg`, `Milk`, ...).
///
/// ## Example
/// ```rust
/// use farm_core::Barcode;
///
/// assert_eq!("jam".parse::<Barcode>().unwrap(), Barcode::Jam);
/// assert!("cheese".parse::<Barcode>().is_err());
/// ```
impl FromStr for Barcode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Barcode::ALL
            .into_iter()
            .find(|barcode| barcode.display_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CoreError::UnknownProduct(name.to_string()))
    }
}

// =============================================================================
// Quality
// =============================================================================

/// Grade of an individual product. Declaration order is the ranking.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Quality {
    #[default]
    Regular,
    Silver,
    Gold,
    Iridium,
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Quality::Regular => "REGULAR",
            Quality::Silver => "SILVER",
            Quality::Gold => "GOLD",
            Quality::Iridium => "IRIDIUM",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A single unit of stock.
///
/// ## Equality
/// Two products are equal when barcode and quality match. Price does not take
/// part, so a product keeps its identity even if the catalog price moves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Product {
    barcode: Barcode,
    quality: Quality,
    base_price: Money,
}

impl Product {
    /// Creates a product priced from the catalog.
    pub const fn new(barcode: Barcode, quality: Quality) -> Self {
        Product {
            barcode,
            quality,
            base_price: barcode.base_price(),
        }
    }

    #[inline]
    pub const fn barcode(&self) -> Barcode {
        self.barcode
    }

    #[inline]
    pub const fn quality(&self) -> Quality {
        self.quality
    }

    #[inline]
    pub const fn base_price(&self) -> Money {
        self.base_price
    }

    #[inline]
    pub const fn display_name(&self) -> &'static str {
        self.barcode.display_name()
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.barcode == other.barcode && self.quality == other.quality
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.barcode.hash(state);
        self.quality.hash(state);
    }
}

/// `Egg: 50c *REGULAR*`
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}c *{}*",
            self.display_name(),
            self.base_price.cents(),
            self.quality
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
