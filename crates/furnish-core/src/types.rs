//! # Domain Types
//!
//! The two dimensions of the product space and the labels they map to.
//!
//! ## Type Grid
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                    ProductKind::Chair    ProductKind::Table             │
//! │                   ┌───────────────────┬───────────────────┐             │
//! │  Family::Retro    │  Retro_Chair (RC) │  Retro_Table (RT) │             │
//! │                   ├───────────────────┼───────────────────┤             │
//! │  Family::Modern   │  Modern_Chair (MC)│  Modern_Table (MT)│             │
//! │                   └───────────────────┴───────────────────┘             │
//! │                                                                         │
//! │  A factory is bound to one row. A client picks the column.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Family
// =============================================================================

/// The style dimension a factory is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Retro,
    Modern,
}

impl Family {
    /// Prefix used in product labels.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Family::Retro => "Retro",
            Family::Modern => "Modern",
        }
    }
}

// =============================================================================
// Product Kind
// =============================================================================

/// The product dimension: which creation method a client calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Chair,
    Table,
}

// =============================================================================
// Product Label
// =============================================================================

/// The four canonical labels a product can put on the shopping list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ProductLabel {
    #[serde(rename = "Retro_Chair")]
    RetroChair,
    #[serde(rename = "Modern_Chair")]
    ModernChair,
    #[serde(rename = "Retro_Table")]
    RetroTable,
    #[serde(rename = "Modern_Table")]
    ModernTable,
}

impl ProductLabel {
    /// Every label, in declaration order.
    pub const ALL: [ProductLabel; 4] = [
        ProductLabel::RetroChair,
        ProductLabel::ModernChair,
        ProductLabel::RetroTable,
        ProductLabel::ModernTable,
    ];

    /// Pure mapping from a grid cell to its label.
    pub const fn for_product(family: Family, kind: ProductKind) -> Self {
        match (family, kind) {
            (Family::Retro, ProductKind::Chair) => ProductLabel::RetroChair,
            (Family::Modern, ProductKind::Chair) => ProductLabel::ModernChair,
            (Family::Retro, ProductKind::Table) => ProductLabel::RetroTable,
            (Family::Modern, ProductKind::Table) => ProductLabel::ModernTable,
        }
    }

    /// The text stored in the shopping list.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProductLabel::RetroChair => "Retro_Chair",
            ProductLabel::ModernChair => "Modern_Chair",
            ProductLabel::RetroTable => "Retro_Table",
            ProductLabel::ModernTable => "Modern_Table",
        }
    }

    pub const fn family(&self) -> Family {
        match self {
            ProductLabel::RetroChair | ProductLabel::RetroTable => Family::Retro,
            ProductLabel::ModernChair | ProductLabel::ModernTable => Family::Modern,
        }
    }

    pub const fn kind(&self) -> ProductKind {
        match self {
            ProductLabel::RetroChair | ProductLabel::ModernChair => ProductKind::Chair,
            ProductLabel::RetroTable | ProductLabel::ModernTable => ProductKind::Table,
        }
    }
}

impl fmt::Display for ProductLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Selector
// =============================================================================

/// A parsed Add code: RC, MC, RT or MT.
///
/// Parsing trims surrounding whitespace and ignores case, so `" mt "` is
/// the same selector as `"MT"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    pub family: Family,
    pub kind: ProductKind,
}

impl Selector {
    pub const fn new(family: Family, kind: ProductKind) -> Self {
        Selector { family, kind }
    }

    /// The label this selector ends up inserting.
    pub const fn label(&self) -> ProductLabel {
        ProductLabel::for_product(self.family, self.kind)
    }
}

impl FromStr for Selector {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        let selector = match code.as_str() {
            "RC" => Selector::new(Family::Retro, ProductKind::Chair),
            "MC" => Selector::new(Family::Modern, ProductKind::Chair),
            "RT" => Selector::new(Family::Retro, ProductKind::Table),
            "MT" => Selector::new(Family::Modern, ProductKind::Table),
            _ => return Err(ValidationError::UnknownSelector { value: code }),
        };
        Ok(selector)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
