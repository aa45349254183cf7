//! # furnish-core: Abstract Factory Domain for Furnish
//!
//! This crate holds every pattern-related type as pure code with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Furnish Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    furnish-cli (command loop)                   │   │
//! │  │        A ──► add        R ──► remove        S ──► show          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ furnish-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  product  │  │  factory  │  │   list    │  │   │
//! │  │   │  Family   │  │   Chair   │  │ Furniture │  │ Shopping  │  │   │
//! │  │   │  Selector │  │   Table   │  │  Factory  │  │   List    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Family, ProductKind, ProductLabel, Selector
//! - [`product`] - Chair / Table traits and their four variants
//! - [`factory`] - The abstract factory, concrete factories, client operations
//! - [`list`] - The shopping list
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use furnish_core::{order_selection, ShoppingList, Selector};
//!
//! let mut list = ShoppingList::new();
//!
//! let selector: Selector = "mt".parse().unwrap();
//! order_selection(selector, &mut list);
//! order_selection("RC".parse().unwrap(), &mut list);
//!
//! // Display order is lexicographic, not insertion order
//! assert_eq!(list.iter().collect::<Vec<_>>(), ["Modern_Table", "Retro_Chair"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod factory;
pub mod list;
pub mod product;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use factory::{
    factory_for, order, order_chair, order_selection, order_table, FurnitureFactory,
    ModernFactory, RetroFactory,
};
pub use list::ShoppingList;
pub use product::{Chair, Table};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Line printed above and below the list contents.
pub const LIST_SEPARATOR: &str = "///////////////////////";
