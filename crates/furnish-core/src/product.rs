//! # Products
//!
//! One trait per product kind, one unit struct per (family, kind) variant.
//!
//! ```text
//!          trait Chair                     trait Table
//!         ┌─────┴──────┐                  ┌─────┴──────┐
//!   RetroChair    ModernChair       RetroTable    ModernTable
//! ```
//!
//! Products are stateless: the only thing a product knows is its label.

use crate::list::ShoppingList;
use crate::types::ProductLabel;

/// A chair-kind product.
pub trait Chair {
    /// The label this chair contributes.
    fn label(&self) -> ProductLabel;

    /// Inserts this chair into `list` and hands the updated list back.
    fn add_to_list<'a>(&self, list: &'a mut ShoppingList) -> &'a ShoppingList {
        list.insert(self.label().as_str());
        list
    }
}

/// A table-kind product.
pub trait Table {
    /// The label this table contributes.
    fn label(&self) -> ProductLabel;

    /// Inserts this table into `list` and hands the updated list back.
    fn add_to_list<'a>(&self, list: &'a mut ShoppingList) -> &'a ShoppingList {
        list.insert(self.label().as_str());
        list
    }
}

// =============================================================================
// Concrete Products
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct RetroChair;

#[derive(Debug, Clone, Copy, Default)]
pub struct ModernChair;

#[derive(Debug, Clone, Copy, Default)]
pub struct RetroTable;

#[derive(Debug, Clone, Copy, Default)]
pub struct ModernTable;

impl Chair for RetroChair {
    fn label(&self) -> ProductLabel {
        ProductLabel::RetroChair
    }
}

impl Chair for ModernChair {
    fn label(&self) -> ProductLabel {
        ProductLabel::ModernChair
    }
}

impl Table for RetroTable {
    fn label(&self) -> ProductLabel {
        ProductLabel::RetroTable
    }
}

impl Table for ModernTable {
    fn label(&self) -> ProductLabel {
        ProductLabel::ModernTable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chair_adds_its_label() {
        let mut list = ShoppingList::new();

        let updated = RetroChair.add_to_list(&mut list);
        assert!(updated.contains("Retro_Chair"));

        ModernChair.add_to_list(&mut list);
        assert_eq!(
            list.iter().collect::<Vec<_>>(),
            vec!["Modern_Chair", "Retro_Chair"]
        );
    }

    #[test]
    fn test_table_adds_its_label() {
        let mut list = ShoppingList::new();

        RetroTable.add_to_list(&mut list);
        ModernTable.add_to_list(&mut list);

        assert_eq!(list.len(), 2);
        assert!(list.contains("Retro_Table"));
        assert!(list.contains("Modern_Table"));
    }

    #[test]
    fn test_adding_same_product_twice() {
        let mut list = ShoppingList::new();

        RetroChair.add_to_list(&mut list);
        RetroChair.add_to_list(&mut list);

        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["Retro_Chair"]);
    }
}
