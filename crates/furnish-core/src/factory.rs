//! # Furniture Factories
//!
//! The Abstract Factory: one creation method per product kind, one concrete
//! factory per family. Callers only ever see `dyn FurnitureFactory`,
//! `dyn Chair` and `dyn Table`.
//!
//! ## Creation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Selector "MT"                                                          │
//! │      │                                                                  │
//! │      ├── family = Modern ──► factory_for() ──► ModernFactory            │
//! │      │                                              │                   │
//! │      └── kind = Table ─────► order() ─────► create_table()              │
//! │                                                     │                   │
//! │                                                     ▼                   │
//! │                                              ModernTable                │
//! │                                                     │                   │
//! │                                        add_to_list(&mut list)           │
//! │                                                     │                   │
//! │                                                     ▼                   │
//! │                                        list += "Modern_Table"           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::list::ShoppingList;
use crate::product::{Chair, ModernChair, ModernTable, RetroChair, RetroTable, Table};
use crate::types::{Family, ProductKind, ProductLabel, Selector};

/// Creates a family-consistent set of products.
pub trait FurnitureFactory {
    /// The family every product from this factory belongs to.
    fn family(&self) -> Family;

    fn create_chair(&self) -> Box<dyn Chair>;

    fn create_table(&self) -> Box<dyn Table>;
}

/// Produces retro furniture.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetroFactory;

/// Produces modern furniture.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModernFactory;

impl FurnitureFactory for RetroFactory {
    fn family(&self) -> Family {
        Family::Retro
    }

    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(RetroChair)
    }

    fn create_table(&self) -> Box<dyn Table> {
        Box::new(RetroTable)
    }
}

impl FurnitureFactory for ModernFactory {
    fn family(&self) -> Family {
        Family::Modern
    }

    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(ModernChair)
    }

    fn create_table(&self) -> Box<dyn Table> {
        Box::new(ModernTable)
    }
}

/// Picks the concrete factory for a family.
pub fn factory_for(family: Family) -> Box<dyn FurnitureFactory> {
    match family {
        Family::Retro => Box::new(RetroFactory),
        Family::Modern => Box::new(ModernFactory),
    }
}

// =============================================================================
// Client Operations
// =============================================================================
// These never name a concrete product or factory type.

/// Creates a chair with `factory` and puts it on the list.
pub fn order_chair(factory: &dyn FurnitureFactory, list: &mut ShoppingList) -> ProductLabel {
    let chair = factory.create_chair();
    chair.add_to_list(list);
    chair.label()
}

/// Creates a table with `factory` and puts it on the list.
pub fn order_table(factory: &dyn FurnitureFactory, list: &mut ShoppingList) -> ProductLabel {
    let table = factory.create_table();
    table.add_to_list(list);
    table.label()
}

/// Dispatches to the client operation for `kind`.
pub fn order(
    factory: &dyn FurnitureFactory,
    kind: ProductKind,
    list: &mut ShoppingList,
) -> ProductLabel {
    match kind {
        ProductKind::Chair => order_chair(factory, list),
        ProductKind::Table => order_table(factory, list),
    }
}

/// Full Add flow for a parsed selector: pick the factory, then order.
pub fn order_selection(selector: Selector, list: &mut ShoppingList) -> ProductLabel {
    let factory = factory_for(selector.family);
    order(factory.as_ref(), selector.kind, list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_stay_in_family() {
        for family in [Family::Retro, Family::Modern] {
            let factory = factory_for(family);
            assert_eq!(factory.family(), family);
            assert_eq!(factory.create_chair().label().family(), family);
            assert_eq!(factory.create_table().label().family(), family);
        }
    }

    #[test]
    fn test_factory_products_have_right_kind() {
        let factory = factory_for(Family::Modern);
        assert_eq!(factory.create_chair().label().kind(), ProductKind::Chair);
        assert_eq!(factory.create_table().label().kind(), ProductKind::Table);
    }

    #[test]
    fn test_each_selector_inserts_exactly_its_label() {
        for (code, expected) in [
            ("RC", "Retro_Chair"),
            ("MC", "Modern_Chair"),
            ("RT", "Retro_Table"),
            ("MT", "Modern_Table"),
        ] {
            let mut list = ShoppingList::new();
            let selector: Selector = code.parse().unwrap();

            let label = order_selection(selector, &mut list);

            assert_eq!(label.as_str(), expected);
            assert_eq!(list.iter().collect::<Vec<_>>(), vec![expected]);
        }
    }

    #[test]
    fn test_client_code_works_through_any_factory() {
        let factories: Vec<Box<dyn FurnitureFactory>> =
            vec![Box::new(RetroFactory), Box::new(ModernFactory)];
        let mut list = ShoppingList::new();

        for factory in &factories {
            order_chair(factory.as_ref(), &mut list);
            order_table(factory.as_ref(), &mut list);
        }

        assert_eq!(
            list.iter().collect::<Vec<_>>(),
            vec!["Modern_Chair", "Modern_Table", "Retro_Chair", "Retro_Table"]
        );
    }

    #[test]
    fn test_ordering_twice_is_idempotent() {
        let mut list = ShoppingList::new();
        let selector: Selector = "rc".parse().unwrap();

        order_selection(selector, &mut list);
        order_selection(selector, &mut list);

        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_selector_label_matches_ordered_label() {
        for label in ProductLabel::ALL {
            let selector = Selector::new(label.family(), label.kind());
            let mut list = ShoppingList::new();
            assert_eq!(order_selection(selector, &mut list), selector.label());
        }
    }
}
