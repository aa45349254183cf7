//! # Shopping List
//!
//! The set of distinct labels accumulated during a session.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Shopping List Operations                             │
//! │                                                                         │
//! │  Command            Method               Effect                         │
//! │  ───────            ──────               ──────                         │
//! │                                                                         │
//! │  A (via product) ──► insert() ─────────► labels.insert(label)           │
//! │                                          (no-op if present)            │
//! │                                                                         │
//! │  R ────────────────► remove() ─────────► labels.remove(label)           │
//! │                                          EmptyList / NotFound           │
//! │                                                                         │
//! │  S / exit ─────────► render() ─────────► (read only)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::LIST_SEPARATOR;

/// The shopping list.
///
/// ## Invariants
/// - Labels are unique (inserting an existing label is a no-op)
/// - Iteration order is lexicographic, independent of insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    labels: BTreeSet<String>,
}

impl ShoppingList {
    /// Creates a new empty list.
    pub fn new() -> Self {
        ShoppingList {
            labels: BTreeSet::new(),
        }
    }

    /// Inserts a label. Returns `false` if it was already present.
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.labels.insert(label.into())
    }

    /// Removes a label.
    ///
    /// ## Returns
    /// - `Err(CoreError::EmptyList)` if the list has no entries
    /// - `Err(CoreError::NotFound)` if the label is absent
    /// - `Ok(())` once the label is erased
    pub fn remove(&mut self, label: &str) -> CoreResult<()> {
        if self.labels.is_empty() {
            return Err(CoreError::EmptyList);
        }

        if !self.labels.remove(label) {
            return Err(CoreError::NotFound(label.to_string()));
        }

        Ok(())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Renders the list block shown by Show and at exit.
    ///
    /// ```text
    /// ///////////////////////
    /// Modern_Table<TAB>Retro_Chair<TAB>
    /// ///////////////////////
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ShoppingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", LIST_SEPARATOR)?;
        for label in self.iter() {
            write!(f, "{}\t", label)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", LIST_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut list = ShoppingList::new();

        assert!(list.insert("Retro_Chair"));
        assert!(!list.insert("Retro_Chair"));

        assert_eq!(list.len(), 1);
        assert!(list.contains("Retro_Chair"));
    }

    #[test]
    fn test_remove_from_empty_list() {
        let mut list = ShoppingList::new();

        assert_eq!(list.remove("Retro_Chair"), Err(CoreError::EmptyList));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_missing_label_leaves_list_unchanged() {
        let mut list = ShoppingList::new();
        list.insert("Modern_Table");
        let before = list.clone();

        assert_eq!(
            list.remove("Retro_Chair"),
            Err(CoreError::NotFound("Retro_Chair".to_string()))
        );
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_erases_exactly_one_label() {
        let mut list = ShoppingList::new();
        list.insert("Retro_Chair");
        list.insert("Modern_Table");

        list.remove("Retro_Chair").unwrap();

        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["Modern_Table"]);
    }

    #[test]
    fn test_remove_is_case_sensitive() {
        let mut list = ShoppingList::new();
        list.insert("Retro_Chair");

        assert!(matches!(
            list.remove("retro_chair"),
            Err(CoreError::NotFound(_))
        ));
        assert!(list.contains("Retro_Chair"));
    }

    #[test]
    fn test_render_is_lexicographic() {
        let mut list = ShoppingList::new();
        list.insert("Modern_Table");
        list.insert("Retro_Chair");
        list.insert("Modern_Chair");

        assert_eq!(
            list.render(),
            "///////////////////////\n\
             Modern_Chair\tModern_Table\tRetro_Chair\t\n\
             ///////////////////////\n"
        );
    }

    #[test]
    fn test_render_empty_list() {
        let list = ShoppingList::new();
        assert_eq!(
            list.render(),
            "///////////////////////\n\n///////////////////////\n"
        );
    }

    #[test]
    fn test_serializes_as_sorted_array() {
        let mut list = ShoppingList::new();
        list.insert("Retro_Table");
        list.insert("Modern_Chair");

        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["Modern_Chair","Retro_Table"]"#);

        let back: ShoppingList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
