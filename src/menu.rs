use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub price: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.price)
    }
}

/// Insertion-ordered list of items.
///
/// Names are not required to be unique; every lookup resolves to the first
/// item with an exactly matching name.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Menu {
    items: Vec<Item>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(&mut self, name: impl Into<String>, price: u32) {
        let item = Item::new(name, price);
        debug!(item = %item.name, price = item.price, "adding item to menu");
        self.items.push(item);
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Removes the first item called `name` and hands it back.
    ///
    /// # Errors
    /// * `AppError::ItemNotFound` - nothing on the menu has that name; the
    ///   menu is left as it was
    pub fn remove(&mut self, name: &str) -> AppResult<Item> {
        let index = self
            .items
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| AppError::ItemNotFound(name.to_string()))?;

        let item = self.items.remove(index);
        debug!(item = %item.name, "removed item from menu");
        Ok(item)
    }

    /// Sums the prices of the named items.
    ///
    /// Names that are not on the menu add nothing. Takes anything iterable, so
    /// `&["a", "b"]`, `vec![..]` and borrowed `Vec<String>`s all work.
    pub fn order_value<I, S>(&self, names: I) -> u64
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| self.find_by_name(name.as_ref()))
            .map(|item| u64::from(item.price))
            .sum()
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for item in self.iter() {
            writeln!(f, "{}", item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Menu {
        let mut menu = Menu::new();
        menu.add("Sweet corn soup", 119);
        menu.add("Vegetable lasagne", 269);
        menu
    }

    #[test]
    fn add_appends_in_order() {
        let mut menu = menu();
        menu.add("Sizzling brownie", 319);
        assert_eq!(menu.len(), 3);
        assert_eq!(menu.items()[2], Item::new("Sizzling brownie", 319));
    }

    #[test]
    fn duplicates_resolve_to_first_entry() {
        let mut menu = menu();
        menu.add("Sweet corn soup", 150);
        assert_eq!(menu.len(), 3);
        assert_eq!(menu.find_by_name("Sweet corn soup").unwrap().price, 119);
        assert_eq!(menu.order_value(["Sweet corn soup"]), 119);

        let removed = menu.remove("Sweet corn soup").unwrap();
        assert_eq!(removed.price, 119);
        assert_eq!(menu.find_by_name("Sweet corn soup").unwrap().price, 150);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let menu = menu();
        assert!(menu.find_by_name("sweet corn soup").is_none());
        assert!(menu.find_by_name("Sweet corn soup").is_some());
    }

    #[test]
    fn remove_missing_item_leaves_menu_untouched() {
        let mut menu = menu();
        let before = menu.clone();
        match menu.remove("French fries") {
            Err(AppError::ItemNotFound(name)) => assert_eq!(name, "French fries"),
            other => panic!("expected ItemNotFound, got {:?}", other),
        }
        assert_eq!(menu, before);
    }

    #[test]
    fn order_value_skips_unknown_names() {
        let menu = menu();
        assert_eq!(menu.order_value(Vec::<String>::new()), 0);
        assert_eq!(menu.order_value(["Garlic bread", "Tiramisu"]), 0);
        assert_eq!(menu.order_value(["Sweet corn soup", "Nonexistent"]), 119);
    }

    #[test]
    fn order_value_accepts_owned_and_borrowed_names() {
        let menu = menu();
        let owned = vec!["Sweet corn soup".to_string(), "Vegetable lasagne".to_string()];
        assert_eq!(menu.order_value(&owned), 388);
        assert_eq!(menu.order_value(owned.iter().map(String::as_str)), 388);
        assert_eq!(menu.order_value(["Sweet corn soup", "Vegetable lasagne"]), 388);
    }

    #[test]
    fn repeated_names_are_charged_each_time() {
        let menu = menu();
        assert_eq!(menu.order_value(["Sweet corn soup"; 3]), 357);
    }

    #[test]
    fn serializes_as_plain_list() {
        let json = serde_json::to_string(&menu()).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"Sweet corn soup","price":119},{"name":"Vegetable lasagne","price":269}]"#
        );
    }
}
