use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::AppResult;
use crate::hours::OpeningHours;
use crate::menu::Item;
use crate::restaurant::Restaurant;

pub const RESTAURANT_FILE_VAR: &str = "RESTAURANT_FILE";
pub const DEFAULT_RESTAURANT_FILE: &str = "static/restaurant.json";

// This struct matches the JSON restaurant definition
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RestaurantConfig {
    pub name: String,
    pub location: String,
    #[serde(flatten)]
    pub hours: OpeningHours,
    #[serde(default)]
    pub menu: Vec<Item>,
}

impl RestaurantConfig {
    /// Loads the file named by `RESTAURANT_FILE`, falling back to
    /// `static/restaurant.json`.
    pub fn load() -> AppResult<Self> {
        let path = std::env::var(RESTAURANT_FILE_VAR)
            .unwrap_or_else(|_| DEFAULT_RESTAURANT_FILE.to_string());
        Self::load_from(path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        info!("Loading restaurant from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Builds the restaurant, adding menu entries in file order.
    pub fn into_restaurant(self) -> Restaurant {
        let mut restaurant = Restaurant::with_hours(self.name, self.location, self.hours);
        for item in self.menu {
            restaurant.add_to_menu(item.name, item.price);
        }
        restaurant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CAFE: &str = r#"{
        "name": "Amelie's cafe",
        "location": "Chennai",
        "openingTime": "10:30:00",
        "closingTime": "22:00:00",
        "menu": [
            { "name": "Sweet corn soup", "price": 119 },
            { "name": "Vegetable lasagne", "price": 269 }
        ]
    }"#;

    #[test]
    fn builds_restaurant_from_json() {
        let restaurant = RestaurantConfig::from_json(CAFE).unwrap().into_restaurant();
        assert_eq!(restaurant.name(), "Amelie's cafe");
        assert_eq!(restaurant.location(), "Chennai");
        assert_eq!(restaurant.opening_time().to_string(), "10:30:00");
        assert_eq!(restaurant.closing_time().to_string(), "22:00:00");
        assert_eq!(
            restaurant.menu(),
            &[Item::new("Sweet corn soup", 119), Item::new("Vegetable lasagne", 269)]
        );
    }

    #[test]
    fn menu_is_optional() {
        let json = r#"{"name":"X","location":"Y","openingTime":"09:00:00","closingTime":"23:00:00"}"#;
        let restaurant = RestaurantConfig::from_json(json).unwrap().into_restaurant();
        assert!(restaurant.menu().is_empty());
    }

    #[test]
    fn rejects_bad_times() {
        let json = r#"{"name":"X","location":"Y","openingTime":"nine","closingTime":"23:00:00"}"#;
        assert!(matches!(RestaurantConfig::from_json(json), Err(AppError::Json(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CAFE.as_bytes()).unwrap();
        let config = RestaurantConfig::load_from(file.path()).unwrap();
        assert_eq!(config.menu.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = RestaurantConfig::load_from(dir.path().join("nope.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
