//! Restaurant
//!
//! An in-memory model of a single restaurant: its opening hours, its menu and
//! the value of an order placed against that menu. Meant to be embedded in a
//! larger ordering application.
//!
//! # Architecture
//!
//! ## Core Components
//!
//! * `restaurant` - The restaurant entity, open checks and detail rendering
//! * `menu` - Menu items, menu mutation and order pricing
//! * `hours` - Opening hours and `HH:MM:SS` parsing
//! * `clock` - Injectable source of the current time of day
//! * `config` - JSON restaurant definitions
//! * `error` - Error types
//!
//! ## Design
//!
//! ### Open checks (`restaurant.rs`, `clock.rs`)
//! - The restaurant is open when the current time lies in `[opening, closing]`
//! - Both boundaries are inclusive; windows past midnight are not supported
//! - The current time comes from a `Clock`, the system clock by default
//!
//! ### Menu (`menu.rs`)
//! - Items are kept in insertion order and names may repeat
//! - Lookups resolve to the first item with an exactly matching name
//! - Removing an unknown item is an error, pricing an unknown item adds 0
//!
//! # Environment Configuration
//!
//! The bundled binary reads:
//!
//! ```bash
//! RESTAURANT_FILE=static/restaurant.json  # Path to the restaurant definition
//! RUST_LOG=info                           # Logging level
//! ```
//!
//! # Error Handling
//!
//! `AppError` covers:
//! - Removing an item that is not on the menu
//! - Malformed times of day
//! - Reading and parsing restaurant definitions
//!
//! # Example Usage
//!
//! ```rust
//! use restaurant::clock::FixedClock;
//! use restaurant::hours::parse_time_of_day;
//! use restaurant::restaurant::Restaurant;
//!
//! # fn main() -> restaurant::error::AppResult<()> {
//! let mut cafe = Restaurant::new(
//!     "Amelie's cafe",
//!     "Chennai",
//!     parse_time_of_day("10:30:00")?,
//!     parse_time_of_day("22:00:00")?,
//! )
//! .with_clock(FixedClock(parse_time_of_day("12:00:00")?));
//!
//! cafe.add_to_menu("Sweet corn soup", 119);
//! cafe.add_to_menu("Vegetable lasagne", 269);
//!
//! assert!(cafe.is_open());
//! assert_eq!(cafe.order_value(["Sweet corn soup", "Vegetable lasagne"]), 388);
//! assert!(cafe.remove_from_menu("French fries").is_err());
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod hours;
pub mod menu;
pub mod restaurant;
