use chrono::NaiveTime;
use std::fmt;
use std::io::{self, Write};
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::error::AppResult;
use crate::hours::OpeningHours;
use crate::menu::{Item, Menu};

/// A single restaurant: who it is, when it is open and what it serves.
///
/// The clock is a type parameter so that open checks can be pinned to a
/// known instant. Outside of tests the default [`SystemClock`] is used.
#[derive(Debug, Clone)]
pub struct Restaurant<C = SystemClock> {
    name: String,
    location: String,
    hours: OpeningHours,
    menu: Menu,
    clock: C,
}

impl Restaurant<SystemClock> {
    /// Creates a restaurant with an empty menu that reads the wall clock.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> Self {
        Self::with_hours(name, location, OpeningHours::new(opening_time, closing_time))
    }

    pub fn with_hours(
        name: impl Into<String>,
        location: impl Into<String>,
        hours: OpeningHours,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            hours,
            menu: Menu::new(),
            clock: SystemClock,
        }
    }
}

impl<C: Clock> Restaurant<C> {
    /// Replaces the time source, keeping everything else.
    pub fn with_clock<T: Clock>(self, clock: T) -> Restaurant<T> {
        Restaurant {
            name: self.name,
            location: self.location,
            hours: self.hours,
            menu: self.menu,
            clock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn hours(&self) -> OpeningHours {
        self.hours
    }

    pub fn opening_time(&self) -> NaiveTime {
        self.hours.opening
    }

    pub fn closing_time(&self) -> NaiveTime {
        self.hours.closing
    }

    pub fn current_time(&self) -> NaiveTime {
        self.clock.now()
    }

    /// True when the clock's current time lies within the opening hours.
    pub fn is_open(&self) -> bool {
        self.is_open_at(self.current_time())
    }

    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        self.hours.contains(time)
    }

    /// Read-only view of the menu in insertion order.
    pub fn menu(&self) -> &[Item] {
        self.menu.items()
    }

    pub fn find_item_by_name(&self, name: &str) -> Option<&Item> {
        self.menu.find_by_name(name)
    }

    pub fn add_to_menu(&mut self, name: impl Into<String>, price: u32) {
        self.menu.add(name, price);
    }

    /// # Errors
    /// * `AppError::ItemNotFound` - no item with that name is on the menu
    pub fn remove_from_menu(&mut self, name: &str) -> AppResult<Item> {
        self.menu.remove(name)
    }

    /// Total price of the named items; names missing from the menu are ignored.
    pub fn order_value<I, S>(&self, names: I) -> u64
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.menu.order_value(names)
    }

    pub fn write_details<W: Write>(&self, out: &mut W) -> AppResult<()> {
        write!(out, "{}", self)?;
        out.flush()?;
        Ok(())
    }

    /// Prints the restaurant's details and menu to standard output.
    pub fn display_details(&self) {
        debug!(restaurant = %self.name, "displaying details");
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        // stdout going away is not something a caller can act on
        let _ = self.write_details(&mut handle);
    }
}

impl<C> fmt::Display for Restaurant<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Restaurant:{}", self.name)?;
        writeln!(f, "Location:{}", self.location)?;
        writeln!(f, "Opening time:{}", self.hours.opening.format("%H:%M:%S"))?;
        writeln!(f, "Closing time:{}", self.hours.closing.format("%H:%M:%S"))?;
        writeln!(f, "Menu:")?;
        write!(f, "{}", self.menu)
    }
}
