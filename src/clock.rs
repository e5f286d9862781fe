//! Sources of the current time of day.
//!
//! A [`Restaurant`](crate::restaurant::Restaurant) asks its clock for the time
//! whenever it checks whether it is open, so tests can pin the instant with
//! [`FixedClock`] or a closure instead of reading the wall clock.

use chrono::{Local, NaiveTime};

pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> NaiveTime,
{
    fn now(&self) -> NaiveTime {
        self()
    }
}
