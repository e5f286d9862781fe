use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AppResult;

const TIME_FORMAT: &str = "%H:%M:%S";

/// Parses a canonical `HH:MM:SS` time of day.
pub fn parse_time_of_day(value: &str) -> AppResult<NaiveTime> {
    Ok(NaiveTime::parse_from_str(value, TIME_FORMAT)?)
}

/// The window during which a restaurant takes orders.
///
/// Both ends are inclusive. Windows that wrap past midnight are not
/// supported: when `closing` is before `opening` no time falls inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(rename = "openingTime")]
    pub opening: NaiveTime,
    #[serde(rename = "closingTime")]
    pub closing: NaiveTime,
}

impl OpeningHours {
    pub fn new(opening: NaiveTime, closing: NaiveTime) -> Self {
        Self { opening, closing }
    }

    pub fn parse(opening: &str, closing: &str) -> AppResult<Self> {
        Ok(Self::new(parse_time_of_day(opening)?, parse_time_of_day(closing)?))
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.opening && time <= self.closing
    }
}

impl fmt::Display for OpeningHours {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.opening.format(TIME_FORMAT),
            self.closing.format(TIME_FORMAT)
        )
    }
}
