use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const MIN_PRIORITY: u8 = 0;
pub const MAX_PRIORITY: u8 = 4;

/// Task priority, an integer in `0..=4`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Priority(u8);

impl Priority {
    #[track_caller]
    pub fn new(value: i64) -> CoreResult<Self> {
        if value < MIN_PRIORITY as i64 || value > MAX_PRIORITY as i64 {
            return Err(CoreError::InvalidPriority {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Priority {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: i64) -> CoreResult<Self> {
        Self::new(value)
    }
}

impl From<Priority> for i64 {
    fn from(priority: Priority) -> Self {
        priority.0 as i64
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        let value = s.trim().parse::<i64>().map_err(|_| CoreError::InvalidPriority {
            value: s.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        Self::new(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
