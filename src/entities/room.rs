use serde::{Deserialize, Serialize};

use crate::entities::contains_ci;
use crate::store::Record;

/// Prices and occupancy are indexed by day-offset from today; the server
/// publishes a fixed 60-day window.
pub const AVAILABILITY_HORIZON_DAYS: usize = 60;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    #[serde(default)]
    pub hotel_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub capacity: u32,
    #[serde(default)]
    pub total_number: u32,
    #[serde(default)]
    pub day_prices: Vec<i64>,
    #[serde(default)]
    pub days: Vec<DayOccupancy>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DayOccupancy {
    pub available: u32,
    pub booked: u32,
}

impl Room {
    pub fn price_on(&self, offset: usize) -> Option<i64> {
        self.day_prices.get(offset).copied()
    }

    pub fn is_open_on(&self, offset: usize) -> bool {
        match self.days.get(offset) {
            Some(day) => day.available > day.booked,
            None => false,
        }
    }
}

impl Record for Room {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ci(Some(&self.kind), needle)
    }
}
