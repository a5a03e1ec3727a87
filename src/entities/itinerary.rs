use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::contains_ci;
use crate::error::{invalid_input_error, Error};
use crate::store::Record;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub travelers: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub destinations: Vec<String>,
    #[serde(default)]
    pub stays: Vec<HotelStay>,
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HotelStay {
    pub hotel_id: i64,
    #[serde(default)]
    pub hotel_name: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduleItem {
    #[serde(default)]
    pub day: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<String>,
    pub activity: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItineraryStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl ItineraryStatus {
    pub fn name(&self) -> String {
        match self {
            Self::Upcoming => "upcoming".into(),
            Self::Ongoing => "ongoing".into(),
            Self::Completed => "completed".into(),
        }
    }
}

impl Itinerary {
    /// Status is derived from the date range, never sent to the server.
    pub fn status_on(&self, today: NaiveDate) -> ItineraryStatus {
        if today < self.start_date {
            ItineraryStatus::Upcoming
        } else if today > self.end_date {
            ItineraryStatus::Completed
        } else {
            ItineraryStatus::Ongoing
        }
    }
}

impl Record for Itinerary {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ci(Some(&self.name), needle)
            || self
                .destinations
                .iter()
                .any(|destination| contains_ci(Some(destination), needle))
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ItineraryDraft {
    pub name: String,
    pub travelers: u32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub destinations: Vec<String>,
    #[serde(default)]
    pub stays: Vec<HotelStay>,
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
}

impl ItineraryDraft {
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            name: itinerary.name.clone(),
            travelers: itinerary.travelers,
            start_date: Some(itinerary.start_date),
            end_date: Some(itinerary.end_date),
            destinations: itinerary.destinations.clone(),
            stays: itinerary.stays.clone(),
            schedule: itinerary.schedule.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        let (start, end) = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(invalid_input_error()),
        };

        if self.name.is_empty() || end < start {
            return Err(invalid_input_error());
        }

        Ok(())
    }
}
