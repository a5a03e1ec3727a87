use serde::{Deserialize, Serialize};

use crate::entities::contains_ci;
use crate::error::{invalid_input_error, Error};
use crate::store::Record;

/// A ride still waiting for a driver. Ids arrive in display form ("r-7");
/// the transition endpoints want the bare number.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RideRequest {
    pub id: String,
    #[serde(default)]
    pub passenger_name: Option<String>,
    #[serde(default)]
    pub pickup: Option<String>,
    #[serde(default)]
    pub dropoff: Option<String>,
    #[serde(default)]
    pub fare: Option<f64>,
}

impl RideRequest {
    pub fn numeric_id(&self) -> Result<i64, Error> {
        self.id
            .rsplit('-')
            .next()
            .and_then(|digits| digits.parse().ok())
            .ok_or_else(invalid_input_error)
    }
}

impl Record for RideRequest {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ci(self.passenger_name.as_deref(), needle)
            || contains_ci(self.pickup.as_deref(), needle)
            || contains_ci(self.dropoff.as_deref(), needle)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trip {
    pub id: i64,
    pub status: TripStatus,
    #[serde(default)]
    pub passenger_name: Option<String>,
    #[serde(default)]
    pub pickup: Option<String>,
    #[serde(default)]
    pub dropoff: Option<String>,
    #[serde(default)]
    pub fare: Option<f64>,
    #[serde(default)]
    pub driver_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Pending,
    Confirmed,
    Completed,
}

impl TripStatus {
    pub fn name(&self) -> String {
        match self {
            Self::Pending => "pending".into(),
            Self::Confirmed => "confirmed".into(),
            Self::Completed => "completed".into(),
        }
    }
}

impl Trip {
    pub fn is_completed(&self) -> bool {
        match self.status {
            TripStatus::Completed => true,
            _ => false,
        }
    }
}

impl Record for Trip {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ci(self.passenger_name.as_deref(), needle)
            || contains_ci(self.pickup.as_deref(), needle)
            || contains_ci(self.dropoff.as_deref(), needle)
    }
}
