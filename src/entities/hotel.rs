use serde::{Deserialize, Serialize};

use crate::entities::contains_ci;
use crate::store::Record;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl Record for Hotel {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ci(Some(&self.name), needle)
            || contains_ci(self.location.as_deref(), needle)
            || contains_ci(self.address.as_deref(), needle)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HotelUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl HotelUpdate {
    pub fn from_hotel(hotel: &Hotel) -> Self {
        Self {
            name: Some(hotel.name.clone()),
            location: hotel.location.clone(),
            address: hotel.address.clone(),
            description: hotel.description.clone(),
        }
    }
}
