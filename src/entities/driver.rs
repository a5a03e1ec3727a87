use serde::{Deserialize, Serialize};

use crate::entities::contains_ci;
use crate::store::Record;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Driver {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
    #[serde(default)]
    pub status: DriverStatus,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub plate: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    Active,
    Inactive,
}

impl Default for DriverStatus {
    fn default() -> Self {
        Self::Inactive
    }
}

impl DriverStatus {
    pub fn name(&self) -> String {
        match self {
            Self::Active => "active".into(),
            Self::Inactive => "inactive".into(),
        }
    }
}

impl Driver {
    pub fn is_active(&self) -> bool {
        match self.status {
            DriverStatus::Active => true,
            _ => false,
        }
    }
}

impl Record for Driver {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ci(self.name.as_deref(), needle)
            || contains_ci(self.contact.as_deref(), needle)
            || contains_ci(
                self.vehicle.as_ref().and_then(|v| v.plate.as_deref()),
                needle,
            )
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DriverDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DriverUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<Vehicle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DriverStatus>,
}

impl DriverUpdate {
    pub fn from_driver(driver: &Driver) -> Self {
        Self {
            name: driver.name.clone(),
            contact: driver.contact.clone(),
            vehicle: driver.vehicle.clone(),
            status: Some(driver.status.clone()),
        }
    }
}
