use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::contains_ci;
use crate::store::Record;

/// Server-owned customer record. The password is write-only and never comes
/// back on a read.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub dob: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl Record for Customer {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ci(Some(&self.username), needle)
            || contains_ci(self.name.as_deref(), needle)
            || contains_ci(self.email.as_deref(), needle)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub dob: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl CustomerUpdate {
    /// Pre-populates an edit draft from the selected row.
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            name: customer.name.clone(),
            address: customer.address.clone(),
            dob: customer.dob,
            gender: customer.gender.clone(),
        }
    }
}
