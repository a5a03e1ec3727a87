use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::contains_ci;
use crate::error::{invalid_input_error, Error};
use crate::store::Record;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub date: NaiveDate,
    pub hotel_id: i64,
    #[serde(default)]
    pub hotel_name: Option<String>,
    pub author_id: i64,
}

impl Record for Review {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ci(self.hotel_name.as_deref(), needle)
            || contains_ci(self.comment.as_deref(), needle)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ReviewUpdate {
    pub fn from_review(review: &Review) -> Self {
        Self {
            rating: Some(review.rating),
            comment: review.comment.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        match self.rating {
            Some(rating) if !(1..=5).contains(&rating) => Err(invalid_input_error()),
            _ => Ok(()),
        }
    }
}

pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }

    let sum: u32 = reviews.iter().map(|review| review.rating as u32).sum();

    Some(sum as f64 / reviews.len() as f64)
}

/// Whole stars plus a half star when the fractional part reaches 0.5.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarDisplay {
    pub full: u8,
    pub half: bool,
}

pub fn star_display(average: f64) -> StarDisplay {
    let full = average.floor() as u8;

    StarDisplay {
        full,
        half: average - full as f64 >= 0.5,
    }
}
