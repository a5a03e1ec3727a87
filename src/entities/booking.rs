use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::{Room, AVAILABILITY_HORIZON_DAYS};
use crate::error::{invalid_input_error, Error};

pub const TAX_RATE: f64 = 0.12;

const DAY_MS: i64 = 86_400_000;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Booking {
    /// Display id. The server assigns the authoritative one; a cosmetic
    /// fallback is synthesized at the client boundary when it is omitted.
    #[serde(default)]
    pub id: Option<String>,
    pub room_id: i64,
    pub hotel_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub guests: u32,
    #[serde(default)]
    pub total: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BookingDraft {
    pub room_id: i64,
    pub hotel_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total: i64,
}

/// Priced stay over a date range, inclusive of the check-in day. Day count is
/// the ceiling of the millisecond difference over the day length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub nights: i64,
    pub subtotal: i64,
    pub tax: i64,
    pub total: i64,
}

impl Quote {
    pub fn build(
        room: &Room,
        today: NaiveDate,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Self, Error> {
        let nights = stay_nights(check_in, check_out)?;

        let offset = (check_in - today).num_days();
        if offset < 0 || (offset + nights) as usize > AVAILABILITY_HORIZON_DAYS {
            return Err(invalid_input_error());
        }

        let mut subtotal = 0;

        for night in 0..nights {
            let day = (offset + night) as usize;
            subtotal += room.price_on(day).ok_or_else(invalid_input_error)?;
        }

        let tax = (subtotal as f64 * TAX_RATE).round() as i64;

        Ok(Self {
            nights,
            subtotal,
            tax,
            total: subtotal + tax,
        })
    }
}

pub fn stay_nights(check_in: NaiveDate, check_out: NaiveDate) -> Result<i64, Error> {
    let span_ms = (check_out - check_in).num_milliseconds();

    if span_ms <= 0 {
        return Err(invalid_input_error());
    }

    Ok((span_ms + DAY_MS - 1) / DAY_MS)
}
