//! Traveler domain model.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Lifecycle of a trip. Driven by the backend; the console only reads it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TravelerStatus {
    PreDeparture,
    Traveling,
    Completed,
}

impl TravelerStatus {
    /// Human-readable label, e.g. "pre departure".
    pub fn label(&self) -> String {
        self.as_ref().replace('_', " ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelDates {
    pub departure: NaiveDate,
    #[serde(rename = "return")]
    pub return_date: NaiveDate,
}

impl TravelDates {
    pub fn new(departure: NaiveDate, return_date: NaiveDate) -> Self {
        Self {
            departure,
            return_date,
        }
    }

    /// Departure must not be after return.
    pub fn is_ordered(&self) -> bool {
        self.departure <= self.return_date
    }
}

/// The end customer being communicated with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traveler {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "booking_id")]
    pub booking_reference: String,
    pub destination: String,
    pub travel_dates: TravelDates,
    pub status: TravelerStatus,
    /// Open-ended preferences such as `communication` or `language`.
    #[serde(default)]
    pub preferences: BTreeMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Traveler {
    pub fn is_traveling(&self) -> bool {
        self.status == TravelerStatus::Traveling
    }

    pub fn preference(&self, key: &str) -> Option<&serde_json::Value> {
        self.preferences.get(key)
    }
}
