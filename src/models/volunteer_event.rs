use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Map point used when a row has no usable coordinates (New York City center).
pub const FALLBACK_LATITUDE: f64 = 40.7128;
pub const FALLBACK_LONGITUDE: f64 = -74.0060;

/// Placeholder heat-map weight carried by every event.
pub const DEFAULT_INTENSITY: u32 = 50;

pub const DEFAULT_TITLE: &str = "Untitled Event";
pub const DEFAULT_LOCATION: &str = "Location TBD";
pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_DESCRIPTION: &str = "No description available";
pub const DEFAULT_ORGANIZATION: &str = "Organization";
pub const DEFAULT_RECURRENCE: &str = "onetime";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn fallback() -> Self {
        Self {
            latitude: FALLBACK_LATITUDE,
            longitude: FALLBACK_LONGITUDE,
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}

/// A calendar-ready volunteer opportunity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolunteerEvent {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime, // ⇔ start_date_date
    pub end: NaiveDateTime,   // ⇔ end_date_date
    pub location: String,     // ⇔ locality
    pub category: String,     // ⇔ category_desc
    pub coordinates: Coordinates,
    pub intensity: u32,
    pub description: String,  // ⇔ summary
    pub organization: String, // ⇔ org_title
    #[serde(rename = "type")]
    pub kind: String, // ⇔ recurrence_type ("onetime" | "ongoing" | ...)
}

impl VolunteerEvent {
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Ongoing opportunities are highlighted apart from one-time ones.
    pub fn is_ongoing(&self) -> bool {
        self.kind.eq_ignore_ascii_case("ongoing")
    }

    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%Y-%m-%d %H:%M").to_string()
    }
}
