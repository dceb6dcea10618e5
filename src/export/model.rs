// src/export/model.rs

use crate::models::volunteer_event::VolunteerEvent;
use serde::Serialize;

/// Flat record for CSV export (coordinates split into two columns).
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub location: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub intensity: u32,
    pub description: String,
    pub organization: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<&VolunteerEvent> for EventExport {
    fn from(e: &VolunteerEvent) -> Self {
        Self {
            id: e.id.clone(),
            title: e.title.clone(),
            start: e.start.format("%Y-%m-%dT%H:%M:%S").to_string(),
            end: e.end.format("%Y-%m-%dT%H:%M:%S").to_string(),
            location: e.location.clone(),
            category: e.category.clone(),
            latitude: e.coordinates.latitude,
            longitude: e.coordinates.longitude,
            intensity: e.intensity,
            description: e.description.clone(),
            organization: e.organization.clone(),
            kind: e.kind.clone(),
        }
    }
}
