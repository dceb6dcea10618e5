//! CSV → VolunteerEvent normalization.
//!
//! parse → per-row transform → validity filter. Sorting is a separate step
//! ([`sort_chronologically`]) that callers run before handing events to a view.

use crate::config::{Config, IdFallback};
use crate::models::raw_row::{RawRow, non_blank};
use crate::models::volunteer_event::{
    Coordinates, DEFAULT_CATEGORY, DEFAULT_DESCRIPTION, DEFAULT_INTENSITY, DEFAULT_LOCATION,
    DEFAULT_ORGANIZATION, DEFAULT_RECURRENCE, DEFAULT_TITLE, FALLBACK_LATITUDE,
    FALLBACK_LONGITUDE, VolunteerEvent,
};
use crate::utils::date::parse_permissive;
use chrono::NaiveDateTime;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    pub id_fallback: IdFallback,
    pub reject_reversed_ranges: bool,
}

impl From<&Config> for NormalizeOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            id_fallback: cfg.id_fallback,
            reject_reversed_ranges: cfg.reject_reversed_ranges,
        }
    }
}

/// A transformed row whose dates have not been validated yet.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub id: String,
    pub title: String,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub location: String,
    pub category: String,
    pub coordinates: Coordinates,
    pub description: String,
    pub organization: String,
    pub kind: String,
}

impl EventDraft {
    /// Validity filter: a draft becomes an event only if both dates parsed.
    pub fn validate(self, opts: &NormalizeOptions) -> Option<VolunteerEvent> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            log::debug!("dropping '{}': unparseable start/end date", self.title);
            return None;
        };

        if opts.reject_reversed_ranges && end < start {
            log::debug!("dropping '{}': end {} before start {}", self.title, end, start);
            return None;
        }

        Some(VolunteerEvent {
            id: self.id,
            title: self.title,
            start,
            end,
            location: self.location,
            category: self.category,
            coordinates: self.coordinates,
            intensity: DEFAULT_INTENSITY,
            description: self.description,
            organization: self.organization,
            kind: self.kind,
        })
    }
}

/// Split CSV text into rows keyed by the header line.
///
/// Blank lines are skipped by the reader. Rows that cannot be decoded are
/// dropped (logged at debug level).
pub fn parse_rows(csv_text: &str) -> Vec<RawRow> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(csv_text.as_bytes());

    let mut rows = Vec::new();
    for (idx, rec) in rdr.deserialize::<RawRow>().enumerate() {
        match rec {
            Ok(row) => rows.push(row),
            Err(e) => log::debug!("skipping CSV record {}: {}", idx + 1, e),
        }
    }

    log::trace!("parsed {} CSV rows", rows.len());
    rows
}

/// Transform one row. Returns `None` when a required date column is missing;
/// otherwise every other field is defaulted and never fails.
pub fn transform_row(row: &RawRow, opts: &NormalizeOptions) -> Option<EventDraft> {
    let start_raw = non_blank(&row.start_date_date)?;
    let end_raw = non_blank(&row.end_date_date)?;

    let start = parse_permissive(start_raw);
    let end = parse_permissive(end_raw);

    let title = text_or(&row.title, DEFAULT_TITLE);
    let organization = text_or(&row.org_title, DEFAULT_ORGANIZATION);

    let id = match non_blank(&row.opportunity_id) {
        Some(id) => id.to_string(),
        None => synthesize_id(opts.id_fallback, &title, start_raw, &organization),
    };

    Some(EventDraft {
        id,
        title,
        start,
        end,
        location: text_or(&row.locality, DEFAULT_LOCATION),
        category: text_or(&row.category_desc, DEFAULT_CATEGORY),
        coordinates: Coordinates {
            latitude: coordinate_or(&row.latitude, FALLBACK_LATITUDE),
            longitude: coordinate_or(&row.longitude, FALLBACK_LONGITUDE),
        },
        description: text_or(&row.summary, DEFAULT_DESCRIPTION),
        organization,
        kind: text_or(&row.recurrence_type, DEFAULT_RECURRENCE),
    })
}

/// Full pipeline on raw CSV text. Output keeps input order.
pub fn normalize(csv_text: &str, opts: &NormalizeOptions) -> Vec<VolunteerEvent> {
    let events: Vec<VolunteerEvent> = parse_rows(csv_text)
        .iter()
        .filter_map(|row| transform_row(row, opts))
        .filter_map(|draft| draft.validate(opts))
        .collect();

    log::debug!("normalized {} events", events.len());
    events
}

/// Ascending by start; equal starts keep their relative order.
pub fn sort_chronologically(events: &mut [VolunteerEvent]) {
    events.sort_by_key(|e| e.start);
}

fn text_or(field: &Option<String>, default: &str) -> String {
    non_blank(field).unwrap_or(default).to_string()
}

// 0 counts as missing.
fn coordinate_or(field: &Option<String>, fallback: f64) -> f64 {
    non_blank(field)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v != 0.0)
        .unwrap_or(fallback)
}

fn synthesize_id(mode: IdFallback, title: &str, start_raw: &str, organization: &str) -> String {
    match mode {
        IdFallback::Random => uuid::Uuid::new_v4().to_string(),
        IdFallback::Hashed => {
            let mut hasher = Sha256::new();
            hasher.update(title.as_bytes());
            hasher.update([0x1fu8]);
            hasher.update(start_raw.as_bytes());
            hasher.update([0x1fu8]);
            hasher.update(organization.as_bytes());
            let digest = hasher.finalize();
            format!("gen-{}", hex::encode(&digest[..8]))
        }
    }
}
