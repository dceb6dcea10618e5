//! Loading of the raw opportunities CSV from a file path or an HTTP(S) URL.

use crate::core::normalizer::{NormalizeOptions, normalize, sort_chronologically};
use crate::errors::AppResult;
use crate::models::volunteer_event::VolunteerEvent;
use crate::utils::path::expand_tilde;
use std::fs;
use std::time::Duration;

fn is_remote(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn read_source(source: &str) -> AppResult<String> {
    if is_remote(source) {
        // single attempt, no deadline
        let client = reqwest::blocking::Client::builder()
            .timeout(Option::<Duration>::None)
            .build()?;
        let body = client.get(source).send()?.error_for_status()?.text()?;
        Ok(body)
    } else {
        Ok(fs::read_to_string(expand_tilde(source))?)
    }
}

/// Fetch the CSV text once. Any failure is logged and reported as "no data".
pub fn fetch_csv(source: &str) -> Option<String> {
    match read_source(source) {
        Ok(text) => {
            log::debug!("fetched {} bytes from {}", text.len(), source);
            Some(text)
        }
        Err(e) => {
            log::error!("Error fetching CSV from {}: {}", source, e);
            None
        }
    }
}

/// Fetch, normalize and sort. Fetch failures yield an empty list.
pub fn load_events(source: &str, opts: &NormalizeOptions) -> Vec<VolunteerEvent> {
    let Some(text) = fetch_csv(source) else {
        return Vec::new();
    };

    let mut events = normalize(&text, opts);
    sort_chronologically(&mut events);
    log::info!("loaded {} events from {}", events.len(), source);
    events
}
