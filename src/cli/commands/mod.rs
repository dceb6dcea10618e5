pub mod categories;
pub mod chat;
pub mod config;
pub mod events;
pub mod export;
pub mod init;
pub mod profile;
pub mod stats;

use crate::config::Config;
use crate::core::normalizer::NormalizeOptions;
use crate::core::source::load_events;
use crate::errors::AppResult;
use crate::models::volunteer_event::VolunteerEvent;
use crate::ui::messages::warning;
use crate::utils::date::{Period, parse_period};

/// Load the sorted opportunities for the configured source.
pub(crate) fn load_catalog(cfg: &Config) -> Vec<VolunteerEvent> {
    let events = load_events(&cfg.csv_source, &NormalizeOptions::from(cfg));
    if events.is_empty() {
        warning(format!("No volunteer opportunities available from {}", cfg.csv_source));
    }
    events
}

pub(crate) fn resolve_period(period: &Option<String>) -> AppResult<Option<Period>> {
    match period {
        Some(p) => parse_period(p),
        None => Ok(None),
    }
}
