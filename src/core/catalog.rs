//! Category filtering and summary figures over a loaded event list.

use crate::models::volunteer_event::VolunteerEvent;
use crate::utils::date::Period;
use chrono::NaiveDateTime;
use std::collections::HashSet;

pub const ALL_CATEGORIES: &str = "All";

/// `"All"` followed by the distinct categories in first-seen order.
pub fn categories(events: &[VolunteerEvent]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for e in events {
        if seen.insert(e.category.as_str()) {
            out.push(e.category.clone());
        }
    }
    out
}

/// Number of events per category, in the order returned by [`categories`].
pub fn category_counts(events: &[VolunteerEvent]) -> Vec<(String, usize)> {
    categories(events)
        .into_iter()
        .skip(1)
        .map(|c| {
            let n = events.iter().filter(|e| e.category == c).count();
            (c, n)
        })
        .collect()
}

pub fn filter_by_category<'a>(
    events: &'a [VolunteerEvent],
    category: &str,
) -> Vec<&'a VolunteerEvent> {
    if category == ALL_CATEGORIES {
        events.iter().collect()
    } else {
        events.iter().filter(|e| e.category == category).collect()
    }
}

pub fn filter_by_period<'a>(
    events: Vec<&'a VolunteerEvent>,
    period: Option<Period>,
) -> Vec<&'a VolunteerEvent> {
    match period {
        None => events,
        Some(p) => events.into_iter().filter(|e| p.contains(e.start_date())).collect(),
    }
}

/// The figures shown on the recommendations dashboard cards.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    pub opportunities: usize,
    pub categories: usize,
    pub organizations: usize,
    pub filter: String,
    pub filtered: usize,
    pub ongoing: usize,
    /// Events sitting on the fallback map point (no usable coordinates).
    pub on_fallback_point: usize,
    /// Where the calendar opens: start of the earliest event.
    pub calendar_start: Option<NaiveDateTime>,
}

impl CatalogSummary {
    /// `events` must already be sorted chronologically.
    pub fn build(events: &[VolunteerEvent], filter: &str) -> Self {
        let organizations: HashSet<&str> = events.iter().map(|e| e.organization.as_str()).collect();

        Self {
            opportunities: events.len(),
            categories: categories(events).len() - 1,
            organizations: organizations.len(),
            filter: filter.to_string(),
            filtered: filter_by_category(events, filter).len(),
            ongoing: events.iter().filter(|e| e.is_ongoing()).count(),
            on_fallback_point: events.iter().filter(|e| e.coordinates.is_fallback()).count(),
            calendar_start: events.first().map(|e| e.start),
        }
    }
}
