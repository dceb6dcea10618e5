use super::{load_catalog, resolve_period};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog::{ALL_CATEGORIES, filter_by_category, filter_by_period};
use crate::errors::AppResult;
use crate::ui::render::print_events;
use crate::utils::date::Period;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Events {
        category,
        period,
        limit,
    } = cmd
    {
        let period = resolve_period(period)?;
        let events = load_catalog(cfg);

        let mut selected = filter_by_period(filter_by_category(&events, category), period);
        if let Some(n) = limit {
            selected.truncate(*n);
        }

        if selected.is_empty() {
            if !events.is_empty() {
                println!("No events match {}.", describe_filters(category, period, *limit));
            }
            return Ok(());
        }

        print_events(&selected);
        println!("\n{} of {} opportunities", selected.len(), events.len());
    }
    Ok(())
}

/// Names only the filters that were actually applied.
fn describe_filters(category: &str, period: Option<Period>, limit: Option<usize>) -> String {
    let mut parts = Vec::new();
    if category != ALL_CATEGORIES {
        parts.push(format!("category '{category}'"));
    }
    if let Some(p) = period {
        parts.push(format!("period {} to {}", p.from, p.to));
    }
    if let Some(n) = limit {
        parts.push(format!("limit {n}"));
    }

    if parts.is_empty() {
        "the current filters".to_string()
    } else {
        parts.join(", ")
    }
}
