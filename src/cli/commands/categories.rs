use super::load_catalog;
use crate::config::Config;
use crate::core::catalog::category_counts;
use crate::errors::AppResult;
use crate::ui::render::print_categories;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let events = load_catalog(cfg);
    print_categories(&category_counts(&events));
    Ok(())
}
