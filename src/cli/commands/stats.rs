use super::load_catalog;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog::CatalogSummary;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render::print_summary;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { category } = cmd {
        let events = load_catalog(cfg);
        header("Volunteer opportunities");
        print_summary(&CatalogSummary::build(&events, category));
    }
    Ok(())
}
