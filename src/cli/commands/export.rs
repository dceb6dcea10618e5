use super::{load_catalog, resolve_period};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog::{filter_by_category, filter_by_period};
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        category,
        period,
        force,
    } = cmd
    {
        let period = resolve_period(period)?;
        let events = load_catalog(cfg);
        let selected = filter_by_period(filter_by_category(&events, category), period);
        ExportLogic::export(&selected, format, file, *force)?;
    }
    Ok(())
}
