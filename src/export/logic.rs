// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::volunteer_event::VolunteerEvent;
use crate::ui::messages::warning;
use std::path::Path;

/// High level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `events` (already filtered and sorted) to `file`.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite without asking
    pub fn export(
        events: &[&VolunteerEvent],
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        if events.is_empty() {
            warning("No events found for the selected filters.");
            return Ok(());
        }

        ensure_writable(path, force)?;
        log::debug!("exporting {} events as {}", events.len(), format.as_str());

        match format {
            ExportFormat::Csv => export_csv(events, path)?,
            ExportFormat::Json => export_json(events, path)?,
        }

        Ok(())
    }
}
