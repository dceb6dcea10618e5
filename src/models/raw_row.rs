use serde::Deserialize;

/// One line of the NYC Service opportunities CSV, mapped by header name.
///
/// Every column is read as optional text; numeric interpretation happens
/// only in the normalizer for the columns that are numeric (`Latitude`,
/// `Longitude`). Columns not listed here are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    #[serde(default)]
    pub opportunity_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start_date_date: Option<String>,
    #[serde(default)]
    pub end_date_date: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub category_desc: Option<String>,
    #[serde(default, rename = "Latitude")]
    pub latitude: Option<String>,
    #[serde(default, rename = "Longitude")]
    pub longitude: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub org_title: Option<String>,
    #[serde(default)]
    pub recurrence_type: Option<String>,
}

/// Returns the trimmed value when present and not blank.
pub fn non_blank(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
