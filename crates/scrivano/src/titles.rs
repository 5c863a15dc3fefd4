//! Date-keyed title lookup.

use chrono::Utc;
use chrono_tz::Tz;
use scrivano_error::{ScrivanoResult, StoreError, StoreErrorKind};
use std::collections::HashMap;
use std::path::Path;

/// Resolve today's title from a JSON lookup file.
///
/// The file holds a single JSON object mapping `YYYY-MM-DD` date strings to
/// title strings. "Today" is evaluated in the given timezone.
///
/// # Errors
///
/// Returns `StoreErrorKind::TitleNotFound` when the table has no entry for
/// today's date, and read/parse errors otherwise.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display(), timezone = %tz))]
pub fn today_title<P: AsRef<Path>>(path: P, tz: Tz) -> ScrivanoResult<String> {
    let today = Utc::now().with_timezone(&tz).format("%Y-%m-%d").to_string();
    title_for_date(path, &today)
}

/// Resolve the title for a specific date string.
///
/// Split out from [`today_title`] so tests can force a date.
pub fn title_for_date<P: AsRef<Path>>(path: P, date: &str) -> ScrivanoResult<String> {
    let raw = std::fs::read_to_string(path.as_ref())
        .map_err(|e| StoreError::new(StoreErrorKind::FileRead(e.to_string())))?;

    let table: HashMap<String, String> = serde_json::from_str(&raw)
        .map_err(|e| StoreError::new(StoreErrorKind::Json(e.to_string())))?;

    table
        .get(date)
        .cloned()
        .ok_or_else(|| StoreError::new(StoreErrorKind::TitleNotFound(date.to_string())).into())
}
