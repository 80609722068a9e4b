use csv::ReaderBuilder;
use tracing::{info, warn};

use crate::error::ImportError;
use crate::models::entry::{LiftEntry, RawRow};
use crate::services::entry_builder;

/// Parse a SugarWOD CSV export into lift entries.
///
/// Rows that cannot be deserialized are skipped; an export that yields no
/// lift at all is reported as [`ImportError::NoEntries`].
pub fn parse_export(csv_text: &str) -> Result<Vec<LiftEntry>, ImportError> {
    let rows = read_rows(csv_text)?;
    let row_count = rows.len();
    let entries = entry_builder::build_entries(rows);

    info!(rows = row_count, entries = entries.len(), "import.parsed");

    if entries.is_empty() {
        return Err(ImportError::NoEntries);
    }
    Ok(entries)
}

fn read_rows(csv_text: &str) -> Result<Vec<RawRow>, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    // Header errors (e.g. invalid UTF-8) make the whole export unreadable.
    reader.headers()?;

    let mut rows = Vec::new();
    for (line, result) in reader.deserialize::<RawRow>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => warn!(error = %e, record = line + 1, "import.row_skipped"),
        }
    }
    Ok(rows)
}
