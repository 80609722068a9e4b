use tracing::debug;

use crate::models::entry::{LiftEntry, RawRow};
use crate::services::{rep_extractor, set_details};

const CLASS_TIMES_TITLE: &str = "Class Times";
const LOAD_SCORE_TYPE: &str = "Load";
const PR_MARKER: &str = "PR";

/// Turn SugarWOD export rows into lift entries, in row order.
pub fn build_entries<I>(rows: I) -> Vec<LiftEntry>
where
    I: IntoIterator<Item = RawRow>,
{
    rows.into_iter().filter_map(|row| build_entry(&row)).collect()
}

/// `None` when the row is not a load-scored barbell lift.
pub fn build_entry(row: &RawRow) -> Option<LiftEntry> {
    let title = row.title.trim();
    let lift = row.barbell_lift.trim();
    let score_type = row.score_type.trim();

    if title == CLASS_TIMES_TITLE {
        return None;
    }
    if lift.is_empty() || score_type != LOAD_SCORE_TYPE {
        return None;
    }

    let description = row.description.trim();
    let max_load = parse_load(&row.best_result_raw);
    let sets = set_details::decode_set_details(&row.set_details);
    let reps = rep_extractor::extract_reps(title, description, &sets, max_load);

    debug!(%lift, %title, reps, max_load, sets = sets.len(), "entry.built");

    Some(LiftEntry {
        date: row.date.trim().to_string(),
        lift: lift.to_string(),
        title: title.to_string(),
        reps,
        max_load,
        set_loads: set_details::set_loads(&sets),
        notes: row.notes.trim().to_string(),
        is_pr: row.pr.trim() == PR_MARKER,
    })
}

/// Leading-number parse of the best result (`"225 lbs"` → 225); 0 when
/// there is no number to read.
fn parse_load(raw: &str) -> f64 {
    let raw = raw.trim();
    let numeric_end = raw
        .char_indices()
        .find(|&(idx, c)| {
            !(c.is_ascii_digit() || c == '.' || ((c == '-' || c == '+') && idx == 0))
        })
        .map(|(idx, _)| idx)
        .unwrap_or(raw.len());

    (0..=numeric_end)
        .rev()
        .filter_map(|end| raw.get(..end))
        .find_map(|prefix| prefix.parse::<f64>().ok())
        .filter(|load| load.is_finite())
        .unwrap_or(0.0)
}
