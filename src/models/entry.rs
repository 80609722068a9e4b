use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of the SugarWOD workout export. Every column is optional so a
/// sparse or foreign export still deserializes; filtering happens later.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRow {
    pub title: String,
    pub description: String,
    pub barbell_lift: String,
    pub score_type: String,
    pub date: String,
    pub best_result_raw: String,
    pub set_details: String,
    pub notes: String,
    pub pr: String,
}

/// A single recorded set. Only `load` is interpreted; the rest of the
/// object (e.g. `success`) is kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct SetObservation {
    pub load: f64,
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiftEntry {
    pub date: String,
    pub lift: String,
    pub title: String,
    pub reps: u32, // always >= 1
    pub max_load: f64,
    pub set_loads: Vec<f64>,
    pub notes: String,
    pub is_pr: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPoint {
    pub entry: LiftEntry,
    pub normalized_load: f64,
    pub is_exact: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsolidatedDayPoint {
    pub date: String,
    pub best: NormalizedPoint,
    pub is_pr: bool,
    pub all_entries: Vec<NormalizedPoint>,
}

impl ConsolidatedDayPoint {
    pub fn merged_count(&self) -> usize {
        self.all_entries.len()
    }
}
