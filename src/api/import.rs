use axum::Json;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::Config;
use crate::error::ImportError;
use crate::services::importer;
use crate::services::progression::{LiftHistory, LiftSummary};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

#[derive(Debug, Default, Deserialize)]
pub struct ImportParams {
    pub target_reps: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub target_reps: u32,
    pub entry_count: usize,
    pub lifts: Vec<LiftSummary>,
}

pub async fn handle_import(
    State(state): State<AppState>,
    Query(params): Query<ImportParams>,
    body: String,
) -> impl IntoResponse {
    let target_reps = params
        .target_reps
        .filter(|reps| *reps >= 1)
        .unwrap_or(state.config.default_target_reps);

    tracing::info!(bytes = body.len(), target_reps, "import.received");

    let entries = match importer::parse_export(&body) {
        Ok(entries) => entries,
        Err(e) => {
            let status = match e {
                ImportError::NoEntries => {
                    tracing::info!("import.empty");
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                ImportError::Csv(_) => {
                    tracing::warn!(error = %e, "import.unreadable");
                    StatusCode::BAD_REQUEST
                }
            };
            return (status, Json(json!({ "error": e.to_string() }))).into_response();
        }
    };

    let history = LiftHistory::from_entries(&entries);
    let response = ImportResponse {
        target_reps,
        entry_count: entries.len(),
        lifts: history.summaries(target_reps),
    };

    let merged_days = response
        .lifts
        .iter()
        .flat_map(|lift| &lift.series)
        .filter(|day| day.merged_count() > 1)
        .count();

    tracing::info!(
        entries = response.entry_count,
        lifts = response.lifts.len(),
        merged_days,
        "import.completed"
    );

    (StatusCode::OK, Json(response)).into_response()
}
