use crate::ApiState;
use crate::config::InvertedIntervals;
use crate::error::ApiError;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use interval_core::{Interval, process_intervals};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ProcessRequest {
    #[serde(default)]
    pub includes: Vec<Interval>,
    #[serde(default)]
    pub excludes: Vec<Interval>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ProcessResponse {
    pub output: Vec<Interval>,
}

/// `POST /api/process`: includes minus excludes
// The body is read as raw bytes so that every decode failure gets the same plain-text 400,
// whatever the content type.
pub async fn process(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<Json<ProcessResponse>, ApiError> {
    let request: ProcessRequest = serde_json::from_slice(&body).map_err(ApiError::InvalidBody)?;

    tracing::info!("Received an API request");
    tracing::info!(?request);

    if state.inverted_intervals == InvertedIntervals::Reject {
        let mut all = request.includes.iter().chain(&request.excludes);
        if let Some(&interval) = all.find(|i| i.is_empty()) {
            return Err(ApiError::InvertedInterval { interval });
        }
    }

    let output = process_intervals(request.includes, request.excludes);
    let response = ProcessResponse { output };
    tracing::info!(?response);

    Ok(Json(response))
}
