use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::services;
use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/initialize", get(initialize))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InitializeResponse {
    pub message: String,
    pub count: u64,
}

#[instrument(skip(state))]
pub async fn initialize(
    State(state): State<AppState>,
) -> Result<Json<InitializeResponse>, AppError> {
    let count = services::initialize(state.store.as_ref(), state.seed.as_ref())
        .await
        .map_err(AppError::service("Failed to fetch or initialize data"))?;
    Ok(Json(InitializeResponse {
        message: "Database initialized with seed data".into(),
        count,
    }))
}
