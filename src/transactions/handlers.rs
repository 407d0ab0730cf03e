use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{
    dto::{ListParams, TransactionPage},
    services,
};
use crate::{error::AppError, extract::ApiQuery, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/transactions", get(list_transactions))
}

#[instrument(skip(state))]
pub async fn list_transactions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<TransactionPage>, AppError> {
    let q = params.validate()?;
    let page = services::list_transactions(state.store.as_ref(), &q)
        .await
        .map_err(AppError::service("Failed to fetch transactions"))?;
    Ok(Json(page))
}
