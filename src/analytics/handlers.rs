use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use super::{
    dto::{BarChartEntry, MonthOverview, PieChartEntry, Statistics},
    services,
};
use crate::{error::AppError, extract::ApiQuery, state::AppState, validation::required_month};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/statistics", get(get_statistics))
        .route("/barchart", get(get_bar_chart))
        .route("/piechart", get(get_pie_chart))
        .route("/all", get(get_all))
}

#[derive(Debug, Deserialize)]
pub struct MonthParam {
    pub month: Option<String>,
}

#[instrument(skip(state))]
pub async fn get_statistics(
    State(state): State<AppState>,
    ApiQuery(p): ApiQuery<MonthParam>,
) -> Result<Json<Statistics>, AppError> {
    let month = required_month(p.month.as_deref())?;
    let stats = services::statistics(state.store.as_ref(), month)
        .await
        .map_err(AppError::service("Failed to fetch statistics"))?;
    Ok(Json(stats))
}

#[instrument(skip(state))]
pub async fn get_bar_chart(
    State(state): State<AppState>,
    ApiQuery(p): ApiQuery<MonthParam>,
) -> Result<Json<Vec<BarChartEntry>>, AppError> {
    let month = required_month(p.month.as_deref())?;
    let bars = services::bar_chart(state.store.as_ref(), month)
        .await
        .map_err(AppError::service("Failed to fetch bar chart data"))?;
    Ok(Json(bars))
}

#[instrument(skip(state))]
pub async fn get_pie_chart(
    State(state): State<AppState>,
    ApiQuery(p): ApiQuery<MonthParam>,
) -> Result<Json<Vec<PieChartEntry>>, AppError> {
    let month = required_month(p.month.as_deref())?;
    let slices = services::pie_chart(state.store.as_ref(), month)
        .await
        .map_err(AppError::service("Failed to fetch pie chart data"))?;
    Ok(Json(slices))
}

#[instrument(skip(state))]
pub async fn get_all(
    State(state): State<AppState>,
    ApiQuery(p): ApiQuery<MonthParam>,
) -> Result<Json<MonthOverview>, AppError> {
    let month = required_month(p.month.as_deref())?;
    let all = services::overview(state.store.as_ref(), month)
        .await
        .map_err(AppError::service("Failed to fetch all data"))?;
    Ok(Json(all))
}
