//! # REST API for Analytics

use axum::{extract::State, response::Json};
use tracing::info;

use super::mappers::analytics_mapper::AnalyticsMapper;
use crate::AppState;
use shared::AnalyticsResponse;

/// Totals, per-category sums, extremes and the date trend
pub async fn get_analytics(State(state): State<AppState>) -> Json<AnalyticsResponse> {
    info!("GET /api/analytics");

    let summary = state.expense_service.analytics().await;
    Json(AnalyticsMapper::to_dto(summary))
}
