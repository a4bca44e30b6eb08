//! # REST API for Expenses
//!
//! Endpoints for listing, creating and deleting expenses.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::error::ApiError;
use super::mappers::expense_mapper::ExpenseMapper;
use crate::AppState;
use shared::{CreateExpenseRequest, Expense, MessageResponse};

/// List every expense in insertion order
pub async fn list_expenses(State(state): State<AppState>) -> Json<Vec<Expense>> {
    info!("GET /api/expenses");

    let expenses = state
        .expense_service
        .list_expenses()
        .await
        .into_iter()
        .map(ExpenseMapper::to_dto)
        .collect();

    Json(expenses)
}

/// Create a new expense
pub async fn create_expense(
    State(state): State<AppState>,
    payload: Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let Json(request) = payload?;
    info!("POST /api/expenses - request: {:?}", request);

    let new_expense = ExpenseMapper::to_new_expense(request)?;
    let expense = state.expense_service.add_expense(new_expense).await;

    Ok((StatusCode::CREATED, Json(ExpenseMapper::to_dto(expense))))
}

/// Delete a single expense by id
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("DELETE /api/expenses/{}", id);

    let id: u64 = id
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid expense ID: {}", id)))?;

    if state.expense_service.delete_expense(id).await {
        Ok(Json(MessageResponse::new("Expense deleted")))
    } else {
        Err(ApiError::NotFound("Expense not found".to_string()))
    }
}

/// `DELETE /api/expenses` without an id segment
pub async fn delete_without_id() -> ApiError {
    info!("DELETE /api/expenses - no id given");
    ApiError::BadRequest("Missing expense ID".to_string())
}

/// Plain `OPTIONS /api/expenses`; CORS headers are added by the router layer
pub async fn expenses_options() -> impl IntoResponse {
    StatusCode::OK
}
