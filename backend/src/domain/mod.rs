//! # Domain Module
//!
//! Business logic for the expense tracker, independent of HTTP and of the
//! storage format.
//!
//! - **models**: the `Expense` record and validated `NewExpense` input
//! - **analytics**: totals, per-category sums, extremes and the date trend
//! - **expense_service**: owns the expense book and persists every change

pub mod analytics;
pub mod expense_service;
pub mod models;

pub use analytics::AnalyticsSummary;
pub use expense_service::ExpenseService;
