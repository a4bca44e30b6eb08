//! # Storage Traits
//!
//! Abstractions that let the expense service persist its book without
//! knowing which backend sits underneath.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::expense::Expense;

/// Durable copy of the full expense collection.
///
/// The collection is always read and written as a whole; there are no
/// incremental appends.
#[async_trait]
pub trait ExpenseStorage: Send + Sync {
    /// Load every stored expense in stored order.
    /// A store that does not exist yet loads as an empty collection.
    async fn load_expenses(&self) -> Result<Vec<Expense>>;

    /// Replace the stored collection with `expenses`
    async fn save_expenses(&self, expenses: &[Expense]) -> Result<()>;
}

/// A storage backend able to hand out repositories
pub trait Connection: Send + Sync + 'static {
    type ExpenseRepository: ExpenseStorage + Clone + 'static;

    fn create_expense_repository(&self) -> Self::ExpenseRepository;
}
