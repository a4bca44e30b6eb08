//! Expense service: owns the in-memory expense book, assigns ids, and
//! rewrites the store after every change.
//!
//! All access goes through one async mutex so concurrent requests see a
//! serialized history. Saves run while the lock is held, which keeps the
//! order of writes on disk identical to the order of changes in memory.
//!
//! Persistence is at-most-once: a failed save is logged and the in-memory
//! change stands. Memory and disk can therefore diverge until the next
//! successful save.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info, warn};

use super::analytics::{self, AnalyticsSummary};
use super::models::expense::{Expense, NewExpense};
use crate::storage::{Connection, ExpenseStorage};

#[derive(Debug)]
struct ExpenseBook {
    expenses: Vec<Expense>,
    /// Never decremented; deleting the newest expense does not free its id
    next_id: u64,
}

impl ExpenseBook {
    fn from_loaded(expenses: Vec<Expense>) -> Self {
        let next_id = expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self { expenses, next_id }
    }
}

pub struct ExpenseService<C: Connection> {
    expense_repository: C::ExpenseRepository,
    book: Arc<Mutex<ExpenseBook>>,
}

impl<C: Connection> Clone for ExpenseService<C> {
    fn clone(&self) -> Self {
        Self {
            expense_repository: self.expense_repository.clone(),
            book: Arc::clone(&self.book),
        }
    }
}

impl<C: Connection> ExpenseService<C> {
    /// Build the service and load the persisted book.
    ///
    /// A store that cannot be read is logged and treated as empty.
    pub async fn new(connection: Arc<C>) -> Self {
        let expense_repository = connection.create_expense_repository();

        let expenses = match expense_repository.load_expenses().await {
            Ok(expenses) => expenses,
            Err(e) => {
                error!("Error loading expenses, starting with an empty book: {:#}", e);
                Vec::new()
            }
        };

        let book = ExpenseBook::from_loaded(expenses);
        info!(
            "Expense book ready with {} expenses, next id {}",
            book.expenses.len(),
            book.next_id
        );

        Self {
            expense_repository,
            book: Arc::new(Mutex::new(book)),
        }
    }

    /// Append a new expense with the next unused id and persist the book
    pub async fn add_expense(&self, new_expense: NewExpense) -> Expense {
        let mut book = self.book.lock().await;

        let expense = new_expense.into_expense(book.next_id);
        book.next_id += 1;
        book.expenses.push(expense.clone());
        info!("Added expense {} ({}, {})", expense.id, expense.category, expense.amount);

        self.persist(&book.expenses).await;
        expense
    }

    /// Remove the expense with `id`. Returns `false` when there was none,
    /// in which case nothing is written.
    pub async fn delete_expense(&self, id: u64) -> bool {
        let mut book = self.book.lock().await;

        let Some(position) = book.expenses.iter().position(|e| e.id == id) else {
            info!("No expense with id {} to delete", id);
            return false;
        };

        book.expenses.remove(position);
        info!("Deleted expense {}", id);

        self.persist(&book.expenses).await;
        true
    }

    /// Copy of the book in insertion order
    pub async fn list_expenses(&self) -> Vec<Expense> {
        self.book.lock().await.expenses.clone()
    }

    pub async fn total_amount(&self) -> f64 {
        analytics::total_amount(&self.book.lock().await.expenses)
    }

    pub async fn totals_by_category(&self) -> Vec<(String, f64)> {
        analytics::totals_by_category(&self.book.lock().await.expenses)
    }

    pub async fn highest_category(&self) -> Option<(String, f64)> {
        let totals = self.totals_by_category().await;
        analytics::highest_category(&totals)
    }

    pub async fn lowest_category(&self) -> Option<(String, f64)> {
        let totals = self.totals_by_category().await;
        analytics::lowest_category(&totals)
    }

    pub async fn trend_by_date(&self) -> Vec<(String, f64)> {
        analytics::trend_by_date(&self.book.lock().await.expenses)
    }

    /// All analytics figures computed from one snapshot of the book
    pub async fn analytics(&self) -> AnalyticsSummary {
        AnalyticsSummary::from_expenses(&self.book.lock().await.expenses)
    }

    async fn persist(&self, expenses: &[Expense]) {
        if let Err(e) = self.expense_repository.save_expenses(expenses).await {
            error!("Error saving expenses: {:#}", e);
            warn!("In-memory expense book now differs from the stored copy");
        }
    }
}
