use std::io;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, info, warn};

use super::connection::JsonConnection;
use super::legacy;
use crate::domain::models::expense::{round_cents, Expense};
use crate::storage::traits::ExpenseStorage;

/// One expense as laid out in the data file. Field order here is the order
/// written to disk.
#[derive(Debug, Serialize, Deserialize)]
struct StoredExpense {
    id: u64,
    category: String,
    #[serde(serialize_with = "serialize_two_decimals")]
    amount: f64,
    date: String,
    #[serde(default, serialize_with = "serialize_empty_when_none")]
    description: Option<String>,
}

fn serialize_two_decimals<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_cents(*amount))
}

fn serialize_empty_when_none<S: Serializer>(
    description: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(description.as_deref().unwrap_or(""))
}

impl From<&Expense> for StoredExpense {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id,
            category: expense.category.clone(),
            amount: expense.amount,
            date: expense.date.clone(),
            description: expense.description.clone(),
        }
    }
}

impl From<StoredExpense> for Expense {
    fn from(stored: StoredExpense) -> Self {
        Self {
            id: stored.id,
            category: stored.category,
            amount: stored.amount,
            date: stored.date,
            description: stored.description.filter(|d| !d.is_empty()),
        }
    }
}

/// Expense repository backed by a single pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonExpenseRepository {
    connection: JsonConnection,
}

impl JsonExpenseRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    /// Decode file content. Records that do not decode are skipped; content
    /// that is not JSON at all is handed to the legacy scanner.
    fn parse_content(content: &str) -> Vec<Expense> {
        let content = content.trim();
        if content.is_empty() || content == "[]" {
            return Vec::new();
        }

        let records = match serde_json::from_str::<Vec<serde_json::Value>>(content) {
            Ok(records) => records,
            Err(e) => {
                warn!("Expense file is not valid JSON ({}), reading it as legacy format", e);
                return legacy::parse_document(content);
            }
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| {
                match serde_json::from_value::<StoredExpense>(record) {
                    Ok(stored) => Some(Expense::from(stored)),
                    Err(e) => {
                        warn!("Skipping unreadable expense record at position {}: {}", index, e);
                        None
                    }
                }
            })
            .collect()
    }
}

#[async_trait]
impl ExpenseStorage for JsonExpenseRepository {
    async fn load_expenses(&self) -> Result<Vec<Expense>> {
        let path = self.connection.data_file();

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No expense file at {}, starting empty", path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        let expenses = Self::parse_content(&content);
        info!("Loaded {} expenses from {}", expenses.len(), path.display());
        Ok(expenses)
    }

    async fn save_expenses(&self, expenses: &[Expense]) -> Result<()> {
        let path = self.connection.data_file();
        let records: Vec<StoredExpense> = expenses.iter().map(StoredExpense::from).collect();
        let json = serde_json::to_string_pretty(&records)?;

        // Write to a sibling file first so a crash never leaves a half-written store
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, json)
            .await
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        tokio::fs::rename(&temp_path, path)
            .await
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Saved {} expenses to {}", expenses.len(), path.display());
        Ok(())
    }
}
