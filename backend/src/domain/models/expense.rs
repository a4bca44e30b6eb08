/// A single spending record held by the expense book
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: u64,
    pub category: String,
    pub amount: f64,
    /// Kept as entered; compared as a plain string
    pub date: String,
    pub description: Option<String>,
}

/// Input for a new expense that has passed validation. The id is assigned
/// by the service when the expense is added.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub category: String,
    pub amount: f64,
    pub date: String,
    pub description: Option<String>,
}

impl NewExpense {
    /// Category and date must be present and non-empty. The amount is taken
    /// as-is: negative values are allowed (refunds), nothing is rounded.
    pub fn new(
        category: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, ExpenseValidationError> {
        let category = category.into();
        if category.is_empty() {
            return Err(ExpenseValidationError::MissingCategory);
        }

        let date = date.into();
        if date.is_empty() {
            return Err(ExpenseValidationError::MissingDate);
        }

        Ok(Self {
            category,
            amount,
            date,
            description: description.filter(|d| !d.is_empty()),
        })
    }

    pub fn into_expense(self, id: u64) -> Expense {
        Expense {
            id,
            category: self.category,
            amount: self.amount,
            date: self.date,
            description: self.description,
        }
    }
}

/// Round to two decimals. Values too large for cents to matter are returned
/// unchanged, since scaling them by 100 would overflow to infinity.
pub fn round_cents(amount: f64) -> f64 {
    let cents = amount * 100.0;
    if cents.is_finite() {
        cents.round() / 100.0
    } else {
        amount
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("Missing required field: category")]
    MissingCategory,
    #[error("Missing required field: amount")]
    MissingAmount,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Missing required field: date")]
    MissingDate,
}
