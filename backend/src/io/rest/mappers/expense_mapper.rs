use super::round_cents;
use crate::domain::models::expense::{
    Expense as DomainExpense, ExpenseValidationError, NewExpense,
};
use shared::{CreateExpenseRequest, Expense as SharedExpense};

pub struct ExpenseMapper;

impl ExpenseMapper {
    pub fn to_dto(domain: DomainExpense) -> SharedExpense {
        SharedExpense {
            id: domain.id,
            category: domain.category,
            amount: round_cents(domain.amount),
            date: domain.date,
            description: domain.description.unwrap_or_default(),
        }
    }

    /// Validate a create request. Category, amount and date must all be
    /// present; the amount may arrive as a number or a numeric string.
    pub fn to_new_expense(
        request: CreateExpenseRequest,
    ) -> Result<NewExpense, ExpenseValidationError> {
        let category = request.category.ok_or(ExpenseValidationError::MissingCategory)?;
        let amount_input = request.amount.ok_or(ExpenseValidationError::MissingAmount)?;
        let date = request.date.ok_or(ExpenseValidationError::MissingDate)?;

        let amount = amount_input.value().ok_or_else(|| {
            ExpenseValidationError::InvalidAmount(match &amount_input {
                shared::AmountInput::Text(text) => text.clone(),
                shared::AmountInput::Number(n) => n.to_string(),
            })
        })?;

        NewExpense::new(category, amount, date, request.description)
    }
}
