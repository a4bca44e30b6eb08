pub mod analytics_mapper;
pub mod expense_mapper;

// Amounts go over the wire rounded to cents
pub(crate) use crate::domain::models::expense::round_cents;
