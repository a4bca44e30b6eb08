//! # Storage Module
//!
//! Persists the expense book between runs. The domain layer only sees the
//! traits in [`traits`]; the JSON file backend lives in [`json`].

pub mod json;
pub mod traits;

pub use json::JsonConnection;
pub use traits::{Connection, ExpenseStorage};
