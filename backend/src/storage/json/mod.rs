pub mod connection;
pub mod expense_repository;
pub mod legacy;

#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use expense_repository::JsonExpenseRepository;
