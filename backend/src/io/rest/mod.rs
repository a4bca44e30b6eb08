//! # REST API Interface Layer
//!
//! HTTP endpoints for the expense tracker. Handlers decode requests, call the
//! expense service, and translate results into status codes. No business
//! logic lives here.

pub mod analytics_apis;
pub mod error;
pub mod expense_apis;
pub mod mappers;
pub mod static_apis;

pub use analytics_apis::*;
pub use error::*;
pub use expense_apis::*;
pub use static_apis::*;
