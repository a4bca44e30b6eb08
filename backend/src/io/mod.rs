//! # IO Module
//!
//! Interface layer exposing the domain to the outside world. Today that is
//! the REST API used by the bundled browser front end.

pub mod rest;

pub use rest::*;
