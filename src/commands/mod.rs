//! Command implementations for the CLI
//!
//! - calculate: validate the form and request a cost comparison
//! - validate: run only the validation engine
//! - hours: list availability hour options
//! - config: configuration display and validation

pub mod calculate;
pub mod config;
pub mod hours;
pub mod validate;
