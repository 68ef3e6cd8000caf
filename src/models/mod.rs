pub mod calculation;
pub mod form;

pub use calculation::{hour_label, CalculateResponse, CalculationResult, ValidatedInput};
pub use form::{Field, FormState, UnknownField, ValidationErrors};
