//! Form validation engine
//!
//! [`validate`] runs every rule in [`rules::RULES`] against a [`FormState`] and
//! never stops at the first failing field: the returned [`ValidationErrors`]
//! covers the whole form so the presentation layer can flag everything at once.

pub mod rules;

use std::collections::HashMap;

use crate::models::{Field, FormState, ValidatedInput, ValidationErrors};
use rules::{FieldValue, RULES};

/// Validate and coerce a form
///
/// An `Ok` value satisfies every rule; callers may submit it without
/// re-checking. An `Err` is never empty.
pub fn validate(form: &FormState) -> Result<ValidatedInput, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut values = HashMap::with_capacity(RULES.len());

    for rule in &RULES {
        match rule.check(form.get(rule.field)) {
            Ok(Some(value)) => {
                values.insert(rule.field, value);
            }
            Ok(None) => {}
            Err(message) => errors.insert(rule.field, message),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    assemble(&values).map_err(|field| {
        let mut errors = ValidationErrors::new();
        errors.insert(field, format!("{} could not be read", field.label()));
        errors
    })
}

/// Build the canonical input from coerced values, naming the first field that
/// is missing or has an unexpected shape.
fn assemble(values: &HashMap<Field, FieldValue>) -> Result<ValidatedInput, Field> {
    Ok(ValidatedInput {
        battery_size: integer(values, Field::BatterySize)?,
        daily_consumption: integer(values, Field::DailyConsumption)?,
        charging_speed: number(values, Field::ChargingSpeed)?,
        amount_of_chargers: integer(values, Field::AmountOfChargers)?,
        start_time: hour(values, Field::StartTime)?,
        end_time: hour(values, Field::EndTime)?,
        weekend_included: flag(values, Field::WeekendIncluded)?,
    })
}

fn integer<T: TryFrom<i64>>(values: &HashMap<Field, FieldValue>, field: Field) -> Result<T, Field> {
    match values.get(&field) {
        Some(FieldValue::Integer(n)) => T::try_from(*n).map_err(|_| field),
        _ => Err(field),
    }
}

fn number(values: &HashMap<Field, FieldValue>, field: Field) -> Result<f64, Field> {
    match values.get(&field) {
        Some(FieldValue::Number(n)) => Ok(*n),
        _ => Err(field),
    }
}

fn hour(values: &HashMap<Field, FieldValue>, field: Field) -> Result<u8, Field> {
    match values.get(&field) {
        Some(FieldValue::Hour(h)) => Ok(*h),
        _ => Err(field),
    }
}

fn flag(values: &HashMap<Field, FieldValue>, field: Field) -> Result<bool, Field> {
    match values.get(&field) {
        Some(FieldValue::Flag(b)) => Ok(*b),
        _ => Err(field),
    }
}
