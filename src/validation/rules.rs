//! Declarative per-field validation rules
//!
//! Every form field has exactly one [`FieldRule`]. A rule evaluates its own
//! field in the order required → type → range and stops at the first failure,
//! so each field yields at most one message.

use crate::models::Field;

/// Number of selectable hour slots (`"0"` ..= `"23"`)
pub const HOURS_PER_DAY: u8 = 24;

/// Raw value type expected by a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Whole number
    Integer,
    /// Any finite decimal number
    Number,
    /// Hour token `"0"` ..= `"23"`
    Hour,
    /// Checkbox-style boolean
    Flag,
}

/// Numeric range constraint applied after type coercion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    GreaterThan(f64),
    AtLeast(f64),
    Between(f64, f64),
}

impl Bound {
    fn check(&self, value: f64) -> Result<(), String> {
        match *self {
            Bound::GreaterThan(min) if value <= min => Err(format!("must be greater than {}", min)),
            Bound::AtLeast(min) if value < min => Err(format!("must be at least {}", min)),
            Bound::Between(min, max) if value < min || value > max => {
                Err(format!("must be between {} and {}", min, max))
            }
            _ => Ok(()),
        }
    }
}

/// A coerced field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Number(f64),
    Hour(u8),
    Flag(bool),
}

impl FieldValue {
    fn as_f64(&self) -> Option<f64> {
        match *self {
            FieldValue::Integer(n) => Some(n as f64),
            FieldValue::Number(n) => Some(n),
            FieldValue::Hour(_) | FieldValue::Flag(_) => None,
        }
    }
}

/// Validation rule for a single form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub field: Field,
    pub required: bool,
    pub kind: ValueKind,
    pub bound: Option<Bound>,
}

/// The calculator's rule set, one rule per field in form order
pub static RULES: [FieldRule; 7] = [
    FieldRule {
        field: Field::BatterySize,
        required: true,
        kind: ValueKind::Integer,
        bound: Some(Bound::GreaterThan(0.0)),
    },
    FieldRule {
        field: Field::DailyConsumption,
        required: true,
        kind: ValueKind::Integer,
        bound: Some(Bound::Between(0.0, 100.0)),
    },
    FieldRule {
        field: Field::ChargingSpeed,
        required: true,
        kind: ValueKind::Number,
        bound: Some(Bound::GreaterThan(0.0)),
    },
    FieldRule {
        field: Field::AmountOfChargers,
        required: true,
        kind: ValueKind::Integer,
        bound: Some(Bound::AtLeast(1.0)),
    },
    FieldRule {
        field: Field::StartTime,
        required: true,
        kind: ValueKind::Hour,
        bound: None,
    },
    FieldRule {
        field: Field::EndTime,
        required: true,
        kind: ValueKind::Hour,
        bound: None,
    },
    FieldRule {
        field: Field::WeekendIncluded,
        required: false,
        kind: ValueKind::Flag,
        bound: None,
    },
];

/// Look up the rule for a field
pub fn rule_for(field: Field) -> &'static FieldRule {
    // RULES is indexed in Field::ALL order
    &RULES[field as usize]
}

impl FieldRule {
    /// Evaluate this rule against a raw value
    ///
    /// Returns `Ok(None)` for an absent optional value without a default,
    /// otherwise the coerced value or a message prefixed with the field label.
    pub fn check(&self, raw: Option<&str>) -> Result<Option<FieldValue>, String> {
        let label = self.field.label();
        let value = raw.map(str::trim).unwrap_or("");

        if value.is_empty() {
            return match (self.required, self.kind) {
                (true, _) => Err(format!("{} is required", label)),
                (false, ValueKind::Flag) => Ok(Some(FieldValue::Flag(false))),
                (false, _) => Ok(None),
            };
        }

        let coerced = self
            .kind
            .coerce(value)
            .map_err(|detail| format!("{} {}", label, detail))?;

        if let (Some(bound), Some(n)) = (self.bound, coerced.as_f64()) {
            bound.check(n).map_err(|detail| format!("{} {}", label, detail))?;
        }

        if let FieldValue::Integer(n) = coerced {
            if n > i64::from(u32::MAX) {
                return Err(format!("{} is too large", label));
            }
        }

        Ok(Some(coerced))
    }
}

impl ValueKind {
    fn coerce(&self, value: &str) -> Result<FieldValue, &'static str> {
        match self {
            ValueKind::Integer => {
                if let Ok(n) = value.parse::<i64>() {
                    return Ok(FieldValue::Integer(n));
                }
                // Whole numbers written as "50.0" or "1e1"; the cast saturates so
                // out-of-range values still reach the bound and size checks
                match value.parse::<f64>() {
                    Ok(n) if n.is_finite() && n.fract() == 0.0 => Ok(FieldValue::Integer(n as i64)),
                    Ok(n) if n.is_finite() => Err("must be a whole number"),
                    _ => Err("must be a number"),
                }
            }
            ValueKind::Number => match value.parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(FieldValue::Number(n)),
                _ => Err("must be a number"),
            },
            ValueKind::Hour => parse_hour(value)
                .map(FieldValue::Hour)
                .ok_or("must be an hour between 0 and 23"),
            ValueKind::Flag => parse_flag(value)
                .map(FieldValue::Flag)
                .ok_or("must be true or false"),
        }
    }
}

/// Accept only the canonical tokens `"0"` ..= `"23"`
fn parse_hour(value: &str) -> Option<u8> {
    let hour = value.parse::<u8>().ok()?;
    (hour < HOURS_PER_DAY && hour.to_string() == value).then_some(hour)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Some(true),
        "false" | "off" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_follow_field_order() {
        for field in Field::ALL {
            assert_eq!(rule_for(field).field, field);
        }
    }

    #[test]
    fn test_required_beats_type() {
        let rule = rule_for(Field::BatterySize);
        assert_eq!(rule.check(None), Err("Battery size is required".to_string()));
        assert_eq!(rule.check(Some("   ")), Err("Battery size is required".to_string()));
    }

    #[test]
    fn test_type_error_differs_from_missing() {
        let rule = rule_for(Field::BatterySize);
        assert_eq!(
            rule.check(Some("fifty")),
            Err("Battery size must be a number".to_string())
        );
        assert_eq!(
            rule.check(Some("50.5")),
            Err("Battery size must be a whole number".to_string())
        );
    }

    #[test]
    fn test_zero_is_a_value_not_missing() {
        assert_eq!(
            rule_for(Field::DailyConsumption).check(Some("0")),
            Ok(Some(FieldValue::Integer(0)))
        );
        assert_eq!(
            rule_for(Field::BatterySize).check(Some("0")),
            Err("Battery size must be greater than 0".to_string())
        );
    }

    #[test]
    fn test_daily_consumption_range() {
        let rule = rule_for(Field::DailyConsumption);
        assert_eq!(rule.check(Some("100")), Ok(Some(FieldValue::Integer(100))));
        assert_eq!(
            rule.check(Some("101")),
            Err("Daily consumption must be between 0 and 100".to_string())
        );
        assert_eq!(
            rule.check(Some("-1")),
            Err("Daily consumption must be between 0 and 100".to_string())
        );
    }

    #[test]
    fn test_charging_speed_accepts_decimals() {
        let rule = rule_for(Field::ChargingSpeed);
        assert_eq!(rule.check(Some("7.4")), Ok(Some(FieldValue::Number(7.4))));
        assert_eq!(
            rule.check(Some("0")),
            Err("Charging speed must be greater than 0".to_string())
        );
        assert_eq!(
            rule.check(Some("NaN")),
            Err("Charging speed must be a number".to_string())
        );
    }

    #[test]
    fn test_amount_of_chargers_minimum() {
        let rule = rule_for(Field::AmountOfChargers);
        assert_eq!(rule.check(Some("1")), Ok(Some(FieldValue::Integer(1))));
        assert_eq!(
            rule.check(Some("0")),
            Err("Amount of chargers must be at least 1".to_string())
        );
    }

    #[test]
    fn test_integer_overflow_is_too_large() {
        let rule = rule_for(Field::BatterySize);
        assert_eq!(
            rule.check(Some("4294967296")),
            Err("Battery size is too large".to_string())
        );
        assert_eq!(
            rule.check(Some("1e30")),
            Err("Battery size is too large".to_string())
        );
    }

    #[test]
    fn test_whole_numbers_in_decimal_or_exponent_form() {
        let rule = rule_for(Field::BatterySize);
        assert_eq!(rule.check(Some("50.0")), Ok(Some(FieldValue::Integer(50))));
        assert_eq!(rule.check(Some("1e1")), Ok(Some(FieldValue::Integer(10))));
        assert_eq!(
            rule.check(Some("-1e30")),
            Err("Battery size must be greater than 0".to_string())
        );
        assert_eq!(
            rule_for(Field::DailyConsumption).check(Some("-1e30")),
            Err("Daily consumption must be between 0 and 100".to_string())
        );
    }

    #[test]
    fn test_hour_tokens() {
        let rule = rule_for(Field::StartTime);
        assert_eq!(rule.check(Some("0")), Ok(Some(FieldValue::Hour(0))));
        assert_eq!(rule.check(Some("23")), Ok(Some(FieldValue::Hour(23))));

        for bad in ["24", "08", "-1", "8.0", "noon"] {
            assert_eq!(
                rule.check(Some(bad)),
                Err("Availability start must be an hour between 0 and 23".to_string()),
                "token {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_flag_defaults_to_false() {
        let rule = rule_for(Field::WeekendIncluded);
        assert_eq!(rule.check(None), Ok(Some(FieldValue::Flag(false))));
        assert_eq!(rule.check(Some("")), Ok(Some(FieldValue::Flag(false))));
        assert_eq!(rule.check(Some("on")), Ok(Some(FieldValue::Flag(true))));
        assert_eq!(rule.check(Some("TRUE")), Ok(Some(FieldValue::Flag(true))));
        assert_eq!(rule.check(Some("false")), Ok(Some(FieldValue::Flag(false))));
        assert_eq!(
            rule.check(Some("maybe")),
            Err("Including weekend must be true or false".to_string())
        );
    }
}
