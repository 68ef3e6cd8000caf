use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Form fields accepted by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    BatterySize,
    DailyConsumption,
    ChargingSpeed,
    AmountOfChargers,
    StartTime,
    EndTime,
    WeekendIncluded,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 7] = [
        Field::BatterySize,
        Field::DailyConsumption,
        Field::ChargingSpeed,
        Field::AmountOfChargers,
        Field::StartTime,
        Field::EndTime,
        Field::WeekendIncluded,
    ];

    /// Wire name, used both as form key and as query parameter name
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::BatterySize => "batterySize",
            Field::DailyConsumption => "dailyConsumption",
            Field::ChargingSpeed => "chargingSpeed",
            Field::AmountOfChargers => "amountOfChargers",
            Field::StartTime => "startTime",
            Field::EndTime => "endTime",
            Field::WeekendIncluded => "weekendIncluded",
        }
    }

    /// Human label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::BatterySize => "Battery size",
            Field::DailyConsumption => "Daily consumption",
            Field::ChargingSpeed => "Charging speed",
            Field::AmountOfChargers => "Amount of chargers",
            Field::StartTime => "Availability start",
            Field::EndTime => "Availability end",
            Field::WeekendIncluded => "Including weekend",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown form field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Raw form values as entered by the user
///
/// A `FormState` is moved into the orchestrator on submit, which makes it the
/// snapshot for that attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: HashMap<Field, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.values.remove(&field)
    }

    /// Build from string-keyed pairs, skipping keys that are not form fields
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut state = Self::new();
        for (key, value) in pairs {
            match key.as_ref().parse::<Field>() {
                Ok(field) => state.set(field, value),
                Err(e) => tracing::debug!(error = %e, "Ignoring form key"),
            }
        }
        state
    }
}

impl FromIterator<(Field, String)> for FormState {
    fn from_iter<T: IntoIterator<Item = (Field, String)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Field-keyed validation messages
///
/// A field without an entry is valid. Empty messages are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.errors.remove(&field);
        } else {
            self.errors.insert(field, message);
        }
    }

    /// Remove a single field's error, returning whether one was present
    pub fn clear_field(&mut self, field: Field) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_round_trips_through_wire_name() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert!("amoutOfAssets".parse::<Field>().is_err());
    }

    #[test]
    fn test_from_pairs_ignores_unknown_keys() {
        let state = FormState::from_pairs([
            ("batterySize", "50"),
            ("amoutOfAssets", "2"),
            ("startTime", "8"),
        ]);

        assert_eq!(state.get(Field::BatterySize), Some("50"));
        assert_eq!(state.get(Field::StartTime), Some("8"));
        assert_eq!(state.get(Field::AmountOfChargers), None);
    }

    #[test]
    fn test_empty_message_means_valid() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::BatterySize, "Battery size is required");
        errors.insert(Field::BatterySize, "");

        assert!(errors.is_empty());
        assert!(!errors.contains(Field::BatterySize));
    }

    #[test]
    fn test_clear_field_leaves_other_errors() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::BatterySize, "Battery size is required");
        errors.insert(Field::EndTime, "Availability end is required");

        assert!(errors.clear_field(Field::BatterySize));
        assert!(!errors.clear_field(Field::BatterySize));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::EndTime), Some("Availability end is required"));
    }

    #[test]
    fn test_errors_serialize_by_wire_name() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::ChargingSpeed, "Charging speed must be a number");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "chargingSpeed": "Charging speed must be a number" })
        );
    }
}
