use serde::{Deserialize, Serialize};

use super::form::Field;

/// Type-coerced form input that satisfies every validation rule
///
/// Only the validation engine constructs this, so holding one is proof that
/// the input passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedInput {
    pub(crate) battery_size: u32,
    pub(crate) daily_consumption: u8,
    pub(crate) charging_speed: f64,
    pub(crate) amount_of_chargers: u32,
    pub(crate) start_time: u8,
    pub(crate) end_time: u8,
    pub(crate) weekend_included: bool,
}

impl ValidatedInput {
    /// Battery size in kWh
    pub fn battery_size(&self) -> u32 {
        self.battery_size
    }

    /// Daily consumption as a percentage of the battery
    pub fn daily_consumption(&self) -> u8 {
        self.daily_consumption
    }

    /// Charging speed in kW
    pub fn charging_speed(&self) -> f64 {
        self.charging_speed
    }

    pub fn amount_of_chargers(&self) -> u32 {
        self.amount_of_chargers
    }

    /// Availability start, hour of day
    pub fn start_time(&self) -> u8 {
        self.start_time
    }

    /// Availability end, hour of day
    pub fn end_time(&self) -> u8 {
        self.end_time
    }

    pub fn weekend_included(&self) -> bool {
        self.weekend_included
    }

    /// Query parameters for the calculation endpoint, in form order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            (Field::BatterySize.as_str(), self.battery_size.to_string()),
            (Field::DailyConsumption.as_str(), self.daily_consumption.to_string()),
            (Field::ChargingSpeed.as_str(), self.charging_speed.to_string()),
            (Field::AmountOfChargers.as_str(), self.amount_of_chargers.to_string()),
            (Field::StartTime.as_str(), self.start_time.to_string()),
            (Field::EndTime.as_str(), self.end_time.to_string()),
            (Field::WeekendIncluded.as_str(), self.weekend_included.to_string()),
        ]
    }
}

/// Cost comparison returned by the calculation service
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub smart_charging_cost: f64,
    pub fever_cost: f64,
}

/// Calculation service response body
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateResponse {
    pub smart_charging: f64,
    pub fever: f64,
}

impl From<CalculateResponse> for CalculationResult {
    fn from(resp: CalculateResponse) -> Self {
        Self {
            smart_charging_cost: resp.smart_charging,
            fever_cost: resp.fever,
        }
    }
}

/// Display label for an hour slot, e.g. `8` -> `"08:00"`
pub fn hour_label(hour: u8) -> String {
    format!("{:02}:00", hour)
}
