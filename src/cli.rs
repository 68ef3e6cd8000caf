use charge_calc::config::DEFAULT_CONFIG_FILE;
use charge_calc::models::{Field, FormState};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "charge-calc", version, about = "EV charging cost calculator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the inputs and request a cost comparison
    Calculate {
        #[command(flatten)]
        form: FormArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the inputs without contacting the calculation service
    Validate {
        #[command(flatten)]
        form: FormArgs,
    },

    /// List the selectable availability hours
    Hours,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file and environment overrides
    Validate,
}

/// Raw form inputs; values are passed through as typed so the validation
/// engine sees exactly what the user entered.
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    /// Battery size (kWh)
    #[arg(long, allow_hyphen_values = true)]
    pub battery_size: Option<String>,

    /// Daily consumption (percentage of the battery)
    #[arg(long, allow_hyphen_values = true)]
    pub daily_consumption: Option<String>,

    /// Charging speed (kW)
    #[arg(long, allow_hyphen_values = true)]
    pub charging_speed: Option<String>,

    /// Number of chargers
    #[arg(long, allow_hyphen_values = true)]
    pub amount_of_chargers: Option<String>,

    /// Availability start hour (0-23)
    #[arg(long, allow_hyphen_values = true)]
    pub start_time: Option<String>,

    /// Availability end hour (0-23)
    #[arg(long, allow_hyphen_values = true)]
    pub end_time: Option<String>,

    /// Include weekends
    #[arg(long)]
    pub weekend_included: bool,
}

impl FormArgs {
    pub fn to_form_state(&self) -> FormState {
        let mut form = FormState::new();

        let inputs = [
            (Field::BatterySize, &self.battery_size),
            (Field::DailyConsumption, &self.daily_consumption),
            (Field::ChargingSpeed, &self.charging_speed),
            (Field::AmountOfChargers, &self.amount_of_chargers),
            (Field::StartTime, &self.start_time),
            (Field::EndTime, &self.end_time),
        ];
        for (field, value) in inputs {
            if let Some(value) = value {
                form.set(field, value.as_str());
            }
        }

        form.set(Field::WeekendIncluded, self.weekend_included.to_string());
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_calculate() {
        let args = vec![
            "charge-calc",
            "calculate",
            "--battery-size",
            "50",
            "--daily-consumption",
            "30",
            "--charging-speed",
            "11",
            "--amount-of-chargers",
            "2",
            "--start-time",
            "8",
            "--end-time",
            "20",
            "--json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Calculate { form, json } => {
                assert!(json);
                let state = form.to_form_state();
                assert_eq!(state.get(Field::BatterySize), Some("50"));
                assert_eq!(state.get(Field::EndTime), Some("20"));
                assert_eq!(state.get(Field::WeekendIncluded), Some("false"));
            }
            _ => panic!("Expected Calculate command"),
        }
    }

    #[test]
    fn test_missing_inputs_are_left_out() {
        let cli = Cli::try_parse_from(vec!["charge-calc", "validate", "--weekend-included"])
            .unwrap();

        match cli.command {
            Commands::Validate { form } => {
                let state = form.to_form_state();
                assert_eq!(state.get(Field::BatterySize), None);
                assert_eq!(state.get(Field::WeekendIncluded), Some("true"));
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let cli = Cli::try_parse_from(vec!["charge-calc", "validate", "--battery-size", "-5"])
            .unwrap();

        match cli.command {
            Commands::Validate { form } => {
                assert_eq!(form.to_form_state().get(Field::BatterySize), Some("-5"));
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_parsing_config_show() {
        let cli = Cli::try_parse_from(vec!["charge-calc", "config", "show"]).unwrap();

        match cli.command {
            Commands::Config { action } => {
                assert!(matches!(action, ConfigCommands::Show));
            }
            _ => panic!("Expected Config command"),
        }
    }

    #[test]
    fn test_config_path_defaults_to_config_file() {
        let cli = Cli::try_parse_from(vec!["charge-calc", "hours"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn test_config_path_is_global() {
        let cli = Cli::try_parse_from(vec!["charge-calc", "hours", "--config", "other.toml"])
            .unwrap();
        assert_eq!(cli.config, PathBuf::from("other.toml"));
    }
}
