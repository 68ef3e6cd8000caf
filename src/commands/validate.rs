use anyhow::Result;
use charge_calc::models::{hour_label, FormState, ValidatedInput, ValidationErrors};
use charge_calc::validation;
use colored::Colorize;

/// Execute the validate command
///
/// Runs the validation engine only; the calculation service is not contacted
pub fn execute(form: &FormState) -> Result<()> {
    match validation::validate(form) {
        Ok(input) => {
            println!("{}", "✓ Input is valid".green());
            println!();
            print_input(&input);
            Ok(())
        }
        Err(errors) => {
            print_errors(&errors);
            anyhow::bail!("{} field(s) failed validation", errors.len())
        }
    }
}

pub fn print_input(input: &ValidatedInput) {
    println!("  {}: {} kWh", "Battery size".cyan(), input.battery_size());
    println!("  {}: {}%", "Daily consumption".cyan(), input.daily_consumption());
    println!("  {}: {} kW", "Charging speed".cyan(), input.charging_speed());
    println!("  {}: {}", "Chargers".cyan(), input.amount_of_chargers());
    println!(
        "  {}: {} → {}",
        "Availability".cyan(),
        hour_label(input.start_time()),
        hour_label(input.end_time())
    );
    println!(
        "  {}: {}",
        "Including weekend".cyan(),
        if input.weekend_included() { "yes" } else { "no" }
    );
}

/// Print every field error so all problems are visible at once
pub fn print_errors(errors: &ValidationErrors) {
    println!("{}", "✗ Please correct the following:".red().bold());
    for (field, message) in errors.iter() {
        println!("  {} {}", format!("[{}]", field).dimmed(), message.red());
    }
}
