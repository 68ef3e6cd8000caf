use charge_calc::models::hour_label;
use charge_calc::validation::rules::HOURS_PER_DAY;
use colored::Colorize;

/// Execute the hours command
///
/// Lists the values accepted by `--start-time` and `--end-time`
pub fn execute() {
    println!("{}", "Availability hours:".bold());
    for hour in 0..HOURS_PER_DAY {
        println!("  {:>2} → {}", hour.to_string().cyan(), hour_label(hour));
    }
}
