use anyhow::Result;
use charge_calc::config::Config;
use colored::Colorize;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration (file merged with environment)
pub fn show(cfg: &Config) -> Result<()> {
    info!("Displaying configuration");

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(cfg)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
///
/// Loading already validated the configuration; this prints a summary
pub fn validate(cfg: &Config) -> Result<()> {
    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}", "Endpoint".cyan(), cfg.client.base_url);
    match cfg.client.timeout_seconds {
        Some(secs) => println!("  {}: {}s", "Timeout".cyan(), secs),
        None => println!("  {}: {}", "Timeout".cyan(), "none".dimmed()),
    }
    println!(
        "  {}: {} ({})",
        "Logging".cyan(),
        cfg.logging.level,
        cfg.logging.format
    );

    info!("Configuration validation successful");
    Ok(())
}
