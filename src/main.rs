use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use charge_calc::{config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Logging settings come from the config, so load it before tracing starts
    let cfg = config::load_config(&args.config)?;
    init_tracing(&cfg.logging);

    // Dispatch to appropriate command handler
    match args.command {
        cli::Commands::Calculate { form, json } => {
            commands::calculate::execute(&cfg, form.to_form_state(), json).await?;
        }
        cli::Commands::Validate { form } => {
            commands::validate::execute(&form.to_form_state())?;
        }
        cli::Commands::Hours => commands::hours::execute(),
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
            cli::ConfigCommands::Validate => commands::config::validate(&cfg)?,
        },
        cli::Commands::Version => {
            println!("charge-calc v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
