use anyhow::Result;
use charge_calc::{
    client::HttpCalculationClient,
    config::Config,
    models::{CalculationResult, FormState},
    orchestrator::{
        SubmissionFailure, SubmissionOrchestrator, SubmissionState, SubmitOutcome, UiEffect,
    },
};
use colored::Colorize;

use super::validate::print_errors;

/// Execute the calculate command
///
/// Drives one submission through the orchestrator. The result view is
/// rendered when the scroll-to-result effect arrives, not from the state.
pub async fn execute(cfg: &Config, form: FormState, json: bool) -> Result<()> {
    let client = HttpCalculationClient::from_config(&cfg.client);
    let orchestrator = SubmissionOrchestrator::new(client);
    let mut effects = orchestrator.subscribe_effects();

    if !json {
        println!("{}", "Calculating...".yellow());
    }

    let state = match orchestrator.submit(form).await {
        SubmitOutcome::Settled(state) => state,
        SubmitOutcome::Rejected => anyhow::bail!("A calculation is already in progress"),
    };

    while let Ok(effect) = effects.try_recv() {
        match effect {
            UiEffect::ScrollToResult => {
                if let Some(result) = state.result() {
                    render_result(result, json)?;
                }
            }
        }
    }

    match state {
        SubmissionState::Succeeded(_) => Ok(()),
        SubmissionState::Failed(SubmissionFailure::Validation(errors)) => {
            print_errors(&errors);
            anyhow::bail!("{} field(s) failed validation", errors.len())
        }
        SubmissionState::Failed(SubmissionFailure::Network(_)) => {
            println!(
                "{}",
                "✗ Could not calculate costs right now, please try again".red()
            );
            anyhow::bail!("Calculation failed")
        }
        other => anyhow::bail!("Submission ended in unexpected state: {}", other.as_str()),
    }
}

fn render_result(result: &CalculationResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!();
    println!("{}", "Cost comparison".bold());
    println!("Here you can compare the cost of charging with and without smart charging.");
    println!();
    println!("  {}: {} €", "Smart charging".cyan(), result.smart_charging_cost);
    println!("  {}: {} €", "Fever charging".cyan(), result.fever_cost);
    Ok(())
}
