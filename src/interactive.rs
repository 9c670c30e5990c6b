use crate::analyze::{print_state, run_with_spinner};
use crate::cli::GlobalArgs;
use crate::progress::spinner_visible;
use crate::error::{CliError, Result};
use crate::settings;
use crate::ui;
use dialoguer::{theme::ColorfulTheme, Input};
use fraud_scan::{AnalyzeOutcome, RequestController, SkipReason};
use tokio::runtime::Runtime;

pub fn execute(global: &GlobalArgs) -> Result<()> {
    if !atty::is(atty::Stream::Stdin) {
        return Err(CliError::Other(
            "Interactive mode needs a terminal; use `fscan analyze` for piped input".to_string(),
        ));
    }

    let config = settings::load_config(global)?;
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;
    let mut controller = RequestController::from_config(&config)?;

    ui::section_header("Fraud & misinformation check");
    ui::info_message(&format!("Sending text to {}", config.endpoint));
    ui::info_message("Paste an email, SMS, link or news claim. Submit an empty line to quit.");

    let theme = ColorfulTheme::default();
    loop {
        let line: String = Input::with_theme(&theme)
            .with_prompt("Text")
            .allow_empty(true)
            .interact_text()?;

        if line.trim().is_empty() {
            break;
        }

        // Input is only read between requests, so the text never changes mid-flight
        controller.set_text(line);
        match rt.block_on(run_with_spinner(&controller, spinner_visible(false))) {
            AnalyzeOutcome::Succeeded => print_state(&controller.state(), false),
            AnalyzeOutcome::Failed => {
                ui::error_message(controller.error().as_deref().unwrap_or_default());
            }
            AnalyzeOutcome::Skipped(SkipReason::EmptyInput) => {
                ui::warning_message("Nothing to analyze");
            }
            AnalyzeOutcome::Skipped(SkipReason::AlreadyPending) => {
                ui::warning_message("An analysis is already in progress");
            }
        }
        println!();
    }

    ui::success_message("Done");
    Ok(())
}
