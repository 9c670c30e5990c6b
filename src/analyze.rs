use crate::cli::GlobalArgs;
use crate::error::{CliError, Result, ResultExt};
use crate::progress::{spinner_visible, AnalysisSpinner};
use crate::settings;
use crate::ui;
use fraud_scan::{
    classify, AnalysisService, AnalyzerConfig, AnalyzeOutcome, CliRenderer, JsonRenderer, OutputRenderer,
    RequestController, RequestState, Severity, SkipReason,
};
use std::io::Read;
use tokio::runtime::Runtime;

#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    pub text: Option<String>,
    pub file: Option<String>,
    pub json: bool,
}

pub fn execute(global: &GlobalArgs, args: AnalyzeArgs) -> Result<()> {
    let text = read_input(&args)?;
    let config = settings::load_config(global)?;

    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(execute_async(&config, text, &args))
}

async fn execute_async(config: &AnalyzerConfig, text: String, args: &AnalyzeArgs) -> Result<()> {
    let mut controller = RequestController::from_config(config)?;
    controller.set_text(text);
    analyze_and_report(&controller, args).await
}

/// Analyze the controller's text and map the outcome onto the exit contract
async fn analyze_and_report<S: AnalysisService>(
    controller: &RequestController<S>,
    args: &AnalyzeArgs,
) -> Result<()> {
    match run_with_spinner(controller, spinner_visible(args.json)).await {
        AnalyzeOutcome::Skipped(SkipReason::EmptyInput) => Err(CliError::EmptyInput),
        AnalyzeOutcome::Skipped(SkipReason::AlreadyPending) => Err(CliError::Other(
            "An analysis is already in progress".to_string(),
        )),
        AnalyzeOutcome::Succeeded => {
            print_state(&controller.state(), args.json);
            Ok(())
        }
        AnalyzeOutcome::Failed => {
            let state = controller.state();
            if args.json {
                print_state(&state, true);
            }
            Err(CliError::AnalysisFailed(
                state.error().unwrap_or_default().to_string(),
            ))
        }
    }
}

/// Run `analyze()` while a spinner follows the controller's state
pub async fn run_with_spinner<S: AnalysisService>(
    controller: &RequestController<S>,
    visible: bool,
) -> AnalyzeOutcome {
    let spinner = AnalysisSpinner::new(visible);
    let mut updates = controller.subscribe();
    let analysis = controller.analyze();
    tokio::pin!(analysis);

    loop {
        tokio::select! {
            biased;
            outcome = &mut analysis => {
                spinner.finish();
                return outcome;
            }
            Ok(()) = updates.changed() => spinner.show(&updates.borrow_and_update()),
        }
    }
}

/// Print a state with the terminal or JSON renderer
pub fn print_state(state: &RequestState, json: bool) {
    if json {
        println!("{}", JsonRenderer::new().render(state));
        return;
    }

    let severity = match state {
        RequestState::Succeeded { result } => classify(Some(result)).severity,
        RequestState::Failed { .. } => Severity::Error,
        RequestState::Idle | RequestState::Pending { .. } => Severity::Info,
    };

    let rendered = CliRenderer::new().render(state);
    let (headline, rest) = rendered.split_once('\n').unwrap_or((rendered.as_str(), ""));
    println!("{}", ui::paint(headline, severity));
    print!("{rest}");
}

fn read_input(args: &AnalyzeArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        return std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path));
    }

    if atty::is(atty::Stream::Stdin) {
        return Err(CliError::EmptyInput);
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .with_context(|| "Failed to read stdin")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraud_scan::testing::{result_with, MockAnalysisService};
    use tempfile::TempDir;

    fn json_args() -> AnalyzeArgs {
        AnalyzeArgs {
            text: None,
            file: None,
            json: true,
        }
    }

    #[tokio::test]
    async fn test_spinner_run_reaches_terminal_state() {
        let mut controller = RequestController::new(MockAnalysisService::new(result_with(&["is_fake_news"])));
        controller.set_text("Scientists confirm the earth is flat");

        assert_eq!(run_with_spinner(&controller, false).await, AnalyzeOutcome::Succeeded);
        assert!(!controller.is_busy());
        assert!(controller.result().unwrap().is_fake_news);
    }

    #[tokio::test]
    async fn test_any_verdict_is_success() {
        let mut controller = RequestController::new(MockAnalysisService::new(result_with(&["is_fraud_url"])));
        controller.set_text("http://bank-login.example.net");
        assert!(analyze_and_report(&controller, &json_args()).await.is_ok());

        let mut controller = RequestController::new(MockAnalysisService::default());
        controller.set_text("The weather is nice today");
        assert!(analyze_and_report(&controller, &json_args()).await.is_ok());
    }

    #[tokio::test]
    async fn test_failed_analysis_is_an_error() {
        let service = MockAnalysisService::default().with_service_error(429, Some("rate limited"));
        let mut controller = RequestController::new(service);
        controller.set_text("win a free cruise");

        let err = analyze_and_report(&controller, &json_args()).await.unwrap_err();
        assert!(matches!(err, CliError::AnalysisFailed(ref message) if message == "rate limited"));
    }

    #[tokio::test]
    async fn test_blank_text_is_empty_input() {
        let service = MockAnalysisService::default();
        let mut controller = RequestController::new(service.clone());
        controller.set_text(" \n ");

        let err = analyze_and_report(&controller, &json_args()).await.unwrap_err();
        assert!(matches!(err, CliError::EmptyInput));
        assert_eq!(service.call_count(), 0);
    }

    #[test]
    fn test_read_input_prefers_argument() {
        let args = AnalyzeArgs {
            text: Some("hello".to_string()),
            file: None,
            json: false,
        };
        assert_eq!(read_input(&args).unwrap(), "hello");
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("message.txt");
        std::fs::write(&path, "Dear customer, verify your account").unwrap();

        let args = AnalyzeArgs {
            text: None,
            file: Some(path.to_string_lossy().to_string()),
            json: false,
        };
        assert_eq!(read_input(&args).unwrap(), "Dear customer, verify your account");
    }

    #[test]
    fn test_missing_file_has_context() {
        let args = AnalyzeArgs {
            text: None,
            file: Some("/definitely/not/here.txt".to_string()),
            json: false,
        };
        let err = read_input(&args).unwrap_err();
        assert!(err.user_message().starts_with("Failed to read /definitely/not/here.txt"));
    }
}
