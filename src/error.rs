use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Analysis error: {0}")]
    Analysis(#[from] fraud_scan::AnalysisError),

    #[error("Dialoguer error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("Nothing to analyze")]
    EmptyInput,

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Analysis(err) => err.to_string(),
            Self::DialoguerError(err) => format!("UI interaction error: {err}"),
            Self::EmptyInput => {
                "Nothing to analyze: provide text as an argument, with --file, or on stdin".to_string()
            }
            Self::AnalysisFailed(msg) => msg.clone(),
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

pub trait ResultExt<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: Into<CliError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let cli_err: CliError = err.into();
            cli_err.with_context(context())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_with_context() {
        let err: std::io::Result<()> = Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let err = err.with_context(|| "Failed to read message.txt").unwrap_err();
        assert_eq!(
            err.user_message(),
            "Failed to read message.txt: I/O operation failed: gone"
        );
    }

    #[test]
    fn test_analysis_failed_message_is_verbatim() {
        let err = CliError::AnalysisFailed("rate limited".to_string());
        assert_eq!(err.user_message(), "rate limited");
    }
}
