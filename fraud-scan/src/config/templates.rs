use crate::error::{AnalysisError, Result};
use std::path::Path;

/// Generate default fscan.toml template with examples
pub fn generate_default_config_template() -> String {
    r#"# fscan configuration
# Where and how submitted text is sent for fraud and misinformation analysis

# Analysis endpoint (POST, JSON body {"user_query": "..."})
# Override with FSCAN_ENDPOINT or --endpoint
endpoint = "http://127.0.0.1:8000/analyze"

# Request timeout in seconds; a timeout is reported as a failed analysis
# Override with FSCAN_TIMEOUT_SECONDS or --timeout
timeout_seconds = 60

# Message shown when the service fails without explaining why (optional)
# fallback_message = "Something went wrong while analyzing your text. Please try again."

# Extra headers sent with every request (optional)
# [headers]
# "X-Api-Key" = "your-key"
"#
    .to_string()
}

/// Write the default template to `config_path`.
///
/// Returns `Ok(false)` when the file already exists and `force` is not set.
pub fn ensure_config_file_exists<P: AsRef<Path>>(config_path: P, force: bool) -> Result<bool> {
    let path = config_path.as_ref();

    if path.exists() && !force {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(AnalysisError::Io)?;
    }

    std::fs::write(path, generate_default_config_template()).map_err(AnalysisError::Io)?;
    Ok(true)
}
