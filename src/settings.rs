use crate::cli::GlobalArgs;
use crate::error::Result;
use fraud_scan::config::{ConfigValidatorImpl, DEFAULT_CONFIG_FILE};
use fraud_scan::{AnalyzerConfig, DefaultConfigLoader};
use std::path::{Path, PathBuf};

/// `fscan.toml` under the platform config directory
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fscan").join(DEFAULT_CONFIG_FILE))
}

/// Config file to read: `--config`, then a user-level file when there is
/// no `fscan.toml` in the working directory
fn config_file(args: &GlobalArgs) -> Option<PathBuf> {
    if let Some(path) = &args.config {
        return Some(PathBuf::from(path));
    }
    if Path::new(DEFAULT_CONFIG_FILE).exists() {
        return None;
    }
    user_config_path().filter(|path| path.exists())
}

/// Resolve the effective configuration: file, then `FSCAN_*`, then flags
pub fn load_config(args: &GlobalArgs) -> Result<AnalyzerConfig> {
    let path = config_file(args);
    let config = DefaultConfigLoader::load_layers(path.as_deref())?;
    let config = apply_flags(config, args);
    ConfigValidatorImpl::new().validate_with_context(&config, source_label(path.as_deref()))?;

    tracing::info!(
        endpoint = %config.endpoint,
        timeout_seconds = config.timeout_seconds,
        source = %path.as_deref().map(|p| p.display().to_string()).unwrap_or_else(|| "default".to_string()),
        "configuration loaded"
    );
    Ok(config)
}

/// Where the validated values came from, for error messages
fn source_label(path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("{} with environment and flag overrides", path.display()),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            format!("{} with environment and flag overrides", DEFAULT_CONFIG_FILE)
        }
        None => "defaults with environment and flag overrides".to_string(),
    }
}

fn apply_flags(mut config: AnalyzerConfig, args: &GlobalArgs) -> AnalyzerConfig {
    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.trim().to_string();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_seconds = timeout;
    }
    config
}
