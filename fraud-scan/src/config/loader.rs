use crate::config::types::{AnalyzerConfig, DEFAULT_CONFIG_FILE};
use crate::config::validator::ConfigValidatorImpl;
use crate::error::{AnalysisError, Result};
use std::path::Path;

/// Environment variable overriding the endpoint
pub const ENDPOINT_ENV: &str = "FSCAN_ENDPOINT";

/// Environment variable overriding the timeout in seconds
pub const TIMEOUT_ENV: &str = "FSCAN_TIMEOUT_SECONDS";

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<AnalyzerConfig>;
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<AnalyzerConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from a TOML file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<AnalyzerConfig> {
        let content = std::fs::read_to_string(&path).map_err(|_| AnalysisError::ConfigNotFound {
            path: path.as_ref().to_path_buf(),
        })?;

        let config: AnalyzerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load and validate, naming the file in any error
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<AnalyzerConfig> {
        let path_ref = path.as_ref();
        let config = parse_file(path_ref)?;
        ConfigValidatorImpl::new().validate_with_context(&config, path_ref)?;
        Ok(config)
    }
}

/// Read and parse a config file without validating it
fn parse_file(path: &Path) -> Result<AnalyzerConfig> {
    if !path.exists() {
        return Err(AnalysisError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(AnalysisError::Io)?;

    toml::from_str(&content).map_err(|e| {
        AnalysisError::invalid_config(format!(
            "Failed to parse TOML in {}: {}",
            path.display(),
            e
        ))
    })
}

impl DefaultConfigLoader {
    /// File and environment layers, unvalidated.
    ///
    /// An explicit path must exist. Without one, `fscan.toml` in the working
    /// directory is used when present and built-in defaults otherwise.
    /// Callers layering further overrides validate once at the end.
    pub fn load_layers(explicit_path: Option<&Path>) -> Result<AnalyzerConfig> {
        let config = match explicit_path {
            Some(path) => parse_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                parse_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => AnalyzerConfig::default(),
        };

        apply_overrides(config, |key| std::env::var(key).ok())
    }

    /// File and environment layers, validated
    pub fn resolve(explicit_path: Option<&Path>) -> Result<AnalyzerConfig> {
        let config = Self::load_layers(explicit_path)?;
        let source = explicit_path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        ConfigValidatorImpl::new().validate_with_context(&config, source)?;
        Ok(config)
    }
}

/// Apply `FSCAN_*` overrides read through `lookup`
pub fn apply_overrides<F>(mut config: AnalyzerConfig, lookup: F) -> Result<AnalyzerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
        config.endpoint = endpoint.trim().to_string();
    }

    if let Some(raw) = lookup(TIMEOUT_ENV) {
        config.timeout_seconds = raw.trim().parse().map_err(|_| {
            AnalysisError::invalid_config(format!(
                "{} must be a whole number of seconds, got '{}'",
                TIMEOUT_ENV, raw
            ))
        })?;
    }

    Ok(config)
}

// Convenience functions maintaining the API
impl AnalyzerConfig {
    /// Create a new config builder
    pub fn builder() -> crate::config::builder::AnalyzerConfigBuilder {
        crate::config::builder::AnalyzerConfigBuilder::new()
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load configuration with enhanced error context
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_with_validation(path)
    }

    /// Message used when a failure carries no server message
    pub fn fallback_message(&self) -> &str {
        self.fallback_message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(crate::controller::DEFAULT_FALLBACK_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_load_with_validation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fscan.toml");
        std::fs::write(&path, "endpoint = \"https://scan.example.com/analyze\"\n").unwrap();

        let config = AnalyzerConfig::load_with_validation(&path).unwrap();
        assert_eq!(config.endpoint, "https://scan.example.com/analyze");
        assert_eq!(config.timeout_seconds, 60);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");

        let err = DefaultConfigLoader::resolve(Some(&path)).unwrap_err();
        assert!(matches!(err, AnalysisError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_layers_skip_validation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fscan.toml");
        std::fs::write(&path, "endpoint = \"not a url\"\n").unwrap();

        let config = DefaultConfigLoader::load_layers(Some(&path)).unwrap();
        assert_eq!(config.endpoint, "not a url");

        let err = DefaultConfigLoader::resolve(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_invalid_toml_names_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "endpoint = [").unwrap();

        let err = AnalyzerConfig::load_with_validation(&path).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_env_overrides() {
        let config = apply_overrides(
            AnalyzerConfig::default(),
            lookup_from(&[
                (ENDPOINT_ENV, " https://override.example.com/analyze "),
                (TIMEOUT_ENV, "5"),
            ]),
        )
        .unwrap();

        assert_eq!(config.endpoint, "https://override.example.com/analyze");
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_bad_timeout_override() {
        let err = apply_overrides(AnalyzerConfig::default(), lookup_from(&[(TIMEOUT_ENV, "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains(TIMEOUT_ENV));
    }

    #[test]
    fn test_fallback_message_default_and_override() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.fallback_message(), crate::controller::DEFAULT_FALLBACK_MESSAGE);

        let config = AnalyzerConfig {
            fallback_message: Some("Try later".to_string()),
            ..AnalyzerConfig::default()
        };
        assert_eq!(config.fallback_message(), "Try later");
    }
}
