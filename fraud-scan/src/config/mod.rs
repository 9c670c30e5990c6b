pub mod types;
pub mod loader;
pub mod builder;
pub mod validator;
pub mod templates;

pub use types::{AnalyzerConfig, DEFAULT_CONFIG_FILE, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
pub use loader::{ConfigLoader, DefaultConfigLoader, ENDPOINT_ENV, TIMEOUT_ENV};
pub use builder::AnalyzerConfigBuilder;
pub use validator::ConfigValidatorImpl;
pub use templates::{ensure_config_file_exists, generate_default_config_template};
