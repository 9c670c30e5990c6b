use crate::cli::GlobalArgs;
use crate::error::Result;
use crate::ui;
use fraud_scan::config::{ensure_config_file_exists, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;

pub fn execute(global: &GlobalArgs, force: bool) -> Result<()> {
    let path = global
        .config
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    ui::status_message(&format!("Writing {}", path.display()));
    if ensure_config_file_exists(&path, force)? {
        ui::success_message(&format!("Created {}", path.display()));
        ui::info_message(&format!(
            "Edit {} to point at your analysis service",
            path.display()
        ));
    } else {
        ui::warning_message(&format!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_and_keeps_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fscan.toml");
        let global = GlobalArgs {
            config: Some(path.to_string_lossy().to_string()),
            ..GlobalArgs::default()
        };

        execute(&global, false).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("endpoint"));

        std::fs::write(&path, "timeout_seconds = 9\n").unwrap();
        execute(&global, false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "timeout_seconds = 9\n");
    }
}
