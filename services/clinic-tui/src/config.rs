// services/clinic-tui/src/config.rs
//
// Terminal dashboard configuration: optional YAML file plus CLINIC_TUI__* env overrides

use anyhow::Result;
use clinickit::config::{ObservabilityConfig, XrayConfig};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    #[serde(default = "default_store_path")]
    pub store_path: String,

    #[serde(default = "default_log_file")]
    pub log_file: String,

    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,

    #[serde(default)]
    pub xray: XrayConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

fn default_store_path() -> String {
    "clinic-appointments.json".to_string()
}

fn default_log_file() -> String {
    "clinic-tui.log".to_string()
}

fn default_refresh_ms() -> u64 {
    250
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            log_file: default_log_file(),
            refresh_ms: default_refresh_ms(),
            xray: XrayConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Load from `path` if it exists, then apply environment overrides.
pub fn load_config(path: &str) -> Result<TuiConfig> {
    let config = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(Environment::with_prefix("CLINIC_TUI").separator("__"))
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = load_config("does/not/exist/clinic-tui.yaml").unwrap();
        assert_eq!(config.store_path, "clinic-appointments.json");
        assert_eq!(config.refresh_ms, 250);
        assert_eq!(config.xray.images.len(), 4);
    }

    #[test]
    fn test_yaml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "store_path: /tmp/front-desk.json").unwrap();
        writeln!(file, "refresh_ms: 100").unwrap();
        writeln!(file, "xray:").unwrap();
        writeln!(file, "  placeholder_url: /missing.png").unwrap();

        let config = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.store_path, "/tmp/front-desk.json");
        assert_eq!(config.refresh_ms, 100);
        assert_eq!(config.xray.placeholder_url, "/missing.png");
        assert_eq!(config.log_file, "clinic-tui.log");
    }
}
