use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_PLACEHOLDER_URL: &str = "/placeholder.svg?height=400&width=400";

/// Keys used by key-value stores (browser `localStorage`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_appointments_key")]
    pub appointments_key: String,

    #[serde(default = "default_session_key")]
    pub session_key: String,
}

fn default_appointments_key() -> String {
    "appointments".to_string()
}

fn default_session_key() -> String {
    "isLoggedIn".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            appointments_key: default_appointments_key(),
            session_key: default_session_key(),
        }
    }
}

/// Static X-ray file name to image URL mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XrayConfig {
    #[serde(default = "default_placeholder_url")]
    pub placeholder_url: String,

    #[serde(default = "default_xray_images")]
    pub images: BTreeMap<String, String>,
}

fn default_placeholder_url() -> String {
    DEFAULT_PLACEHOLDER_URL.to_string()
}

fn default_xray_images() -> BTreeMap<String, String> {
    [
        (
            "knee-xray.jpeg",
            "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/x1-JdoWC0B0GbWTcYl2elyCH8NVzMjQD9.jpeg",
        ),
        (
            "leg-xray.jpeg",
            "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/x4-67S8tAnZ4vugkfH5YzPRbGoGk3PUmG.jpeg",
        ),
        (
            "hand-xray.jpeg",
            "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/x3.jpg-z6JdcawhXzogpOESdT9MvnGvuvJ2lp.jpeg",
        ),
        (
            "spine-xray.jpeg",
            "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/x2.jpg-5LAd0812ASoDYXC3mzbXJtyhWK2qv8.jpeg",
        ),
    ]
    .into_iter()
    .map(|(name, url)| (name.to_string(), url.to_string()))
    .collect()
}

impl Default for XrayConfig {
    fn default() -> Self {
        Self {
            placeholder_url: default_placeholder_url(),
            images: default_xray_images(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Settings shared by both dashboards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClinicConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub xray: XrayConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_xray_mapping_has_four_images() {
        let config = XrayConfig::default();
        assert_eq!(config.images.len(), 4);
        assert!(config.images.contains_key("spine-xray.jpeg"));
        assert_eq!(config.placeholder_url, DEFAULT_PLACEHOLDER_URL);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: ClinicConfig =
            serde_json::from_str(r#"{ "xray": { "placeholder_url": "/none.png" } }"#).unwrap();
        assert_eq!(config.xray.placeholder_url, "/none.png");
        assert_eq!(config.xray.images.len(), 4);
        assert_eq!(config.storage.appointments_key, "appointments");
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_partial_storage_section_keeps_other_keys() {
        let config: ClinicConfig = serde_json::from_str(
            r#"{ "storage": { "appointments_key": "clinic.appointments" }, "observability": {} }"#,
        )
        .unwrap();
        assert_eq!(config.storage.appointments_key, "clinic.appointments");
        assert_eq!(config.storage.session_key, "isLoggedIn");
        assert_eq!(config.observability.log_level, "info");
    }
}
