// X-ray file name lookup

use std::collections::BTreeMap;

use crate::config::XrayConfig;

/// Maps X-ray file names to externally hosted image URLs.
#[derive(Debug, Clone)]
pub struct XrayCatalog {
    images: BTreeMap<String, String>,
    placeholder_url: String,
}

impl XrayCatalog {
    pub fn new(config: &XrayConfig) -> Self {
        Self {
            images: config.images.clone(),
            placeholder_url: config.placeholder_url.clone(),
        }
    }

    /// URL for `file_name`, or the placeholder when the name is unknown.
    pub fn lookup_url(&self, file_name: &str) -> &str {
        self.images
            .get(file_name)
            .map(String::as_str)
            .unwrap_or(&self.placeholder_url)
    }

    pub fn is_known(&self, file_name: &str) -> bool {
        self.images.contains_key(file_name)
    }
}

impl Default for XrayCatalog {
    fn default() -> Self {
        Self::new(&XrayConfig::default())
    }
}
