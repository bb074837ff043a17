use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SHARE_BASE_URL: &str = "http://localhost/products.html";

/// Configuration for the catalog, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Page that shareable links point at
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    /// Prefix joined onto relative image paths when rendering
    #[serde(default)]
    pub image_root: String,
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            share_base_url: default_share_base_url(),
            image_root: String::new(),
        }
    }
}

impl CatalogConfig {
    pub const KEYS: [&'static str; 2] = ["share-base-url", "image-root"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: CatalogConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CatalogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Serialization)?;
        fs::write(config_path, content).map_err(CatalogError::Io)?;
        Ok(())
    }

    pub fn share_base(&self) -> Result<Url> {
        Url::parse(&self.share_base_url)
            .map_err(|e| CatalogError::Config(format!("share-base-url: {}", e)))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "share-base-url" => Some(&self.share_base_url),
            "image-root" => Some(&self.image_root),
            _ => None,
        }
    }

    /// Set a value by its user-facing key, validating it first.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "share-base-url" => {
                Url::parse(value)
                    .map_err(|e| CatalogError::Config(format!("share-base-url: {}", e)))?;
                self.share_base_url = value.to_string();
            }
            "image-root" => self.image_root = value.trim().to_string(),
            other => return Err(CatalogError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}
