//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use loom_catalog::search::{FacetConfig, SortOption};

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoomConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Admin-managed facet master lists.
    #[serde(default)]
    pub facets: FacetConfig,

    /// Browsing defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl LoomConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Default sort from the config. Unknown names fall back to relevance.
    pub fn default_sort(&self) -> SortOption {
        self.defaults
            .sort
            .as_deref()
            .map(SortOption::parse)
            .unwrap_or_default()
    }
}

/// Catalog source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the snapshot JSON, relative to the working directory.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "data/sample_catalog.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Browsing defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Sort used when `--sort` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    /// Upper bound of the price slider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_ceiling: Option<u64>,
}
