//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use loom_catalog::catalog::{ingest, CatalogStore};

use crate::config::LoomConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["loom.toml", ".loom.toml", "loom.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: LoomConfig,
    /// Where the configuration came from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (LoomConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (LoomConfig::default(), None),
            }
        };

        output.debug(&format!(
            "config: {}",
            config_path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "defaults".to_string())
        ));

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(PathBuf, LoomConfig)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = LoomConfig::load(config_path.to_str()?) {
                        return Some((config_path, config));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Path of the catalog snapshot. An override resolves against the
    /// working directory, the configured path against the config file.
    pub fn catalog_path(&self, catalog: Option<&str>) -> PathBuf {
        if let Some(path) = catalog {
            return self.resolve_path(path);
        }

        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .map(|dir| self.cwd.join(dir))
            .unwrap_or_else(|| self.cwd.clone());
        base.join(&self.config.catalog.path)
    }

    /// Read the catalog snapshot and open a store over it.
    pub fn open_store(&self, catalog: Option<&str>) -> Result<CatalogStore> {
        let path = self.catalog_path(catalog);
        self.output.debug(&format!("catalog: {}", path.display()));

        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let snapshot = ingest::load_snapshot(&json, &self.config.facets)
            .with_context(|| format!("Invalid catalog: {}", path.display()))?;

        CatalogStore::new(snapshot, self.config.facets.clone())
            .with_context(|| format!("Invalid catalog: {}", path.display()))
    }
}
