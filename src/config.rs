//! Configuration file support for postboard.
//!
//! Provides YAML-based configuration through `postboard.config.yml` files,
//! file loading and validation, and the merge of CLI flags, file values and
//! built-in defaults into the settings a run uses.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::adapters::outbound::network::{
    parse_endpoint, DEFAULT_API_BASE_URL, DEFAULT_POSTS_URL, DEFAULT_TIMEOUT_SECS,
};
use crate::application::dto::OutputFormat;
use crate::application::shell::DEFAULT_BRAND;
use crate::cli::Args;
use crate::listing::policies::DEFAULT_POST_LIMIT;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "postboard.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub api_base_url: Option<String>,
    pub posts_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub post_limit: Option<usize>,
    pub brand: Option<String>,
    pub live: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to null rather than an empty mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    tracing::info!(path = %config_path.display(), "auto-discovered config file");
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = &config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: format: {}", e);
        }
    }
    for (key, url) in [
        ("api_base_url", &config.api_base_url),
        ("posts_url", &config.posts_url),
    ] {
        if let Some(url) = url {
            parse_endpoint(url).with_context(|| format!("Invalid config: {}", key))?;
        }
    }
    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be at least 1.\n\n\
             💡 Hint: Remove the key to use the default of {} seconds.",
            DEFAULT_TIMEOUT_SECS
        );
    }
    if config.post_limit == Some(0) {
        bail!(
            "Invalid config: post_limit must be at least 1.\n\n\
             💡 Hint: Remove the key to show the first {} posts.",
            DEFAULT_POST_LIMIT
        );
    }
    if config.brand.as_deref().is_some_and(|b| b.trim().is_empty()) {
        bail!("Invalid config: brand must not be empty.");
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        tracing::warn!("Unknown config field '{}' will be ignored", key);
    }
}

/// Settings of one run after merging CLI flags, config file and defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub format: OutputFormat,
    pub api_base_url: String,
    pub posts_url: String,
    pub timeout: Duration,
    pub post_limit: usize,
    pub brand: String,
    pub live: bool,
}

impl Settings {
    /// Merges the sources with precedence CLI flag > config file > default.
    ///
    /// Boolean flags can only switch a setting on.
    pub fn resolve(args: &Args, config: Option<&ConfigFile>) -> Result<Self> {
        let file = |pick: fn(&ConfigFile) -> Option<String>| config.and_then(pick);

        let format = match (args.format, file(|c| c.format.clone())) {
            (Some(format), _) => format,
            (None, Some(format)) => OutputFormat::from_str(&format).map_err(anyhow::Error::msg)?,
            (None, None) => OutputFormat::Text,
        };

        let timeout_secs = args
            .timeout
            .or_else(|| config.and_then(|c| c.timeout_secs))
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            format,
            api_base_url: args
                .api_base_url
                .clone()
                .or_else(|| file(|c| c.api_base_url.clone()))
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            posts_url: args
                .posts_url
                .clone()
                .or_else(|| file(|c| c.posts_url.clone()))
                .unwrap_or_else(|| DEFAULT_POSTS_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            post_limit: args
                .post_limit
                .or_else(|| config.and_then(|c| c.post_limit))
                .unwrap_or(DEFAULT_POST_LIMIT),
            brand: args
                .brand
                .clone()
                .or_else(|| file(|c| c.brand.clone()))
                .unwrap_or_else(|| DEFAULT_BRAND.to_string()),
            live: args.live || args.interactive || config.and_then(|c| c.live).unwrap_or(false),
        })
    }
}
