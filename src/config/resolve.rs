//! Layered configuration resolution
//!
//! Precedence, lowest first: built-in defaults, the optional TOML file,
//! environment variables, then explicit overrides (command-line flags).
//! Validation runs once, on the merged result.

use crate::config::env::apply_env_overrides;
use crate::config::parser::read_config_with_hash;
use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Values supplied explicitly by the caller, applied last
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub site_url: Option<String>,
    pub index_path: Option<String>,
    pub output_path: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Only ever switches strict parsing on
    pub strict: bool,
}

impl ConfigOverrides {
    /// Applies every set override to `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(site_url) = &self.site_url {
            config.site.base_url = site_url.clone();
        }
        if let Some(index_path) = &self.index_path {
            config.site.index_path = index_path.clone();
        }
        if let Some(output_path) = &self.output_path {
            config.output.path = output_path.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            config.fetch.timeout_secs = timeout;
        }
        if self.strict {
            config.parse.strict = true;
        }
    }
}

/// A validated configuration and the hash of the file it came from
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: Config,

    /// SHA-256 of the config file, when one was given
    pub file_hash: Option<String>,
}

/// Resolves the effective configuration
///
/// # Arguments
///
/// * `file` - Optional TOML configuration file
/// * `lookup` - Environment lookup, e.g. `|key| std::env::var(key).ok()`
/// * `overrides` - Explicit overrides, highest priority
///
/// # Returns
///
/// * `Ok(ResolvedConfig)` - Merged and validated configuration
/// * `Err(ConfigError)` - Unreadable file, bad TOML, or invalid merged values
pub fn resolve_config<F>(
    file: Option<&Path>,
    lookup: F,
    overrides: &ConfigOverrides,
) -> Result<ResolvedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let (mut config, file_hash) = match file {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = read_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };

    apply_env_overrides(&mut config, lookup);
    overrides.apply(&mut config);

    validate(&config)?;

    Ok(ResolvedConfig { config, file_hash })
}
