use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::search::partition::DEFAULT_BATCH_SIZE;

/// Configuration for one search run.
///
/// Values can be loaded from YAML files, in order of precedence:
/// 1. Custom config file passed via `--config`
/// 2. Local `.mtfind.yaml` in the current directory
/// 3. Global `$HOME/.config/mtfind/config.yaml`
///
/// Example:
/// ```yaml
/// # Search mask: literal characters, `?` matches any single character
/// mask: "a?c"
///
/// # Worker thread count (default: CPU cores)
/// thread_count: 4
///
/// # Lines claimed per batch by each worker
/// batch_size: 64
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "warn"
/// ```
///
/// Command-line arguments take precedence over config file values; the
/// merging behavior is defined in [`merge_with_cli`](SearchConfig::merge_with_cli).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// The search mask (`?` = any single character, no escape syntax)
    #[serde(default)]
    pub mask: String,

    /// Number of worker threads
    /// Defaults to number of CPU cores if not specified
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,

    /// Number of line indices each worker claims per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: NonZeroUsize,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get().max(1)).unwrap()
}

fn default_batch_size() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_BATCH_SIZE).unwrap()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mask: String::new(),
            thread_count: default_thread_count(),
            batch_size: default_batch_size(),
            log_level: default_log_level(),
        }
    }
}

impl SearchConfig {
    /// Loads configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration from a specific file
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Default config locations
        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("mtfind/config.yaml")),
            // Local config
            Some(PathBuf::from(".mtfind.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        // Add existing config files
        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        // Build and deserialize
        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments with configuration file values
    pub fn merge_with_cli(mut self, cli_config: SearchConfig) -> Self {
        // CLI values take precedence over config file values
        if !cli_config.mask.is_empty() {
            self.mask = cli_config.mask;
        }
        // Always use CLI thread count if specified
        self.thread_count = cli_config.thread_count;
        if cli_config.batch_size != default_batch_size() {
            self.batch_size = cli_config.batch_size;
        }
        if cli_config.log_level != default_log_level() {
            self.log_level = cli_config.log_level;
        }
        self
    }
}
