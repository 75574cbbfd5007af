use lab_match::{DistanceMethod, LightnessDamping, DEFAULT_LIGHTNESS_DAMPING};
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    /// Remote catalog access
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Local swatch cache
    #[serde(default)]
    pub store: StoreConfig,

    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,
}

/// Configuration for the remote swatch catalog
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// API root; the swatch list lives at `{base_url}/swatch/`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra attempts for a page after a transient failure
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay before the first retry; later retries wait proportionally longer
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// Stop paginating after this many pages
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Link shown for each swatch; `{id}` is replaced by the swatch id
    #[serde(default = "default_swatch_url_template")]
    pub swatch_url_template: String,
}

fn default_base_url() -> String {
    "https://filamentcolors.xyz/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_backoff_ms() -> u64 {
    500
}

fn default_max_pages() -> u32 {
    500
}

fn default_swatch_url_template() -> String {
    "https://filamentcolors.xyz/swatch/{id}/".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
            max_pages: default_max_pages(),
            swatch_url_template: default_swatch_url_template(),
        }
    }
}

impl CatalogConfig {
    /// Link for a swatch id
    pub fn swatch_url(&self, id: u32) -> String {
        self.swatch_url_template.replace("{id}", &id.to_string())
    }
}

/// Configuration for the local swatch cache
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StoreConfig {
    /// JSON file holding the last refreshed catalog
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("filamentcolors.json")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// Search defaults
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    /// Method used when none is given: "hue" or "absolute"
    #[serde(default = "default_method")]
    pub default_method: String,

    /// Lightness damping for the hue method, in (0, 1)
    #[serde(default = "default_damping")]
    pub hue_lightness_damping: f64,

    /// Number of matches shown when none is given
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
}

fn default_method() -> String {
    "hue".to_string()
}

fn default_damping() -> f64 {
    DEFAULT_LIGHTNESS_DAMPING
}

fn default_top_n() -> usize {
    1
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_method: default_method(),
            hue_lightness_damping: default_damping(),
            default_top_n: default_top_n(),
        }
    }
}

impl SearchConfig {
    /// Resolve a method name, applying the configured hue damping.
    ///
    /// `None` selects `default_method`. The damping is only checked when the
    /// hue method is selected.
    pub fn method(&self, name: Option<&str>) -> Result<DistanceMethod, ConfigError> {
        let method: DistanceMethod = name.unwrap_or(&self.default_method).parse()?;
        Ok(match method {
            DistanceMethod::Hue { .. } => DistanceMethod::hue_with(self.hue_lightness_damping)?,
            other => other,
        })
    }

    /// `default_top_n` as a count; zero is rejected by `validate`
    pub fn top_n(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.default_top_n).unwrap_or(NonZeroUsize::MIN)
    }
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load configuration from a file, falling back to defaults.
    ///
    /// A missing path or missing file gives the defaults silently; an
    /// unreadable or malformed file is logged and also gives the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        store = %config.store.path.display(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Reject values that would make searches or refreshes misbehave
    pub fn validate(&self) -> Result<(), ConfigError> {
        LightnessDamping::new(self.search.hue_lightness_damping)?;
        if self.search.default_top_n == 0 {
            return Err(ConfigError::ZeroTopN);
        }
        self.search.method(None)?;
        if self.catalog.max_pages == 0 {
            return Err(ConfigError::ZeroMaxPages);
        }
        if self.catalog.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(())
    }
}
