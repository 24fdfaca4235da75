//! Configuration types for carlot.
//!
//! [`Config::load`] reads `~/.config/carlot/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[api]
base_url   = "https://car-api2.p.rapidapi.com"
host       = "car-api2.p.rapidapi.com"
key        = ""
model_year = 2020

[inventory]
default_stock = 100
default_image = "assets/images/car_temp.png"

[store]
base_url = "http://127.0.0.1:8791"

[import]
pace_ms = 100
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/carlot/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub import: ImportConfig,
}

/// `[api]` section: the third-party car-data API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Value for the `x-rapidapi-host` header.
    #[serde(default = "default_api_host")]
    pub host: String,
    /// Value for the `x-rapidapi-key` header.
    #[serde(default)]
    pub key: String,
    /// The model endpoint is year-scoped; every assembled car carries this
    /// year rather than per-record data.
    #[serde(default = "default_model_year")]
    pub model_year: i32,
}

fn default_api_base_url() -> String { "https://car-api2.p.rapidapi.com".to_string() }
fn default_api_host() -> String { "car-api2.p.rapidapi.com".to_string() }
fn default_model_year() -> i32 { 2020 }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            host: default_api_host(),
            key: String::new(),
            model_year: default_model_year(),
        }
    }
}

/// `[inventory]` section: assembly-time defaults for new cars.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryConfig {
    #[serde(default = "default_stock")]
    pub default_stock: i64,
    #[serde(default = "default_image")]
    pub default_image: String,
}

fn default_stock() -> i64 { 100 }
fn default_image() -> String { "assets/images/car_temp.png".to_string() }

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            default_stock: default_stock(),
            default_image: default_image(),
        }
    }
}

/// `[store]` section: the document-store collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_base_url")]
    pub base_url: String,
}

fn default_store_base_url() -> String { "http://127.0.0.1:8791".to_string() }

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_store_base_url(),
        }
    }
}

/// `[import]` section: bulk-import pacing.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    /// Pause after each individual write, to bound request rate against the
    /// storage backend.
    #[serde(default = "default_pace_ms")]
    pub pace_ms: u64,
}

fn default_pace_ms() -> u64 { 100 }

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            pace_ms: default_pace_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/carlot/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not
    /// exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("carlot")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
