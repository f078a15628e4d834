use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{Taxonomy, TaxonomyError};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
    /// Upper bound for JSON request bodies; posting sheets can be large
    #[serde(default = "default_json_limit_bytes")]
    pub json_limit_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            json_limit_bytes: default_json_limit_bytes(),
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_json_limit_bytes() -> usize { 16 * 1024 * 1024 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Optional TOML file replacing the built-in taxonomy
    pub taxonomy_path: Option<String>,
    #[serde(default = "default_major_column_keywords")]
    pub major_column_keywords: Vec<String>,
    #[serde(default = "default_header_keywords")]
    pub header_keywords: Vec<String>,
    #[serde(default = "default_header_scan_rows")]
    pub header_scan_rows: usize,
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            taxonomy_path: None,
            major_column_keywords: default_major_column_keywords(),
            header_keywords: default_header_keywords(),
            header_scan_rows: default_header_scan_rows(),
            max_rows: default_max_rows(),
        }
    }
}

impl MatchingSettings {
    /// Load the configured taxonomy, or the built-in one when no path is set
    pub fn taxonomy(&self) -> Result<Taxonomy, TaxonomyError> {
        match self.taxonomy_path.as_deref().filter(|p| !p.trim().is_empty()) {
            Some(path) => Taxonomy::load(path),
            None => Ok(Taxonomy::builtin()),
        }
    }
}

fn default_major_column_keywords() -> Vec<String> { vec!["专业".to_string()] }
fn default_header_keywords() -> Vec<String> { vec!["专业".to_string(), "招录单位".to_string()] }
fn default_header_scan_rows() -> usize { 10 }
fn default_max_rows() -> usize { 50_000 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PMATCH__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("PMATCH")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("matching.major_column_keywords")
        .with_list_parse_key("matching.header_keywords")
        .try_parsing(true)
}
