use serde::Deserialize;
use std::env;

use crate::query::aggregator::{DEFAULT_ISSUE_URL, EngineSettings};
use crate::query::dispatcher::DispatchPolicy;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    #[serde(default)]
    pub query: QueryConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub http_addr: String,
    #[serde(default)]
    pub keep_alive: bool,
    /// 0 = unlimited
    #[serde(default)]
    pub max_connections: usize,
    /// Answers computed concurrently before new ones are refused (0 = unlimited)
    #[serde(default)]
    pub max_in_flight: usize,
}

#[derive(Debug, Deserialize)]
pub struct QueryConfig {
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub isolate_resolver_failures: bool,
    /// Per-request deadline in milliseconds (0 = none)
    #[serde(default)]
    pub timeout_ms: u64,
    #[serde(default = "default_issue_url")]
    pub issue_url: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            isolate_resolver_failures: false,
            timeout_ms: 0,
            issue_url: default_issue_url(),
        }
    }
}

fn default_issue_url() -> String {
    DEFAULT_ISSUE_URL.to_string()
}

impl QueryConfig {
    pub fn dispatch_policy(&self) -> DispatchPolicy {
        if self.isolate_resolver_failures {
            DispatchPolicy::Isolated
        } else {
            DispatchPolicy::FailFast
        }
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            parallel: self.parallel,
            issue_url: self.issue_url.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StaticFilesConfig {
    pub enabled: bool,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("QUICK_INFO_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

/// Load settings from `path` (extension optional), with `QUICK_INFO__*`
/// environment variables taking precedence.
pub fn load_settings_from(path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(path))
        .add_source(config::Environment::with_prefix("QUICK_INFO").separator("__"))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
