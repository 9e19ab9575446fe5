//! Configuration loader
//!
//! Loads client credentials and endpoint settings from environment variables
//! or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the credentials are incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `BRIGHTHUB_CLIENT_ID`: OAuth client id (required)
//! - `BRIGHTHUB_CLIENT_SECRET`: OAuth client secret (required)
//! - `BRIGHTHUB_ACCOUNT_ID`: Video Cloud account id (required)
//! - `BRIGHTHUB_AUTH_BASE_URL`: OAuth host override
//! - `BRIGHTHUB_CMS_BASE_URL`: CMS API host override
//! - `BRIGHTHUB_INGEST_BASE_URL`: Dynamic Ingest API host override
//! - `BRIGHTHUB_INGESTION_BASE_URL`: Ingest Profiles API host override
//! - `BRIGHTHUB_TIMEOUT_SECS`: Request timeout in seconds
//! - `BRIGHTHUB_USER_AGENT`: `User-Agent` header override
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./brighthub.json` or `./brighthub.toml` (current working directory)
//! 2. `../brighthub.json` or `../brighthub.toml` (parent directory)
//! 3. `../../brighthub.json` or `../../brighthub.toml` (grandparent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use brighthub_domain::{ApiError, BrighthubConfig, ClientConfig, Credentials, Result};

const CONFIG_FILE_NAMES: [&str; 2] = ["brighthub.json", "brighthub.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `ApiError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<BrighthubConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// The three credential variables must be present. Endpoint variables are
/// optional and default to the production hosts.
///
/// # Errors
/// Returns `ApiError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<BrighthubConfig> {
    let credentials = Credentials {
        client_id: env_var("BRIGHTHUB_CLIENT_ID")?,
        client_secret: env_var("BRIGHTHUB_CLIENT_SECRET")?,
        account_id: env_var("BRIGHTHUB_ACCOUNT_ID")?,
    };

    let defaults = ClientConfig::default();
    let timeout_secs = match std::env::var("BRIGHTHUB_TIMEOUT_SECS").ok() {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| ApiError::Config(format!("Invalid timeout: {}", e)))?,
        None => defaults.timeout_secs,
    };

    let client = ClientConfig {
        auth_base_url: env_or("BRIGHTHUB_AUTH_BASE_URL", defaults.auth_base_url),
        cms_base_url: env_or("BRIGHTHUB_CMS_BASE_URL", defaults.cms_base_url),
        ingest_base_url: env_or("BRIGHTHUB_INGEST_BASE_URL", defaults.ingest_base_url),
        ingestion_base_url: env_or("BRIGHTHUB_INGESTION_BASE_URL", defaults.ingestion_base_url),
        timeout_secs,
        user_agent: std::env::var("BRIGHTHUB_USER_AGENT").ok().filter(|v| !v.is_empty()),
    };

    validate(BrighthubConfig { credentials, client })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `ApiError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<BrighthubConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ApiError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ApiError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ApiError::Config(format!("Failed to read config file: {}", e)))?;

    validate(parse_config(&contents, &config_path)?)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `ApiError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<BrighthubConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ApiError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ApiError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(ApiError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Reject configurations the client could never authenticate with
fn validate(config: BrighthubConfig) -> Result<BrighthubConfig> {
    let credentials = &config.credentials;
    for (name, value) in [
        ("client_id", &credentials.client_id),
        ("client_secret", &credentials.client_secret),
        ("account_id", &credentials.account_id),
    ] {
        if value.trim().is_empty() {
            return Err(ApiError::Config(format!("Credential {} must not be empty", name)));
        }
    }

    if config.client.timeout_secs == 0 {
        return Err(ApiError::Config("Timeout must be at least one second".to_string()));
    }

    Ok(config)
}

/// Probe multiple paths for configuration files
///
/// Searches for `brighthub.{json,toml}` in the working directory, up to two
/// parent directories, then next to the executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.extend([exe_dir.to_path_buf(), exe_dir.join(".."), exe_dir.join("../..")]);
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `ApiError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| ApiError::Config(format!("Missing required environment variable: {}", key)))
}

/// Get optional environment variable, falling back to `default`
fn env_or(key: &str, default: String) -> String {
    std::env::var(key).ok().filter(|v| !v.is_empty()).unwrap_or(default)
}
