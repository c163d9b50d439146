//! Configuration module for the media tracker.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::AppError;
use crate::store::DATA_FILE_NAME;

/// Directory created under the per-user data dir.
const APP_DIR_NAME: &str = "media-tracker";

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON document
    pub data_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let data_path = env::var("MEDIA_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_path());

        let raw_addr = env::var("MEDIA_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|e| AppError::Internal(format!("Invalid MEDIA_BIND_ADDR '{}': {}", raw_addr, e)))?;

        let log_level = env::var("MEDIA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("MEDIA_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            data_path,
            bind_addr,
            log_level,
            log_format,
        })
    }
}

/// `<user data dir>/media-tracker/media-data.json`, or `./data/` when there is no data dir.
pub fn default_data_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("./data"))
        .join(DATA_FILE_NAME)
}
