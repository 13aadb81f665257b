use std::env;
use std::net::IpAddr;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use qna_config::constants::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid host address: {0}")]
    InvalidHost(String),
    #[error("Invalid value for {var}: {value}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origin: String,
    pub database_path: PathBuf,
    pub db_max_connections: u32,
    pub query_timeout: Duration,
    pub request_timeout: Duration,
}

/// First set variable among `names`
fn first_var(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| env::var(name).ok())
}

fn parse_var<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
        Err(_) => Ok(default),
    }
}

pub fn default_database_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(QNA_DIR_NAME)
        .join(DATABASE_FILE_NAME)
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match first_var(&[QNA_API_PORT, PORT]) {
            Some(port_str) => port_str.trim().parse::<u16>()?,
            None => DEFAULT_PORT,
        };

        // Validate port is in valid range
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let host_str = env::var(QNA_API_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let host = host_str
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host_str.clone()))?;

        let cors_origin = first_var(&[QNA_CORS_ORIGIN, CORS_ORIGIN])
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        let database_path = env::var(QNA_DATABASE_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_database_path());

        let db_max_connections = parse_var(QNA_DB_MAX_CONNECTIONS, DEFAULT_DB_MAX_CONNECTIONS)?;
        if db_max_connections == 0 {
            return Err(ConfigError::InvalidNumber {
                var: QNA_DB_MAX_CONNECTIONS,
                value: "0".to_string(),
            });
        }

        let query_timeout =
            Duration::from_secs(parse_var(QNA_QUERY_TIMEOUT_SECS, DEFAULT_QUERY_TIMEOUT_SECS)?);
        let request_timeout = Duration::from_secs(parse_var(
            QNA_REQUEST_TIMEOUT_SECS,
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?);

        Ok(Config {
            host,
            port,
            cors_origin,
            database_path,
            db_max_connections,
            query_timeout,
            request_timeout,
        })
    }
}
