use std::collections::HashMap;
use std::net::IpAddr;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_PORT: &str = "5000";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_DB_FILE: &str = "database.db";
const DEFAULT_INDEX_FILE: &str = "index.html";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_path: String,
    /// Shared secret for write endpoints. `None` rejects every write.
    pub admin_password: Option<String>,
    pub index_path: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let host = env_map
            .get("HOST")
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|_| {
                ConfigError::InvalidValue(
                    "HOST".to_string(),
                    "must be an IP address".to_string(),
                )
            })?;

        let database_path = env_map
            .get("SQLITE_DB_PATH")
            .cloned()
            .unwrap_or_else(|| app_dir().join(DEFAULT_DB_FILE).to_string_lossy().to_string());

        let admin_password = env_map
            .get("ADMIN_PASSWORD")
            .filter(|s| !s.is_empty())
            .cloned();

        let index_path = env_map
            .get("INDEX_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| app_dir().join(DEFAULT_INDEX_FILE));

        Ok(Config {
            host,
            port,
            database_path,
            admin_password,
            index_path,
        })
    }
}

/// Directory holding the running executable, or the working directory when
/// that cannot be resolved.
fn app_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert!(config.admin_password.is_none());
        assert!(config.database_path.ends_with("database.db"));
        assert!(config.index_path.ends_with("index.html"));
    }

    #[test]
    fn test_overrides() {
        let mut env_map = HashMap::new();
        env_map.insert("PORT".to_string(), "8081".to_string());
        env_map.insert("HOST".to_string(), "127.0.0.1".to_string());
        env_map.insert("SQLITE_DB_PATH".to_string(), "/tmp/procs.db".to_string());
        env_map.insert("ADMIN_PASSWORD".to_string(), "s3cret".to_string());
        env_map.insert("INDEX_PATH".to_string(), "/srv/www/index.html".to_string());

        let config = Config::from_env_map(env_map).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.database_path, "/tmp/procs.db");
        assert_eq!(config.admin_password.as_deref(), Some("s3cret"));
        assert_eq!(config.index_path, PathBuf::from("/srv/www/index.html"));
    }

    #[test]
    fn test_empty_admin_password_is_unset() {
        let mut env_map = HashMap::new();
        env_map.insert("ADMIN_PASSWORD".to_string(), String::new());
        let config = Config::from_env_map(env_map).unwrap();
        assert!(config.admin_password.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let mut env_map = HashMap::new();
        env_map.insert("PORT".to_string(), "not_a_number".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "PORT"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_invalid_host() {
        let mut env_map = HashMap::new();
        env_map.insert("HOST".to_string(), "localhost:80".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "HOST"),
            _ => panic!("Expected InvalidValue error"),
        }
    }
}
