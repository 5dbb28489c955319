use std::{env, net::SocketAddr, time::Duration};

use thiserror::Error;
use url::Url;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_OSM_API_URL: &str = "https://api.openstreetmap.org/api/0.6/";
pub const DEFAULT_OSM_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration resolved from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub osm_api_url: Url,
    pub osm_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid CAMPUSCOFFEE_BIND_ADDR value: {0}")]
    BindAddress(#[source] std::net::AddrParseError),
    #[error("invalid CAMPUSCOFFEE_OSM_API_URL value: {0}")]
    OsmApiUrl(#[source] url::ParseError),
    #[error("CAMPUSCOFFEE_OSM_TIMEOUT_SECS must be a positive number of seconds (got {0})")]
    OsmTimeout(String),
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env_or("CAMPUSCOFFEE_BIND_ADDR", DEFAULT_BIND_ADDR)
            .parse()
            .map_err(ConfigError::BindAddress)?;

        let mut osm_api_url = env_or("CAMPUSCOFFEE_OSM_API_URL", DEFAULT_OSM_API_URL);
        // Url::join drops the last path segment unless it ends with a slash
        if !osm_api_url.ends_with('/') {
            osm_api_url.push('/');
        }
        let osm_api_url = Url::parse(&osm_api_url).map_err(ConfigError::OsmApiUrl)?;

        let timeout = env_or(
            "CAMPUSCOFFEE_OSM_TIMEOUT_SECS",
            &DEFAULT_OSM_TIMEOUT_SECS.to_string(),
        );
        let osm_timeout = match timeout.parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => return Err(ConfigError::OsmTimeout(timeout)),
        };

        Ok(Self {
            bind_addr,
            osm_api_url,
            osm_timeout,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{LazyLock, Mutex};

    static ENV_GUARD: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

    const VARS: [&str; 3] = [
        "CAMPUSCOFFEE_BIND_ADDR",
        "CAMPUSCOFFEE_OSM_API_URL",
        "CAMPUSCOFFEE_OSM_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn loads_defaults() {
        let _guard = ENV_GUARD.lock().expect("env guard poisoned");
        clear_env();

        let config = AppConfig::from_env().expect("config should load with defaults");
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.osm_api_url.as_str(), DEFAULT_OSM_API_URL);
        assert_eq!(config.osm_timeout, Duration::from_secs(DEFAULT_OSM_TIMEOUT_SECS));
    }

    #[test]
    fn appends_trailing_slash_to_api_url() {
        let _guard = ENV_GUARD.lock().expect("env guard poisoned");
        clear_env();
        env::set_var("CAMPUSCOFFEE_OSM_API_URL", "http://localhost:8080/api/0.6");
        env::set_var("CAMPUSCOFFEE_OSM_TIMEOUT_SECS", "3");

        let config = AppConfig::from_env().expect("config should load");
        assert_eq!(
            config.osm_api_url.join("node/1").expect("join").as_str(),
            "http://localhost:8080/api/0.6/node/1"
        );
        assert_eq!(config.osm_timeout, Duration::from_secs(3));

        clear_env();
    }

    #[test]
    fn rejects_invalid_values() {
        let _guard = ENV_GUARD.lock().expect("env guard poisoned");
        clear_env();

        env::set_var("CAMPUSCOFFEE_BIND_ADDR", "not-an-address");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::BindAddress(_))
        ));
        env::remove_var("CAMPUSCOFFEE_BIND_ADDR");

        env::set_var("CAMPUSCOFFEE_OSM_API_URL", "no scheme");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::OsmApiUrl(_))
        ));
        env::remove_var("CAMPUSCOFFEE_OSM_API_URL");

        env::set_var("CAMPUSCOFFEE_OSM_TIMEOUT_SECS", "0");
        let err = AppConfig::from_env().expect_err("zero timeout should error");
        assert!(matches!(err, ConfigError::OsmTimeout(value) if value == "0"));

        clear_env();
    }
}
