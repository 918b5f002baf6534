//! Server configuration

use std::net::{IpAddr, Ipv4Addr};

use banner_core::DEFAULT_VERSION;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: IpAddr,
    pub port: u16,
    /// Development mode: verbose default log filter. Off unless `DEBUG`
    /// is set, and never enabled implicitly in production.
    pub debug: bool,
    pub version: String,
}

/// Rejected environment values. Startup fails instead of silently
/// substituting a default when a variable is present but unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BIND_ADDRESS is not a valid IP address: {0}")]
    InvalidBindAddress(std::net::AddrParseError),
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(std::num::ParseIntError),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            debug: false,
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let bind_address = match var("BIND_ADDRESS") {
            Some(raw) => raw.parse().map_err(ConfigError::InvalidBindAddress)?,
            None => defaults.bind_address,
        };
        let port = match var("PORT") {
            Some(raw) => raw.parse().map_err(ConfigError::InvalidPort)?,
            None => defaults.port,
        };
        let debug = var("DEBUG")
            .map(|raw| matches!(raw.as_str(), "1" | "true" | "TRUE" | "yes"))
            .unwrap_or(defaults.debug);
        let version = var("APP_VERSION").unwrap_or(defaults.version);

        Ok(Self {
            bind_address,
            port,
            debug,
            version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(vars: &'static [(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_address, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.port, 5000);
        assert!(!config.debug);
        assert_eq!(config.version, "v1.1");
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("BIND_ADDRESS", "127.0.0.1"),
            ("PORT", "8080"),
            ("DEBUG", "1"),
            ("APP_VERSION", "v1.2"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.port, 8080);
        assert!(config.debug);
        assert_eq!(config.version, "v1.2");
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup(&[("PORT", "seventy")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }

    #[test]
    fn rejects_bad_bind_address() {
        let err = Config::from_lookup(lookup(&[("BIND_ADDRESS", "example.com")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddress(_)));
    }
}
