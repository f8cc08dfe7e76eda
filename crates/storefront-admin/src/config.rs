//! Runtime configuration, read from the environment once at startup.
//!
//! | Variable                      | Default   |
//! |-------------------------------|-----------|
//! | `STOREFRONT_HOST`             | `0.0.0.0` |
//! | `PORT`                        | `3000`    |
//! | `STOREFRONT_DATA_DIR`         | unset: records live in memory only |
//! | `STOREFRONT_CHANNEL_CAPACITY` | `32`      |
//! | `STOREFRONT_MAX_BODY_BYTES`   | `16384`   |
//!
//! A value that does not parse falls back to its default.

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

pub const PRODUCTS_FILE: &str = "products.json";
pub const MESSAGES_FILE: &str = "messages.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding one snapshot file per collection.
    pub data_dir: Option<PathBuf>,
    /// Request queue length of each store actor.
    pub channel_capacity: usize,
    pub max_body_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_dir: None,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            host: parsed("STOREFRONT_HOST").unwrap_or(defaults.host),
            port: parsed("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            data_dir: parsed("STOREFRONT_DATA_DIR").map(PathBuf::from),
            channel_capacity: parsed("STOREFRONT_CHANNEL_CAPACITY")
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.channel_capacity),
            max_body_bytes: parsed("STOREFRONT_MAX_BODY_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_body_bytes),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_values_are_read() {
        let config = config_from(&[
            ("STOREFRONT_HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("STOREFRONT_DATA_DIR", "/var/lib/storefront"),
            ("STOREFRONT_CHANNEL_CAPACITY", "4"),
            ("STOREFRONT_MAX_BODY_BYTES", "1024"),
        ]);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/storefront")));
        assert_eq!(config.channel_capacity, 4);
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("PORT", "eighty"),
            ("STOREFRONT_CHANNEL_CAPACITY", "0"),
            ("STOREFRONT_MAX_BODY_BYTES", "-5"),
            ("STOREFRONT_DATA_DIR", "  "),
        ]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.channel_capacity, DEFAULT_CHANNEL_CAPACITY);
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert_eq!(config.data_dir, None);
    }
}
