use thiserror::Error;

/// Fallback database name used when DB_NAME is not set.
const DEFAULT_DB_NAME: &str = "clinic";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub mongo_url: String,
    pub db_name: String,
}

impl Config {
    /// Reads configuration from the process environment. A missing or empty
    /// MONGO_URL is a deployment error, so startup must not proceed past it.
    pub fn from_env() -> Result<Self, ConfigError> {
        use std::env;
        Self::from_vars(
            env::var("SERVER_HOST").ok(),
            env::var("SERVER_PORT").ok(),
            env::var("MONGO_URL").ok(),
            env::var("DB_NAME").ok(),
        )
    }

    fn from_vars(
        server_host: Option<String>,
        server_port: Option<String>,
        mongo_url: Option<String>,
        db_name: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mongo_url = mongo_url
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingVar("MONGO_URL"))?;
        Ok(Self {
            server_host: server_host.unwrap_or_else(|| "127.0.0.1".to_string()),
            server_port: server_port.and_then(|s| s.parse().ok()).unwrap_or(8080),
            mongo_url,
            db_name: db_name
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Option<String> {
        Some("mongodb://localhost:27017".to_string())
    }

    #[test]
    fn missing_mongo_url_is_fatal() {
        let err = Config::from_vars(None, None, None, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("MONGO_URL")));
    }

    #[test]
    fn empty_mongo_url_is_fatal() {
        let err = Config::from_vars(None, None, Some(String::new()), None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("MONGO_URL")));
    }

    #[test]
    fn missing_mongo_url_error_names_the_variable() {
        let err = Config::from_vars(None, None, None, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "required environment variable MONGO_URL is not set"
        );
    }

    #[test]
    fn db_name_defaults_when_unset() {
        let config = Config::from_vars(None, None, url(), None).unwrap();
        assert_eq!(config.db_name, "clinic");
    }

    #[test]
    fn db_name_honors_explicit_value() {
        let config = Config::from_vars(None, None, url(), Some("clinic_test".to_string())).unwrap();
        assert_eq!(config.db_name, "clinic_test");
    }

    #[test]
    fn identical_inputs_yield_identical_configs() {
        let a = Config::from_vars(None, None, url(), Some("clinic_test".to_string())).unwrap();
        let b = Config::from_vars(None, None, url(), Some("clinic_test".to_string())).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unparseable_port_falls_back_to_default() {
        let config = Config::from_vars(None, Some("not-a-port".to_string()), url(), None).unwrap();
        assert_eq!(config.server_port, 8080);
    }
}
