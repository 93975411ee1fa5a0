//! Server configuration module.
//!
//! Configuration for the demo server binary is loaded from environment
//! variables.
//!
//! # Environment Variables
//!
//! - `CABANA_LISTEN_PORT`: Port to listen on (default: `4000`)
//! - `CABANA_SEED`: Seed for the demo fixtures (default: `42`)
//! - `CABANA_NETWORK_DELAY_MS`: Upper bound of the simulated latency
//!   window in milliseconds; `0` disables delay simulation (default: `500`)
//! - `CABANA_ERROR_RATE`: Probability of injected transient failures,
//!   `0.0..=1.0`; unset or `0` disables injection

use crate::api::ApiConfig;
use crate::fixtures::DEFAULT_SEED;

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Port to listen on for HTTP connections.
    pub listen_port: u16,
    /// Seed the store is populated from at startup.
    pub seed: u64,
    /// Simulated-network behavior of the mock API.
    pub api: ApiConfig,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ServerConfig {
    /// Default port for the server.
    pub const DEFAULT_PORT: u16 = 4000;
    /// Default delay window upper bound.
    pub const DEFAULT_NETWORK_DELAY_MS: u64 = 500;

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to a value that does not
    /// parse (non-numeric port or seed, out-of-range error rate).
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_port = Self::load_listen_port()?;
        let seed = Self::load_seed()?;
        let delay_ms = Self::load_delay_ms()?;
        let error_rate = Self::load_error_rate()?;

        Ok(Self {
            listen_port,
            seed,
            api: ApiConfig {
                enable_network_delay: delay_ms > 0,
                min_delay_ms: delay_ms / 2,
                max_delay_ms: delay_ms,
                enable_random_errors: error_rate > 0.0,
                error_rate,
            },
        })
    }

    fn load_listen_port() -> Result<u16, ConfigError> {
        match std::env::var("CABANA_LISTEN_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "CABANA_LISTEN_PORT".to_string(),
                message: format!("'{value}' is not a valid port number (must be 1-65535)"),
            }),
            Err(_) => Ok(Self::DEFAULT_PORT),
        }
    }

    fn load_seed() -> Result<u64, ConfigError> {
        match std::env::var("CABANA_SEED") {
            Ok(value) => value.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                name: "CABANA_SEED".to_string(),
                message: format!("'{value}' is not a valid numeric seed"),
            }),
            Err(_) => Ok(DEFAULT_SEED),
        }
    }

    fn load_delay_ms() -> Result<u64, ConfigError> {
        match std::env::var("CABANA_NETWORK_DELAY_MS") {
            Ok(value) => value.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                name: "CABANA_NETWORK_DELAY_MS".to_string(),
                message: format!("'{value}' is not a valid delay in milliseconds"),
            }),
            Err(_) => Ok(Self::DEFAULT_NETWORK_DELAY_MS),
        }
    }

    fn load_error_rate() -> Result<f64, ConfigError> {
        match std::env::var("CABANA_ERROR_RATE") {
            Ok(value) => {
                let rate = value.parse::<f64>().map_err(|_| ConfigError::InvalidValue {
                    name: "CABANA_ERROR_RATE".to_string(),
                    message: format!("'{value}' is not a valid probability"),
                })?;
                if !(0.0..=1.0).contains(&rate) {
                    return Err(ConfigError::InvalidValue {
                        name: "CABANA_ERROR_RATE".to_string(),
                        message: format!("'{value}' must be between 0 and 1"),
                    });
                }
                Ok(rate)
            }
            Err(_) => Ok(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(ServerConfig::DEFAULT_PORT, 4000);
        assert_eq!(ServerConfig::DEFAULT_NETWORK_DELAY_MS, 500);
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::InvalidValue {
            name: "CABANA_SEED".to_string(),
            message: "'abc' is not a valid numeric seed".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid value for CABANA_SEED: 'abc' is not a valid numeric seed"
        );
    }
}
