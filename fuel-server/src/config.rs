//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable for the listen address.
pub const ADDR_VAR: &str = "FUEL_SERVER_ADDR";
/// Environment variable for the static asset directory.
pub const STATIC_DIR_VAR: &str = "FUEL_STATIC_DIR";
/// Environment variable for an optional JSON seed file.
pub const SEED_FILE_VAR: &str = "FUEL_SEED_FILE";

const DEFAULT_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
    5000,
);

/// Error returned when the environment holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} is set but empty")]
    Empty { var: &'static str },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to listen on
    pub addr: SocketAddr,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Seed file to load instead of the built-in stations
    pub seed_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration using `lookup` to fetch variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value.parse().map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value,
            })?;
        }

        if let Some(value) = lookup(STATIC_DIR_VAR) {
            config.static_dir = non_empty(STATIC_DIR_VAR, value)?.into();
        }

        if let Some(value) = lookup(SEED_FILE_VAR) {
            config.seed_file = Some(non_empty(SEED_FILE_VAR, value)?.into());
        }

        Ok(config)
    }

    /// Set a custom listen address.
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Load stations from a seed file.
    pub fn with_seed_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_file = Some(path.into());
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR,
            static_dir: PathBuf::from("static"),
            seed_file: None,
        }
    }
}

fn non_empty(var: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty { var });
    }
    Ok(value)
}
