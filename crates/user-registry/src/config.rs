//! Server configuration management.
//!
//! Configuration is loaded from environment variables with defaults for every value.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::{Result, ServerError};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP server bind address
    pub http_host: IpAddr,
    /// HTTP server port (default: 8080)
    pub http_port: u16,
    /// Default log filter, used when `RUST_LOG` is unset
    pub log_level: String,
    /// Mailbox size of the registry actor
    pub channel_capacity: usize,
    /// Create a few sample users at startup
    pub seed_sample_users: bool,
    /// Reject updates with an empty name or email, as creation does
    pub require_fields_on_update: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_host: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            http_port: 8080,
            log_level: String::from("info"),
            channel_capacity: 32,
            seed_sample_users: false,
            require_fields_on_update: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `USER_REGISTRY_HTTP_HOST`: HTTP bind address (default: 127.0.0.1)
    /// - `USER_REGISTRY_HTTP_PORT`: HTTP port (default: 8080)
    /// - `USER_REGISTRY_LOG_LEVEL`: Logging level (default: info)
    /// - `USER_REGISTRY_CHANNEL_CAPACITY`: Actor mailbox size (default: 32)
    /// - `USER_REGISTRY_SEED_SAMPLE_USERS`: Create sample users (default: false)
    /// - `USER_REGISTRY_REQUIRE_FIELDS_ON_UPDATE`: Strict update validation (default: false)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(val) = lookup("USER_REGISTRY_HTTP_HOST") {
            config.http_host = val
                .parse()
                .map_err(|_| ServerError::config(format!("Invalid HTTP host: {}", val)))?;
        }

        if let Some(val) = lookup("USER_REGISTRY_HTTP_PORT") {
            config.http_port = val
                .parse()
                .map_err(|_| ServerError::config(format!("Invalid HTTP port: {}", val)))?;
        }

        if let Some(val) = lookup("USER_REGISTRY_LOG_LEVEL") {
            config.log_level = val;
        }

        if let Some(val) = lookup("USER_REGISTRY_CHANNEL_CAPACITY") {
            config.channel_capacity = val
                .parse()
                .map_err(|_| ServerError::config(format!("Invalid channel capacity: {}", val)))?;
        }

        if let Some(val) = lookup("USER_REGISTRY_SEED_SAMPLE_USERS") {
            config.seed_sample_users = parse_flag(&val);
        }

        if let Some(val) = lookup("USER_REGISTRY_REQUIRE_FIELDS_ON_UPDATE") {
            config.require_fields_on_update = parse_flag(&val);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        // tokio panics on a zero-capacity mpsc channel
        if self.channel_capacity == 0 {
            return Err(ServerError::config("Channel capacity must be greater than 0"));
        }
        Ok(())
    }

    /// Get the HTTP socket address.
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http_host, self.http_port)
    }
}

fn parse_flag(val: &str) -> bool {
    val.eq_ignore_ascii_case("true") || val == "1"
}
