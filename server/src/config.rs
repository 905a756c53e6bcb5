use api_common::{CountLimit, DEFAULT_MAX_COUNT};
use domain::Platform;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const MAX_COUNT_ENV: &str = "MAX_COUNT";

/// Highest value `MAX_COUNT` may be set to
pub const MAX_COUNT_CEILING: usize = 10_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for one scraper process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub max_count: usize,
}

impl ServerConfig {
    /// Platform defaults: all interfaces, the platform's port, default count limit
    pub fn defaults(platform: Platform) -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: platform.default_port(),
            max_count: DEFAULT_MAX_COUNT,
        }
    }

    /// Read settings through `lookup`, keeping defaults for unset variables
    pub fn from_lookup<F>(platform: Platform, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::defaults(platform);

        if let Some(host) = lookup(HOST_ENV) {
            config.host = parse(HOST_ENV, &host)?;
        }
        if let Some(port) = lookup(PORT_ENV) {
            config.port = parse(PORT_ENV, &port)?;
        }
        if let Some(max_count) = lookup(MAX_COUNT_ENV) {
            config.max_count = parse(MAX_COUNT_ENV, &max_count)?;
            if config.max_count > MAX_COUNT_CEILING {
                return Err(ConfigError::Invalid {
                    var: MAX_COUNT_ENV,
                    value: max_count,
                    reason: format!("must be at most {}", MAX_COUNT_CEILING),
                });
            }
        }

        Ok(config)
    }

    pub fn from_env(platform: Platform) -> Result<Self, ConfigError> {
        Self::from_lookup(platform, |key| std::env::var(key).ok())
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn count_limit(&self) -> CountLimit {
        CountLimit::new(self.max_count)
    }
}

fn parse<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
