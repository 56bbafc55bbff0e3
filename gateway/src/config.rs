//! Gateway process configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory served for paths that match no API route.
    pub site_dir: Option<PathBuf>,
}

impl GatewayConfig {
    /// Build gateway config from environment variables.
    ///
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: optional static site root
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `HOST` or `PORT` is set but does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_parse_strict("HOST", DEFAULT_HOST)?;
        let port = env_parse_strict("PORT", DEFAULT_PORT)?;
        let site_dir = std::env::var("SITE_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self { host, port, site_dir })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_parse_strict<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
