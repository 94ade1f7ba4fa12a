use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::StartupError;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    /// Insert a placeholder entry when the collection is empty at startup
    pub seed_on_empty: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, StartupError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| StartupError::Config("DATABASE_URL must be set".to_string()))?;

        let host = match lookup("HOST") {
            Some(raw) => raw
                .parse()
                .map_err(|_| StartupError::Config(format!("Invalid HOST: {}", raw)))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| StartupError::Config(format!("Invalid PORT: {}", raw)))?,
            None => 8080,
        };

        let seed_on_empty = match lookup("SEED_ON_EMPTY") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                StartupError::Config(format!("Invalid SEED_ON_EMPTY: {}", raw))
            })?,
            None => true,
        };

        Ok(Self {
            database_url,
            host,
            port,
            seed_on_empty,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
