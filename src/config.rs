use std::net::SocketAddr;
use std::path::PathBuf;

pub const ADDR_VAR: &str = "DEVLOG_ADDR";
pub const PUBLIC_DIR_VAR: &str = "DEVLOG_PUBLIC_DIR";

pub const DEFAULT_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 3000);
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid socket address {value:?} in {var}: {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
        let addr = match lookup(ADDR_VAR) {
            Some(value) => value.parse().map_err(|source| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value,
                source,
            })?,
            None => DEFAULT_ADDR,
        };
        let public_dir = lookup(PUBLIC_DIR_VAR).unwrap_or_else(|| DEFAULT_PUBLIC_DIR.to_owned());

        Ok(Config {
            addr,
            public_dir: PathBuf::from(public_dir),
        })
    }
}
