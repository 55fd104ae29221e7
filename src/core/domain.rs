use std::net::SocketAddr;
use std::time::Duration;
use tracing::Level;
use crate::core::library::{LibraryError, LibraryResult};

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

const STAGE: &str = "BOOKSHOP_STAGE";
const BIND_ADDR: &str = "BOOKSHOP_BIND_ADDR";
const REMOTE_URL: &str = "BOOKSHOP_REMOTE_URL";
const REMOTE_TIMEOUT_MS: &str = "BOOKSHOP_REMOTE_TIMEOUT_MS";
const CATALOG_PATH: &str = "BOOKSHOP_CATALOG_PATH";
const LOG_LEVEL: &str = "BOOKSHOP_LOG_LEVEL";
const LAMBDA: &str = "BOOKSHOP_LAMBDA";

// Configuration abstracts config options for the bookshop service
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct Configuration {
    pub stage: String,
    pub bind_addr: SocketAddr,
    pub remote_url: Option<String>,
    pub remote_timeout_ms: u64,
    pub catalog_path: Option<String>,
    pub log_level: Level,
    pub lambda: bool,
}

impl Configuration {
    pub fn new(stage: &str) -> Self {
        Configuration {
            stage: stage.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            remote_url: None,
            remote_timeout_ms: 2000,
            catalog_path: None,
            log_level: Level::INFO,
            lambda: false,
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // from_lookup overrides defaults with whatever the lookup returns for each variable
    pub fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let lookup = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mut config = Configuration::new(lookup(STAGE).as_deref().unwrap_or("dev"));
        if let Some(addr) = lookup(BIND_ADDR) {
            config.bind_addr = parse_var(BIND_ADDR, &addr)?;
        }
        config.remote_url = lookup(REMOTE_URL);
        if let Some(timeout) = lookup(REMOTE_TIMEOUT_MS) {
            config.remote_timeout_ms = parse_var(REMOTE_TIMEOUT_MS, &timeout)?;
        }
        config.catalog_path = lookup(CATALOG_PATH);
        if let Some(level) = lookup(LOG_LEVEL) {
            config.log_level = parse_var(LOG_LEVEL, &level)?;
        }
        if let Some(lambda) = lookup(LAMBDA) {
            config.lambda = parse_var(LAMBDA, &lambda.to_lowercase())?;
        }
        Ok(config)
    }

    pub fn remote_timeout(&self) -> Duration {
        Duration::from_millis(self.remote_timeout_ms)
    }
}

fn parse_var<T>(name: &str, value: &str) -> LibraryResult<T>
    where T: std::str::FromStr {
    value.parse::<T>().map_err(|_| LibraryError::validation(
        format!("invalid value {:?} for {}", value, name).as_str(), Some(name.to_string())))
}
