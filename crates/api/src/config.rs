use std::net::{IpAddr, SocketAddr};

use config::{Config, ConfigError, Environment, File, Source};
use serde::{Deserialize, Deserializer};
use sqlx::postgres::PgConnectOptions;

/// Config file looked up when `CONFIG_FILE` is unset. The extension is
/// resolved by the `config` crate (`.yaml`, `.toml`, `.json`, ...).
pub const DEFAULT_CONFIG_FILE: &str = "config/config.development";

/// Prefix for environment overrides, e.g. `PRODUCT_SERVICE__DATABASE__HOST`.
pub const ENV_PREFIX: &str = "PRODUCT_SERVICE";

/// Server configuration: built-in defaults, then the optional config file,
/// then environment variables.
///
/// | Key                    | Default                 |
/// |------------------------|-------------------------|
/// | `host`                 | `0.0.0.0`               |
/// | `port`                 | `8080`                  |
/// | `request_timeout_secs` | `30`                    |
/// | `cors_origins`         | `http://localhost:5173` |
/// | `database.*`           | see [`DatabaseConfig`]  |
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    #[serde(deserialize_with = "list_or_csv")]
    pub cors_origins: Vec<String>,
    pub database: DatabaseConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            request_timeout_secs: 30,
            cors_origins: vec!["http://localhost:5173".into()],
            database: DatabaseConfig::default(),
        }
    }
}

/// Connection parameters for the catalog database.
///
/// When `url` is set it wins over the individual parts.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub url: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 5432,
            username: "postgres".into(),
            password: "postgres".into(),
            name: "products".into(),
            max_connections: 10,
            url: None,
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl DatabaseConfig {
    /// Build sqlx connect options. Credentials are passed as discrete
    /// fields, so they need no URL escaping.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return url.parse();
        }
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.name))
    }
}

impl ServerConfig {
    /// Load from `CONFIG_FILE` (default [`DEFAULT_CONFIG_FILE`], optional)
    /// and `PRODUCT_SERVICE__*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());
        Self::from_sources(File::with_name(&path).required(false), env_source())
    }

    /// Layer `file` under `env` on top of the defaults.
    pub fn from_sources<F, E>(file: F, env: E) -> Result<Self, ConfigError>
    where
        F: Source + Send + Sync + 'static,
        E: Source + Send + Sync + 'static,
    {
        Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Environment source with the service prefix.
///
/// Values stay strings until deserialization, so a password such as `007`
/// keeps its leading zeros.
pub fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
}

/// Accept a list (config file) or a comma-separated string (environment).
fn list_or_csv<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrCsv {
        List(Vec<String>),
        Csv(String),
    }

    Ok(match ListOrCsv::deserialize(deserializer)? {
        ListOrCsv::List(items) => items,
        ListOrCsv::Csv(csv) => csv
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
    })
}
