use serde::Deserialize;

pub const DEFAULT_SEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Postgres URL. Without it the process keeps its records in memory.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub seed_url: String,
    pub seed_on_startup: bool,
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            db_max_connections: 10,
            seed_url: DEFAULT_SEED_URL.into(),
            seed_on_startup: false,
            host: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let port = match var("APP_PORT") {
            Some(v) => v
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("APP_PORT {v:?}: {e}"))?,
            None => defaults.port,
        };
        Ok(Self {
            database_url: var("DATABASE_URL").filter(|v| !v.is_empty()),
            db_max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(defaults.db_max_connections),
            seed_url: var("SEED_URL").unwrap_or(defaults.seed_url),
            seed_on_startup: var("SEED_ON_STARTUP")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            host: var("APP_HOST").unwrap_or(defaults.host),
            port,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
