use crate::config::AppConfig;
use crate::seed::{HttpSeedSource, SeedSource};
use crate::store::{MemoryStore, PgStore, TransactionStore};
use anyhow::Context;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TransactionStore>,
    pub seed: Arc<dyn SeedSource>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let store = match &config.database_url {
            Some(url) => {
                let db = sqlx::postgres::PgPoolOptions::new()
                    .max_connections(config.db_max_connections)
                    .connect(url)
                    .await
                    .context("connect to database")?;

                if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
                    warn!(error = %e, "migration failed; continuing");
                }
                Arc::new(PgStore::new(db)) as Arc<dyn TransactionStore>
            }
            None => {
                warn!("DATABASE_URL not set; records are kept in memory");
                Arc::new(MemoryStore::new()) as Arc<dyn TransactionStore>
            }
        };

        let seed = Arc::new(HttpSeedSource::new(config.seed_url.clone())?) as Arc<dyn SeedSource>;
        info!(seed_url = %config.seed_url, "state ready");

        Ok(Self {
            store,
            seed,
            config,
        })
    }

    pub fn from_parts(
        store: Arc<dyn TransactionStore>,
        seed: Arc<dyn SeedSource>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            store,
            seed,
            config,
        }
    }

    /// Empty in-memory store fed by the sample records.
    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::{fixtures::sample_records, seed::StaticSeedSource};

        Self::from_parts(
            Arc::new(MemoryStore::new()),
            Arc::new(StaticSeedSource::new(sample_records())),
            Arc::new(AppConfig::default()),
        )
    }
}
