use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

use crate::store::NewTransaction;

/// Where seed records come from.
#[async_trait]
pub trait SeedSource: Send + Sync {
    async fn fetch(&self) -> anyhow::Result<Vec<NewTransaction>>;
}

/// Remote JSON document holding an array of transaction records.
#[derive(Clone)]
pub struct HttpSeedSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSeedSource {
    pub fn new(url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("build http client")?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl SeedSource for HttpSeedSource {
    async fn fetch(&self) -> anyhow::Result<Vec<NewTransaction>> {
        let records = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("GET {}", self.url))?
            .error_for_status()
            .with_context(|| format!("seed feed {}", self.url))?
            .json::<Vec<NewTransaction>>()
            .await
            .context("decode seed feed")?;
        debug!(url = %self.url, records = records.len(), "seed feed fetched");
        Ok(records)
    }
}

/// Fixed in-process record set.
#[derive(Clone, Default)]
pub struct StaticSeedSource {
    records: Vec<NewTransaction>,
}

impl StaticSeedSource {
    pub fn new(records: Vec<NewTransaction>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl SeedSource for StaticSeedSource {
    async fn fetch(&self) -> anyhow::Result<Vec<NewTransaction>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        seed::services::initialize,
        store::{MemoryStore, TransactionStore},
        transactions::filter::QueryFilter,
    };
    use axum::{routing::get, Json, Router};
    use serde_json::{json, Value};
    use time::Month;

    async fn spawn_feed() -> String {
        let feed = Router::new()
            .route(
                "/feed.json",
                get(|| async {
                    Json(json!([{
                        "id": 1,
                        "title": "Fjallraven Backpack",
                        "price": 109.95,
                        "description": "Your perfect pack for everyday use",
                        "category": "men's clothing",
                        "image": "https://example.test/backpack.jpg",
                        "sold": false,
                        "dateOfSale": "2021-11-27T20:29:54+05:30"
                    }]))
                }),
            )
            .route(
                "/object.json",
                get(|| async { Json(json!({ "transactions": [] })) }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, feed).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn fetches_feed_records() {
        let base = spawn_feed().await;
        let source = HttpSeedSource::new(format!("{base}/feed.json")).unwrap();
        let records = source.fetch().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Fjallraven Backpack");
        assert_eq!(records[0].price, 109.95);
        assert!(!records[0].sold);
        assert_eq!(records[0].date_of_sale.month(), Month::November);
    }

    #[tokio::test]
    async fn missing_feed_is_an_error() {
        let base = spawn_feed().await;
        let source = HttpSeedSource::new(format!("{base}/nope.json")).unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(format!("{err:#}").contains("404 Not Found"), "{err:#}");
    }

    #[tokio::test]
    async fn non_array_body_is_an_error() {
        let base = spawn_feed().await;
        let source = HttpSeedSource::new(format!("{base}/object.json")).unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(format!("{err:#}").starts_with("decode seed feed"), "{err:#}");
    }

    #[tokio::test]
    async fn bad_feed_leaves_store_untouched() {
        let base = spawn_feed().await;
        let store = MemoryStore::new();
        let good = HttpSeedSource::new(format!("{base}/feed.json")).unwrap();
        assert_eq!(initialize(&store, &good).await.unwrap(), 1);

        for path in ["/nope.json", "/object.json"] {
            let bad = HttpSeedSource::new(format!("{base}{path}")).unwrap();
            assert!(initialize(&store, &bad).await.is_err(), "{path}");
        }
        let everything = QueryFilter::new("", None);
        assert_eq!(store.count(&everything).await.unwrap(), 1);

        let listed: Value = serde_json::to_value(
            store.find(&everything, 0, 10).await.unwrap(),
        )
        .unwrap();
        assert_eq!(listed[0]["id"], 1);
    }
}
