use anyhow::Context;
use async_trait::async_trait;
use time::Month;

use crate::{
    analytics::dto::{BarChartEntry, Statistics},
    transactions::dto::{ListQuery, TransactionPage},
};

/// The three calls the dashboard refreshes from.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn transactions(&self, q: &ListQuery) -> anyhow::Result<TransactionPage>;
    async fn statistics(&self, month: Month) -> anyhow::Result<Statistics>;
    async fn bar_chart(&self, month: Month) -> anyhow::Result<Vec<BarChartEntry>>;
}

/// HTTP client for the `/api` endpoints.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("build http client")?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> anyhow::Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let res = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            anyhow::bail!("GET {url}: {status}: {body}");
        }
        res.json::<T>()
            .await
            .with_context(|| format!("decode response of {url}"))
    }
}

fn month_query(month: Month) -> (&'static str, String) {
    ("month", u8::from(month).to_string())
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn transactions(&self, q: &ListQuery) -> anyhow::Result<TransactionPage> {
        let mut query = vec![
            ("search", q.search.clone()),
            ("page", q.page.to_string()),
            ("perPage", q.per_page.to_string()),
        ];
        if let Some(month) = q.month {
            query.push(month_query(month));
        }
        self.get_json("/transactions", &query).await
    }

    async fn statistics(&self, month: Month) -> anyhow::Result<Statistics> {
        self.get_json("/statistics", &[month_query(month)]).await
    }

    async fn bar_chart(&self, month: Month) -> anyhow::Result<Vec<BarChartEntry>> {
        self.get_json("/barchart", &[month_query(month)]).await
    }
}
