use async_trait::async_trait;
use time::Month;
use tokio::sync::RwLock;

use super::{CategoryCount, NewTransaction, SaleTotals, Transaction, TransactionStore};
use crate::{analytics::buckets::in_price_range, transactions::filter::QueryFilter};

/// Process-local store, used when no database is configured and in tests.
#[derive(Default)]
pub struct MemoryStore {
    rows: RwLock<Vec<Transaction>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn month_rows(&self, month: Month) -> Vec<Transaction> {
        self.rows
            .read()
            .await
            .iter()
            .filter(|t| t.sale_month() == month)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn replace_all(&self, records: Vec<NewTransaction>) -> anyhow::Result<u64> {
        let fresh: Vec<Transaction> = records
            .into_iter()
            .zip(1..)
            .map(|(r, id)| r.into_stored(id))
            .collect();
        let n = fresh.len() as u64;
        *self.rows.write().await = fresh;
        Ok(n)
    }

    async fn find(
        &self,
        filter: &QueryFilter,
        offset: i64,
        limit: i64,
    ) -> anyhow::Result<Vec<Transaction>> {
        let offset = usize::try_from(offset)?;
        let limit = usize::try_from(limit)?;
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|t| filter.matches(t))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &QueryFilter) -> anyhow::Result<i64> {
        let n = self.rows.read().await.iter().filter(|t| filter.matches(t)).count();
        Ok(n as i64)
    }

    async fn sale_totals(&self, month: Month) -> anyhow::Result<SaleTotals> {
        let totals = self
            .month_rows(month)
            .await
            .iter()
            .fold(SaleTotals::default(), |mut acc, t| {
                if t.sold {
                    acc.sold_items += 1;
                    acc.total_sale_amount += t.price;
                } else {
                    acc.not_sold_items += 1;
                }
                acc
            });
        Ok(totals)
    }

    async fn count_in_price_range(
        &self,
        month: Month,
        min: f64,
        max: Option<f64>,
    ) -> anyhow::Result<i64> {
        let n = self
            .month_rows(month)
            .await
            .iter()
            .filter(|t| in_price_range(t.price, min, max))
            .count();
        Ok(n as i64)
    }

    async fn count_by_category(&self, month: Month) -> anyhow::Result<Vec<CategoryCount>> {
        let mut counts = std::collections::BTreeMap::<String, i64>::new();
        for t in self.month_rows(month).await {
            *counts.entry(t.category).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect())
    }
}
