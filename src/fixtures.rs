//! Shared test data and doubles.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use time::{macros::datetime, Month};

use crate::{
    store::{CategoryCount, MemoryStore, NewTransaction, SaleTotals, Transaction, TransactionStore},
    transactions::filter::QueryFilter,
};

fn rec(
    title: &str,
    description: &str,
    price: f64,
    category: &str,
    sold: bool,
    date_of_sale: time::OffsetDateTime,
) -> NewTransaction {
    NewTransaction {
        title: title.into(),
        description: description.into(),
        price,
        category: category.into(),
        image: String::new(),
        sold,
        date_of_sale,
    }
}

/// Small feed spread over a few months and years. March contains a record
/// priced exactly 100, which no histogram bucket counts.
#[rustfmt::skip]
pub fn sample_records() -> Vec<NewTransaction> {
    vec![
        rec("Backpack", "Fits 15 inch laptops", 329.85, "men's clothing", false, datetime!(2021-11-27 14:59:54 UTC)),
        rec("Cotton Jacket", "Great outerwear", 55.99, "men's clothing", true, datetime!(2022-03-27 14:59:54 UTC)),
        rec("Slim Fit T-Shirt", "Lightweight 50 pack", 22.3, "men's clothing", true, datetime!(2021-03-12 09:00:00 UTC)),
        rec("Gold Bracelet", "Dragon station chain", 695.0, "jewelery", false, datetime!(2022-03-05 20:00:00 UTC)),
        rec("Petite Micropave", "Promise ring", 100.0, "jewelery", true, datetime!(2021-03-19 10:30:00 UTC)),
        rec("Hard Drive", "USB 3.0 portable", 64.0, "electronics", true, datetime!(2022-03-01 00:00:00 UTC)),
        rec("Monitor", "49 inch curved", 999.99, "electronics", true, datetime!(2021-03-30 23:59:59 UTC)),
        rec("Rain Jacket", "Windbreaker", 39.99, "women's clothing", false, datetime!(2021-07-10 12:00:00 UTC)),
        rec("SSD", "1TB internal", 109.0, "electronics", false, datetime!(2022-07-04 08:00:00 UTC)),
        rec("Snowboard Jacket", "Winter coat", 56.99, "women's clothing", true, datetime!(2021-12-24 18:00:00 UTC)),
        rec("Free Sample", "Promotional item", 0.0, "misc", true, datetime!(2022-05-02 12:00:00 UTC)),
        rec("Wristwatch", "Priced at 50", 250.0, "jewelery", false, datetime!(2022-05-15 12:00:00 UTC)),
        rec("Kettle", "Stainless steel", 50.0, "home", true, datetime!(2021-08-08 08:00:00 UTC)),
    ]
}

pub async fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    store
        .replace_all(sample_records())
        .await
        .expect("seed memory store");
    store
}

/// Store whose every call fails, counting how often it was reached.
#[derive(Default)]
pub struct FailingStore {
    calls: AtomicUsize,
}

impl FailingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> anyhow::Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        anyhow::bail!("store unavailable")
    }
}

#[async_trait]
impl TransactionStore for FailingStore {
    async fn replace_all(&self, _records: Vec<NewTransaction>) -> anyhow::Result<u64> {
        self.fail()
    }

    async fn find(
        &self,
        _filter: &QueryFilter,
        _offset: i64,
        _limit: i64,
    ) -> anyhow::Result<Vec<Transaction>> {
        self.fail()
    }

    async fn count(&self, _filter: &QueryFilter) -> anyhow::Result<i64> {
        self.fail()
    }

    async fn sale_totals(&self, _month: Month) -> anyhow::Result<SaleTotals> {
        self.fail()
    }

    async fn count_in_price_range(
        &self,
        _month: Month,
        _min: f64,
        _max: Option<f64>,
    ) -> anyhow::Result<i64> {
        self.fail()
    }

    async fn count_by_category(&self, _month: Month) -> anyhow::Result<Vec<CategoryCount>> {
        self.fail()
    }
}
