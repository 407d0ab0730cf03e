use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Month, OffsetDateTime, UtcOffset};

use crate::transactions::filter::QueryFilter;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Sale transaction as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    pub sold: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub date_of_sale: OffsetDateTime,
}

impl Transaction {
    /// Calendar month of the sale in UTC. The year is never looked at.
    pub fn sale_month(&self) -> Month {
        self.date_of_sale.to_offset(UtcOffset::UTC).month()
    }
}

/// Record as shipped by the seed feed, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image: String,
    pub sold: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub date_of_sale: OffsetDateTime,
}

impl NewTransaction {
    fn into_stored(self, id: i64) -> Transaction {
        Transaction {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
            image: self.image,
            sold: self.sold,
            date_of_sale: self.date_of_sale,
        }
    }
}

/// Sold/unsold counts and sold amount for one month.
#[derive(Debug, Clone, Copy, PartialEq, Default, FromRow)]
pub struct SaleTotals {
    pub total_sale_amount: f64,
    pub sold_items: i64,
    pub not_sold_items: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Query interface of the record store.
///
/// Every month argument is compared against the UTC month of `dateOfSale`,
/// ignoring the year. Listing order is ascending `id`, which is insertion
/// order after a seed.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Delete every record and insert `records` in order. Returns the number
    /// of inserted records. Ids restart at 1 on every call.
    async fn replace_all(&self, records: Vec<NewTransaction>) -> anyhow::Result<u64>;

    async fn find(
        &self,
        filter: &QueryFilter,
        offset: i64,
        limit: i64,
    ) -> anyhow::Result<Vec<Transaction>>;

    async fn count(&self, filter: &QueryFilter) -> anyhow::Result<i64>;

    async fn sale_totals(&self, month: Month) -> anyhow::Result<SaleTotals>;

    /// Count records of `month` with `min <= price < max`. `None` leaves the
    /// range open above.
    async fn count_in_price_range(
        &self,
        month: Month,
        min: f64,
        max: Option<f64>,
    ) -> anyhow::Result<i64>;

    /// Per-category counts for `month`, ordered by category.
    async fn count_by_category(&self, month: Month) -> anyhow::Result<Vec<CategoryCount>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn sale_month_is_taken_in_utc() {
        let tx = NewTransaction {
            title: "t".into(),
            description: "d".into(),
            price: 1.0,
            category: "c".into(),
            image: String::new(),
            sold: true,
            date_of_sale: datetime!(2022-03-01 02:00 +05:30),
        }
        .into_stored(1);
        assert_eq!(tx.sale_month(), Month::February);
    }

    #[test]
    fn feed_record_deserializes() {
        let raw = r#"{
            "id": 1,
            "title": "Fjallraven  - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 329.85,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "sold": false,
            "dateOfSale": "2021-11-27T20:29:54+05:30"
        }"#;
        let rec: NewTransaction = serde_json::from_str(raw).unwrap();
        assert_eq!(rec.price, 329.85);
        assert!(!rec.sold);
        assert_eq!(rec.date_of_sale.month(), Month::November);
    }

    #[test]
    fn transaction_serializes_camel_case() {
        let tx = Transaction {
            id: 7,
            title: "Mug".into(),
            description: "Blue".into(),
            price: 12.5,
            category: "home".into(),
            image: String::new(),
            sold: true,
            date_of_sale: datetime!(2021-09-27 14:59:54 UTC),
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["dateOfSale"], "2021-09-27T14:59:54Z");
        assert_eq!(json["id"], 7);
        assert!(json.get("date_of_sale").is_none());
    }
}
