use anyhow::Context;
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use time::Month;
use tracing::debug;

use super::{CategoryCount, NewTransaction, SaleTotals, Transaction, TransactionStore};
use crate::transactions::filter::QueryFilter;

// 7 binds per row, Postgres caps a statement at 65535.
const INSERT_CHUNK: usize = 1000;

const MONTH_CLAUSE: &str = "EXTRACT(MONTH FROM date_of_sale AT TIME ZONE 'UTC') = $1";

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

fn month_param(month: Month) -> i32 {
    u8::from(month) as i32
}

#[async_trait]
impl TransactionStore for PgStore {
    async fn replace_all(&self, records: Vec<NewTransaction>) -> anyhow::Result<u64> {
        let mut tx = self.db.begin().await.context("begin tx")?;

        sqlx::query("TRUNCATE transactions RESTART IDENTITY")
            .execute(&mut *tx)
            .await
            .context("truncate transactions")?;

        let mut inserted = 0u64;
        for chunk in records.chunks(INSERT_CHUNK) {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO transactions \
                 (title, description, price, category, image, sold, date_of_sale) ",
            );
            qb.push_values(chunk, |mut b, r| {
                b.push_bind(&r.title)
                    .push_bind(&r.description)
                    .push_bind(r.price)
                    .push_bind(&r.category)
                    .push_bind(&r.image)
                    .push_bind(r.sold)
                    .push_bind(r.date_of_sale);
            });
            let res = qb
                .build()
                .execute(&mut *tx)
                .await
                .context("insert transactions")?;
            inserted += res.rows_affected();
        }

        tx.commit().await.context("commit tx")?;
        debug!(inserted, "transactions replaced");
        Ok(inserted)
    }

    async fn find(
        &self,
        filter: &QueryFilter,
        offset: i64,
        limit: i64,
    ) -> anyhow::Result<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, title, description, price, category, image, sold, date_of_sale
            FROM transactions
            WHERE ($1::int IS NULL OR EXTRACT(MONTH FROM date_of_sale AT TIME ZONE 'UTC') = $1)
              AND (strpos(lower(title), $2) > 0
                   OR strpos(lower(description), $2) > 0
                   OR price = $3::float8)
            ORDER BY id
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(filter.month().map(month_param))
        .bind(filter.text())
        .bind(filter.price())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await
        .context("find transactions")?;
        Ok(rows)
    }

    async fn count(&self, filter: &QueryFilter) -> anyhow::Result<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM transactions
            WHERE ($1::int IS NULL OR EXTRACT(MONTH FROM date_of_sale AT TIME ZONE 'UTC') = $1)
              AND (strpos(lower(title), $2) > 0
                   OR strpos(lower(description), $2) > 0
                   OR price = $3::float8)
            "#,
        )
        .bind(filter.month().map(month_param))
        .bind(filter.text())
        .bind(filter.price())
        .fetch_one(&self.db)
        .await
        .context("count transactions")?;
        Ok(total)
    }

    async fn sale_totals(&self, month: Month) -> anyhow::Result<SaleTotals> {
        let sql = format!(
            r#"
            SELECT COALESCE(SUM(price) FILTER (WHERE sold), 0)::float8 AS total_sale_amount,
                   COUNT(*) FILTER (WHERE sold)                       AS sold_items,
                   COUNT(*) FILTER (WHERE NOT sold)                   AS not_sold_items
            FROM transactions
            WHERE {MONTH_CLAUSE}
            "#
        );
        let totals = sqlx::query_as::<_, SaleTotals>(&sql)
            .bind(month_param(month))
            .fetch_one(&self.db)
            .await
            .context("sale totals")?;
        Ok(totals)
    }

    async fn count_in_price_range(
        &self,
        month: Month,
        min: f64,
        max: Option<f64>,
    ) -> anyhow::Result<i64> {
        let sql = format!(
            r#"
            SELECT COUNT(*)
            FROM transactions
            WHERE {MONTH_CLAUSE}
              AND price >= $2
              AND ($3::float8 IS NULL OR price < $3)
            "#
        );
        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(month_param(month))
            .bind(min)
            .bind(max)
            .fetch_one(&self.db)
            .await
            .context("count price range")?;
        Ok(count)
    }

    async fn count_by_category(&self, month: Month) -> anyhow::Result<Vec<CategoryCount>> {
        let sql = format!(
            r#"
            SELECT category, COUNT(*) AS count
            FROM transactions
            WHERE {MONTH_CLAUSE}
            GROUP BY category
            ORDER BY category COLLATE "C"
            "#
        );
        let rows = sqlx::query_as::<_, CategoryCount>(&sql)
            .bind(month_param(month))
            .fetch_all(&self.db)
            .await
            .context("count by category")?;
        Ok(rows)
    }
}
