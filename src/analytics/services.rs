use time::Month;
use tracing::debug;

use super::{
    buckets::PRICE_BUCKETS,
    dto::{BarChartEntry, MonthOverview, PieChartEntry, Statistics},
};
use crate::store::TransactionStore;

pub async fn statistics(store: &dyn TransactionStore, month: Month) -> anyhow::Result<Statistics> {
    let totals = store.sale_totals(month).await?;
    debug!(
        %month,
        sold = totals.sold_items,
        not_sold = totals.not_sold_items,
        "statistics"
    );
    Ok(totals.into())
}

/// Histogram over the fixed [`PRICE_BUCKETS`], always ten entries in bucket order.
pub async fn bar_chart(
    store: &dyn TransactionStore,
    month: Month,
) -> anyhow::Result<Vec<BarChartEntry>> {
    let mut out = Vec::with_capacity(PRICE_BUCKETS.len());
    for bucket in &PRICE_BUCKETS {
        let count = store
            .count_in_price_range(month, bucket.min, bucket.max)
            .await?;
        out.push(BarChartEntry {
            range: bucket.label.to_string(),
            count,
        });
    }
    Ok(out)
}

pub async fn pie_chart(
    store: &dyn TransactionStore,
    month: Month,
) -> anyhow::Result<Vec<PieChartEntry>> {
    let rows = store.count_by_category(month).await?;
    debug!(%month, categories = rows.len(), "pie chart");
    Ok(rows.into_iter().map(Into::into).collect())
}

/// Statistics, histogram and category split for one month. Fails as a whole
/// if any part fails.
pub async fn overview(
    store: &dyn TransactionStore,
    month: Month,
) -> anyhow::Result<MonthOverview> {
    let (statistics, bar_chart_data, pie_chart_data) = tokio::try_join!(
        statistics(store, month),
        bar_chart(store, month),
        pie_chart(store, month),
    )?;
    Ok(MonthOverview {
        statistics,
        bar_chart_data,
        pie_chart_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{sample_records, seeded_store, FailingStore};
    use crate::transactions::filter::QueryFilter;

    const ALL_MONTHS: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    async fn month_total(store: &dyn TransactionStore, month: Month) -> i64 {
        store.count(&QueryFilter::new("", Some(month))).await.unwrap()
    }

    #[tokio::test]
    async fn sold_plus_unsold_is_month_total() {
        let store = seeded_store().await;
        for month in ALL_MONTHS {
            let s = statistics(&store, month).await.unwrap();
            assert_eq!(s.sold_items + s.not_sold_items, month_total(&store, month).await);
        }
    }

    #[tokio::test]
    async fn sale_amount_only_counts_sold() {
        let store = seeded_store().await;
        let expected: f64 = sample_records()
            .iter()
            .filter(|r| r.sold && r.date_of_sale.month() == Month::March)
            .map(|r| r.price)
            .sum();
        let s = statistics(&store, Month::March).await.unwrap();
        assert!((s.total_sale_amount - expected).abs() < 1e-9);
    }

    #[tokio::test]
    async fn empty_month_has_zero_sale_amount() {
        let store = seeded_store().await;
        for month in ALL_MONTHS {
            let s = statistics(&store, month).await.unwrap();
            if s.sold_items == 0 {
                assert_eq!(s.total_sale_amount, 0.0, "{month}");
            }
        }
    }

    #[tokio::test]
    async fn histogram_has_ten_bars_and_skips_gaps() {
        let store = seeded_store().await;
        for month in ALL_MONTHS {
            let bars = bar_chart(&store, month).await.unwrap();
            assert_eq!(bars.len(), 10);
            assert_eq!(bars[0].range, "0-100");
            assert_eq!(bars[9].range, "901-above");
            let sum: i64 = bars.iter().map(|b| b.count).sum();
            assert!(sum <= month_total(&store, month).await);
        }

        // March holds a record priced exactly 100.
        let bars = bar_chart(&store, Month::March).await.unwrap();
        let sum: i64 = bars.iter().map(|b| b.count).sum();
        assert!(sum < month_total(&store, Month::March).await);
    }

    #[tokio::test]
    async fn pie_partitions_the_month() {
        let store = seeded_store().await;
        for month in ALL_MONTHS {
            let slices = pie_chart(&store, month).await.unwrap();
            let sum: i64 = slices.iter().map(|s| s.count).sum();
            assert_eq!(sum, month_total(&store, month).await);
        }
    }

    #[tokio::test]
    async fn overview_matches_individual_calls() {
        let store = seeded_store().await;
        let all = overview(&store, Month::March).await.unwrap();
        assert_eq!(all.statistics, statistics(&store, Month::March).await.unwrap());
        assert_eq!(all.bar_chart_data, bar_chart(&store, Month::March).await.unwrap());
        assert_eq!(all.pie_chart_data, pie_chart(&store, Month::March).await.unwrap());
    }

    #[tokio::test]
    async fn overview_fails_when_store_fails() {
        assert!(overview(&FailingStore::default(), Month::March).await.is_err());
    }
}
