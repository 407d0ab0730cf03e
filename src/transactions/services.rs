use tracing::debug;

use super::{
    dto::{ListQuery, TransactionPage},
    filter::QueryFilter,
};
use crate::store::TransactionStore;

/// One page of transactions matching `q`, plus the total match count.
pub async fn list_transactions(
    store: &dyn TransactionStore,
    q: &ListQuery,
) -> anyhow::Result<TransactionPage> {
    let filter = QueryFilter::new(&q.search, q.month);
    let offset = (q.page - 1).saturating_mul(q.per_page);

    let transactions = store.find(&filter, offset, q.per_page).await?;
    let total = store.count(&filter).await?;

    debug!(
        total,
        returned = transactions.len(),
        month = ?q.month,
        "listed transactions"
    );
    Ok(TransactionPage {
        total,
        page: q.page,
        per_page: q.per_page,
        transactions,
    })
}
