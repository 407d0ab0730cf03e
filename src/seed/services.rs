use anyhow::Context;
use tracing::info;

use super::source::SeedSource;
use crate::store::TransactionStore;

/// Replace the whole collection with the records of `source`. Returns the
/// number of inserted records.
///
/// Nothing is deleted when the feed cannot be fetched or contains a record
/// with a negative price.
pub async fn initialize(
    store: &dyn TransactionStore,
    source: &dyn SeedSource,
) -> anyhow::Result<u64> {
    let records = source.fetch().await.context("fetch seed data")?;

    let invalid = records
        .iter()
        .find(|r| r.price < 0.0 || !r.price.is_finite());
    if let Some(bad) = invalid {
        anyhow::bail!("seed record {:?} has invalid price {}", bad.title, bad.price);
    }

    let inserted = store
        .replace_all(records)
        .await
        .context("replace transactions")?;
    info!(inserted, "database initialized with seed data");
    Ok(inserted)
}
