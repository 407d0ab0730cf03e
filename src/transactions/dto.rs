use serde::{Deserialize, Serialize};
use time::Month;

use crate::{
    error::AppError,
    store::Transaction,
    validation::{optional_month, positive_int},
};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Raw query string of `GET /transactions`. Kept as strings so bad values
/// turn into a JSON validation error instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub search: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub month: Option<String>,
}

/// Validated listing request.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub search: String,
    pub page: i64,
    pub per_page: i64,
    pub month: Option<Month>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            month: None,
        }
    }
}

impl ListParams {
    pub fn validate(self) -> Result<ListQuery, AppError> {
        Ok(ListQuery {
            search: self.search.unwrap_or_default(),
            page: positive_int(self.page.as_deref(), "page", DEFAULT_PAGE)?,
            per_page: positive_int(self.per_page.as_deref(), "perPage", DEFAULT_PER_PAGE)?,
            month: optional_month(self.month.as_deref())?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub transactions: Vec<Transaction>,
}
