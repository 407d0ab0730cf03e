use lazy_static::lazy_static;
use regex::Regex;
use time::Month;

use crate::store::Transaction;

/// Immutable description of which transactions a listing matches.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFilter {
    month: Option<Month>,
    text: String,
    price: Option<f64>,
}

impl QueryFilter {
    pub fn new(search: &str, month: Option<Month>) -> Self {
        Self {
            month,
            text: search.to_lowercase(),
            price: parse_price(search),
        }
    }

    pub fn month(&self) -> Option<Month> {
        self.month
    }

    /// Lower-cased search text; empty matches everything.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Exact price to match, when the search text starts with a number.
    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(month) = self.month {
            if tx.sale_month() != month {
                return false;
            }
        }
        tx.title.to_lowercase().contains(&self.text)
            || tx.description.to_lowercase().contains(&self.text)
            || self.price.is_some_and(|p| tx.price == p)
    }
}

/// Reads the leading decimal number of `search`, ignoring leading whitespace
/// and any trailing garbage ("12abc" is 12).
pub(crate) fn parse_price(search: &str) -> Option<f64> {
    lazy_static! {
        static ref NUMBER_PREFIX: Regex =
            Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").unwrap();
    }
    let m = NUMBER_PREFIX.find(search.trim_start())?;
    m.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}
