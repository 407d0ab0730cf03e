//! Terminal dashboard: a month selector, a search box and a page cursor
//! driving the transaction table, statistics and price histogram.

pub mod client;
pub mod command;
pub mod render;

use time::Month;
use tracing::warn;

use crate::{
    analytics::dto::{BarChartEntry, Statistics},
    store::Transaction,
    transactions::dto::{ListQuery, DEFAULT_PER_PAGE},
};

pub use client::{ApiClient, DashboardApi};

pub const DEFAULT_MONTH: Month = Month::March;

/// Last successfully fetched data.
#[derive(Debug, Default)]
pub struct DashboardView {
    pub transactions: Vec<Transaction>,
    pub total: Option<i64>,
    pub statistics: Option<Statistics>,
    pub bar_chart: Vec<BarChartEntry>,
}

pub struct Dashboard<A> {
    api: A,
    month: Month,
    search: String,
    page: i64,
    per_page: i64,
    view: DashboardView,
}

impl<A: DashboardApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self::with_month(api, DEFAULT_MONTH)
    }

    pub fn with_month(api: A, month: Month) -> Self {
        Self {
            api,
            month,
            search: String::new(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            view: DashboardView::default(),
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    pub async fn set_month(&mut self, month: Month) {
        if self.month != month {
            self.month = month;
            self.refresh().await;
        }
    }

    pub async fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if self.search != search {
            self.search = search;
            self.refresh().await;
        }
    }

    /// There is no upper bound; a page past the end shows an empty table.
    pub async fn next_page(&mut self) {
        self.page += 1;
        self.refresh().await;
    }

    /// Does nothing on the first page.
    pub async fn previous_page(&mut self) {
        if self.can_go_previous() {
            self.page -= 1;
            self.refresh().await;
        }
    }

    /// Re-fetch the table, statistics and histogram. Each call is independent:
    /// a failure is logged and keeps the previous data for that part.
    pub async fn refresh(&mut self) {
        let q = ListQuery {
            search: self.search.clone(),
            page: self.page,
            per_page: self.per_page,
            month: Some(self.month),
        };
        match self.api.transactions(&q).await {
            Ok(page) => {
                self.view.transactions = page.transactions;
                self.view.total = Some(page.total);
            }
            Err(e) => warn!(error = %format!("{e:#}"), "error fetching transactions"),
        }
        match self.api.statistics(self.month).await {
            Ok(stats) => self.view.statistics = Some(stats),
            Err(e) => warn!(error = %format!("{e:#}"), "error fetching statistics"),
        }
        match self.api.bar_chart(self.month).await {
            Ok(bars) => self.view.bar_chart = bars,
            Err(e) => warn!(error = %format!("{e:#}"), "error fetching bar chart data"),
        }
    }
}
