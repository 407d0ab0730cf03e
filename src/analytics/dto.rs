use serde::{Deserialize, Serialize};

use crate::store::{CategoryCount, SaleTotals};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_sale_amount: f64,
    pub sold_items: i64,
    pub not_sold_items: i64,
}

impl From<SaleTotals> for Statistics {
    fn from(t: SaleTotals) -> Self {
        Self {
            total_sale_amount: t.total_sale_amount,
            sold_items: t.sold_items,
            not_sold_items: t.not_sold_items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarChartEntry {
    pub range: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieChartEntry {
    pub category: String,
    pub count: i64,
}

impl From<CategoryCount> for PieChartEntry {
    fn from(c: CategoryCount) -> Self {
        Self {
            category: c.category,
            count: c.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthOverview {
    pub statistics: Statistics,
    pub bar_chart_data: Vec<BarChartEntry>,
    pub pie_chart_data: Vec<PieChartEntry>,
}
