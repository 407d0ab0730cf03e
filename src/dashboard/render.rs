use std::fmt::Write;

use super::{Dashboard, DashboardApi};
use crate::store::Transaction;

const MAX_BAR_WIDTH: usize = 40;
const DESCRIPTION_WIDTH: usize = 40;

pub fn render<A: DashboardApi>(dash: &Dashboard<A>) -> String {
    let mut out = String::new();
    let view = dash.view();

    let _ = writeln!(out, "Transaction Dashboard");
    let search = if dash.search().is_empty() {
        "-"
    } else {
        dash.search()
    };
    let _ = writeln!(out, "Month: {}    Search: {search}\n", dash.month());

    out.push_str("== Transactions ==\n");
    out.push_str(&transaction_table(&view.transactions));
    let prev = if dash.can_go_previous() {
        "[prev]"
    } else {
        "(prev)"
    };
    let total = view
        .total
        .map(|t| format!(" of {t} matches"))
        .unwrap_or_default();
    let _ = writeln!(out, "{prev}  page {}{total}  [next]\n", dash.page());

    out.push_str("== Transaction Statistics ==\n");
    match &view.statistics {
        Some(s) => {
            let _ = writeln!(out, "Total Sale Amount:    ${:.2}", s.total_sale_amount);
            let _ = writeln!(out, "Total Sold Items:     {}", s.sold_items);
            let _ = writeln!(out, "Total Not Sold Items: {}", s.not_sold_items);
        }
        None => out.push_str("Loading statistics...\n"),
    }
    out.push('\n');

    out.push_str("== Transactions Bar Chart ==\n");
    let max = view.bar_chart.iter().map(|b| b.count).max().unwrap_or(0);
    let label_width = view.bar_chart.iter().map(|b| b.range.len()).max().unwrap_or(0);
    for bar in &view.bar_chart {
        let width = if max > 0 {
            (bar.count as usize * MAX_BAR_WIDTH).div_ceil(max as usize)
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{:>label_width$} | {} {}",
            bar.range,
            "#".repeat(width),
            bar.count
        );
    }
    out
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut cut: String = s.chars().take(width.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

fn transaction_table(rows: &[Transaction]) -> String {
    if rows.is_empty() {
        return "No transactions available\n".to_string();
    }

    let header = ["id", "Title", "Description", "Price", "Category", "Sold"];
    let cells: Vec<[String; 6]> = rows
        .iter()
        .map(|t| {
            [
                t.id.to_string(),
                truncate(&t.title, DESCRIPTION_WIDTH),
                truncate(&t.description, DESCRIPTION_WIDTH),
                format!("${:.2}", t.price),
                t.category.clone(),
                if t.sold { "Yes" } else { "No" }.to_string(),
            ]
        })
        .collect();

    let mut widths = header.map(|h| h.chars().count());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let line = |out: &mut String, row: &[&str]| {
        let padded: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect();
        let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
    };
    line(&mut out, &header);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for row in &cells {
        let row: Vec<&str> = row.iter().map(String::as_str).collect();
        line(&mut out, &row);
    }
    out
}
