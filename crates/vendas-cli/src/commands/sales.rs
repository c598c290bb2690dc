use std::path::Path;

use serde::Serialize;
use vendas_core::currency::format_amount;
use vendas_core::models::{sort_recent_first, summarize};
use vendas_core::{DisplayPreferences, KeyValueStore, PreferenceStore, Sale, SalesSummary};

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct SaleListItem {
    pub id: String,
    pub customer: String,
    pub description: String,
    /// Omitted when privacy blur is on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_cents: Option<i64>,
    pub amount: String,
    pub sold_at: String,
}

#[derive(Debug, Serialize)]
struct SalesOutput {
    sales: Vec<SaleListItem>,
    summary: SummaryItem,
}

#[derive(Debug, Serialize)]
struct SummaryItem {
    count: usize,
    total: String,
    average: Option<String>,
}

pub fn run_sales<S: KeyValueStore>(
    file: &Path,
    limit: usize,
    as_json: bool,
    store: &PreferenceStore<S>,
) -> Result<(), CliError> {
    let privacy_blur = store.load::<DisplayPreferences>().privacy_blur;
    let mut sales = load_sales_file(file)?;
    sort_recent_first(&mut sales);
    let summary = summarize(&sales);
    sales.truncate(limit);

    if as_json {
        let output = SalesOutput {
            sales: sales
                .iter()
                .map(|sale| sale_to_list_item(sale, privacy_blur))
                .collect(),
            summary: SummaryItem {
                count: summary.count,
                total: format_amount(summary.total_cents, privacy_blur),
                average: summary
                    .average_cents
                    .map(|cents| format_amount(cents, privacy_blur)),
            },
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for line in format_sale_lines(&sales, privacy_blur) {
            println!("{line}");
        }
        println!("{}", format_summary_line(&summary, privacy_blur));
    }

    Ok(())
}

pub fn load_sales_file(path: &Path) -> Result<Vec<Sale>, CliError> {
    let sales_file_error = |message: String| CliError::SalesFile {
        path: path.display().to_string(),
        message,
    };

    let raw = std::fs::read_to_string(path).map_err(|error| sales_file_error(error.to_string()))?;
    serde_json::from_str(&raw).map_err(|error| sales_file_error(error.to_string()))
}

pub fn sale_to_list_item(sale: &Sale, privacy_blur: bool) -> SaleListItem {
    SaleListItem {
        id: sale.id.clone(),
        customer: sale.customer.clone(),
        description: sale.description.clone(),
        amount_cents: (!privacy_blur).then_some(sale.amount_cents),
        amount: format_amount(sale.amount_cents, privacy_blur),
        sold_at: sale.sold_at.to_rfc3339(),
    }
}

pub fn format_sale_lines(sales: &[Sale], privacy_blur: bool) -> Vec<String> {
    sales
        .iter()
        .map(|sale| {
            let mut line = format!(
                "{}  {:>16}  {}",
                sale.sold_at.format("%Y-%m-%d %H:%M"),
                format_amount(sale.amount_cents, privacy_blur),
                sale.customer
            );
            if !sale.description.is_empty() {
                line.push_str(" - ");
                line.push_str(&sale.description);
            }
            line
        })
        .collect()
}

pub fn format_summary_line(summary: &SalesSummary, privacy_blur: bool) -> String {
    let average = summary.average_cents.map_or_else(
        || "-".to_string(),
        |cents| format_amount(cents, privacy_blur),
    );
    format!(
        "{} sales, total {}, average {}",
        summary.count,
        format_amount(summary.total_cents, privacy_blur),
        average
    )
}
