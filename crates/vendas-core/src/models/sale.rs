//! Sales record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single sale ("venda") as exported from the dashboard's document store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    /// Document ID in the remote store
    pub id: String,
    /// Customer name
    pub customer: String,
    /// Free-form description of what was sold
    #[serde(default)]
    pub description: String,
    /// Amount in centavos
    pub amount_cents: i64,
    /// When the sale happened
    pub sold_at: DateTime<Utc>,
}

impl Sale {
    /// Create a sale with trimmed text fields
    pub fn new(
        id: impl Into<String>,
        customer: &str,
        description: &str,
        amount_cents: i64,
        sold_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            customer: customer.trim().to_string(),
            description: description.trim().to_string(),
            amount_cents,
            sold_at,
        }
    }
}

/// Aggregate figures for a list of sales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct SalesSummary {
    pub count: usize,
    pub total_cents: i64,
    /// `None` when there are no sales
    pub average_cents: Option<i64>,
}

/// Summarize a list of sales
pub fn summarize(sales: &[Sale]) -> SalesSummary {
    let total_cents = sales
        .iter()
        .fold(0_i64, |total, sale| total.saturating_add(sale.amount_cents));
    let count = sales.len();
    let average_cents = i64::try_from(count)
        .ok()
        .filter(|count| *count > 0)
        .map(|count| total_cents / count);

    SalesSummary {
        count,
        total_cents,
        average_cents,
    }
}

/// Order sales so the most recent comes first
pub fn sort_recent_first(sales: &mut [Sale]) {
    sales.sort_by(|a, b| b.sold_at.cmp(&a.sold_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn sale(id: &str, amount_cents: i64, day: u32) -> Sale {
        Sale::new(
            id,
            "Cliente",
            "Pedido",
            amount_cents,
            Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn new_trims_text_fields() {
        let sale = Sale::new("v1", "  Ana Souza ", " Bolo de cenoura\n", 4500, Utc::now());
        assert_eq!(sale.customer, "Ana Souza");
        assert_eq!(sale.description, "Bolo de cenoura");
    }

    #[test]
    fn summarize_empty_list_has_no_average() {
        assert_eq!(summarize(&[]), SalesSummary::default());
    }

    #[test]
    fn summarize_totals_and_averages() {
        let sales = vec![sale("a", 1000, 1), sale("b", 2001, 2), sale("c", 0, 3)];
        assert_eq!(
            summarize(&sales),
            SalesSummary {
                count: 3,
                total_cents: 3001,
                average_cents: Some(1000),
            }
        );
    }

    #[test]
    fn summarize_saturates_on_overflow() {
        let sales = vec![sale("a", i64::MAX, 1), sale("b", 10, 2)];
        assert_eq!(summarize(&sales).total_cents, i64::MAX);
    }

    #[test]
    fn sort_recent_first_orders_by_date_descending() {
        let mut sales = vec![sale("old", 1, 1), sale("new", 1, 20), sale("mid", 1, 10)];
        sort_recent_first(&mut sales);
        let ids: Vec<&str> = sales.iter().map(|sale| sale.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn sale_deserializes_from_export_json() {
        let raw = r#"{
            "id": "abc123",
            "customer": "Loja Centro",
            "amount_cents": 15990,
            "sold_at": "2026-03-05T14:30:00Z"
        }"#;
        let sale: Sale = serde_json::from_str(raw).unwrap();
        assert_eq!(sale.id, "abc123");
        assert_eq!(sale.description, "");
        assert_eq!(sale.amount_cents, 15990);
        assert_eq!(
            sale.sold_at,
            Utc.with_ymd_and_hms(2026, 3, 5, 14, 30, 0).unwrap()
        );
    }
}
