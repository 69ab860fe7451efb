use crate::shared::numeric::flexible_f64;
use serde::{Deserialize, Serialize};

/// Aggregate metrics snapshot for the dashboard summary panel.
///
/// Replaced wholesale on every fetch; the client never patches it partially.
/// Wire names are camelCase, as served by the ERP API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(with = "flexible_f64")]
    pub today_sales: f64,
    pub items_sold_today: i64,
    #[serde(with = "flexible_f64")]
    pub total_sales: f64,
    #[serde(default)]
    pub recent_orders: Vec<RecentOrder>,
    #[serde(default)]
    pub top_selling_products: Vec<TopProduct>,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentOrder {
    pub id: i64,
    pub date: String,
    #[serde(with = "flexible_f64")]
    pub amount: f64,
}

/// One row of the "top selling products" list, pre-ranked by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub rank: i64,
    pub name: String,
    pub units: i64,
    #[serde(with = "flexible_f64")]
    pub revenue: f64,
}

/// The summary endpoint returns either the full snapshot or an error
/// envelope carrying a `message` field. A `message` always signals failure,
/// even when the body also carries summary fields, so the error variant is
/// tried first (untagged variants ignore unknown fields).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SummaryResponse {
    Error { message: String },
    Summary(Box<DashboardSummary>),
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUMMARY_BODY: &str = r#"{
        "todaySales": "1250.00",
        "itemsSoldToday": 14,
        "totalSales": 98000.5,
        "recentOrders": [
            {"id": 101, "date": "2026-08-29", "amount": 499.99},
            {"id": 100, "date": "2026-08-29", "amount": "750.01"}
        ],
        "topSellingProducts": [
            {"rank": 1, "name": "Notebook", "units": 40, "revenue": "2000.00"}
        ],
        "lastUpdated": "2026-08-30 10:15:00"
    }"#;

    #[test]
    fn parses_full_summary() {
        let parsed: SummaryResponse = serde_json::from_str(SUMMARY_BODY).unwrap();
        let SummaryResponse::Summary(summary) = parsed else {
            panic!("expected summary variant");
        };
        assert_eq!(summary.today_sales, 1250.0);
        assert_eq!(summary.items_sold_today, 14);
        assert_eq!(summary.total_sales, 98000.5);
        assert_eq!(summary.recent_orders.len(), 2);
        assert_eq!(summary.recent_orders[1].amount, 750.01);
        assert_eq!(summary.top_selling_products[0].rank, 1);
        assert_eq!(summary.last_updated, "2026-08-30 10:15:00");
    }

    #[test]
    fn parses_error_envelope() {
        let parsed: SummaryResponse =
            serde_json::from_str(r#"{"message": "Database connection failed"}"#).unwrap();
        let SummaryResponse::Error { message } = parsed else {
            panic!("expected error variant");
        };
        assert_eq!(message, "Database connection failed");
    }

    #[test]
    fn message_field_wins_over_summary_fields() {
        let body = r#"{
            "todaySales": 0,
            "itemsSoldToday": 0,
            "totalSales": 0,
            "recentOrders": [],
            "topSellingProducts": [],
            "lastUpdated": "2026-08-30 10:15:00",
            "message": "Summary is stale"
        }"#;
        let parsed: SummaryResponse = serde_json::from_str(body).unwrap();
        let SummaryResponse::Error { message } = parsed else {
            panic!("body carrying a message field must parse as an error");
        };
        assert_eq!(message, "Summary is stale");
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let body = r#"{
            "todaySales": 0,
            "itemsSoldToday": 0,
            "totalSales": 0,
            "lastUpdated": "2026-08-30 10:15:00"
        }"#;
        let parsed: SummaryResponse = serde_json::from_str(body).unwrap();
        let SummaryResponse::Summary(summary) = parsed else {
            panic!("expected summary variant");
        };
        assert!(summary.recent_orders.is_empty());
        assert!(summary.top_selling_products.is_empty());
    }
}
