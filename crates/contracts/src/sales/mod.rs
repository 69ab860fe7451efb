use crate::shared::numeric::flexible_f64;
use serde::{Deserialize, Serialize};

/// A single persisted sale line, as returned by `GET ?resource=sales`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: i64,
    pub sale_date: String,
    pub product_name: String,
    pub quantity: i64,
    #[serde(with = "flexible_f64")]
    pub amount: f64,
    #[serde(default)]
    pub customer_name: Option<String>,
}

/// Envelope for the sales collection endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesResponse {
    pub success: bool,
    #[serde(default)]
    pub sales: Vec<SaleRecord>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Request body for `POST ?resource=sales`.
///
/// Only product ids and quantities are sent; pricing stays server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSaleRequest {
    pub customer_id: Option<i64>,
    pub items: Vec<NewSaleItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSaleItem {
    pub product_id: i64,
    pub quantity: i64,
}

/// Envelope returned by write operations.
#[derive(Debug, Clone, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sales_envelope() {
        let body = r#"{
            "success": true,
            "sales": [
                {
                    "id": 7,
                    "sale_date": "2026-08-28",
                    "product_name": "Pen",
                    "quantity": 3,
                    "amount": "45.00",
                    "customer_name": null
                },
                {
                    "id": 8,
                    "sale_date": "2026-08-29",
                    "product_name": "Notebook",
                    "quantity": 1,
                    "amount": 50,
                    "customer_name": "Asha"
                }
            ]
        }"#;
        let parsed: SalesResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.sales.len(), 2);
        assert_eq!(parsed.sales[0].amount, 45.0);
        assert_eq!(parsed.sales[0].customer_name, None);
        assert_eq!(parsed.sales[1].customer_name.as_deref(), Some("Asha"));
        assert_eq!(parsed.message, None);
    }

    #[test]
    fn parses_failure_without_sales_field() {
        let parsed: SalesResponse =
            serde_json::from_str(r#"{"success": false, "message": "Invalid date range"}"#).unwrap();
        assert!(!parsed.success);
        assert!(parsed.sales.is_empty());
        assert_eq!(parsed.message.as_deref(), Some("Invalid date range"));
    }

    #[test]
    fn new_sale_request_serializes_null_customer() {
        let request = NewSaleRequest {
            customer_id: None,
            items: vec![NewSaleItem {
                product_id: 4,
                quantity: 2,
            }],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"customer_id":null,"items":[{"product_id":4,"quantity":2}]}"#
        );
    }
}
