use crate::shared::numeric::flexible_f64;
use serde::{Deserialize, Serialize};

/// Product reference data. Read-only for the client; stock and price are
/// maintained by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(with = "flexible_f64")]
    pub price: f64,
    pub stock_quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    pub success: bool,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomersResponse {
    pub success: bool,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_products_with_string_prices() {
        let body = r#"{
            "success": true,
            "products": [
                {"id": 1, "name": "Pen", "price": "15.00", "stock_quantity": 120},
                {"id": 2, "name": "Notebook", "price": 50.0, "stock_quantity": 35}
            ]
        }"#;
        let parsed: ProductsResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.products[0].price, 15.0);
        assert_eq!(parsed.products[1].stock_quantity, 35);
    }

    #[test]
    fn parses_customers_envelope() {
        let body = r#"{"success": true, "customers": [{"id": 3, "name": "Ravi"}]}"#;
        let parsed: CustomersResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.customers.len(), 1);
        assert_eq!(parsed.customers[0].name, "Ravi");
    }
}
