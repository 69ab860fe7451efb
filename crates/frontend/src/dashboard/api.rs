//! Typed fetch functions for the five ERP endpoints.
//!
//! Each function parses the endpoint's envelope at the boundary and collapses
//! transport errors, HTTP errors and body-level failure flags into one
//! user-displayable message.

use contracts::catalog::{Customer, CustomersResponse, Product, ProductsResponse};
use contracts::dashboard::{DashboardSummary, SummaryResponse};
use contracts::sales::{MutationResponse, NewSaleRequest, SaleRecord, SalesResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::resource_url;

/// Fetch the aggregate dashboard summary.
pub async fn fetch_summary() -> Result<DashboardSummary, String> {
    let url = resource_url("dashboard_summary", &[]);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: SummaryResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    match data {
        SummaryResponse::Summary(summary) => Ok(*summary),
        SummaryResponse::Error { message } => Err(message),
    }
}

/// Query parameters for the sales endpoint: only non-empty bounds are sent.
fn sales_params<'a>(start_date: &'a str, end_date: &'a str) -> Vec<(&'static str, &'a str)> {
    let mut params = Vec::new();
    if !start_date.is_empty() {
        params.push(("startDate", start_date));
    }
    if !end_date.is_empty() {
        params.push(("endDate", end_date));
    }
    params
}

/// Fetch the sales collection, filtered by the non-empty date bounds.
pub async fn fetch_sales(start_date: &str, end_date: &str) -> Result<Vec<SaleRecord>, String> {
    let url = resource_url("sales", &sales_params(start_date, end_date));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: SalesResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if data.success {
        Ok(data.sales)
    } else {
        Err(data
            .message
            .unwrap_or_else(|| "Failed to fetch sales data.".to_string()))
    }
}

/// Fetch the product reference list.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let url = resource_url("products", &[]);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: ProductsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if data.success {
        Ok(data.products)
    } else {
        Err(data
            .message
            .unwrap_or_else(|| "Error fetching products.".to_string()))
    }
}

/// Fetch the customer reference list.
pub async fn fetch_customers() -> Result<Vec<Customer>, String> {
    let url = resource_url("customers", &[]);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: CustomersResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if data.success {
        Ok(data.customers)
    } else {
        Err(data
            .message
            .unwrap_or_else(|| "Error fetching customers.".to_string()))
    }
}

/// Submit a new sale. Returns the server's confirmation message.
///
/// The server reports failures both through the HTTP status and a body-level
/// `success` flag; the body message wins when present so the user sees the
/// backend's own wording (e.g. insufficient stock).
pub async fn submit_sale(request: &NewSaleRequest) -> Result<String, String> {
    let url = resource_url("sales", &[]);

    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .json(request)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let status = response.status();
    let transport_ok = response.ok();

    let data: MutationResponse = match response.json().await {
        Ok(data) => data,
        Err(_) if !transport_ok => return Err(format!("HTTP error: {}", status)),
        Err(e) => return Err(format!("Failed to parse response: {}", e)),
    };

    if transport_ok && data.success {
        Ok(data
            .message
            .unwrap_or_else(|| "Sale added successfully!".to_string()))
    } else {
        Err(data
            .message
            .unwrap_or_else(|| "Failed to add sale. Please check inputs.".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::sales_params;
    use crate::shared::api_utils::resource_query;

    #[test]
    fn both_bounds_present() {
        let params = sales_params("2026-08-01", "2026-08-30");
        assert_eq!(
            resource_query("sales", &params),
            "?resource=sales&startDate=2026-08-01&endDate=2026-08-30"
        );
    }

    #[test]
    fn empty_bounds_are_omitted() {
        assert_eq!(resource_query("sales", &sales_params("", "")), "?resource=sales");
        assert_eq!(
            resource_query("sales", &sales_params("2026-08-01", "")),
            "?resource=sales&startDate=2026-08-01"
        );
        assert_eq!(
            resource_query("sales", &sales_params("", "2026-08-30")),
            "?resource=sales&endDate=2026-08-30"
        );
    }
}
