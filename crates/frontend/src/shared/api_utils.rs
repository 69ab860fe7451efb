//! API utilities for talking to the ERP backend.
//!
//! Every endpoint is multiplexed through a single entry point and selected
//! with a `resource` query parameter, e.g. `api.php?resource=sales`.

/// Path of the single API entry point, relative to the site origin.
const API_ENTRY: &str = "/erp-backend/api.php";

/// Get the base URL for API requests.
///
/// Constructed from the current window location so the same build works on
/// localhost and behind a reverse proxy. Empty string outside a browser.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, hostname)
}

/// Build the query string selecting a resource, with optional extra
/// parameters appended in order.
///
/// Values are expected to be URL-safe already (resource names and ISO dates).
pub fn resource_query(resource: &str, params: &[(&str, &str)]) -> String {
    let mut query = format!("?resource={}", resource);
    for (key, value) in params {
        query.push('&');
        query.push_str(key);
        query.push('=');
        query.push_str(value);
    }
    query
}

/// Full URL for a resource request.
pub fn resource_url(resource: &str, params: &[(&str, &str)]) -> String {
    format!("{}{}{}", api_base(), API_ENTRY, resource_query(resource, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_resource_has_no_extra_params() {
        assert_eq!(resource_query("dashboard_summary", &[]), "?resource=dashboard_summary");
    }

    #[test]
    fn both_date_bounds_are_appended_in_order() {
        assert_eq!(
            resource_query(
                "sales",
                &[("startDate", "2026-08-01"), ("endDate", "2026-08-30")]
            ),
            "?resource=sales&startDate=2026-08-01&endDate=2026-08-30"
        );
    }

    #[test]
    fn single_bound_appends_only_that_bound() {
        assert_eq!(
            resource_query("sales", &[("startDate", "2026-08-01")]),
            "?resource=sales&startDate=2026-08-01"
        );
        assert_eq!(
            resource_query("sales", &[("endDate", "2026-08-30")]),
            "?resource=sales&endDate=2026-08-30"
        );
    }
}
