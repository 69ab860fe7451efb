//! Currency formatting for tables and totals.

/// Currency glyph used across the application.
pub const CURRENCY_GLYPH: &str = "₹";

/// Format an amount with exactly two decimal places.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format an amount for display, prefixed with the currency glyph.
pub fn format_currency(value: f64) -> String {
    format!("{}{}", CURRENCY_GLYPH, format_amount(value))
}
