//! Validation helpers for tool parameters
//!
//! Catalog and scheduler invariants live in the library types; this module
//! only turns raw tool arguments into typed values.

use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

/// Parse a date parameter in YYYY-MM-DD format
///
/// # Arguments
/// * `field` - Parameter name used in the error message
/// * `date_str` - Date string to parse
pub fn parse_date(field: &str, date_str: &str) -> McpResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
            format!(
                "Invalid {} '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
                field, date_str
            ),
            true,
        )
    })
}
