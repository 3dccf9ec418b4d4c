//! SQL literal utilities
//!
//! Helpers for building SQL text that is shipped verbatim to the remote
//! executor. There are no bind parameters on that path, so every literal
//! must be escaped here.

use chrono::NaiveDate;
use std::fmt::Display;

/// Escape a SQL string literal value by doubling single quotes.
///
/// This is for use inside single-quoted SQL string literals, not identifiers.
pub fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}

/// Render a single-quoted SQL string literal.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", escape_sql_string(value))
}

/// Render an optional string as a literal, or `NULL`.
pub fn text_or_null(value: Option<&str>) -> String {
    value.map(quote_literal).unwrap_or_else(|| "NULL".to_string())
}

/// Render an optional number as a bare literal, or `NULL`.
pub fn number_or_null<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "NULL".to_string())
}

/// Render an optional date as an ISO-8601 literal, or `NULL`.
pub fn date_or_null(value: Option<NaiveDate>) -> String {
    value
        .map(|d| format!("'{}'", d.format("%Y-%m-%d")))
        .unwrap_or_else(|| "NULL".to_string())
}

/// Short single-line preview of a SQL batch for log output.
///
/// Collapses runs of whitespace and keeps at most `max_chars` characters,
/// appending `...` when something was cut. Counts characters, not bytes,
/// so multi-byte comments never split mid-codepoint.
pub fn sql_preview(sql: &str, max_chars: usize) -> String {
    let collapsed = sql.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

#[cfg(test)]
#[path = "sql_utils_test.rs"]
mod tests;
