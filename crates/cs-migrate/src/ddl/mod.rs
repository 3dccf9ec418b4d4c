//! Embedded SQL for the schema and verification steps.
//!
//! Each batch is a `.sql` file embedded via `include_str!`. The seed batch
//! is rendered from typed rows instead (see [`crate::seed`]).

use cs_core::model::ORGANIZATIONS_TABLE;

/// Account table, access policies, row-level enforcement off
pub static ACCOUNT_SCHEMA: &str = include_str!("accounts.sql");

/// Organization table (create-if-absent), row-level enforcement off, indexes
pub static ORGANIZATION_SCHEMA: &str = include_str!("organizations.sql");

/// Per-table row counts and non-null expiry counts
pub static VERIFICATION: &str = include_str!("verify.sql");

/// Prefix that turns [`ORGANIZATION_SCHEMA`] into a drop-and-recreate
pub fn organization_reset() -> String {
    format!("DROP TABLE IF EXISTS {} CASCADE;\n", ORGANIZATIONS_TABLE)
}

/// Organization schema batch, optionally preceded by a destructive drop
pub fn organization_schema(destructive: bool) -> String {
    if destructive {
        format!("{}{}", organization_reset(), ORGANIZATION_SCHEMA)
    } else {
        ORGANIZATION_SCHEMA.to_string()
    }
}

#[cfg(test)]
#[path = "ddl_test.rs"]
mod tests;
