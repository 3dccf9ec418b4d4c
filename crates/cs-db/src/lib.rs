//! cs-db - SQL executor for complyseed
//!
//! This crate provides the `Database` trait, the `RowSet` returned by a SQL
//! batch, and `RpcBackend`, which ships batches to a remote execute-SQL
//! procedure over HTTP.

pub mod error;
pub mod rows;
pub mod rpc;
pub mod traits;

pub use error::{DbError, DbResult};
pub use rows::{column_i64, column_str, Row, RowSet};
pub use rpc::RpcBackend;
pub use traits::Database;
