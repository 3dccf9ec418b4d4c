//! Remote SQL execution over an HTTP procedure call
//!
//! The remote service exposes a procedure taking one `sql` argument and
//! running it with service-role privilege. Each call is a single POST and,
//! on the remote side, a single transaction.

use crate::error::{DbError, DbResult};
use crate::rows::RowSet;
use crate::traits::Database;
use async_trait::async_trait;
use cs_core::sql_utils::sql_preview;
use cs_core::{Credentials, Endpoint, Settings};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;

/// Characters of SQL shown in log lines
const PREVIEW_CHARS: usize = 50;

/// Request body of the execute-SQL procedure
#[derive(Debug, Serialize)]
struct ExecSqlRequest<'a> {
    sql: &'a str,
}

/// HTTP RPC database backend
pub struct RpcBackend {
    client: reqwest::Client,
    rpc_url: reqwest::Url,
}

impl std::fmt::Debug for RpcBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcBackend")
            .field("rpc_url", &self.rpc_url.as_str())
            .finish_non_exhaustive()
    }
}

impl RpcBackend {
    /// Create a backend for `endpoint`, authenticating with `credentials`
    pub fn new(endpoint: &Endpoint, credentials: &Credentials) -> DbResult<Self> {
        let rpc_url = reqwest::Url::parse(&endpoint.rpc_url())
            .map_err(|e| DbError::Config(format!("invalid URL '{}': {}", endpoint.rpc_url(), e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            sensitive_header(&format!("Bearer {}", credentials.service_key()))?,
        );
        headers.insert("apikey", sensitive_header(credentials.api_key())?);

        let client = reqwest::Client::builder()
            .timeout(endpoint.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| DbError::Config(e.to_string()))?;

        Ok(Self { client, rpc_url })
    }

    /// Create a backend from resolved settings
    pub fn from_settings(settings: &Settings) -> DbResult<Self> {
        Self::new(&settings.endpoint, &settings.credentials)
    }

    /// URL every batch is posted to
    pub fn rpc_url(&self) -> &str {
        self.rpc_url.as_str()
    }

    async fn post(&self, sql: &str) -> DbResult<RowSet> {
        let response = self
            .client
            .post(self.rpc_url.clone())
            .json(&ExecSqlRequest { sql })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DbError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        RowSet::from_json_text(&body)
    }
}

fn sensitive_header(value: &str) -> DbResult<HeaderValue> {
    let mut header = HeaderValue::from_str(value)
        .map_err(|_| DbError::Config("credential contains invalid header characters".into()))?;
    header.set_sensitive(true);
    Ok(header)
}

#[async_trait]
impl Database for RpcBackend {
    async fn execute_sql(&self, sql: &str) -> DbResult<RowSet> {
        let preview = sql_preview(sql, PREVIEW_CHARS);
        log::debug!("POST {} ({} bytes of SQL)", self.rpc_url, sql.len());

        match self.post(sql).await {
            Ok(rows) => {
                log::info!("SQL executed successfully: {}", preview);
                Ok(rows)
            }
            Err(err) => {
                match &err {
                    DbError::Rejected { status, body } => {
                        log::error!("SQL failed: {}", preview);
                        log::error!("Status: {}", status);
                        log::error!("Response: {}", body);
                    }
                    other => log::error!("Error executing SQL ({}): {}", preview, other),
                }
                Err(err)
            }
        }
    }

    fn db_type(&self) -> &'static str {
        "rpc"
    }
}

#[cfg(test)]
#[path = "rpc_test.rs"]
mod tests;
