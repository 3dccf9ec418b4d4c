//! Error types for cs-db

use thiserror::Error;

/// SQL execution errors
#[derive(Error, Debug)]
pub enum DbError {
    /// The request never produced a response (D001)
    #[error("[D001] Transport failure{}: {message}", timeout_suffix(.timed_out))]
    Transport { message: String, timed_out: bool },

    /// The endpoint answered with a non-success status (D002)
    #[error("[D002] SQL rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// A success response whose body is not a row set (D003)
    #[error("[D003] Could not decode response: {0}")]
    Decode(String),

    /// The backend could not be constructed (D004)
    #[error("[D004] Invalid executor configuration: {0}")]
    Config(String),
}

impl DbError {
    /// True when the request hit the per-call timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, DbError::Transport { timed_out: true, .. })
    }

    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<u16> {
        match self {
            DbError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DbError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return DbError::Decode(error_chain(&err));
        }
        DbError::Transport {
            timed_out: err.is_timeout(),
            message: error_chain(&err),
        }
    }
}

fn timeout_suffix(timed_out: &bool) -> &'static str {
    if *timed_out {
        " (timeout)"
    } else {
        ""
    }
}

/// Render an error and its sources on one line.
///
/// reqwest's top-level message ("error sending request") hides the cause,
/// which lives further down the chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
