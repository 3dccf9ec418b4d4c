//! Error types for cs-core

use thiserror::Error;

/// Core error type for complyseed
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Configuration file not found
    #[error("[C001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// C002: Invalid configuration value
    #[error("[C002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// C003: Named target missing from the config file
    #[error("[C003] Target '{name}' not found. Available targets: {available}")]
    UnknownTarget { name: String, available: String },

    /// C004: A credential environment variable is unset or empty
    #[error("[C004] Missing credential: environment variable {var} is not set")]
    MissingCredential { var: String },

    /// C005: No remote endpoint URL in config or environment
    #[error("[C005] No remote URL configured. Set remote.url or {env_var}")]
    MissingRemoteUrl { env_var: String },

    /// C006: IO error with file path context
    #[error("[C006] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// C007: YAML parse error
    #[error("[C007] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
