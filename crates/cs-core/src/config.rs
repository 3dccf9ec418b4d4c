//! Configuration types and parsing for complyseed.yml
//!
//! The file names *which* environment variables hold the credentials; the
//! secret values themselves are only ever read from the environment at
//! resolution time.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default config file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "complyseed.yml";

/// Environment variable overriding `remote.url` (a target's own URL still wins)
pub const URL_ENV: &str = "COMPLYSEED_URL";

/// Environment variable selecting a target when `--target` is absent
pub const TARGET_ENV: &str = "COMPLYSEED_TARGET";

const DEFAULT_RPC_PATH: &str = "/rest/v1/rpc/exec_sql";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SERVICE_KEY_ENV: &str = "COMPLYSEED_SERVICE_KEY";
const DEFAULT_API_KEY_ENV: &str = "COMPLYSEED_API_KEY";

/// Main configuration from complyseed.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional label for the deployment, used in log output
    #[serde(default)]
    pub name: Option<String>,

    /// Remote SQL endpoint settings
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Permit the organization schema step to drop and recreate its table
    #[serde(default)]
    pub allow_destructive_reset: bool,

    /// What the sequencer does after a failed step
    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Named target configurations (e.g., dev, staging, prod)
    #[serde(default)]
    pub targets: HashMap<String, TargetConfig>,
}

/// Remote SQL endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    /// Base URL of the database service (e.g. `https://project.example.co`)
    #[serde(default)]
    pub url: Option<String>,

    /// Path of the execute-SQL procedure, appended to `url`
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Environment variable holding the bearer (service-role) key
    #[serde(default = "default_service_key_env")]
    pub service_key_env: String,

    /// Environment variable holding the `apikey` header value.
    /// Falls back to the service key when the variable is unset.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: None,
            rpc_path: default_rpc_path(),
            timeout_secs: default_timeout_secs(),
            service_key_env: default_service_key_env(),
            api_key_env: default_api_key_env(),
        }
    }
}

/// Target-specific overrides. Unset fields inherit from the base config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    /// Remote endpoint overrides
    #[serde(default)]
    pub remote: Option<RemoteOverrides>,

    /// Destructive reset override
    #[serde(default)]
    pub allow_destructive_reset: Option<bool>,

    /// Failure policy override
    #[serde(default)]
    pub failure_policy: Option<FailurePolicy>,
}

/// Partial remote settings used by targets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteOverrides {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub rpc_path: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub service_key_env: Option<String>,
    #[serde(default)]
    pub api_key_env: Option<String>,
}

/// How the migration sequencer reacts to a failed step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Attempt every step regardless of earlier failures (default)
    #[default]
    BestEffort,
    /// Stop at the first failed step and skip the rest
    FailFast,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::BestEffort => write!(f, "best_effort"),
            FailurePolicy::FailFast => write!(f, "fail_fast"),
        }
    }
}

/// Secrets used to authenticate against the RPC endpoint.
///
/// `Debug` never prints the key material.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    service_key: String,
    api_key: String,
}

impl Credentials {
    /// Build credentials from explicit values
    pub fn new(service_key: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            service_key: service_key.into(),
            api_key: api_key.into(),
        }
    }

    /// Bearer token sent in the `Authorization` header
    pub fn service_key(&self) -> &str {
        &self.service_key
    }

    /// Value sent in the `apikey` header
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("service_key", &"<redacted>")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Fully resolved remote endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Base URL without trailing slash
    pub url: String,
    /// Procedure path, always starting with `/`
    pub rpc_path: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Endpoint {
    /// Full URL of the execute-SQL procedure
    pub fn rpc_url(&self) -> String {
        format!("{}{}", self.url, self.rpc_path)
    }
}

/// Configuration after target overrides and environment lookup
#[derive(Debug, Clone)]
pub struct Settings {
    /// Target the settings were resolved for, if any
    pub target: Option<String>,
    pub endpoint: Endpoint,
    pub credentials: Credentials,
    pub allow_destructive_reset: bool,
    pub failure_policy: FailurePolicy,
}

fn default_rpc_path() -> String {
    DEFAULT_RPC_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_service_key_env() -> String {
    DEFAULT_SERVICE_KEY_ENV.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn parse(content: &str) -> CoreResult<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load an explicit config file, or look for complyseed.yml/.yaml in `dir`.
    ///
    /// A missing default file is not an error: settings may come entirely
    /// from the environment.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> CoreResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_file_in(dir) {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                Self::load(&path)
            }
            None => {
                log::debug!("No config file in {}; using defaults", dir.display());
                Ok(Self::default())
            }
        }
    }

    fn default_file_in(dir: &Path) -> Option<PathBuf> {
        let yml_path = dir.join(DEFAULT_CONFIG_FILE);
        let yaml_path = dir.join("complyseed.yaml");

        if yml_path.exists() {
            Some(yml_path)
        } else if yaml_path.exists() {
            Some(yaml_path)
        } else {
            None
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        validate_remote(
            self.remote.url.as_deref(),
            &self.remote.rpc_path,
            self.remote.timeout_secs,
        )?;

        for (name, target) in &self.targets {
            if let Some(overrides) = &target.remote {
                validate_remote(
                    overrides.url.as_deref(),
                    overrides.rpc_path.as_deref().unwrap_or(DEFAULT_RPC_PATH),
                    overrides.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
                )
                .map_err(|e| match e {
                    CoreError::ConfigInvalid { message } => CoreError::ConfigInvalid {
                        message: format!("target '{}': {}", name, message),
                    },
                    other => other,
                })?;
            }
        }

        Ok(())
    }

    /// Get the list of available target names, sorted
    pub fn available_targets(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.targets.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Resolve target from CLI flag or COMPLYSEED_TARGET environment variable
    ///
    /// Priority: CLI flag > COMPLYSEED_TARGET env var > None
    pub fn resolve_target(cli_target: Option<&str>) -> Option<String> {
        cli_target
            .map(String::from)
            .or_else(|| std::env::var(TARGET_ENV).ok())
            .filter(|t| !t.is_empty())
    }

    /// Whether the destructive reset is enabled for `target`, without
    /// touching credentials or the endpoint
    pub fn destructive_reset_for(&self, target: Option<&str>) -> CoreResult<bool> {
        let Some(name) = target else {
            return Ok(self.allow_destructive_reset);
        };
        let target_config = self
            .targets
            .get(name)
            .ok_or_else(|| CoreError::UnknownTarget {
                name: name.to_string(),
                available: self.available_targets().join(", "),
            })?;
        Ok(target_config
            .allow_destructive_reset
            .unwrap_or(self.allow_destructive_reset))
    }

    /// Apply target overrides and read credentials from the process environment
    pub fn resolve(&self, target: Option<&str>) -> CoreResult<Settings> {
        self.resolve_with(target, |var| std::env::var(var).ok())
    }

    /// Apply target overrides, reading environment variables through `env`
    pub fn resolve_with<F>(&self, target: Option<&str>, env: F) -> CoreResult<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let target_config = match target {
            Some(name) => Some(self.targets.get(name).ok_or_else(|| {
                CoreError::UnknownTarget {
                    name: name.to_string(),
                    available: self.available_targets().join(", "),
                }
            })?),
            None => None,
        };

        let mut remote = self.remote.clone();
        let mut allow_destructive_reset = self.allow_destructive_reset;
        let mut failure_policy = self.failure_policy;

        if let Some(tc) = target_config {
            if let Some(overrides) = &tc.remote {
                remote.apply(overrides);
            }
            if let Some(allow) = tc.allow_destructive_reset {
                allow_destructive_reset = allow;
            }
            if let Some(policy) = tc.failure_policy {
                failure_policy = policy;
            }
        }

        let non_empty = |var: &str| env(var).filter(|v| !v.trim().is_empty());

        // A URL set on the selected target is never overridden by the environment
        let target_url = target_config
            .and_then(|tc| tc.remote.as_ref())
            .and_then(|r| r.url.clone());
        if let (Some(pinned), Some(from_env)) = (&target_url, non_empty(URL_ENV)) {
            if pinned.trim_end_matches('/') != from_env.trim_end_matches('/') {
                log::warn!(
                    "Ignoring {} for target '{}': the target sets its own URL",
                    URL_ENV,
                    target.unwrap_or_default()
                );
            }
        }

        let url = target_url
            .or_else(|| non_empty(URL_ENV))
            .or(remote.url.clone())
            .ok_or_else(|| CoreError::MissingRemoteUrl {
                env_var: URL_ENV.to_string(),
            })?;
        validate_remote(Some(&url), &remote.rpc_path, remote.timeout_secs)?;

        let service_key =
            non_empty(&remote.service_key_env).ok_or_else(|| CoreError::MissingCredential {
                var: remote.service_key_env.clone(),
            })?;
        let api_key = non_empty(&remote.api_key_env).unwrap_or_else(|| service_key.clone());

        Ok(Settings {
            target: target.map(String::from),
            endpoint: Endpoint {
                url: url.trim_end_matches('/').to_string(),
                rpc_path: remote.rpc_path,
                timeout: Duration::from_secs(remote.timeout_secs),
            },
            credentials: Credentials::new(service_key, api_key),
            allow_destructive_reset,
            failure_policy,
        })
    }
}

impl RemoteConfig {
    fn apply(&mut self, overrides: &RemoteOverrides) {
        if let Some(url) = &overrides.url {
            self.url = Some(url.clone());
        }
        if let Some(path) = &overrides.rpc_path {
            self.rpc_path = path.clone();
        }
        if let Some(secs) = overrides.timeout_secs {
            self.timeout_secs = secs;
        }
        if let Some(var) = &overrides.service_key_env {
            self.service_key_env = var.clone();
        }
        if let Some(var) = &overrides.api_key_env {
            self.api_key_env = var.clone();
        }
    }
}

fn validate_remote(url: Option<&str>, rpc_path: &str, timeout_secs: u64) -> CoreResult<()> {
    if let Some(url) = url {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(CoreError::ConfigInvalid {
                message: format!("remote.url must start with http:// or https://, got '{}'", url),
            });
        }
    }

    if !rpc_path.starts_with('/') {
        return Err(CoreError::ConfigInvalid {
            message: format!("remote.rpc_path must start with '/', got '{}'", rpc_path),
        });
    }

    if timeout_secs == 0 {
        return Err(CoreError::ConfigInvalid {
            message: "remote.timeout_secs must be greater than zero".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
