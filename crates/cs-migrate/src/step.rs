//! Step definitions

use serde::Serialize;
use std::fmt;

/// Identity of a step in the fixed sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepName {
    AccountSchema,
    OrganizationSchema,
    OrganizationSeed,
    Verification,
}

impl StepName {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepName::AccountSchema => "account_schema",
            StepName::OrganizationSchema => "organization_schema",
            StepName::OrganizationSeed => "organization_seed",
            StepName::Verification => "verification",
        }
    }

    /// One-line description for progress output
    pub fn description(&self) -> &'static str {
        match self {
            StepName::AccountSchema => "Create users table and access policies",
            StepName::OrganizationSchema => "Create companies table and indexes",
            StepName::OrganizationSeed => "Insert sample companies",
            StepName::Verification => "Verify row counts",
        }
    }
}

impl fmt::Display for StepName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a step does to the remote schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// DDL and policy changes
    Schema,
    /// Data inserts
    Seed,
    /// Read-only queries
    Verify,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::Schema => write!(f, "schema"),
            StepKind::Seed => write!(f, "seed"),
            StepKind::Verify => write!(f, "verify"),
        }
    }
}

/// One SQL batch in the sequence
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub name: StepName,
    pub kind: StepKind,
    /// Whether the batch drops existing data
    pub destructive: bool,
    pub sql: String,
}

impl Step {
    pub fn new(name: StepName, kind: StepKind, sql: impl Into<String>) -> Self {
        Self {
            name,
            kind,
            destructive: false,
            sql: sql.into(),
        }
    }

    pub fn destructive(mut self, destructive: bool) -> Self {
        self.destructive = destructive;
        self
    }

    pub fn is_read_only(&self) -> bool {
        self.kind == StepKind::Verify
    }
}
