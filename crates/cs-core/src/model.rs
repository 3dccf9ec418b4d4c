//! Persisted entities of the compliance schema
//!
//! These mirror the columns created by the schema steps. The sequencer only
//! constructs `Organization` values (for seeding); `Account` exists so callers
//! can decode rows returned by the remote executor.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Fully qualified table holding organizations
pub const ORGANIZATIONS_TABLE: &str = "public.companies";

/// An organization and its regulatory document expirations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Primary key. `None` lets the store generate one.
    #[serde(default)]
    pub id: Option<Uuid>,

    pub name: String,

    #[serde(default)]
    pub tax_number: Option<i64>,

    #[serde(default)]
    pub unified_number: Option<i64>,

    #[serde(default)]
    pub labor_subscription_number: Option<String>,

    #[serde(default)]
    pub insurance_subscription_number: Option<String>,

    #[serde(default)]
    pub company_type: Option<String>,

    #[serde(default)]
    pub commercial_registration_expiry: Option<NaiveDate>,

    #[serde(default)]
    pub insurance_subscription_expiry: Option<NaiveDate>,

    #[serde(default)]
    pub ending_subscription_power_date: Option<NaiveDate>,

    #[serde(default)]
    pub ending_subscription_moqeem_date: Option<NaiveDate>,

    #[serde(default)]
    pub ending_subscription_insurance_date: Option<NaiveDate>,

    #[serde(default)]
    pub muqeem_expiry: Option<NaiveDate>,

    #[serde(default)]
    pub commercial_registration_status: Option<String>,

    #[serde(default)]
    pub insurance_subscription_status: Option<String>,

    #[serde(default)]
    pub government_documents_renewal: Option<String>,

    #[serde(default)]
    pub current_employees: i32,

    #[serde(default = "default_max_employees")]
    pub max_employees: i32,

    /// Ad-hoc fields without a dedicated column
    #[serde(default)]
    pub additional_fields: Map<String, Value>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_max_employees() -> i32 {
    Organization::DEFAULT_MAX_EMPLOYEES
}

impl Organization {
    /// Employee cap applied when none is specified
    pub const DEFAULT_MAX_EMPLOYEES: i32 = 4;

    /// A new organization with only a name set and every default applied
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            tax_number: None,
            unified_number: None,
            labor_subscription_number: None,
            insurance_subscription_number: None,
            company_type: None,
            commercial_registration_expiry: None,
            insurance_subscription_expiry: None,
            ending_subscription_power_date: None,
            ending_subscription_moqeem_date: None,
            ending_subscription_insurance_date: None,
            muqeem_expiry: None,
            commercial_registration_status: None,
            insurance_subscription_status: None,
            government_documents_renewal: None,
            current_employees: 0,
            max_employees: Self::DEFAULT_MAX_EMPLOYEES,
            additional_fields: Map::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Set a fixed primary key
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }
}

/// A user account tied to an external authentication subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Must equal the authentication subject id
    pub id: Uuid,

    pub email: String,

    pub full_name: String,

    #[serde(default = "default_role")]
    pub role: String,

    #[serde(default)]
    pub permissions: Map<String, Value>,

    #[serde(default = "default_active")]
    pub is_active: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

fn default_role() -> String {
    Account::DEFAULT_ROLE.to_string()
}

fn default_active() -> bool {
    true
}

impl Account {
    /// Role assigned when none is given
    pub const DEFAULT_ROLE: &'static str = "user";
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
