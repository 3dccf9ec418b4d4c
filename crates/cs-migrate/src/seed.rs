//! Organization seed rows and their INSERT rendering
//!
//! The six rows span every urgency band relative to 2025-11-05. Their names,
//! numbers, dates and relative ordering are fixed; tests and downstream
//! dashboards rely on them.

use chrono::NaiveDate;
use cs_core::model::ORGANIZATIONS_TABLE;
use cs_core::sql_utils::{date_or_null, number_or_null, text_or_null};
use cs_core::{Organization, UrgencyBand};
use uuid::{uuid, Uuid};

/// Identifier of the row that is also edited elsewhere in the system.
/// Re-seeding collides on this primary key instead of duplicating it.
pub const FIXED_ORGANIZATION_ID: Uuid = uuid!("3edac455-f819-4420-815a-4db8518e33f3");

const INSERT_COLUMNS: &[&str] = &[
    "id",
    "name",
    "tax_number",
    "unified_number",
    "labor_subscription_number",
    "company_type",
    "commercial_registration_expiry",
    "insurance_subscription_expiry",
    "ending_subscription_power_date",
    "ending_subscription_moqeem_date",
    "max_employees",
    "created_at",
    "updated_at",
];

/// A seed organization together with the band it is meant to exercise
#[derive(Debug, Clone)]
pub struct SeedOrganization {
    pub organization: Organization,
    /// Commercial-registration band on [`REFERENCE_DATE`]
    pub intended_band: UrgencyBand,
}

/// Date the seed bands are defined against
pub const REFERENCE_DATE: NaiveDate = ymd(2025, 11, 5);

/// Literal seed row. Power and moqeem dates repeat the commercial and
/// insurance dates.
struct SeedRow {
    id: Option<Uuid>,
    name: &'static str,
    tax_number: i64,
    unified_number: i64,
    labor: &'static str,
    company_type: &'static str,
    commercial: NaiveDate,
    insurance: NaiveDate,
    band: UrgencyBand,
}

/// Dates are evaluated in const context, so a bad literal fails the build.
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

const SEED_ROWS: [SeedRow; 6] = [
    SeedRow {
        id: None,
        name: "شركة سارة للمقاولات",
        tax_number: 1234567890,
        unified_number: 9876543210,
        labor: "L001",
        company_type: "مقاولات",
        commercial: ymd(2025, 12, 31),
        insurance: ymd(2025, 12, 31),
        band: UrgencyBand::Valid,
    },
    SeedRow {
        id: None,
        name: "شركة النصر للتشغيل",
        tax_number: 2345678901,
        unified_number: 8765432109,
        labor: "L002",
        company_type: "تشغيل وصيانة",
        commercial: ymd(2025, 11, 20),
        insurance: ymd(2025, 11, 25),
        band: UrgencyBand::Medium,
    },
    SeedRow {
        id: None,
        name: "شركة الحداثة المحدودة",
        tax_number: 3456789012,
        unified_number: 7654321098,
        labor: "L003",
        company_type: "تجارة عامة",
        commercial: ymd(2025, 11, 10),
        insurance: ymd(2025, 11, 12),
        band: UrgencyBand::Critical,
    },
    SeedRow {
        id: None,
        name: "شركة المستقبل",
        tax_number: 4567890123,
        unified_number: 6543210987,
        labor: "L004",
        company_type: "خدمات عامة",
        commercial: ymd(2025, 10, 15),
        insurance: ymd(2025, 10, 20),
        band: UrgencyBand::Expired,
    },
    SeedRow {
        id: None,
        name: "شركة النهضة الحديثة",
        tax_number: 5678901234,
        unified_number: 5432109876,
        labor: "L005",
        company_type: "صيانة",
        commercial: ymd(2025, 11, 28),
        insurance: ymd(2025, 11, 30),
        band: UrgencyBand::Medium,
    },
    SeedRow {
        id: Some(FIXED_ORGANIZATION_ID),
        name: "شركة سواعدنا للتشغيل والصيانة",
        tax_number: 6789012345,
        unified_number: 4321098765,
        labor: "L006",
        company_type: "تشغيل وصيانة",
        commercial: ymd(2025, 11, 15),
        insurance: ymd(2025, 11, 18),
        band: UrgencyBand::Medium,
    },
];

impl SeedRow {
    fn to_seed(&self) -> SeedOrganization {
        let mut organization = Organization::new(self.name);
        organization.id = self.id;
        organization.tax_number = Some(self.tax_number);
        organization.unified_number = Some(self.unified_number);
        organization.labor_subscription_number = Some(self.labor.to_string());
        organization.company_type = Some(self.company_type.to_string());
        organization.commercial_registration_expiry = Some(self.commercial);
        organization.insurance_subscription_expiry = Some(self.insurance);
        organization.ending_subscription_power_date = Some(self.commercial);
        organization.ending_subscription_moqeem_date = Some(self.insurance);
        SeedOrganization {
            organization,
            intended_band: self.band,
        }
    }
}

/// The six fixed seed organizations, in insertion order
pub fn seed_organizations() -> Vec<SeedOrganization> {
    SEED_ROWS.iter().map(SeedRow::to_seed).collect()
}

/// Render one `INSERT ... VALUES` statement for `organizations`.
///
/// Rows without an id get `gen_random_uuid()`; timestamps are `NOW()`.
/// No conflict handling: a reused id is left for the primary key to reject.
pub fn render_insert(organizations: &[Organization]) -> String {
    let values: Vec<String> = organizations
        .iter()
        .map(|org| {
            let id = org
                .id
                .map(|id| format!("'{}'", id))
                .unwrap_or_else(|| "gen_random_uuid()".to_string());
            let fields = [
                id,
                text_or_null(Some(&org.name)),
                number_or_null(org.tax_number),
                number_or_null(org.unified_number),
                text_or_null(org.labor_subscription_number.as_deref()),
                text_or_null(org.company_type.as_deref()),
                date_or_null(org.commercial_registration_expiry),
                date_or_null(org.insurance_subscription_expiry),
                date_or_null(org.ending_subscription_power_date),
                date_or_null(org.ending_subscription_moqeem_date),
                org.max_employees.to_string(),
                "NOW()".to_string(),
                "NOW()".to_string(),
            ];
            format!("  ({})", fields.join(", "))
        })
        .collect();

    format!(
        "INSERT INTO {} (\n  {}\n) VALUES\n{};\n",
        ORGANIZATIONS_TABLE,
        INSERT_COLUMNS.join(", "),
        values.join(",\n")
    )
}

/// The seed batch for the standard plan
pub fn seed_sql() -> String {
    let organizations: Vec<Organization> = seed_organizations()
        .into_iter()
        .map(|s| s.organization)
        .collect();
    render_insert(&organizations)
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
