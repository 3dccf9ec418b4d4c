use super::*;

#[test]
fn test_reset_drops_the_organizations_table() {
    assert_eq!(
        organization_reset(),
        "DROP TABLE IF EXISTS public.companies CASCADE;\n"
    );
}

#[test]
fn test_embedded_schema_targets_the_organizations_table() {
    assert!(ORGANIZATION_SCHEMA.contains(&format!(
        "CREATE TABLE IF NOT EXISTS {} (",
        ORGANIZATIONS_TABLE
    )));
    assert!(VERIFICATION.contains(&format!("FROM {}", ORGANIZATIONS_TABLE)));
}

#[test]
fn test_destructive_schema_is_reset_then_create() {
    let sql = organization_schema(true);
    assert!(sql.starts_with(&organization_reset()));
    assert!(sql.ends_with(ORGANIZATION_SCHEMA));
    assert_eq!(organization_schema(false), ORGANIZATION_SCHEMA);
}
