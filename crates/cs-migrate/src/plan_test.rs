use super::*;

fn names(plan: &MigrationPlan) -> Vec<StepName> {
    plan.steps().iter().map(|s| s.name).collect()
}

#[test]
fn test_standard_order() {
    let plan = MigrationPlan::standard(PlanOptions::default());
    assert_eq!(
        names(&plan),
        vec![
            StepName::AccountSchema,
            StepName::OrganizationSchema,
            StepName::OrganizationSeed,
            StepName::Verification,
        ]
    );
}

#[test]
fn test_default_plan_is_not_destructive() {
    let plan = MigrationPlan::standard(PlanOptions::default());
    assert!(!plan.is_destructive());
    let org = &plan.steps()[1];
    assert!(!org.sql.contains("DROP TABLE"));
    assert!(org
        .sql
        .contains("CREATE TABLE IF NOT EXISTS public.companies"));
}

#[test]
fn test_destructive_reset_drops_then_creates() {
    let plan = MigrationPlan::standard(PlanOptions {
        allow_destructive_reset: true,
    });
    assert!(plan.is_destructive());
    let org = &plan.steps()[1];
    assert!(org.destructive);
    assert!(org
        .sql
        .starts_with("DROP TABLE IF EXISTS public.companies CASCADE;"));
    let drop_at = org.sql.find("DROP TABLE").unwrap();
    let create_at = org.sql.find("CREATE TABLE").unwrap();
    assert!(drop_at < create_at);
}

#[test]
fn test_reset_sql_is_identical_across_runs() {
    let options = PlanOptions {
        allow_destructive_reset: true,
    };
    let first = MigrationPlan::standard(options);
    let second = MigrationPlan::standard(options);
    assert_eq!(first.steps()[1].sql, second.steps()[1].sql);
}

#[test]
fn test_organization_step_disables_rls_and_indexes() {
    let plan = MigrationPlan::standard(PlanOptions::default());
    let sql = &plan.steps()[1].sql;
    assert!(sql.contains("ALTER TABLE public.companies DISABLE ROW LEVEL SECURITY"));
    assert!(sql.contains("CREATE INDEX IF NOT EXISTS idx_companies_name"));
    assert!(sql.contains("CREATE INDEX IF NOT EXISTS idx_companies_expiry"));
    assert!(sql.contains("max_employees INTEGER DEFAULT 4"));
}

#[test]
fn test_account_step_policies_then_disable() {
    let plan = MigrationPlan::standard(PlanOptions::default());
    let sql = &plan.steps()[0].sql;
    assert!(sql.contains("CREATE TABLE IF NOT EXISTS public.users"));
    assert!(!sql.contains("DROP TABLE"));
    for policy in [
        "Allow users to read all",
        "Allow users to insert own",
        "Allow users to update own",
        "Allow service role full access",
    ] {
        assert!(
            sql.contains(&format!("CREATE POLICY \"{}\"", policy)),
            "{}",
            policy
        );
    }
    let last_policy = sql.rfind("CREATE POLICY").unwrap();
    let disable = sql.find("DISABLE ROW LEVEL SECURITY").unwrap();
    assert!(last_policy < disable);
}

#[test]
fn test_verification_is_read_only() {
    let plan = MigrationPlan::verification_only();
    assert_eq!(plan.len(), 1);
    let step = &plan.steps()[0];
    assert!(step.is_read_only());
    assert!(step.sql.trim_start().starts_with("SELECT"));
    assert!(step.sql.contains("UNION ALL"));
}
