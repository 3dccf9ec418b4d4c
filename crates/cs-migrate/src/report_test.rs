use super::*;

fn rows(json: &str) -> RowSet {
    RowSet::from_json_text(json).unwrap()
}

fn fresh_verification_rows() -> RowSet {
    rows(
        r#"[
            {"table_name":"companies","total_records":6,"with_commercial_date":6,"with_insurance_date":6},
            {"table_name":"users","total_records":0,"with_commercial_date":0,"with_insurance_date":0}
        ]"#,
    )
}

fn report(steps: Vec<StepOutcome>) -> RunReport {
    RunReport {
        policy: FailurePolicy::BestEffort,
        steps,
    }
}

#[test]
fn test_summary_of_freshly_seeded_schema() {
    let summary = VerificationSummary::from_rows(&fresh_verification_rows()).unwrap();

    let companies = summary.table("companies").unwrap();
    assert_eq!(companies.total_records, 6);
    assert_eq!(companies.with_commercial_date, 6);
    assert_eq!(companies.with_insurance_date, 6);

    let users = summary.table("users").unwrap();
    assert_eq!(users.total_records, 0);
    assert_eq!(users.with_commercial_date, 0);
    assert_eq!(users.with_insurance_date, 0);
}

#[test]
fn test_summary_accepts_bigint_strings() {
    let summary = VerificationSummary::from_rows(&rows(
        r#"[{"table_name":"companies","total_records":"11","with_commercial_date":"11","with_insurance_date":"11"}]"#,
    ))
    .unwrap();
    assert_eq!(summary.table("companies").unwrap().total_records, 11);
}

#[test]
fn test_summary_missing_column() {
    let err = VerificationSummary::from_rows(&rows(
        r#"[{"table_name":"companies","total_records":6}]"#,
    ))
    .unwrap_err();
    match err {
        MigrateError::MissingColumn { row, column } => {
            assert_eq!(row, 0);
            assert_eq!(column, "with_commercial_date");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_success_requires_verification_rows() {
    let ok = report(vec![StepOutcome::success(
        StepName::Verification,
        fresh_verification_rows(),
        Duration::from_millis(12),
    )]);
    assert!(ok.is_success());
    assert_eq!(ok.summary().unwrap().tables.len(), 2);

    let empty = report(vec![StepOutcome::success(
        StepName::Verification,
        RowSet::default(),
        Duration::ZERO,
    )]);
    assert!(!empty.is_success());
    assert!(matches!(empty.summary(), Err(MigrateError::Unverified)));
}

#[test]
fn test_earlier_failures_do_not_affect_overall_result() {
    let err = DbError::Rejected {
        status: 409,
        body: "duplicate key value violates unique constraint".to_string(),
    };
    let run = report(vec![
        StepOutcome::success(StepName::AccountSchema, RowSet::default(), Duration::ZERO),
        StepOutcome::success(
            StepName::OrganizationSchema,
            RowSet::default(),
            Duration::ZERO,
        ),
        StepOutcome::failure(StepName::OrganizationSeed, &err, Duration::ZERO),
        StepOutcome::success(
            StepName::Verification,
            fresh_verification_rows(),
            Duration::ZERO,
        ),
    ]);

    assert!(run.is_success());
    assert_eq!(run.failed_steps().len(), 1);
    let seed = run.step(StepName::OrganizationSeed).unwrap();
    assert_eq!(seed.http_status, Some(409));
    assert!(!seed.timed_out);

    match run.ensure_all_succeeded() {
        Err(MigrateError::StepFailed { step, message }) => {
            assert_eq!(step, "organization_seed");
            assert!(message.contains("duplicate key"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_failed_verification_is_overall_failure() {
    let err = DbError::Transport {
        message: "operation timed out".to_string(),
        timed_out: true,
    };
    let run = report(vec![StepOutcome::failure(
        StepName::Verification,
        &err,
        Duration::from_secs(30),
    )]);
    assert!(!run.is_success());
    assert!(run.verification().is_none());
    assert!(run.step(StepName::Verification).unwrap().timed_out);
}

#[test]
fn test_report_json_shape() {
    let run = report(vec![
        StepOutcome::success(StepName::AccountSchema, RowSet::default(), Duration::ZERO),
        StepOutcome::skipped(StepName::Verification),
    ]);
    let json = serde_json::to_value(&run).unwrap();
    assert_eq!(json["policy"], "best_effort");
    assert_eq!(json["steps"][0]["step"], "account_schema");
    assert_eq!(json["steps"][0]["status"], "success");
    assert_eq!(json["steps"][1]["status"], "skipped");
    assert!(json["steps"][1].get("error").is_none());
}
