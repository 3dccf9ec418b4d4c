use super::*;

#[test]
fn test_six_seed_rows() {
    assert_eq!(seed_organizations().len(), 6);
}

#[test]
fn test_seed_rows_match_intended_bands() {
    let today = REFERENCE_DATE;
    for seed in seed_organizations() {
        let expiry = seed.organization.commercial_registration_expiry.unwrap();
        assert_eq!(
            UrgencyBand::for_dates(expiry, today),
            seed.intended_band,
            "{}",
            seed.organization.name
        );
    }
}

#[test]
fn test_seed_covers_every_band() {
    let bands: std::collections::HashSet<UrgencyBand> = seed_organizations()
        .iter()
        .map(|s| s.intended_band)
        .collect();
    assert_eq!(bands.len(), 4);
}

#[test]
fn test_only_last_row_has_fixed_id() {
    let seeds = seed_organizations();
    let with_id: Vec<_> = seeds
        .iter()
        .filter_map(|s| s.organization.id)
        .collect();
    assert_eq!(with_id.len(), 1);
    assert_eq!(with_id[0], FIXED_ORGANIZATION_ID);
    assert!(seeds.last().unwrap().organization.id.is_some());
}

#[test]
fn test_every_seed_row_has_both_counted_dates() {
    for seed in seed_organizations() {
        assert!(seed.organization.commercial_registration_expiry.is_some());
        assert!(seed.organization.insurance_subscription_expiry.is_some());
        assert_eq!(seed.organization.max_employees, 4);
    }
}

#[test]
fn test_render_insert_single_statement() {
    let sql = seed_sql();
    assert!(sql.starts_with("INSERT INTO public.companies ("));
    assert_eq!(sql.matches("INSERT INTO").count(), 1);
    assert_eq!(sql.matches("gen_random_uuid()").count(), 5);
    assert!(sql.contains("'3edac455-f819-4420-815a-4db8518e33f3'"));
    assert!(!sql.contains("ON CONFLICT"));
    assert!(sql.trim_end().ends_with(';'));
}

#[test]
fn test_render_insert_critical_row() {
    let sql = seed_sql();
    assert!(sql.contains(
        "(gen_random_uuid(), 'شركة الحداثة المحدودة', 3456789012, 7654321098, 'L003', 'تجارة عامة', '2025-11-10', '2025-11-12', '2025-11-10', '2025-11-12', 4, NOW(), NOW())"
    ));
}

#[test]
fn test_render_insert_escapes_and_nulls() {
    let mut org = Organization::new("O'Neil Holdings");
    org.max_employees = 9;
    let sql = render_insert(&[org]);
    assert!(sql.contains(
        "(gen_random_uuid(), 'O''Neil Holdings', NULL, NULL, NULL, NULL, NULL, NULL, NULL, NULL, 9, NOW(), NOW())"
    ));
}

#[test]
fn test_seed_date_literals() {
    let dates: Vec<(String, String)> = seed_organizations()
        .iter()
        .map(|s| {
            (
                s.organization
                    .commercial_registration_expiry
                    .unwrap()
                    .to_string(),
                s.organization
                    .insurance_subscription_expiry
                    .unwrap()
                    .to_string(),
            )
        })
        .collect();
    let expected = [
        ("2025-12-31", "2025-12-31"),
        ("2025-11-20", "2025-11-25"),
        ("2025-11-10", "2025-11-12"),
        ("2025-10-15", "2025-10-20"),
        ("2025-11-28", "2025-11-30"),
        ("2025-11-15", "2025-11-18"),
    ];
    for (actual, (commercial, insurance)) in dates.iter().zip(expected) {
        assert_eq!(actual.0, commercial);
        assert_eq!(actual.1, insurance);
    }
    assert_eq!(dates.len(), expected.len());
    assert_eq!(REFERENCE_DATE.to_string(), "2025-11-05");
}

#[test]
fn test_power_and_moqeem_dates_mirror_expiries() {
    for seed in seed_organizations() {
        let org = &seed.organization;
        assert_eq!(
            org.ending_subscription_power_date,
            org.commercial_registration_expiry
        );
        assert_eq!(
            org.ending_subscription_moqeem_date,
            org.insurance_subscription_expiry
        );
    }
}
