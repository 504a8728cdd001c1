mod common;
use common::rwp;
use predicates::str::contains;

#[test]
fn test_week_table_for_a_wednesday() {
    rwp()
        .args(["week", "--date", "2025-09-17"])
        .assert()
        .success()
        .stdout(contains("Week 14-20 September 2025"))
        .stdout(contains("2025-09-14"))
        .stdout(contains("2025-09-20"))
        .stdout(contains("Saturday"));
}

#[test]
fn test_week_json_starts_on_sunday() {
    let out = rwp()
        .args(["week", "--date", "2026-01-02", "--json"])
        .output()
        .expect("run week");
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(v["dates"][0], "2025-12-28");
    assert_eq!(v["dates"][6], "2026-01-03");
    // label follows the start of the window
    assert_eq!(v["year"], 2025);
    assert_eq!(v["month_name"], "December");
    assert_eq!(v["day_range"], "28-03");
}

#[test]
fn test_week_rejects_bad_date() {
    rwp()
        .args(["week", "--date", "17/09/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_catalog_lists_department_vocabulary() {
    rwp()
        .args(["catalog", "--department", "market-cleaning"])
        .assert()
        .success()
        .stdout(contains("Market Cleaning"))
        .stdout(contains("Sanitization"))
        .stdout(contains("Cleaning cloths"));
}

#[test]
fn test_catalog_unknown_department() {
    rwp()
        .args(["catalog", "--department", "Roads"])
        .assert()
        .failure()
        .stderr(contains("Unknown department"));
}

#[test]
fn test_week_at_the_calendar_limit_fails_cleanly() {
    rwp()
        .args(["week", "--date", "+262142-12-31"])
        .assert()
        .code(1)
        .stderr(contains("Date out of range"));
}
