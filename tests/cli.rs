use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn nestegg(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nestegg").unwrap();
    cmd.env("NESTEGG_DATA_DIR", data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn initialized() -> TempDir {
    let data_dir = TempDir::new().unwrap();
    nestegg(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));
    data_dir
}

#[test]
fn dashboard_from_sources() {
    let data_dir = initialized();

    nestegg(&data_dir)
        .args(["income", "add", "Job", "3000", "--category", "salary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added income source: Job"));
    nestegg(&data_dir)
        .args(["income", "add", "Bonus", "1200", "--frequency", "yearly"])
        .assert()
        .success();

    nestegg(&data_dir)
        .args(["report", "dashboard", "--mode", "sources", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$3100.00"))
        .stdout(predicate::str::contains("$620.00"))
        .stdout(predicate::str::contains("In 10 years"));
}

#[test]
fn dashboard_csv_export() {
    let data_dir = initialized();
    let csv_path = data_dir.path().join("dashboard.csv");

    nestegg(&data_dir)
        .args(["income", "add", "Job", "3000"])
        .assert()
        .success();
    nestegg(&data_dir)
        .args(["report", "dashboard", "--mode", "sources", "--csv"])
        .arg(&csv_path)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    assert!(contents.starts_with("period,section,metric,amount,percentage"));
    assert!(contents.contains("projection"));
}

#[test]
fn invalid_input_is_rejected() {
    let data_dir = initialized();

    nestegg(&data_dir)
        .args(["income", "add", "Job", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
    nestegg(&data_dir)
        .args(["income", "add", "Job", "100", "--frequency", "hourly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown frequency"));
    nestegg(&data_dir)
        .args(["income", "add", "Job", "100"])
        .assert()
        .success();
    nestegg(&data_dir)
        .args(["income", "add", "JOB", "200"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    nestegg(&data_dir)
        .args(["income", "add", "Big", "92233720368547759"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
    nestegg(&data_dir)
        .args(["config", "set-percentage", "150"])
        .assert()
        .failure();
    nestegg(&data_dir)
        .args(["savings", "record", "100", "--period", "2025-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period"));
}

#[test]
fn savings_record_replaces_month() {
    let data_dir = initialized();

    for amount in ["500", "750"] {
        nestegg(&data_dir)
            .args(["savings", "record", amount, "--period", "2025-01"])
            .assert()
            .success();
    }

    nestegg(&data_dir)
        .args(["savings", "show", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$750.00"))
        .stdout(predicate::str::contains("$500.00").not());
}

#[test]
fn goals_report_and_audit() {
    let data_dir = initialized();

    nestegg(&data_dir)
        .args(["income", "add", "Job", "3100"])
        .assert()
        .success();
    nestegg(&data_dir)
        .args(["goal", "add", "Emergency Fund", "5000"])
        .assert()
        .success();

    nestegg(&data_dir)
        .args(["report", "goals", "--mode", "sources", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emergency Fund"))
        .stdout(predicate::str::contains("9 months"));

    nestegg(&data_dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Goal"));
}

#[test]
fn export_json_to_stdout() {
    let data_dir = initialized();

    nestegg(&data_dir)
        .args(["goal", "add", "Bike", "900"])
        .assert()
        .success();

    nestegg(&data_dir)
        .args(["export", "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\""))
        .stdout(predicate::str::contains("Bike"));

    nestegg(&data_dir)
        .args(["export", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# NestEgg data export"));
}
