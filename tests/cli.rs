use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "kakeibo";

fn kakeibo(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("KAKEIBO_DATA_DIR", dir.path());
    cmd.env_remove("KAKEIBO_LOG");
    cmd
}

fn ledger(dir: &TempDir) -> serde_json::Value {
    let path = dir.path().join("data").join("budget_data_v1.json");
    let contents = std::fs::read_to_string(path).expect("ledger written");
    serde_json::from_str(&contents).expect("ledger is JSON")
}

fn first_entry_id(dir: &TempDir) -> String {
    ledger(dir)["entries"][0]["id"]
        .as_str()
        .expect("entry id")
        .to_string()
}

#[test]
fn init_creates_empty_ledger() {
    let dir = TempDir::new().unwrap();

    kakeibo(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete!"));

    let data = ledger(&dir);
    assert_eq!(data["entries"], serde_json::json!([]));
    assert_eq!(data["recurringExpenses"], serde_json::json!([]));
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn entry_add_persists_document_shape() {
    let dir = TempDir::new().unwrap();

    kakeibo(&dir)
        .args([
            "entry", "add", "300,000", "--income", "-n", "Salary", "-d", "2024-05-10",
        ])
        .assert()
        .success()
        .stdout(contains("Created entry:").and(contains("¥300,000")));

    let entry = &ledger(&dir)["entries"][0];
    assert_eq!(entry["type"], "income");
    assert_eq!(entry["category"], "main");
    assert_eq!(entry["name"], "Salary");
    assert_eq!(entry["amount"], 300_000);
    assert_eq!(entry["date"], "2024-05-10");
}

#[test]
fn entry_add_rejects_non_positive_amount() {
    let dir = TempDir::new().unwrap();

    kakeibo(&dir)
        .args(["entry", "add", "0", "-d", "2024-05-10"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));
}

#[test]
fn entry_add_rejects_amount_over_cap() {
    let dir = TempDir::new().unwrap();

    kakeibo(&dir)
        .args(["entry", "add", "9223372036854775807", "-d", "2024-05-10"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));

    assert!(!dir.path().join("data").join("budget_data_v1.json").exists());
}

#[test]
fn entry_add_month_dates_first_day() {
    let dir = TempDir::new().unwrap();

    kakeibo(&dir)
        .args(["entry", "add", "500", "--expense", "--month", "2025-02"])
        .assert()
        .success();

    assert_eq!(ledger(&dir)["entries"][0]["date"], "2025-02-01");

    kakeibo(&dir)
        .args(["entry", "add", "500", "--month", "2025-02", "-d", "2025-02-10"])
        .assert()
        .failure();
}

#[test]
fn entry_add_rejects_bad_date() {
    let dir = TempDir::new().unwrap();

    kakeibo(&dir)
        .args(["entry", "add", "500", "-d", "2024-13-40"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn entry_add_rejects_category_of_other_type() {
    let dir = TempDir::new().unwrap();

    kakeibo(&dir)
        .args(["entry", "add", "500", "--income", "-c", "fixed"])
        .assert()
        .failure()
        .stderr(contains("Unknown income category"));
}

#[test]
fn entry_list_includes_recurring_expenses() {
    let dir = TempDir::new().unwrap();

    kakeibo(&dir)
        .args(["entry", "add", "50000", "--expense", "-d", "2024-05-15"])
        .assert()
        .success();
    kakeibo(&dir)
        .args(["recurring", "add", "Rent", "80000", "--start", "2024-04"])
        .assert()
        .success()
        .stdout(contains("2024年4月 〜 継続中"));

    kakeibo(&dir)
        .args(["entry", "list", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(
            contains("FY2024 5月")
                .and(contains("Rent"))
                .and(contains("(fixed)"))
                .and(contains("Expense: ¥130,000")),
        );
}

#[test]
fn entry_edit_keeps_identity() {
    let dir = TempDir::new().unwrap();

    kakeibo(&dir)
        .args(["entry", "add", "1000", "-d", "2024-06-01"])
        .assert()
        .success();
    let id = first_entry_id(&dir);

    kakeibo(&dir)
        .args(["entry", "edit", &id, "--amount", "1200", "-c", "adjust"])
        .assert()
        .success()
        .stdout(contains("¥1,200"));

    let data = ledger(&dir);
    assert_eq!(data["entries"].as_array().unwrap().len(), 1);
    assert_eq!(data["entries"][0]["id"], id.as_str());
    assert_eq!(data["entries"][0]["amount"], 1_200);
    assert_eq!(data["entries"][0]["category"], "adjust");
}

#[test]
fn entry_edit_type_flag_keeps_category() {
    let dir = TempDir::new().unwrap();

    kakeibo(&dir)
        .args(["entry", "add", "800", "--income", "-c", "adjust", "-d", "2024-06-01"])
        .assert()
        .success();
    let id = first_entry_id(&dir);

    kakeibo(&dir)
        .args(["entry", "edit", &id, "--income", "--amount", "900"])
        .assert()
        .success();

    let entry = &ledger(&dir)["entries"][0];
    assert_eq!(entry["type"], "income");
    assert_eq!(entry["category"], "adjust");
    assert_eq!(entry["amount"], 900);

    kakeibo(&dir)
        .args(["entry", "edit", &id, "--expense"])
        .assert()
        .success();

    let entry = &ledger(&dir)["entries"][0];
    assert_eq!(entry["type"], "expense");
    assert_eq!(entry["category"], "credit");
}

#[test]
fn entry_delete_requires_force() {
    let dir = TempDir::new().unwrap();

    kakeibo(&dir)
        .args(["entry", "add", "1000", "-d", "2024-06-01"])
        .assert()
        .success();
    let id = first_entry_id(&dir);

    kakeibo(&dir)
        .args(["entry", "delete", &id])
        .assert()
        .success()
        .stdout(contains("Use --force to confirm deletion"));
    assert_eq!(ledger(&dir)["entries"].as_array().unwrap().len(), 1);

    kakeibo(&dir)
        .args(["entry", "delete", &id, "--force"])
        .assert()
        .success()
        .stdout(contains("Deleted entry"));
    assert!(ledger(&dir)["entries"].as_array().unwrap().is_empty());
}

#[test]
fn entry_delete_unknown_id_fails() {
    let dir = TempDir::new().unwrap();

    kakeibo(&dir)
        .args(["entry", "delete", "ent-00000000", "--force"])
        .assert()
        .failure()
        .stderr(contains("Entry not found"));
}

#[test]
fn recurring_rejects_end_before_start() {
    let dir = TempDir::new().unwrap();

    kakeibo(&dir)
        .args([
            "recurring", "add", "Gym", "8000", "--start", "2024-06", "--end", "2024-05",
        ])
        .assert()
        .failure()
        .stderr(contains("Validation error"));
}

#[test]
fn recurring_list_and_delete() {
    let dir = TempDir::new().unwrap();

    kakeibo(&dir)
        .args([
            "recurring", "add", "Gym", "8000", "--start", "2024-04", "--end", "2024-09",
        ])
        .assert()
        .success();

    kakeibo(&dir)
        .args(["recurring", "list"])
        .assert()
        .success()
        .stdout(contains("Gym").and(contains("2024年4月 〜 2024年9月")));

    kakeibo(&dir)
        .args(["recurring", "delete", "Gym", "--force"])
        .assert()
        .success()
        .stdout(contains("Deleted recurring expense"));

    kakeibo(&dir)
        .args(["recurring", "list"])
        .assert()
        .success()
        .stdout(contains("No recurring expenses registered."));
}

#[test]
fn report_year_shows_twelve_months() {
    let dir = TempDir::new().unwrap();

    kakeibo(&dir)
        .args(["entry", "add", "300000", "--income", "-d", "2024-05-10"])
        .assert()
        .success();
    kakeibo(&dir)
        .args(["entry", "add", "50000", "--expense", "-d", "2024-05-15"])
        .assert()
        .success();

    let assert = kakeibo(&dir)
        .args(["report", "year", "--fiscal-year", "2024"])
        .assert()
        .success()
        .stdout(
            contains("2024年度")
                .and(contains("+¥250,000"))
                .and(contains("Total")),
        );

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for label in ["4月", "9月", "12月", "1月", "3月"] {
        assert!(stdout.contains(label), "missing {}", label);
    }
}

#[test]
fn report_month_splits_income_and_expense() {
    let dir = TempDir::new().unwrap();

    kakeibo(&dir)
        .args(["entry", "add", "20000", "--income", "-c", "side", "-d", "2025-02-03"])
        .assert()
        .success();

    kakeibo(&dir)
        .args(["report", "month", "--month", "2025-02"])
        .assert()
        .success()
        .stdout(
            contains("FY2024 2月 (2025-02)")
                .and(contains("収入 (1)"))
                .and(contains("支出 (0)"))
                .and(contains("+¥20,000")),
        );
}

#[test]
fn report_month_navigates_within_fiscal_year() {
    let dir = TempDir::new().unwrap();

    kakeibo(&dir)
        .args(["report", "month", "--month", "2024-03", "--next"])
        .assert()
        .success()
        .stdout(contains("FY2023 4月 (2023-04)"));

    kakeibo(&dir)
        .args(["entry", "list", "--month", "2023-04", "--prev"])
        .assert()
        .success()
        .stdout(contains("FY2023 3月 (2024-03)"));

    kakeibo(&dir)
        .args(["report", "month", "--next", "--prev"])
        .assert()
        .failure();
}

#[test]
fn corrupt_ledger_falls_back_to_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data").join("budget_data_v1.json"), "{not json").unwrap();

    kakeibo(&dir)
        .args(["report", "month", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(contains("No entries for this month."));

    kakeibo(&dir)
        .args(["entry", "add", "500", "-d", "2024-05-10"])
        .assert()
        .success();

    let backup = dir.path().join("data").join("budget_data_v1.json.corrupt");
    assert_eq!(std::fs::read_to_string(backup).unwrap(), "{not json");
    assert_eq!(ledger(&dir)["entries"].as_array().unwrap().len(), 1);
}

#[test]
fn categories_lists_fixed_sets() {
    let dir = TempDir::new().unwrap();

    kakeibo(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(contains("main").and(contains("credit")).and(contains("fixed")));
}
