use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn docket(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("docket").unwrap();
    cmd.env("DOCKET_HOME", home);
    cmd
}

#[test]
fn test_create_and_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    docket(temp_dir.path())
        .arg("new")
        .arg("Launch checklist")
        .arg("--number")
        .arg("CS-1042")
        .assert()
        .success()
        .stdout(predicates::str::contains("Created case 1: CS-1042"));

    // A separate invocation reads the same store back
    docket(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("CS-1042 Launch checklist"))
        .stdout(predicates::str::contains("New"));
}

#[test]
fn test_naked_invocation_lists() {
    let temp_dir = tempfile::tempdir().unwrap();

    docket(temp_dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No cases found."));
}

#[test]
fn test_new_cases_stack_on_top() {
    let temp_dir = tempfile::tempdir().unwrap();

    docket(temp_dir.path())
        .arg("new")
        .arg("Apples")
        .assert()
        .success();
    docket(temp_dir.path())
        .arg("new")
        .arg("Bananas")
        .assert()
        .success()
        .stdout(predicates::str::contains("Created case 1: Bananas"));

    let output = docket(temp_dir.path()).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let bananas = stdout.find("Bananas").expect("Bananas should be listed");
    let apples = stdout.find("Apples").expect("Apples should be listed");
    assert!(bananas < apples, "the newest case sits on top: {}", stdout);
}

#[test]
fn test_open_and_view() {
    let temp_dir = tempfile::tempdir().unwrap();

    docket(temp_dir.path())
        .arg("new")
        .arg("Checkout")
        .arg("-n")
        .arg("CS-1")
        .assert()
        .success();
    docket(temp_dir.path())
        .arg("new")
        .arg("Landing")
        .arg("-n")
        .arg("CS-2")
        .assert()
        .success();

    // CS-2 was created last, so CS-1 now sits at index 2
    docket(temp_dir.path())
        .arg("open")
        .arg("2")
        .assert()
        .success()
        .stdout(predicates::str::contains("Opened case CS-1 (Active)"));

    // view without a selector shows the open case
    docket(temp_dir.path())
        .arg("view")
        .assert()
        .success()
        .stdout(predicates::str::contains("CS-1 Checkout"))
        .stdout(predicates::str::contains("status: New"))
        .stdout(predicates::str::contains("partition: Active"));
}

#[test]
fn test_status_shorthand() {
    let temp_dir = tempfile::tempdir().unwrap();

    docket(temp_dir.path())
        .arg("new")
        .arg("Checkout")
        .arg("-n")
        .arg("CS-1")
        .assert()
        .success();

    docket(temp_dir.path())
        .arg("status")
        .arg("work in progress")
        .assert()
        .success()
        .stdout(predicates::str::contains("Updated case CS-1: status"));

    docket(temp_dir.path())
        .arg("view")
        .assert()
        .success()
        .stdout(predicates::str::contains("status: 3. Work in Progress"));
}

#[test]
fn test_set_rejects_a_bad_date() {
    let temp_dir = tempfile::tempdir().unwrap();

    docket(temp_dir.path())
        .arg("new")
        .arg("Checkout")
        .assert()
        .success();

    docket(temp_dir.path())
        .arg("set")
        .arg("launch-date")
        .arg("soon")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Error:"));
}

#[test]
fn test_archive_prompt_can_be_declined() {
    let temp_dir = tempfile::tempdir().unwrap();

    docket(temp_dir.path())
        .arg("new")
        .arg("Checkout")
        .arg("-n")
        .arg("CS-1")
        .assert()
        .success();

    docket(temp_dir.path())
        .arg("archive")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Archive case CS-1?"))
        .stdout(predicates::str::contains("Archive cancelled"));

    // still on the active row
    docket(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("CS-1 Checkout"));
}

#[test]
fn test_archive_and_delete_lifecycle() {
    let temp_dir = tempfile::tempdir().unwrap();

    docket(temp_dir.path())
        .arg("new")
        .arg("Checkout")
        .arg("-n")
        .arg("CS-1")
        .assert()
        .success();

    // deleting a case that was never archived is refused
    docket(temp_dir.path())
        .arg("delete")
        .arg("1")
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Error: Case is not archived"));

    docket(temp_dir.path())
        .arg("archive")
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicates::str::contains("Archived case CS-1"));

    // gone from the default view, present under --archived
    docket(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No cases found."));
    docket(temp_dir.path())
        .arg("list")
        .arg("--archived")
        .assert()
        .success()
        .stdout(predicates::str::contains("a1. CS-1 Checkout"));

    docket(temp_dir.path())
        .arg("delete")
        .arg("a1")
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Deleted case CS-1"));

    docket(temp_dir.path())
        .arg("list")
        .arg("--all")
        .assert()
        .success()
        .stdout(predicates::str::contains("No cases found."));
}

#[test]
fn test_pending_tasks_across_cases() {
    let temp_dir = tempfile::tempdir().unwrap();

    docket(temp_dir.path())
        .arg("new")
        .arg("Checkout")
        .arg("-n")
        .arg("CS-1")
        .assert()
        .success();
    docket(temp_dir.path())
        .arg("task")
        .arg("add")
        .arg("Call the vendor")
        .assert()
        .success();
    docket(temp_dir.path())
        .arg("task")
        .arg("add")
        .arg("Ship samples")
        .assert()
        .success();

    docket(temp_dir.path())
        .arg("new")
        .arg("Landing")
        .arg("-n")
        .arg("CS-2")
        .assert()
        .success();
    docket(temp_dir.path())
        .arg("task")
        .arg("add")
        .arg("Review copy")
        .assert()
        .success();

    // checking one off takes it out of the pending view
    docket(temp_dir.path())
        .arg("task")
        .arg("done")
        .arg("1")
        .assert()
        .success()
        .stdout(predicates::str::contains("Checked off task 1"));

    docket(temp_dir.path())
        .arg("tasks")
        .assert()
        .success()
        .stdout(predicates::str::contains("Call the vendor"))
        .stdout(predicates::str::contains("Ship samples"))
        .stdout(predicates::str::contains("Review copy").not());
}

#[test]
fn test_search_titles_and_checklist() {
    let temp_dir = tempfile::tempdir().unwrap();

    docket(temp_dir.path())
        .arg("new")
        .arg("Alpha launch")
        .arg("-n")
        .arg("CS-1")
        .assert()
        .success();
    docket(temp_dir.path())
        .arg("task")
        .arg("add")
        .arg("Email the vendor")
        .assert()
        .success();
    docket(temp_dir.path())
        .arg("new")
        .arg("Beta launch")
        .arg("-n")
        .arg("CS-2")
        .assert()
        .success();

    // title hit
    docket(temp_dir.path())
        .arg("search")
        .arg("alpha")
        .assert()
        .success()
        .stdout(predicates::str::contains("Alpha launch"))
        .stdout(predicates::str::contains("Beta launch").not());

    // checklist hit surfaces the owning case
    docket(temp_dir.path())
        .arg("search")
        .arg("vendor")
        .assert()
        .success()
        .stdout(predicates::str::contains("CS-1 Alpha launch"));

    docket(temp_dir.path())
        .arg("search")
        .arg("zeppelin")
        .assert()
        .success()
        .stdout(predicates::str::contains("No cases match 'zeppelin'"));
}

#[test]
fn test_export_import_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home_a = temp_dir.path().join("a");
    let home_b = temp_dir.path().join("b");
    std::fs::create_dir_all(&home_a).unwrap();
    std::fs::create_dir_all(&home_b).unwrap();
    let snapshot = temp_dir.path().join("snapshot.json");

    docket(&home_a)
        .arg("new")
        .arg("Checkout")
        .arg("-n")
        .arg("CS-1")
        .assert()
        .success();
    docket(&home_a)
        .arg("new")
        .arg("Landing")
        .arg("-n")
        .arg("CS-2")
        .assert()
        .success();
    docket(&home_a)
        .arg("export")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicates::str::contains("Exported 2 cases"));

    docket(&home_b)
        .arg("import")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicates::str::contains("Imported 2 cases"));
    docket(&home_b)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("CS-1 Checkout"))
        .stdout(predicates::str::contains("CS-2 Landing"));
}

#[test]
fn test_reorder_moves_within_the_row() {
    let temp_dir = tempfile::tempdir().unwrap();

    for title in ["Apples", "Bananas", "Cherries"] {
        docket(temp_dir.path())
            .arg("new")
            .arg(title)
            .assert()
            .success();
    }

    // Row reads Cherries, Bananas, Apples; drag the bottom case to the top
    docket(temp_dir.path())
        .arg("reorder")
        .arg("3")
        .arg("--before")
        .arg("1")
        .assert()
        .success()
        .stdout(predicates::str::contains("Moved case Apples before case Cherries"));

    let output = docket(temp_dir.path()).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let apples = stdout.find("Apples").unwrap();
    let cherries = stdout.find("Cherries").unwrap();
    let bananas = stdout.find("Bananas").unwrap();
    assert!(
        apples < cherries && cherries < bananas,
        "unexpected order: {}",
        stdout
    );
}

#[test]
fn test_statuses_prints_the_ladder() {
    let temp_dir = tempfile::tempdir().unwrap();

    docket(temp_dir.path())
        .arg("statuses")
        .assert()
        .success()
        .stdout(predicates::str::contains("New"))
        .stdout(predicates::str::contains("Developer Assigned"))
        .stdout(predicates::str::contains("Launched"))
        .stdout(predicates::str::contains("Globalization Completed"))
        .stdout(predicates::str::contains("Rejected"));
}

#[test]
fn test_init_creates_local_store() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("docket").unwrap();
    cmd.current_dir(temp_dir.path())
        .env_remove("DOCKET_HOME")
        .arg("init")
        .assert()
        .success()
        .stdout(predicates::str::contains("Initialized"));
    assert!(temp_dir.path().join(".docket").join("cases.json").exists());

    // a second init leaves the store alone
    let mut cmd = Command::cargo_bin("docket").unwrap();
    cmd.current_dir(temp_dir.path())
        .env_remove("DOCKET_HOME")
        .arg("init")
        .assert()
        .success()
        .stdout(predicates::str::contains("Already initialized"));

    // commands run from that directory pick the local store up
    let mut cmd = Command::cargo_bin("docket").unwrap();
    cmd.current_dir(temp_dir.path())
        .env_remove("DOCKET_HOME")
        .arg("new")
        .arg("Local case")
        .assert()
        .success();
    let content =
        std::fs::read_to_string(temp_dir.path().join(".docket").join("cases.json")).unwrap();
    assert!(content.contains("Local case"));
}

#[test]
fn test_config_report_columns() {
    let temp_dir = tempfile::tempdir().unwrap();

    docket(temp_dir.path())
        .arg("config")
        .arg("report-columns")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "report-columns = name,url,profile,collection,product-id",
        ));

    docket(temp_dir.path())
        .arg("config")
        .arg("report-columns")
        .arg("name,url")
        .assert()
        .success()
        .stdout(predicates::str::contains("report-columns = name,url"));

    // the narrowed column set drives the report
    docket(temp_dir.path())
        .arg("new")
        .arg("Checkout")
        .arg("-n")
        .arg("CS-1")
        .assert()
        .success();
    docket(temp_dir.path())
        .arg("ref")
        .arg("add")
        .arg("--name")
        .arg("Teaser")
        .arg("--url")
        .arg("https://example.com/t")
        .arg("--product-id")
        .arg("P-9")
        .assert()
        .success();
    docket(temp_dir.path())
        .arg("ref")
        .arg("report")
        .assert()
        .success()
        .stdout(predicates::str::contains("Teaser"))
        .stdout(predicates::str::contains("https://example.com/t"))
        .stdout(predicates::str::contains("P-9").not());
}

#[test]
fn test_ref_report_to_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let out = temp_dir.path().join("refs.txt");

    docket(temp_dir.path())
        .arg("new")
        .arg("Checkout")
        .arg("-n")
        .arg("CS-1")
        .assert()
        .success();
    docket(temp_dir.path())
        .arg("ref")
        .arg("add")
        .arg("--name")
        .arg("Teaser")
        .arg("--url")
        .arg("https://example.com/t")
        .assert()
        .success();

    docket(temp_dir.path())
        .arg("ref")
        .arg("report")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicates::str::contains("Wrote report for case CS-1"));

    let report = std::fs::read_to_string(&out).unwrap();
    assert!(report.contains("Teaser"));
    assert!(report.contains("https://example.com/t"));
}

#[test]
fn test_unknown_selector_fails_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();

    docket(temp_dir.path())
        .arg("open")
        .arg("7")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Error: Case not found"));
}

#[test]
fn test_selection_survives_restarts() {
    let temp_dir = tempfile::tempdir().unwrap();

    docket(temp_dir.path())
        .arg("new")
        .arg("Checkout")
        .arg("-n")
        .arg("CS-1")
        .assert()
        .success();
    docket(temp_dir.path())
        .arg("new")
        .arg("Landing")
        .arg("-n")
        .arg("CS-2")
        .assert()
        .success();
    docket(temp_dir.path())
        .arg("open")
        .arg("cs-1")
        .assert()
        .success();

    // diary add with no selector lands on the case opened above
    docket(temp_dir.path())
        .arg("diary")
        .arg("add")
        .arg("Spoke with the owner")
        .assert()
        .success()
        .stdout(predicates::str::contains("Added diary entry to case CS-1"));
}
