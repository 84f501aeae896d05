use predicates::prelude::*;
use predicates::str::contains;

mod support;

use support::TestStore;

fn seed(store: &TestStore) {
    store.cmd().args(["add", "write report"]).assert().success();
    store.cmd().args(["add", "review patch"]).assert().success();
    store.cmd().args(["add", "file expenses"]).assert().success();
    store
        .cmd()
        .args(["mark", "2", "in-progress"])
        .assert()
        .success();
    store.cmd().args(["mark", "3", "done"]).assert().success();
}

#[test]
fn list_shows_all_tasks_in_insertion_order() {
    let store = TestStore::new();
    seed(&store);

    let output = store.cmd().args(["list"]).output().expect("run list");
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");

    assert!(stdout.contains("All tasks"));
    let report = stdout.find("write report").expect("first task listed");
    let review = stdout.find("review patch").expect("second task listed");
    let expenses = stdout.find("file expenses").expect("third task listed");
    assert!(report < review);
    assert!(review < expenses);
}

#[test]
fn list_filters_by_exact_status() {
    let store = TestStore::new();
    seed(&store);

    store
        .cmd()
        .args(["list", "todo"])
        .assert()
        .success()
        .stdout(contains("write report"))
        .stdout(contains("review patch").not())
        .stdout(contains("file expenses").not());

    store
        .cmd()
        .args(["list", "in-progress"])
        .assert()
        .success()
        .stdout(contains("All tasks that are in progress"))
        .stdout(contains("review patch"))
        .stdout(contains("write report").not());

    store
        .cmd()
        .args(["list", "done"])
        .assert()
        .success()
        .stdout(contains("file expenses"));
}

#[test]
fn not_done_excludes_done_tasks() {
    let store = TestStore::new();
    seed(&store);

    store
        .cmd()
        .args(["list", "not-done"])
        .assert()
        .success()
        .stdout(contains("All tasks that are not done"))
        .stdout(contains("write report"))
        .stdout(contains("review patch"))
        .stdout(contains("file expenses").not());
}

#[test]
fn list_rejects_unknown_filter() {
    let store = TestStore::new();
    seed(&store);

    store
        .cmd()
        .args(["list", "finished"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("Invalid filter 'finished'"));
}

#[test]
fn empty_filter_result_is_not_an_error() {
    let store = TestStore::new();
    store.cmd().args(["add", "task"]).assert().success();

    store
        .cmd()
        .args(["list", "done"])
        .assert()
        .success()
        .stdout(contains("No tasks found."));
}

#[test]
fn json_list_emits_envelope() {
    let store = TestStore::new();
    seed(&store);

    let output = store
        .cmd()
        .args(["--json", "list", "not-done"])
        .output()
        .expect("run list");
    assert!(output.status.success());

    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(payload["schema_version"], "tasker.v1");
    assert_eq!(payload["command"], "list");
    assert_eq!(payload["status"], "success");
    assert_eq!(payload["data"]["filter"], "not-done");
    assert_eq!(payload["data"]["count"], 2);
    assert_eq!(payload["data"]["tasks"][0]["description"], "write report");
    assert_eq!(payload["data"]["tasks"][1]["status"], "in-progress");
}

#[test]
fn json_add_emits_envelope() {
    let store = TestStore::new();

    let output = store
        .cmd()
        .args(["--json", "add", "task"])
        .output()
        .expect("run add");
    assert!(output.status.success());

    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(payload["command"], "add");
    assert_eq!(payload["status"], "success");
    assert_eq!(payload["data"]["id"], 1);
}
