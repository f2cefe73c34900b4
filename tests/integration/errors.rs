//! Error reporting of the `bunsen-tree` binary.

use assert_cmd::Command;
use bunsen_tree::test_utils::ViewFixture;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn missing_view_file_fails_with_suggestion() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("bunsen-tree")
        .unwrap()
        .arg("deps")
        .arg(temp.path().join("nope.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("View configuration not found"))
        .stderr(predicate::str::contains("suggestion"));
}

#[test]
fn malformed_view_fails_with_parse_error() {
    let temp = TempDir::new().unwrap();
    let view = ViewFixture::invalid_syntax().write_to(temp.path()).unwrap();

    Command::cargo_bin("bunsen-tree")
        .unwrap()
        .arg("walk")
        .arg(&view)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid view configuration"));
}

#[test]
fn unknown_order_is_rejected_by_the_parser() {
    Command::cargo_bin("bunsen-tree")
        .unwrap()
        .args(["walk", "view.json", "--order", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sideways"));
}
