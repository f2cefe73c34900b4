//! Integration tests for the `bunsen-tree` subcommands.

use assert_cmd::Command;
use bunsen_tree::test_utils::ViewFixture;
use predicates::prelude::*;
use tempfile::TempDir;

fn bunsen_tree() -> Command {
    Command::cargo_bin("bunsen-tree").unwrap()
}

#[test]
fn walk_prints_top_down_order() {
    let temp = TempDir::new().unwrap();
    let view = ViewFixture::tuple().write_to(temp.path()).unwrap();

    bunsen_tree()
        .arg("walk")
        .arg(&view)
        .assert()
        .success()
        .stdout("location\nlocation.1\nlocation.0\n");
}

#[test]
fn walk_bottom_up_ends_with_root() {
    let temp = TempDir::new().unwrap();
    let view = ViewFixture::basic().write_to(temp.path()).unwrap();

    bunsen_tree()
        .args(["walk", "--order", "bottom-up"])
        .arg(&view)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("contact.phone\ncontact.email\n"))
        .stdout(predicate::str::ends_with("<anonymous>\n"));
}

#[test]
fn deps_json_lists_rooted_paths() {
    let temp = TempDir::new().unwrap();
    let view = ViewFixture::addresses().write_to(temp.path()).unwrap();

    let output = bunsen_tree().args(["--format", "json", "deps"]).arg(&view).output().unwrap();
    assert!(output.status.success());

    let mut paths: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    paths.sort();
    assert_eq!(
        paths,
        ["root.addresses", "root.addresses.[].city", "root.addresses.[].street", "root.name"]
    );
}

#[test]
fn affected_follows_array_wildcards() {
    let temp = TempDir::new().unwrap();
    let view = ViewFixture::addresses().write_to(temp.path()).unwrap();

    bunsen_tree()
        .arg("affected")
        .arg(&view)
        .arg("addresses.7.street")
        .assert()
        .success()
        .stdout(predicate::str::contains("root.addresses.[].street"))
        .stdout(predicate::str::contains("root.addresses\n"))
        .stdout(predicate::str::contains("city").not())
        .stdout(predicate::str::contains("root.name").not());
}

#[test]
fn affected_batch_reports_common_root() {
    let temp = TempDir::new().unwrap();
    let view = ViewFixture::basic().write_to(temp.path()).unwrap();

    bunsen_tree()
        .args(["-f", "json", "affected"])
        .arg(&view)
        .args(["contact.email", "contact.phone"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""root": "root.contact""#));
}

#[test]
fn ancestor_and_related_need_no_view() {
    bunsen_tree()
        .args(["ancestor", "root.foo.a", "root.foo.b"])
        .assert()
        .success()
        .stdout("root.foo\n");

    bunsen_tree().args(["ancestor", "root.foo", "bar.baz"]).assert().success().stdout("\n");

    bunsen_tree()
        .args(["related", "root.items.2.name", "root.items.3.name"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn verbose_logs_to_stderr_only() {
    let temp = TempDir::new().unwrap();
    let view = ViewFixture::basic().write_to(temp.path()).unwrap();

    bunsen_tree()
        .args(["--verbose", "deps"])
        .arg(&view)
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("Registered 5 dependency paths"));
}
