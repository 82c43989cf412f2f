use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn contactbook(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("contactbook").unwrap();
    cmd.env("CONTACTBOOK_DATA_DIR", data_dir);
    cmd
}

fn add(data_dir: &Path, name: &str, email: &str, category: &str) {
    contactbook(data_dir)
        .args(["add", "--name", name, "--email", email, "--phone", "555"])
        .args(["--category", category])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added!"));
}

#[test]
fn list_on_empty_store() {
    let temp = TempDir::new().unwrap();

    contactbook(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts available."));
}

#[test]
fn add_then_list() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Alice", "alice@x.com", "Family");

    contactbook(temp.path())
        .arg("view")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice").and(predicate::str::contains("alice@x.com")));

    let stored = fs::read_to_string(temp.path().join("contacts.json")).unwrap();
    assert_eq!(
        stored,
        r#"[{"id":1,"name":"Alice","email":"alice@x.com","phone":"555","category":"Family"}]"#
    );
}

#[test]
fn add_interactively() {
    let temp = TempDir::new().unwrap();

    contactbook(temp.path())
        .arg("add")
        .write_stdin("\nBob\nbob@x.com\n\nwork\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("This field cannot be empty")
                .and(predicate::str::contains("Contact added!")),
        );

    contactbook(temp.path())
        .args(["filter", "--category", "Work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob"));
}

#[test]
fn delete_missing_and_existing() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Alice", "alice@x.com", "Family");
    let before = fs::read(temp.path().join("contacts.json")).unwrap();

    contactbook(temp.path())
        .args(["delete", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact not found!"));
    assert_eq!(fs::read(temp.path().join("contacts.json")).unwrap(), before);

    contactbook(temp.path())
        .arg("delete")
        .write_stdin("abc\n1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Please enter a valid ID (positive number)")
                .and(predicate::str::contains("Contact deleted!")),
        );

    contactbook(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts available."));
}

#[test]
fn filter_and_search() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Alice", "alice@x.com", "Family");
    add(temp.path(), "Bob", "bob@work.com", "Work");

    contactbook(temp.path())
        .args(["filter", "--category", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob").and(predicate::str::contains("Alice").not()));

    contactbook(temp.path())
        .args(["filter", "--category", "Friends"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found in this category."));

    contactbook(temp.path())
        .args(["search", "ALICE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice@x.com"));

    contactbook(temp.path())
        .args(["search", "nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found!"));
}

#[test]
fn corrupt_store_is_reported_and_left_alone() {
    let temp = TempDir::new().unwrap();
    let contacts = temp.path().join("contacts.json");
    fs::write(&contacts, "not json").unwrap();

    contactbook(temp.path())
        .args(["add", "-n", "Alice", "-e", "a@x.com", "-p", "", "-c", "Family"])
        .assert()
        .success()
        .stderr(predicate::str::starts_with("Error:").and(predicate::str::contains("corrupt")));

    assert_eq!(fs::read_to_string(&contacts).unwrap(), "not json");
}

#[test]
fn export_then_import() {
    let source = TempDir::new().unwrap();
    add(source.path(), "Alice", "alice@x.com", "Family");
    add(source.path(), "Bob", "bob@x.com", "Work");
    let csv = source.path().join("out.csv");

    contactbook(source.path())
        .arg("export")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 contacts"));

    let target = TempDir::new().unwrap();
    contactbook(target.path())
        .arg("import")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Import Complete!"));

    contactbook(target.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice").and(predicate::str::contains("Bob")));
}

#[test]
fn import_missing_file_reports_error() {
    let temp = TempDir::new().unwrap();

    contactbook(temp.path())
        .args(["import", "does-not-exist.csv"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error: Import error: File not found"));
}

#[test]
fn log_records_changes() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Alice", "alice@x.com", "Family");
    contactbook(temp.path()).args(["delete", "1"]).assert().success();

    contactbook(temp.path())
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE").and(predicate::str::contains("DELETE")));
}

#[test]
fn config_shows_paths() {
    let temp = TempDir::new().unwrap();

    contactbook(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory:").and(predicate::str::contains(
            temp.path().join("contacts.json").display().to_string(),
        )));
}

#[test]
fn unwritable_audit_log_only_warns() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("audit.log")).unwrap();

    contactbook(temp.path())
        .args(["add", "-n", "Alice", "-e", "a@x.com", "-p", "", "-c", "Family"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added!"))
        .stderr(
            predicate::str::contains("Warning: audit log not updated")
                .and(predicate::str::contains("Error:").not()),
        );

    contactbook(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"));
}

#[test]
fn config_flags_are_saved() {
    let temp = TempDir::new().unwrap();

    contactbook(temp.path())
        .args(["config", "--pretty-json", "true", "--audit", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration saved."));

    let saved = fs::read_to_string(temp.path().join("config.json")).unwrap();
    assert!(saved.contains(r#""pretty_json": true"#));
    assert!(saved.contains(r#""audit_enabled": false"#));

    add(temp.path(), "Alice", "alice@x.com", "Family");
    let stored = fs::read_to_string(temp.path().join("contacts.json")).unwrap();
    assert!(stored.contains('\n'));
    assert!(!temp.path().join("audit.log").exists());
}
