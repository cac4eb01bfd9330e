use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn rolo(db: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("rolo").expect("binary");
    cmd.args(["--db-path", db.to_str().expect("utf-8 path")]);
    cmd
}

#[test]
fn import_then_list_roundtrip() {
    let temp = TempDir::new().expect("tempdir");
    let db = temp.path().join("rolo.sqlite3");
    let csv = temp.path().join("contacts.csv");
    fs::write(&csv, "name,email,phone\nJane Doe,jane@x.com,+14155551234\n").expect("write csv");

    let output = rolo(&db)
        .arg("import")
        .arg(&csv)
        .output()
        .expect("run import");
    assert!(output.status.success(), "import failed: {output:?}");
    let stdout = String::from_utf8(output.stdout).expect("utf-8");
    assert!(stdout.contains("imported 1/1 (100%)"), "stdout: {stdout}");
    assert!(stdout.contains("Imported 1 contact(s), skipped 0"));

    let output = rolo(&db)
        .args(["--json", "list"])
        .output()
        .expect("run list");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8");
    assert!(stdout.contains("\"phone\": \"+14155551234\""), "stdout: {stdout}");
    assert!(stdout.contains("Jane Doe"));
}

#[test]
fn import_with_missing_header_fails_without_writing() {
    let temp = TempDir::new().expect("tempdir");
    let db = temp.path().join("rolo.sqlite3");
    let csv = temp.path().join("contacts.csv");
    fs::write(&csv, "email,phone\njane@x.com,123\n").expect("write csv");

    let output = rolo(&db)
        .arg("import")
        .arg(&csv)
        .output()
        .expect("run import");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf-8");
    assert!(stderr.contains("name"), "stderr: {stderr}");

    let output = rolo(&db)
        .args(["--json", "list"])
        .output()
        .expect("run list");
    let stdout = String::from_utf8(output.stdout).expect("utf-8");
    assert_eq!(stdout.trim(), "[]");
}

#[test]
fn template_prints_header_line() {
    let temp = TempDir::new().expect("tempdir");
    let db = temp.path().join("rolo.sqlite3");

    let output = rolo(&db).arg("template").output().expect("run template");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8");
    assert_eq!(stdout.trim(), "name,email,phone,company,title,address,notes");
}
