//! CLI 集成测试
//!
//! 通过 MDV_DATA_PATH 指向临时目录，避免污染真实数据目录。
//! 浏览器展示面会调起系统程序，这里只走终端/导出/错误路径。

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn mdv(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mdv").unwrap();
    cmd.env("MDV_DATA_PATH", data_dir);
    cmd
}

#[test]
fn ls_lists_embedded_pages() {
    let tmp = tempfile::tempdir().unwrap();
    mdv(tmp.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown.md").and(predicate::str::contains("help.md")));
}

#[test]
fn view_missing_page_reports_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    mdv(tmp.path())
        .args(["view", "missing.md"])
        .assert()
        .success()
        .stderr(predicate::str::contains("missing.md"));
}

#[test]
fn view_embedded_page_in_terminal() {
    let tmp = tempfile::tempdir().unwrap();
    // 主名匹配：markdown 同样命中 markdown.md
    mdv(tmp.path())
        .args(["view", "markdown", "--terminal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mdv"));
}

#[test]
fn export_writes_html_document() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("out.html");
    mdv(tmp.path())
        .args(["export", "markdown.md", "-o"])
        .arg(&out)
        .assert()
        .success();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("<title>markdown.md</title>"));
    assert!(html.contains("<h1>"));
}

#[test]
fn set_view_and_rm_registered_page() {
    let tmp = tempfile::tempdir().unwrap();
    let page = tmp.path().join("notes.md");
    std::fs::write(&page, "# Notes\n\nsome text").unwrap();

    mdv(tmp.path())
        .args(["set", "notes"])
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("notes"));

    mdv(tmp.path())
        .args(["view", "notes", "--terminal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes"));

    mdv(tmp.path()).args(["rm", "notes"]).assert().success();

    mdv(tmp.path())
        .args(["rm", "notes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("notes"));
}

#[test]
fn set_rejects_command_keywords() {
    let tmp = tempfile::tempdir().unwrap();
    mdv(tmp.path())
        .args(["set", "ls", "/tmp/whatever.md"])
        .assert()
        .success()
        .stderr(predicate::str::contains("ls"));
}

#[test]
fn version_prints_current_version() {
    let tmp = tempfile::tempdir().unwrap();
    mdv(tmp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
