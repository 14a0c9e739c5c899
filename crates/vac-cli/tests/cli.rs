use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const THREAD: &str = r#"{
  "comments": [
    {"meta": {"user_id": "bob", "datetime": "2024-06-01T12:03:00Z"}, "body": "Agreed <3"},
    {"meta": {"user_id": "alice", "datetime": "2024-06-01T12:00:00Z"}, "body": "Look at this frame"}
  ]
}"#;

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vac-templates").unwrap();
    cmd.arg("--config")
        .arg(dir.path().join("config.toml"))
        .arg("--no-color");
    cmd
}

#[test]
fn renders_comment_list_from_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("thread.json");
    fs::write(&input, THREAD).unwrap();

    cmd(&dir)
        .args(["render", "comment-list", "--height", "240px"])
        .args(["--now", "2024-06-01T12:05:00Z"])
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"style="height: 240px;""#))
        .stdout(predicate::str::contains(r#"<div class="author-name">alice</div>"#))
        .stdout(predicate::str::contains("5 minutes ago"))
        .stdout(predicate::str::contains("2 minutes ago"))
        .stdout(predicate::str::contains("Agreed &lt;3"));
}

#[test]
fn renders_comment_list_from_stdin() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["render", "comment-list", "--input", "-"])
        .write_stdin(THREAD)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"style="height: auto;""#));
}

#[test]
fn comment_list_requires_input() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["render", "comment-list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--input"));
}

#[test]
fn rejects_invalid_thread() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("thread.json");
    fs::write(&input, "{\"comments\": \"nope\"}").unwrap();

    cmd(&dir)
        .args(["render", "comment-list", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid comment thread"));
}

#[test]
fn renders_new_comment_to_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("composer.html");

    cmd(&dir)
        .args(["render", "new-comment", "--output"])
        .arg(&output)
        .assert()
        .success();

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(html, vac_core::NEW_COMMENT_TEMPLATE);
}

#[test]
fn lists_templates_as_json() {
    let dir = TempDir::new().unwrap();

    let assert = cmd(&dir).args(["templates", "--json"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let listing: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(listing[0]["name"], "comment-list");
    assert_eq!(listing[1]["name"], "new-comment");
    assert_eq!(listing[1]["placeholders"], serde_json::json!([]));
}

#[test]
fn prints_template_source() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["templates", "--source", "comment-list"])
        .assert()
        .success()
        .stdout(vac_core::COMMENT_LIST_TEMPLATE);
}

#[test]
fn config_reset_then_validate() {
    let dir = TempDir::new().unwrap();

    cmd(&dir).args(["config", "reset"]).assert().success();
    assert!(dir.path().join("config.toml").exists());

    cmd(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn render_settings_come_from_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[render]\ndefault_height = \"90px\"\ntrim_output = true\n",
    )
    .unwrap();
    let input = dir.path().join("thread.json");
    fs::write(&input, THREAD).unwrap();

    cmd(&dir)
        .args(["render", "comment-list", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<div class=\"vac-comments-container\" style=\"height: 90px;\">"));
}

#[test]
fn adds_comment_then_renders_it() {
    let dir = TempDir::new().unwrap();
    let thread = dir.path().join("thread.json");

    cmd(&dir)
        .args(["comment", "--user", "carol", "--body", "  Nice cut  ", "--thread"])
        .arg(&thread)
        .assert()
        .success();

    cmd(&dir)
        .args(["render", "comment-list", "--input"])
        .arg(&thread)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<div class="author-name">carol</div>"#))
        .stdout(predicate::str::contains("Nice cut"))
        .stdout(predicate::str::is_match(r"\d+ seconds? ago").unwrap());
}

#[test]
fn rejects_blank_comment() {
    let dir = TempDir::new().unwrap();
    let thread = dir.path().join("thread.json");

    cmd(&dir)
        .args(["comment", "--user", "carol", "--body", "   ", "--thread"])
        .arg(&thread)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));
    assert!(!thread.exists());
}

#[test]
fn new_comment_rejects_comment_list_options() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["render", "new-comment", "--height", "10px"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--height"));

    cmd(&dir)
        .args(["render", "new-comment", "--now", "2024-06-01T12:00:00Z", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--now, --strict"));
}

#[test]
fn adding_to_existing_thread_keeps_earlier_comments() {
    let dir = TempDir::new().unwrap();
    let thread = dir.path().join("thread.json");
    fs::write(&thread, THREAD).unwrap();

    cmd(&dir)
        .args(["comment", "--user", "carol", "--body", "Third", "--thread"])
        .arg(&thread)
        .assert()
        .success();

    let saved = vac_core::comment::CommentThread::from_json(&fs::read_to_string(&thread).unwrap()).unwrap();
    let authors: Vec<_> = saved.comments().iter().map(|c| c.user_id().to_string()).collect();
    assert_eq!(authors, vec!["alice", "bob", "carol"]);
    assert!(!dir.path().join("thread.tmp").exists());
}
