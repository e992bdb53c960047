// End-to-end tests driving the nani binary against a scratch base directory.
//
// `true` and `false` stand in for the editor, renderer and site tools, so
// these only run on unix. HOME and XDG_CONFIG_HOME both point into the
// scratch tree so no real global config is picked up on Linux or macOS.
#![cfg(unix)]
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn nani(base: &Path, editor: &str) -> Command {
    let mut cmd = Command::cargo_bin("nani").unwrap();
    cmd.env_remove("NANI_HOME")
        .env_remove("NANI_LOG")
        .env_remove("NANI_VIEWER")
        .env("HOME", base)
        .env("XDG_CONFIG_HOME", base.join(".xdg"))
        .env("NANI_EDITOR", editor)
        .arg("--base-dir")
        .arg(base);
    cmd
}

#[test]
fn test_generate_edit_delete_lifecycle() {
    let temp = TempDir::new().unwrap();
    let page = temp.path().join("man/foo.md");

    nani(temp.path(), "true")
        .args(["man", "foo", "--generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(page.is_file());

    nani(temp.path(), "true")
        .args(["man", "foo", "-e"])
        .assert()
        .success();

    nani(temp.path(), "true")
        .args(["man", "foo", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));
    assert!(!page.exists());

    // Deleting again is a no-op
    nani(temp.path(), "true")
        .args(["man", "foo", "-d"])
        .assert()
        .success()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_generate_existing_page_exits_with_status_3() {
    let temp = TempDir::new().unwrap();
    let page = temp.path().join("notes/notes_all/bar.md");
    fs::create_dir_all(page.parent().unwrap()).unwrap();
    fs::write(&page, "keep").unwrap();

    nani(temp.path(), "true")
        .args(["notes", "bar", "-g"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&page).unwrap(), "keep");
}

#[test]
fn test_generate_copies_template() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("templates")).unwrap();
    fs::write(temp.path().join("templates/notes_template.md"), "TODO").unwrap();

    nani(temp.path(), "true")
        .args(["notes", "bar", "-g"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("notes/notes_all/bar.md")).unwrap(),
        "TODO"
    );
}

#[test]
fn test_failing_editor_rolls_back_generate() {
    let temp = TempDir::new().unwrap();

    nani(temp.path(), "false")
        .args(["man", "foo", "-g"])
        .assert()
        .code(4);

    assert!(!temp.path().join("man").exists());
}

#[test]
fn test_failing_editor_keeps_edited_page() {
    let temp = TempDir::new().unwrap();
    let page = temp.path().join("man/foo.md");
    fs::create_dir_all(page.parent().unwrap()).unwrap();
    fs::write(&page, "precious").unwrap();

    nani(temp.path(), "false")
        .args(["man", "foo", "-e"])
        .assert()
        .code(4);

    assert_eq!(fs::read_to_string(&page).unwrap(), "precious");
}

#[test]
fn test_edit_missing_page_exits_with_status_5() {
    let temp = TempDir::new().unwrap();

    nani(temp.path(), "true")
        .args(["notes", "ghost", "-e"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("does not exist"));

    assert!(!temp.path().join("notes").exists());
}

#[test]
fn test_missing_editor_reports_hint() {
    let temp = TempDir::new().unwrap();

    nani(temp.path(), "nani-no-such-editor")
        .args(["man", "foo", "-g"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Is it installed"));

    assert!(!temp.path().join("man/foo.md").exists());
}

#[test]
fn test_ls_hides_index_file() {
    let temp = TempDir::new().unwrap();
    let man = temp.path().join("man");
    fs::create_dir_all(&man).unwrap();
    for name in ["a.md", "b.md", "_index.md"] {
        fs::write(man.join(name), "").unwrap();
    }

    nani(temp.path(), "true")
        .args(["ls", "-m"])
        .assert()
        .success()
        .stdout("a.md\nb.md\n");
}

#[test]
fn test_ls_json_lists_paths() {
    let temp = TempDir::new().unwrap();
    let notes = temp.path().join("notes/notes_all");
    fs::create_dir_all(&notes).unwrap();
    fs::write(notes.join("week1.md"), "").unwrap();

    nani(temp.path(), "true")
        .args(["ls", "--notes", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"file\": \"week1.md\""))
        .stdout(predicate::str::contains("notes_all"));
}

#[test]
fn test_view_uses_configured_renderer() {
    let temp = TempDir::new().unwrap();
    let page = temp.path().join("man/git.md");
    fs::create_dir_all(page.parent().unwrap()).unwrap();
    fs::write(&page, "# git").unwrap();

    nani(temp.path(), "true")
        .env("NANI_VIEWER", "cat")
        .args(["man", "git", "--view"])
        .assert()
        .success()
        .stdout("# git");
}

#[test]
fn test_view_missing_page() {
    let temp = TempDir::new().unwrap();

    nani(temp.path(), "true")
        .env("NANI_VIEWER", "cat")
        .args(["man", "nope", "-v"])
        .assert()
        .code(5);
}

#[test]
fn test_action_flag_is_required() {
    let temp = TempDir::new().unwrap();

    nani(temp.path(), "true")
        .args(["man", "foo"])
        .assert()
        .code(2);

    assert!(!temp.path().join("man").exists());
}

#[test]
fn test_deploy_stops_after_failed_build() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(".nani")).unwrap();
    fs::write(
        temp.path().join(".nani/config.toml"),
        "[deploy]\nbuild = [\"false\"]\npublish = [\"touch\", \"published\"]\n",
    )
    .unwrap();

    nani(temp.path(), "true")
        .arg("deploy")
        .assert()
        .code(4);
    assert!(!temp.path().join("published").exists());
}

#[test]
fn test_deploy_runs_publish_in_base_dir() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(".nani")).unwrap();
    fs::write(
        temp.path().join(".nani/config.toml"),
        "[deploy]\nbuild = [\"touch\", \"built\"]\npublish = [\"touch\", \"published\"]\n",
    )
    .unwrap();

    nani(temp.path(), "true").arg("deploy").assert().success();

    assert!(temp.path().join("built").exists());
    assert!(temp.path().join("published").exists());
}

#[test]
fn test_link_is_idempotent() {
    let temp = TempDir::new().unwrap();

    nani(temp.path(), "true").arg("link").assert().success();
    assert!(temp.path().join("notes").is_dir());
    assert!(temp.path().join("content").is_dir());

    nani(temp.path(), "true")
        .arg("link")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_init_creates_skeleton() {
    let temp = TempDir::new().unwrap();

    nani(temp.path(), "true")
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(temp.path().join("man").is_dir());
    assert!(temp.path().join("notes/notes_all").is_dir());
    assert!(temp.path().join("templates").is_dir());
    assert!(temp.path().join(".nani/config.toml").is_file());
}

#[test]
fn test_global_config_comes_from_scratch_home() {
    let temp = TempDir::new().unwrap();
    let global = if cfg!(target_os = "macos") {
        temp.path().join("Library/Application Support/nani")
    } else {
        temp.path().join(".xdg/nani")
    };
    fs::create_dir_all(&global).unwrap();
    fs::write(global.join("config.toml"), "[viewer]\ncommand = \"cat\"\n").unwrap();
    let page = temp.path().join("man/git.md");
    fs::create_dir_all(page.parent().unwrap()).unwrap();
    fs::write(&page, "# git").unwrap();

    nani(temp.path(), "true")
        .args(["man", "git", "-v"])
        .assert()
        .success()
        .stdout("# git");
}

#[test]
fn test_invalid_config_is_reported() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(".nani")).unwrap();
    fs::write(temp.path().join(".nani/config.toml"), "[deploy]\nbuild = []\n").unwrap();

    nani(temp.path(), "true")
        .args(["ls", "-m"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("deploy.build"));
}
