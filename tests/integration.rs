use assert_cmd::Command;
use predicates::str::contains;
use std::fs;

const DRAWING: &str = "project/
├── src/
│   ├── main.py
│   └── utils/
└── README.md
";

fn sprout(workdir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("sprout").unwrap();
    cmd.current_dir(workdir).env("NO_COLOR", "1");
    cmd
}

#[test]
fn creates_tree_drawing() {
    let workdir = tempfile::tempdir().unwrap();

    sprout(workdir.path())
        .args(["--format", "tree", "--name", "demo"])
        .write_stdin(DRAWING)
        .assert()
        .success()
        .stdout(contains("Folders created: 2"))
        .stdout(contains("Files created: 2"));

    let root = workdir.path().join("demo");
    assert!(root.join("src/main.py").is_file());
    assert!(root.join("src/utils").is_dir());
    assert!(root.join("README.md").is_file());
    assert!(!root.join("project").exists());
    assert_eq!(fs::read_to_string(root.join("src/main.py")).unwrap(), "");
}

#[test]
fn keeps_root_label_when_asked() {
    let workdir = tempfile::tempdir().unwrap();

    sprout(workdir.path())
        .args(["--format", "tree", "--name", "demo", "--keep-root-label"])
        .write_stdin(DRAWING)
        .assert()
        .success()
        .stdout(contains("Folders created: 3"));

    assert!(workdir.path().join("demo/project").is_dir());
}

#[test]
fn creates_simple_path() {
    let workdir = tempfile::tempdir().unwrap();

    sprout(workdir.path())
        .args(["--format", "paths", "--name", "t"])
        .write_stdin("a/b/c.txt\n")
        .assert()
        .success()
        .stdout(contains("Folders created: 2"))
        .stdout(contains("Files created: 1"));

    assert!(workdir.path().join("t/a/b/c.txt").is_file());
}

#[test]
fn stops_reading_after_two_blank_lines() {
    let workdir = tempfile::tempdir().unwrap();

    sprout(workdir.path())
        .args(["--format", "paths", "--name", "t"])
        .write_stdin("docs/index.md\n\n\nnever.txt\n")
        .assert()
        .success();

    assert!(workdir.path().join("t/docs/index.md").is_file());
    assert!(!workdir.path().join("t/never.txt").exists());
}

#[test]
fn reads_structure_from_file_with_default_name() {
    let workdir = tempfile::tempdir().unwrap();
    fs::write(workdir.path().join("layout.txt"), "lib/core.rs\nREADME.md\n").unwrap();

    sprout(workdir.path())
        .args(["--format", "paths", "--input", "layout.txt"])
        .assert()
        .success();

    assert!(workdir.path().join("my_project/lib/core.rs").is_file());
    assert!(workdir.path().join("my_project/README.md").is_file());
}

#[test]
fn settings_file_supplies_defaults() {
    let workdir = tempfile::tempdir().unwrap();
    fs::write(
        workdir.path().join("sprout.toml"),
        "default_name = \"scratch\"\nformat = \"paths\"\n",
    )
    .unwrap();

    sprout(workdir.path())
        .args(["--config", "sprout.toml"])
        .write_stdin("notes/todo.md\n")
        .assert()
        .success();

    assert!(workdir.path().join("scratch/notes/todo.md").is_file());
}

#[test]
fn empty_input_changes_nothing() {
    let workdir = tempfile::tempdir().unwrap();

    sprout(workdir.path())
        .args(["--format", "tree", "--name", "demo"])
        .write_stdin("\n   \n")
        .assert()
        .success()
        .stdout(contains("No folder structure provided"));

    assert!(!workdir.path().join("demo").exists());
}

#[test]
fn unparseable_input_changes_nothing() {
    let workdir = tempfile::tempdir().unwrap();

    sprout(workdir.path())
        .args(["--format", "tree", "--name", "demo"])
        .write_stdin("│\n├──\n")
        .assert()
        .success()
        .stdout(contains("Could not parse any valid folder structure"));

    assert!(!workdir.path().join("demo").exists());
}

#[test]
fn existing_target_is_kept_without_force() {
    let workdir = tempfile::tempdir().unwrap();
    let root = workdir.path().join("demo");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("keep.txt"), "precious").unwrap();

    sprout(workdir.path())
        .args(["--format", "paths", "--name", "demo"])
        .write_stdin("fresh.txt\n")
        .assert()
        .success()
        .stdout(contains("Folder 'demo' already exists."))
        .stdout(contains("Operation cancelled"));

    assert_eq!(fs::read_to_string(root.join("keep.txt")).unwrap(), "precious");
    assert!(!root.join("fresh.txt").exists());
}

#[test]
fn existing_target_is_replaced_with_force() {
    let workdir = tempfile::tempdir().unwrap();
    let root = workdir.path().join("demo");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("stale.txt"), "old").unwrap();

    sprout(workdir.path())
        .args(["--format", "paths", "--name", "demo", "--force"])
        .write_stdin("fresh.txt\n")
        .assert()
        .success()
        .stdout(contains("Files created: 1"));

    assert!(root.join("fresh.txt").is_file());
    assert!(!root.join("stale.txt").exists());
}

#[test]
fn unreadable_settings_file_fails() {
    let workdir = tempfile::tempdir().unwrap();

    sprout(workdir.path())
        .args(["--config", "missing.toml", "--name", "demo"])
        .write_stdin("a.txt\n")
        .assert()
        .failure();

    assert!(!workdir.path().join("demo").exists());
}

#[test]
fn rejects_unknown_format() {
    let workdir = tempfile::tempdir().unwrap();

    sprout(workdir.path())
        .args(["--format", "yaml"])
        .write_stdin("a.txt\n")
        .assert()
        .failure();
}

#[test]
fn names_outside_target_are_skipped() {
    let workdir = tempfile::tempdir().unwrap();
    let outside = workdir.path().join("notes.txt");
    fs::write(&outside, "precious").unwrap();
    fs::write(workdir.path().join("README.md"), "precious").unwrap();

    sprout(workdir.path())
        .args(["--format", "tree", "--name", "demo"])
        .write_stdin(format!("{}\nkept.txt\n", outside.display()))
        .assert()
        .success()
        .stdout(contains("Files created: 1"));

    sprout(workdir.path())
        .args(["--format", "paths", "--name", "other"])
        .write_stdin("../README.md\nkept.txt\n")
        .assert()
        .success()
        .stdout(contains("Files created: 1"));

    assert_eq!(fs::read_to_string(&outside).unwrap(), "precious");
    assert_eq!(
        fs::read_to_string(workdir.path().join("README.md")).unwrap(),
        "precious"
    );
    assert!(workdir.path().join("demo/kept.txt").is_file());
    assert!(workdir.path().join("other/kept.txt").is_file());
}
