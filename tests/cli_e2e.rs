use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn dirtree_cmd() -> Command {
    Command::cargo_bin("dirtree").unwrap()
}

fn create_test_structure(temp: &TempDir) {
    let root = temp.path();

    fs::create_dir_all(root.join("alpha/nested")).unwrap();
    fs::create_dir_all(root.join("Beta")).unwrap();

    fs::write(root.join("file1.txt"), "content").unwrap();
    fs::write(root.join("alpha/inner.txt"), "content").unwrap();
    fs::write(root.join("alpha/nested/deep.txt"), "content").unwrap();
    fs::write(root.join("Beta/other.txt"), "content").unwrap();
}

#[test]
fn prints_full_tree_with_summaries() {
    let temp = TempDir::new().unwrap();
    create_test_structure(&temp);

    dirtree_cmd()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(concat!(
            "├ alpha\n",
            "│─── inner.txt\n",
            "│──├ nested\n",
            "──│─── deep.txt\n",
            "────└ 0 directories, 1 files\n",
            "──└ 1 directories, 2 files\n",
            "├ Beta\n",
            "│─── other.txt\n",
            "──└ 0 directories, 1 files\n",
            "─ file1.txt\n",
            "└ 3 directories, 4 files\n",
        ));
}

#[test]
fn empty_directory_prints_zero_summary() {
    let temp = TempDir::new().unwrap();

    dirtree_cmd()
        .arg(temp.path())
        .assert()
        .success()
        .stdout("└ 0 directories, 0 files\n");
}

#[test]
fn sorts_case_insensitively() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("c.txt"), "content").unwrap();
    fs::write(root.join("B.txt"), "content").unwrap();
    fs::write(root.join("a.txt"), "content").unwrap();

    dirtree_cmd().arg(root).assert().success().stdout(concat!(
        "─ a.txt\n",
        "─ B.txt\n",
        "─ c.txt\n",
        "└ 0 directories, 3 files\n",
    ));
}

#[test]
fn current_directory_is_the_default() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("here.txt"), "content").unwrap();

    dirtree_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("─ here.txt\n└ 0 directories, 1 files\n");
}

#[test]
fn hidden_files_are_listed() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join(".hidden"), "content").unwrap();
    fs::create_dir(root.join(".hidden_dir")).unwrap();

    dirtree_cmd()
        .arg(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("─ .hidden\n"))
        .stdout(predicate::str::contains("├ .hidden_dir\n"));
}

#[cfg(unix)]
#[test]
fn symlinked_directories_are_followed() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::create_dir(root.join("target_dir")).unwrap();
    fs::write(root.join("target_dir/inside.txt"), "content").unwrap();
    std::os::unix::fs::symlink(root.join("target_dir"), root.join("link_to_dir")).unwrap();

    dirtree_cmd()
        .arg(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("├ link_to_dir\n│─── inside.txt\n"))
        .stdout(predicate::str::ends_with("└ 2 directories, 2 files\n"));
}

#[test]
fn error_for_nonexistent_path() {
    dirtree_cmd()
        .arg("/nonexistent/path/that/does/not/exist")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "dirtree: /nonexistent/path/that/does/not/exist: no such file or directory",
        ));
}

#[cfg(unix)]
#[test]
fn error_for_plain_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("single_file.txt");
    fs::write(&file_path, "content").unwrap();

    dirtree_cmd()
        .arg(&file_path)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn max_depth_rejects_deeper_trees() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("level1/level2")).unwrap();

    dirtree_cmd()
        .arg(temp.path())
        .args(["--max-depth", "1"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("maximum depth of 1"));

    dirtree_cmd()
        .arg(temp.path())
        .args(["--max-depth", "2"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("└ 2 directories, 0 files\n"));
}

#[test]
fn help_output() {
    dirtree_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("box-drawing tree"))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn unrecognized_flag_shows_error() {
    dirtree_cmd()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
