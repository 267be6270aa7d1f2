use crate::common::command::{init_repository_dir, run_dit_command};
use crate::common::file::list_dir;
use crate::common::repository::{RepositoryFixture, committed_repository};
use assert_fs::TempDir;
use dit::commands::porcelain::checkout::SwitchOutcome;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;
use std::time::SystemTime;

/// Name, content and modification time of every visible file
fn snapshot(dir: &Path) -> Vec<(String, String, SystemTime)> {
    list_dir(dir)
        .into_iter()
        .map(|name| {
            let path = dir.join(&name);
            let content = std::fs::read_to_string(&path).unwrap();
            let modified = std::fs::metadata(&path).unwrap().modified().unwrap();
            (name, content, modified)
        })
        .collect()
}

#[rstest]
fn switch_to_current_branch(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_dit_command(init_repository_dir.path(), &["switch", "master"])
        .assert()
        .success()
        .stdout(predicate::eq("master is the same commit as current\n"));

    Ok(())
}

#[rstest]
fn switch_to_head_commit_changes_nothing(mut committed_repository: RepositoryFixture) {
    let head = committed_repository
        .repository
        .refs()
        .read_head()
        .unwrap()
        .unwrap();
    let state_before = committed_repository.repository.state().clone();

    let outcome = committed_repository
        .repository
        .switch_to(head.as_ref())
        .unwrap();

    assert_eq!(outcome, SwitchOutcome::AlreadyThere(head.to_string()));
    assert_eq!(committed_repository.repository.state(), &state_before);
}

#[rstest]
fn repeated_switch_leaves_files_untouched(mut committed_repository: RepositoryFixture) {
    let first = committed_repository
        .repository
        .refs()
        .read_head()
        .unwrap()
        .unwrap();
    committed_repository.write("a.txt", &["y"]);
    committed_repository.write("b.txt", &["b"]);
    committed_repository.commit("second");

    let outcome = committed_repository
        .repository
        .switch_to(first.as_ref())
        .unwrap();
    assert!(matches!(outcome, SwitchOutcome::Switched { .. }));

    let dir = committed_repository.dir.path();
    let restored = snapshot(dir);
    let state_after_switch = committed_repository.repository.state().clone();

    let outcome = committed_repository
        .repository
        .switch_to(first.as_ref())
        .unwrap();

    assert_eq!(outcome, SwitchOutcome::AlreadyThere(first.to_string()));
    assert_eq!(snapshot(dir), restored);
    assert_eq!(committed_repository.repository.state(), &state_after_switch);
}

#[rstest]
fn repeated_branch_switch_leaves_files_untouched(mut committed_repository: RepositoryFixture) {
    committed_repository
        .repository
        .create_branch("feature")
        .unwrap();
    committed_repository.write("b.txt", &["feature work"]);
    committed_repository.commit("feature work");

    committed_repository.repository.switch_to("master").unwrap();
    let dir = committed_repository.dir.path();
    let restored = snapshot(dir);

    let outcome = committed_repository.repository.switch_to("master").unwrap();

    assert_eq!(
        outcome.to_string(),
        "master is the same commit as current"
    );
    assert_eq!(snapshot(dir), restored);
}
