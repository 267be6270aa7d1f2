use crate::common::command::{init_repository_dir, run_dit_command};
use crate::common::repository::{RepositoryFixture, committed_repository};
use assert_fs::TempDir;
use dit::commands::porcelain::branch::DeleteBranchOutcome;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn delete_branch(mut committed_repository: RepositoryFixture) {
    committed_repository
        .repository
        .create_branch("feature")
        .unwrap();

    let outcome = committed_repository
        .repository
        .delete_branch("master")
        .unwrap();

    assert_eq!(outcome, DeleteBranchOutcome::Deleted);
    assert!(committed_repository.repository.refs().branch("master").is_none());
    assert_eq!(committed_repository.repository.refs().len(), 1);
}

#[rstest]
fn delete_active_branch(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_dit_command(init_repository_dir.path(), &["branch", "delete", "master"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "this branch is active it couldn't be deleted\n",
        ));

    Ok(())
}

#[rstest]
fn delete_unknown_branch(mut committed_repository: RepositoryFixture) {
    let outcome = committed_repository
        .repository
        .delete_branch("missing")
        .unwrap();

    assert_eq!(outcome, DeleteBranchOutcome::UnknownBranch);
    assert_eq!(outcome.to_string(), "branch doesn't exists");
}

#[rstest]
fn delete_last_branch_while_detached(mut committed_repository: RepositoryFixture) {
    let first = committed_repository
        .repository
        .refs()
        .read_head()
        .unwrap()
        .unwrap();
    committed_repository.write("a.txt", &["y"]);
    committed_repository.commit("second");
    committed_repository
        .repository
        .switch_to(first.as_ref())
        .unwrap();

    let outcome = committed_repository
        .repository
        .delete_branch("master")
        .unwrap();

    assert_eq!(outcome, DeleteBranchOutcome::LastBranch);
    assert_eq!(outcome.to_string(), "should be at least one branch");
}
