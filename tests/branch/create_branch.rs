use crate::common::command::{dit_output, init_repository_dir, repository_dir, run_dit_command};
use crate::common::repository::{RepositoryFixture, committed_repository, empty_repository};
use assert_fs::TempDir;
use dit::commands::porcelain::branch::CreateBranchOutcome;
use dit::errors::RepositoryError;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn create_branch_without_commits(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_dit_command(repository_dir.path(), &["branch", "create", "feature"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "Branch may be created only for existing commit\n",
        ));

    Ok(())
}

#[rstest]
fn create_branch(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_dit_command(init_repository_dir.path(), &["branch", "create", "feature"])
        .assert()
        .success()
        .stdout(predicate::eq("branch created successfully\n"));

    assert_eq!(
        dit_output(init_repository_dir.path(), &["head"]),
        "branch name feature\n"
    );
    assert_eq!(
        dit_output(init_repository_dir.path(), &["branch", "list"]),
        "feature*\nmaster\n"
    );

    Ok(())
}

#[rstest]
fn create_existing_branch(mut committed_repository: RepositoryFixture) {
    let outcome = committed_repository
        .repository
        .create_branch("master")
        .unwrap();

    assert_eq!(outcome, CreateBranchOutcome::AlreadyExists);
    assert_eq!(outcome.to_string(), "Branch already exists");
}

#[rstest]
fn created_branch_points_at_head(mut committed_repository: RepositoryFixture) {
    let head = committed_repository
        .repository
        .refs()
        .read_head()
        .unwrap()
        .unwrap();

    committed_repository
        .repository
        .create_branch("feature")
        .unwrap();

    let feature = committed_repository.repository.refs().branch("feature").unwrap();
    assert_eq!(feature.commit_id(), &head);
}

#[rstest]
#[case("ab")]
#[case("")]
#[case("with space")]
#[case("dash-name")]
fn create_branch_with_invalid_name(mut committed_repository: RepositoryFixture, #[case] name: &str) {
    let error = committed_repository
        .repository
        .create_branch(name)
        .unwrap_err();

    assert!(matches!(
        error.downcast_ref::<RepositoryError>(),
        Some(RepositoryError::InvalidBranchName { .. })
    ));
    assert_eq!(committed_repository.repository.refs().len(), 1);
}

#[rstest]
fn invalid_name_is_reported_before_missing_commits(mut empty_repository: RepositoryFixture) {
    let error = empty_repository.repository.create_branch("x").unwrap_err();

    assert!(matches!(
        error.downcast_ref::<RepositoryError>(),
        Some(RepositoryError::InvalidBranchName { .. })
    ));
}

#[rstest]
fn create_branch_with_invalid_name_fails_on_cli(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_dit_command(init_repository_dir.path(), &["branch", "create", "ab"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("wrong name of branch: ab"));

    Ok(())
}
