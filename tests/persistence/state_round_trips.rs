use crate::common::command::{dit_output, init_repository_dir, repository_dir, run_dit_command};
use crate::common::file::{list_dir, write_lines};
use crate::common::repository::{RepositoryFixture, committed_repository};
use assert_fs::TempDir;
use dit::areas::repository::Repository;
use dit::areas::storage::{STATE_FILE_NAME, Storage};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn state_round_trips(mut committed_repository: RepositoryFixture) {
    committed_repository
        .repository
        .create_branch("feature")
        .unwrap();
    committed_repository
        .repository
        .add_ignore_pattern(r".*\.bak")
        .unwrap();
    committed_repository.write("b.txt", &["b", "", "c"]);
    committed_repository.commit("feature");

    let storage = Storage::new(
        committed_repository
            .dir
            .path()
            .join(STATE_FILE_NAME)
            .into_boxed_path(),
    );
    storage.save(committed_repository.repository.state()).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(&loaded, committed_repository.repository.state());

    let reopened = Repository::with_state(committed_repository.dir.path(), loaded).unwrap();
    assert_eq!(
        reopened.info().unwrap(),
        committed_repository.repository.info().unwrap()
    );
}

#[rstest]
fn missing_state_file_loads_empty_state(repository_dir: TempDir) {
    let storage = Storage::new(repository_dir.path().join(STATE_FILE_NAME).into_boxed_path());

    assert!(!storage.exists());
    let state = storage.load().unwrap();

    let repository = Repository::with_state(repository_dir.path(), state).unwrap();
    assert!(repository.database().is_empty());
    assert!(repository.refs().head().is_none());
}

#[rstest]
fn state_persists_between_invocations(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    assert!(dir.join(STATE_FILE_NAME).exists());

    dit_output(dir, &["branch", "create", "feature"]);
    write_lines(dir.join("3.txt"), &["three"]);
    dit_output(dir, &["commit", "-m", "third file"]);

    assert_eq!(dit_output(dir, &["head"]), "branch name feature\n");
    assert_eq!(dit_output(dir, &["branch", "list"]), "feature*\nmaster\n");
    assert_eq!(list_dir(dir), vec!["1.txt", "2.txt", "3.txt"]);

    Ok(())
}

#[rstest]
fn read_only_commands_leave_no_state_file(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    dit_output(dir, &["info"]);
    dit_output(dir, &["log"]);
    dit_output(dir, &["head"]);

    assert!(!dir.join(STATE_FILE_NAME).exists());

    Ok(())
}

#[rstest]
fn custom_state_file_name(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    write_lines(dir.join("a.txt"), &["a"]);

    run_dit_command(dir, &["commit", "-m", "init"])
        .env("DIT_STATE_FILE", ".custom_state")
        .assert()
        .success();

    assert!(dir.join(".custom_state").exists());
    assert!(!dir.join(STATE_FILE_NAME).exists());

    run_dit_command(dir, &["log"])
        .env("DIT_STATE_FILE", ".custom_state")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(": init\n"));

    Ok(())
}

#[rstest]
fn corrupted_state_file_is_reported(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    std::fs::write(dir.join(STATE_FILE_NAME), "not json")?;

    run_dit_command(dir, &["log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupted state file"));

    Ok(())
}
