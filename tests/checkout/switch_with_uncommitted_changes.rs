use crate::common::file::read_lines;
use crate::common::repository::{RepositoryFixture, committed_repository};
use dit::commands::porcelain::checkout::SwitchOutcome;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn switch_with_modified_file(mut committed_repository: RepositoryFixture) {
    let first = committed_repository
        .repository
        .refs()
        .read_head()
        .unwrap()
        .unwrap();
    committed_repository.write("a.txt", &["y"]);
    committed_repository.commit("second");
    committed_repository.write("a.txt", &["draft"]);

    let outcome = committed_repository
        .repository
        .switch_to(first.as_ref())
        .unwrap();

    assert_eq!(outcome, SwitchOutcome::UncommittedChanges);
    assert_eq!(outcome.to_string(), "make commit before switching");
    assert_eq!(
        read_lines(&committed_repository.dir.path().join("a.txt")),
        vec!["draft".to_string()]
    );
    assert_eq!(
        committed_repository.repository.head_description(),
        "branch name master"
    );
}

#[rstest]
fn switch_with_untracked_file(mut committed_repository: RepositoryFixture) {
    committed_repository
        .repository
        .create_branch("feature")
        .unwrap();
    committed_repository.write("b.txt", &["b"]);
    committed_repository.commit("on feature");
    committed_repository.write("c.txt", &["c"]);

    let outcome = committed_repository.repository.switch_to("master").unwrap();

    assert_eq!(outcome, SwitchOutcome::UncommittedChanges);
    assert!(committed_repository.dir.path().join("c.txt").exists());
}
