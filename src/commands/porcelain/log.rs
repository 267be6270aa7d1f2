use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::CommitMessage;

impl Repository {
    /// History reachable from head, newest first
    ///
    /// Empty when there is no head yet. A missing commit anywhere on the
    /// chain is reported as an error rather than cutting the history short.
    pub fn log(&self) -> anyhow::Result<Vec<CommitMessage>> {
        let head_commit_id = self.refs().read_head()?;

        self.database()
            .rev_list(head_commit_id)
            .map(|commit| commit.map(CommitMessage::from))
            .collect()
    }
}
