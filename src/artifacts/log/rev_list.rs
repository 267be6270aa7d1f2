use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use derive_new::new;

/// Walk of an ancestor chain, newest commit first
///
/// Yields an error and stops if a link points at a commit that is not in
/// the database.
#[derive(Clone, new)]
pub struct RevList<'r> {
    database: &'r Database,
    current_commit_id: Option<CommitId>,
}

impl<'r> Iterator for RevList<'r> {
    type Item = anyhow::Result<&'r Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_id = self.current_commit_id.take()?;

        match self.database.load_commit(&commit_id) {
            Ok(commit) => {
                // Move to the parent commit for the next iteration
                self.current_commit_id = commit.parent().cloned();
                Some(Ok(commit))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
