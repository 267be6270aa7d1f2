use crate::areas::repository::Repository;
use crate::artifacts::status::file_state::FileState;
use crate::artifacts::status::inspector::Inspector;

impl Repository {
    /// Status of every tracked candidate file in the working directory
    ///
    /// Candidates are the regular, non-ignored files at the top level,
    /// reported in name order.
    pub fn info(&self) -> anyhow::Result<Vec<FileState>> {
        let matcher = self.ignore_filter().matcher()?;
        let inspector = Inspector::new(self.database(), self.last_commit_time());

        self.workspace()
            .list_files(&matcher)?
            .into_iter()
            .map(|path| {
                let modified_time = self.workspace().modified_time(&path)?;
                let status = inspector.classify(&path, modified_time);

                Ok(FileState::new(path, status))
            })
            .collect()
    }
}
