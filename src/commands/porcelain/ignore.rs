use crate::areas::repository::Repository;

impl Repository {
    /// Add an alternative ignore pattern
    ///
    /// # Returns
    ///
    /// A description of the combined pattern now in effect
    pub fn add_ignore_pattern(&mut self, pattern: &str) -> anyhow::Result<String> {
        let ignore_filter = &mut self.state_mut().ignore_filter;
        ignore_filter.add_pattern(pattern)?;
        log::info!("added ignore pattern {}", pattern);

        Ok(format!(
            "Regex for files ignored is {}",
            ignore_filter.combined()
        ))
    }
}
