use crate::areas::repository::Repository;

impl Repository {
    /// Human readable description of where head points
    pub fn head_description(&self) -> String {
        match self.refs().head() {
            Some(head) => head.to_string(),
            None => "There is no head".to_string(),
        }
    }
}
