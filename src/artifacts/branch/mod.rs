pub mod branch;
pub mod branch_name;
pub mod head;

pub const VALID_BRANCH_NAME_REGEX: &str = r"^\w{3,}$";
pub const DEFAULT_BRANCH_NAME: &str = "master";
