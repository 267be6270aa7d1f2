//! Version control data structures and algorithms
//!
//! - `branch`: Branch names, branches and the head pointer
//! - `checkout`: Reconstruction of a commit's files in the working directory
//! - `ignore`: Ignore patterns for working-directory entries
//! - `log`: Commit history traversal
//! - `objects`: Commits and committed file versions
//! - `status`: Working directory status classification

pub mod branch;
pub mod checkout;
pub mod ignore;
pub mod log;
pub mod objects;
pub mod status;
