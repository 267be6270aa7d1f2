//! Porcelain commands (user-facing operations)
//!
//! Each command returns plain data or an outcome value describing what
//! happened. Situations the user can fix (nothing to commit, a duplicate
//! branch name, uncommitted work blocking a switch) are outcomes, not errors.
//!
//! ## Commands
//!
//! - `commit`: Record the changed files as a new commit
//! - `status`: Classify the working directory files
//! - `branch`: Create, rename, delete or list branches
//! - `checkout`: Switch to a branch or commit
//! - `log`: Show commit history
//! - `head`: Describe the current head
//! - `ignore`: Add an ignore pattern

pub mod branch;
pub mod checkout;
pub mod commit;
pub mod head;
pub mod ignore;
pub mod log;
pub mod status;
