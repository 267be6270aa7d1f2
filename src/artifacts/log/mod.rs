//! Commit history traversal
//!
//! - `rev_list`: iteration over an ancestor chain following parent links
//!
//! History is strictly linear, so the walk is a plain linked-list traversal
//! from a starting commit back to the root.

pub mod rev_list;
