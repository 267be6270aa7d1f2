//! Checkout of commits and branches
//!
//! Switching replaces the tracked content of the working directory with the
//! state recorded at the target commit, rebuilt from the deltas along its
//! ancestor chain.

pub mod migration;
