//! Ignore rules for the working directory
//!
//! Only regular files whose name matches none of the configured patterns are
//! tracked. The pattern list is part of the persisted repository state.

pub mod ignore_filter;
