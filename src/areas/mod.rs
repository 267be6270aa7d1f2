//! Core repository components
//!
//! This module contains the building blocks of a repository:
//!
//! - `database`: Commit store and latest known version of every path
//! - `refs`: Branch table and the head pointer
//! - `repository`: Repository state and coordination of the other areas
//! - `storage`: Persistence of the repository state
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod refs;
pub mod repository;
pub mod storage;
pub mod workspace;
