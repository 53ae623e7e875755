//! Todo storage for the to-do service.
//!
//! This crate provides the storage abstraction for to-do items: a
//! [`TodoStore`] trait, a SQLite-backed implementation for production use,
//! and an in-memory implementation for tests.

mod error;
mod memory;
mod sqlite;
mod traits;

pub use error::*;
pub use memory::*;
pub use sqlite::*;
pub use traits::*;
