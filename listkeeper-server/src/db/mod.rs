//! Database layer - connection pool, schema bootstrap and repositories
//!
//! # Design Principles
//!
//! - The pool is injected into each repository, never held in a global
//! - Handlers see storage only through the repository traits
//! - Multi-statement reads and the list cascade run in a transaction
//! - Zero affected rows is `NotFound`, not success

pub mod memory;
pub mod pool;
pub mod repos;
pub mod schema;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use schema::ensure_schema;
