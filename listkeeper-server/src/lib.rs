//! listkeeper-server: HTTP/JSON API for lists and their dated items
//!
//! - [`models`]: items, lists and request validation
//! - [`db`]: PostgreSQL pool, schema bootstrap, repositories, in-memory store
//! - [`http`]: axum router, handlers and error mapping

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, ItemRepository, ListRepository, MemoryStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
