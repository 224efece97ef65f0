//! Domain models
//!
//! Items and lists as stored, plus the creation payloads handed to the
//! repositories. IDs and timestamps are always assigned by storage.

pub mod item;
pub mod list;
pub mod validation;

pub use validation::ValidationError;
pub use item::{Item, ItemDate, ItemId, NewItem};
pub use list::{List, ListId, NewList};
