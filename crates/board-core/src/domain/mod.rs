//! Domain Layer
//!
//! Board entities, identifiers and the error type.
//! This layer has no dependencies beyond serde and thiserror.

mod entity;
mod id;
mod column;
mod item;

pub use entity::{Entity, BoardError, BoardResult, index_of};
pub use id::{Id, IdAllocator};
pub use column::Column;
pub use item::Item;
