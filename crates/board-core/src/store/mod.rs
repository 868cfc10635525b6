//! Store Layer
//!
//! The entity store split into specialized sub-modules:
//! - entity_store: ownership of both collections, CRUD and cascade delete
//! - item_positioning: per-parent projection of the items collection

mod entity_store;
mod item_positioning;

#[cfg(test)]
mod tests;

pub use entity_store::EntityStore;
