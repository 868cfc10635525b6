//! Domain Layer - Core Entity Trait
//!
//! Every board entity has a unique identifier; position is never stored,
//! it is the entity's index in its owning collection.

use thiserror::Error;

use super::id::Id;

/// Core trait for board entities
pub trait Entity: Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> Id;
}

/// Index of the entity with `id` in `entities`, computed fresh on each call
pub fn index_of<T: Entity>(entities: &[T], id: Id) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}

/// Common result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Board-level errors
///
/// Updates and deletes of unknown ids are not errors; they are no-ops.
#[derive(Debug, Error)]
pub enum BoardError {
    /// An item was created under a column that does not exist.
    #[error("invalid parent: no column with id {0}")]
    InvalidParent(Id),

    /// A reorder was requested with a stale or out-of-range index.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Every `u32` identifier has been handed out.
    #[error("identifier space exhausted")]
    IdsExhausted,

    /// Board configuration could not be parsed.
    #[error("invalid board config: {0}")]
    Config(#[from] serde_json::Error),
}
