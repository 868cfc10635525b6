//! Item Entity
//!
//! A labeled unit of work belonging to exactly one column.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::id::Id;

/// A card on the board
///
/// Position within its column is its index among items sharing the
/// same `parent_id`, in collection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: Id,
    /// Owning column
    pub parent_id: Id,
    /// Card text
    pub label: String,
}

impl Item {
    pub fn new(id: Id, parent_id: Id, label: String) -> Self {
        Self { id, parent_id, label }
    }

    /// Check if this item lives in the given column
    pub fn is_in(&self, column_id: Id) -> bool {
        self.parent_id == column_id
    }
}

impl Entity for Item {
    fn id(&self) -> Id {
        self.id
    }
}
