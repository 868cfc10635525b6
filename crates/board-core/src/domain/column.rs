//! Column Entity
//!
//! A named container of items. Its position on the board is its index
//! in the columns collection.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::id::Id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique identifier
    pub id: Id,
    /// Header text
    pub title: String,
}

impl Column {
    pub fn new(id: Id, title: String) -> Self {
        Self { id, title }
    }
}

impl Entity for Column {
    fn id(&self) -> Id {
        self.id
    }
}
