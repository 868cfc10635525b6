//! Identifiers
//!
//! Opaque keys shared by columns and items.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity::{BoardError, BoardResult};

/// Opaque entity identifier, compared by equality only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(u32);

impl Id {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Id {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Monotonic id source.
///
/// One allocator serves both columns and items so that a column id never
/// collides with an item id, and ids are never reused after a delete.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    /// Fails instead of wrapping at `u32::MAX`; ids are never reused.
    pub fn next_id(&mut self) -> BoardResult<Id> {
        let id = Id(self.next);
        self.next = self.next.checked_add(1).ok_or(BoardError::IdsExhausted)?;
        Ok(id)
    }
}
