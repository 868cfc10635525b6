//! Drag Session
//!
//! Explicit state machine for the entity currently being dragged.
//! The presentation layer is the only event source; the session never
//! touches the store.

use serde::{Deserialize, Serialize};

use crate::domain::Id;

/// Declared kind of a draggable or hoverable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Column,
    Item,
}

/// Typed key identifying a drag source or drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragKey {
    pub kind: EntityKind,
    pub id: Id,
}

impl DragKey {
    pub const fn column(id: Id) -> Self {
        Self { kind: EntityKind::Column, id }
    }

    pub const fn item(id: Id) -> Self {
        Self { kind: EntityKind::Item, id }
    }

    pub fn is_column(&self) -> bool {
        self.kind == EntityKind::Column
    }

    pub fn is_item(&self) -> bool {
        self.kind == EntityKind::Item
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    DraggingColumn(Id),
    DraggingItem(Id),
}

impl DragSession {
    /// Idle -> Dragging. Refused while another drag is active.
    pub fn start(&mut self, key: DragKey) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = match key.kind {
            EntityKind::Column => Self::DraggingColumn(key.id),
            EntityKind::Item => Self::DraggingItem(key.id),
        };
        true
    }

    /// Drop: back to Idle. Whatever the last drag-over committed is final.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    /// Abort: back to Idle with no rollback
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn active(&self) -> Option<DragKey> {
        match *self {
            Self::Idle => None,
            Self::DraggingColumn(id) => Some(DragKey::column(id)),
            Self::DraggingItem(id) => Some(DragKey::item(id)),
        }
    }

    pub fn is_dragging(&self, key: DragKey) -> bool {
        self.active() == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_kind_predicates() {
        assert!(DragKey::column(Id::new(4)).is_column());
        assert!(!DragKey::column(Id::new(4)).is_item());
        assert!(DragKey::item(Id::new(4)).is_item());
    }

    #[test]
    fn test_start_and_end() {
        let mut session = DragSession::default();
        assert!(session.start(DragKey::column(Id::new(1))));
        assert_eq!(session, DragSession::DraggingColumn(Id::new(1)));
        assert!(session.is_dragging(DragKey::column(Id::new(1))));
        assert!(!session.is_dragging(DragKey::item(Id::new(1))));
        session.end();
        assert!(session.is_idle());
    }

    #[test]
    fn test_second_start_is_refused() {
        let mut session = DragSession::default();
        assert!(session.start(DragKey::item(Id::new(4))));
        assert!(!session.start(DragKey::column(Id::new(1))));
        assert_eq!(session.active(), Some(DragKey::item(Id::new(4))));
    }

    #[test]
    fn test_cancel_from_idle_is_harmless() {
        let mut session = DragSession::default();
        session.cancel();
        assert_eq!(session.active(), None);
    }
}
