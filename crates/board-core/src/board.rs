//! Board Facade
//!
//! Composes the entity store, the drag session and the edit target into the
//! single surface the presentation layer drives. All operations are
//! synchronous and complete before the next input event is handled.

use log::{debug, trace};
use serde::Serialize;

use crate::config::BoardConfig;
use crate::domain::{BoardResult, Column, Id, Item};
use crate::resolver::{self, Resolution};
use crate::session::{DragKey, DragSession, EntityKind};
use crate::store::EntityStore;

/// Detached rendering of the dragged entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Ghost {
    Column { column: Column, items: Vec<Item> },
    Item { item: Item },
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    store: EntityStore,
    session: DragSession,
    editing: Option<DragKey>,
    config: BoardConfig,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    // ========================
    // CRUD
    // ========================

    pub fn create_column(&mut self) -> BoardResult<Column> {
        self.store.create_column(&self.config)
    }

    pub fn update_column(&mut self, id: Id, title: &str) -> bool {
        self.store.update_column(id, title)
    }

    pub fn delete_column(&mut self, id: Id) -> bool {
        let dragged_item_inside = match self.session {
            DragSession::DraggingItem(item_id) => self.store.item(item_id).is_some_and(|item| item.is_in(id)),
            _ => false,
        };
        let edited_item_inside = match self.editing {
            Some(DragKey { kind: EntityKind::Item, id: item_id }) => {
                self.store.item(item_id).is_some_and(|item| item.is_in(id))
            }
            _ => false,
        };
        if !self.store.delete_column(id) {
            return false;
        }
        if dragged_item_inside {
            self.session.cancel();
        }
        if edited_item_inside {
            self.editing = None;
        }
        self.forget(DragKey::column(id));
        true
    }

    pub fn create_item(&mut self, parent_id: Id) -> BoardResult<Item> {
        self.store.create_item(parent_id, &self.config)
    }

    pub fn update_item(&mut self, id: Id, label: &str) -> bool {
        self.store.update_item(id, label)
    }

    pub fn delete_item(&mut self, id: Id) -> bool {
        if !self.store.delete_item(id) {
            return false;
        }
        self.forget(DragKey::item(id));
        true
    }

    /// Drop any transient reference to a deleted entity
    fn forget(&mut self, key: DragKey) {
        if self.session.is_dragging(key) {
            debug!("dragged entity {:?} deleted, ending session", key);
            self.session.cancel();
        }
        if self.editing == Some(key) {
            self.editing = None;
        }
    }

    // ========================
    // Drag lifecycle
    // ========================

    /// Begin dragging `key`.
    ///
    /// Called once the pointer crossed the activation distance. Refused for
    /// unknown entities, for the entity under edit, and while another drag
    /// is active.
    pub fn drag_start(&mut self, key: DragKey) -> bool {
        if !self.exists(key) || self.editing == Some(key) {
            trace!("drag start {:?} refused", key);
            return false;
        }
        let started = self.session.start(key);
        if started {
            debug!("drag start {:?}", key);
        }
        started
    }

    /// Hovered target changed. Ignored unless `active` is the dragged entity.
    pub fn drag_over(&mut self, active: DragKey, over: DragKey) -> BoardResult<Resolution> {
        if !self.session.is_dragging(active) {
            trace!("drag over {:?} ignored: not the active drag", active);
            return Ok(Resolution::Unchanged);
        }
        resolver::resolve(&mut self.store, active, over)
    }

    pub fn drag_end(&mut self) {
        if let Some(key) = self.session.active() {
            debug!("drag end {:?}", key);
        }
        self.session.end();
    }

    pub fn drag_cancel(&mut self) {
        if let Some(key) = self.session.active() {
            debug!("drag cancel {:?}", key);
        }
        self.session.cancel();
    }

    // ========================
    // Edit mode
    // ========================

    /// Enter label editing for `key`. Refused for the dragged entity.
    pub fn begin_edit(&mut self, key: DragKey) -> bool {
        if !self.exists(key) || self.session.is_dragging(key) {
            return false;
        }
        self.editing = Some(key);
        true
    }

    pub fn end_edit(&mut self) {
        self.editing = None;
    }

    pub fn editing(&self) -> Option<DragKey> {
        self.editing
    }

    pub fn is_editing(&self, key: DragKey) -> bool {
        self.editing == Some(key)
    }

    // ========================
    // Read model
    // ========================

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn columns(&self) -> &[Column] {
        self.store.columns()
    }

    pub fn items_in(&self, column_id: Id) -> Vec<&Item> {
        self.store.items_in(column_id)
    }

    pub fn session(&self) -> DragSession {
        self.session
    }

    /// The dragged entity, for rendering it detached from its position
    pub fn ghost(&self) -> Option<Ghost> {
        match self.session {
            DragSession::Idle => None,
            DragSession::DraggingColumn(id) => {
                let column = self.store.column(id)?.clone();
                let items = self.store.items_in(id).into_iter().cloned().collect();
                Some(Ghost::Column { column, items })
            }
            DragSession::DraggingItem(id) => {
                let item = self.store.item(id)?.clone();
                Some(Ghost::Item { item })
            }
        }
    }

    fn exists(&self, key: DragKey) -> bool {
        match key.kind {
            EntityKind::Column => self.store.column(key.id).is_some(),
            EntityKind::Item => self.store.item(key.id).is_some(),
        }
    }
}
