//! Entity Store
//!
//! Exclusive owner of the columns and items collections.
//! Order is the collection order; there are no rank fields.

use log::{debug, warn};

use crate::config::BoardConfig;
use crate::domain::{index_of, BoardError, BoardResult, Column, Id, IdAllocator, Item};

#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    pub(super) columns: Vec<Column>,
    pub(super) items: Vec<Item>,
    ids: IdAllocator,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Columns
    // ========================

    /// Append a column with a fresh id and a positional default title
    pub fn create_column(&mut self, config: &BoardConfig) -> BoardResult<Column> {
        let column = Column::new(self.ids.next_id()?, config.column_title(self.columns.len() + 1));
        debug!("create column {} ({:?})", column.id, column.title);
        self.columns.push(column.clone());
        Ok(column)
    }

    /// Replace a column title in place. Unknown ids are ignored.
    pub fn update_column(&mut self, id: Id, title: &str) -> bool {
        match self.columns.iter_mut().find(|col| col.id == id) {
            Some(col) => {
                col.title = title.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove a column together with all of its items
    pub fn delete_column(&mut self, id: Id) -> bool {
        let Some(index) = self.column_index(id) else {
            return false;
        };
        self.columns.remove(index);
        let before = self.items.len();
        self.items.retain(|item| item.parent_id != id);
        debug!("delete column {} (cascaded {} items)", id, before - self.items.len());
        true
    }

    // ========================
    // Items
    // ========================

    /// Append an item to the end of `parent_id`'s column
    pub fn create_item(&mut self, parent_id: Id, config: &BoardConfig) -> BoardResult<Item> {
        if self.column(parent_id).is_none() {
            warn!("create item under missing column {}", parent_id);
            return Err(BoardError::InvalidParent(parent_id));
        }
        let item = Item::new(self.ids.next_id()?, parent_id, config.item_label(self.items.len() + 1));
        debug!("create item {} in column {}", item.id, parent_id);
        self.items.push(item.clone());
        Ok(item)
    }

    /// Replace an item label; parent and position are unchanged
    pub fn update_item(&mut self, id: Id, label: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.label = label.to_string();
                true
            }
            None => false,
        }
    }

    pub fn delete_item(&mut self, id: Id) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    // ========================
    // Read model
    // ========================

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Every item in collection order. Only the order within one parent
    /// is meaningful.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items of one column, in order
    pub fn items_in(&self, column_id: Id) -> Vec<&Item> {
        self.items.iter().filter(|item| item.is_in(column_id)).collect()
    }

    pub fn column(&self, id: Id) -> Option<&Column> {
        self.columns.iter().find(|col| col.id == id)
    }

    pub fn item(&self, id: Id) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn column_index(&self, id: Id) -> Option<usize> {
        index_of(&self.columns, id)
    }

    pub(crate) fn columns_mut(&mut self) -> &mut Vec<Column> {
        &mut self.columns
    }

    /// Reassign an item's column without repositioning it.
    ///
    /// Only the resolver calls this, and always follows it with a
    /// placement in the new parent's view.
    pub(crate) fn set_parent(&mut self, item_id: Id, parent_id: Id) -> bool {
        if self.column(parent_id).is_none() {
            return false;
        }
        match self.items.iter_mut().find(|item| item.id == item_id) {
            Some(item) => {
                item.parent_id = parent_id;
                true
            }
            None => false,
        }
    }
}
