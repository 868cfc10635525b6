//! Item Positioning Operations
//!
//! Items of every column share one collection, so positions must never be
//! computed on the flattened sequence. Reordering goes through a per-parent
//! projection: read the parent's ids in order, reorder that view, then write
//! it back into the slots the parent already occupies.

use crate::domain::{BoardError, BoardResult, Id};
use crate::reorder::move_element;

use super::entity_store::EntityStore;

impl EntityStore {
    /// Ordered ids of the items in `parent_id`
    pub fn parent_view(&self, parent_id: Id) -> Vec<Id> {
        self.items
            .iter()
            .filter(|item| item.is_in(parent_id))
            .map(|item| item.id)
            .collect()
    }

    /// Index of `item_id` within its parent's view
    pub fn index_in_parent(&self, item_id: Id) -> Option<usize> {
        let item = self.item(item_id)?;
        self.parent_view(item.parent_id).iter().position(|id| *id == item_id)
    }

    /// Write a reordered view back through the projection.
    ///
    /// `view` must be a permutation of the current `parent_view(parent_id)`.
    /// Items of other parents keep their global slots.
    pub(crate) fn write_parent_view(&mut self, parent_id: Id, view: &[Id]) -> BoardResult<()> {
        let slots: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_in(parent_id))
            .map(|(slot, _)| slot)
            .collect();
        if slots.len() != view.len() {
            return Err(BoardError::IndexOutOfRange { index: view.len(), len: slots.len() });
        }

        let mut reordered = Vec::with_capacity(view.len());
        for id in view {
            let item = slots
                .iter()
                .map(|slot| &self.items[*slot])
                .find(|item| item.id == *id)
                .ok_or(BoardError::IndexOutOfRange { index: view.len(), len: slots.len() })?;
            reordered.push(item.clone());
        }
        for (slot, item) in slots.into_iter().zip(reordered) {
            self.items[slot] = item;
        }
        Ok(())
    }

    /// Move an item within its current parent's view
    pub fn reposition_in_parent(&mut self, item_id: Id, target: usize) -> BoardResult<()> {
        let Some(parent_id) = self.item(item_id).map(|item| item.parent_id) else {
            return Ok(());
        };
        let mut view = self.parent_view(parent_id);
        let len = view.len();
        let source = view
            .iter()
            .position(|id| *id == item_id)
            .ok_or(BoardError::IndexOutOfRange { index: len, len })?;
        move_element(&mut view, source, target)?;
        self.write_parent_view(parent_id, &view)
    }
}
