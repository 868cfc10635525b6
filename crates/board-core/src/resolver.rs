//! Drop Target Resolver
//!
//! Maps a (dragged, hovered) pair to one store mutation. Every index is
//! recomputed from the current collections on each call.

use log::{debug, trace};

use crate::domain::{BoardResult, Id};
use crate::reorder::move_element;
use crate::session::{DragKey, EntityKind};
use crate::store::EntityStore;

/// Which mutation a drag-over applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing to do: same key, invalid combination or unknown ids
    Unchanged,
    /// A column moved to the hovered column's index
    ColumnMoved { from: usize, to: usize },
    /// An item moved within its own column
    ItemReordered { parent_id: Id, from: usize, to: usize },
    /// An item moved into another column, just before the hovered item
    ItemMovedAcross { from_parent: Id, to_parent: Id, index: usize },
    /// An item moved to the end of a hovered column
    ItemAppended { from_parent: Id, to_parent: Id, index: usize },
}

/// Drop target classification
enum DropCase {
    ColumnOverColumn { active: Id, over: Id },
    ItemOverItem { active: Id, over: Id },
    ItemOverColumn { active: Id, column: Id },
    Invalid,
}

fn classify(active: DragKey, over: DragKey) -> DropCase {
    if active == over {
        return DropCase::Invalid;
    }
    match (active.kind, over.kind) {
        (EntityKind::Column, EntityKind::Column) => DropCase::ColumnOverColumn { active: active.id, over: over.id },
        (EntityKind::Item, EntityKind::Item) => DropCase::ItemOverItem { active: active.id, over: over.id },
        (EntityKind::Item, EntityKind::Column) => DropCase::ItemOverColumn { active: active.id, column: over.id },
        (EntityKind::Column, EntityKind::Item) => DropCase::Invalid,
    }
}

/// Apply the drag-over of `active` onto `over`
pub fn resolve(store: &mut EntityStore, active: DragKey, over: DragKey) -> BoardResult<Resolution> {
    let resolution = match classify(active, over) {
        DropCase::ColumnOverColumn { active, over } => column_over_column(store, active, over)?,
        DropCase::ItemOverItem { active, over } => item_over_item(store, active, over)?,
        DropCase::ItemOverColumn { active, column } => item_over_column(store, active, column)?,
        DropCase::Invalid => Resolution::Unchanged,
    };
    match resolution {
        Resolution::Unchanged => trace!("drag over {:?} -> {:?}: unchanged", active, over),
        applied => debug!("drag over {:?} -> {:?}: {:?}", active, over, applied),
    }
    Ok(resolution)
}

fn column_over_column(store: &mut EntityStore, active: Id, over: Id) -> BoardResult<Resolution> {
    let (Some(from), Some(to)) = (store.column_index(active), store.column_index(over)) else {
        return Ok(Resolution::Unchanged);
    };
    move_element(store.columns_mut(), from, to)?;
    Ok(Resolution::ColumnMoved { from, to })
}

fn item_over_item(store: &mut EntityStore, active: Id, over: Id) -> BoardResult<Resolution> {
    let (Some(active_item), Some(over_item)) = (store.item(active), store.item(over)) else {
        return Ok(Resolution::Unchanged);
    };
    let from_parent = active_item.parent_id;
    let to_parent = over_item.parent_id;

    if from_parent == to_parent {
        let view = store.parent_view(to_parent);
        let (Some(from), Some(to)) = (position(&view, active), position(&view, over)) else {
            return Ok(Resolution::Unchanged);
        };
        store.reposition_in_parent(active, to)?;
        return Ok(Resolution::ItemReordered { parent_id: to_parent, from, to });
    }

    // Cross-parent: reparent, then insert immediately before the hovered item.
    store.set_parent(active, to_parent);
    let mut view = store.parent_view(to_parent);
    let Some(from) = position(&view, active) else {
        return Ok(Resolution::Unchanged);
    };
    view.remove(from);
    let Some(index) = position(&view, over) else {
        return Ok(Resolution::Unchanged);
    };
    store.reposition_in_parent(active, index)?;
    Ok(Resolution::ItemMovedAcross { from_parent, to_parent, index })
}

fn item_over_column(store: &mut EntityStore, active: Id, column: Id) -> BoardResult<Resolution> {
    let Some(from_parent) = store.item(active).map(|item| item.parent_id) else {
        return Ok(Resolution::Unchanged);
    };
    if !store.set_parent(active, column) {
        return Ok(Resolution::Unchanged);
    }
    // Reparenting keeps the global slot; the item still has to go last.
    let index = store.parent_view(column).len() - 1;
    store.reposition_in_parent(active, index)?;
    Ok(Resolution::ItemAppended { from_parent, to_parent: column, index })
}

fn position(view: &[Id], id: Id) -> Option<usize> {
    view.iter().position(|v| *v == id)
}
