//! UI Components
//!
//! Board columns, item cards and the drag overlay.

mod board_column;
mod column_drop_zone;
mod item_card;
mod drag_ghost;

pub use board_column::BoardColumn;
pub use column_drop_zone::ColumnDropZone;
pub use item_card::ItemCard;
pub use drag_ghost::DragGhost;

/// Keys that leave edit mode for a title or label field
pub(crate) fn commits_edit(key: &str) -> bool {
    key == "Enter"
}
