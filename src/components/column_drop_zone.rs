//! Column Drop Zone Component
//!
//! The free space below a column's last card. Dropping an item here puts it
//! at the end of the column; gaps between cards are not targets.

use leptos::prelude::*;

use board_core::{DragKey, Id};
use leptos_dragdrop::*;

use crate::context::use_board_context;

#[component]
pub fn ColumnDropZone(column_id: Id) -> impl IntoView {
    let ctx = use_board_context();
    let key = DragKey::column(column_id);

    // Only item drags land here; column drags target the column itself
    let on_mouseover = make_on_filtered_mouseover(ctx.dnd, ctx.callbacks, key, DragKey::is_item);
    let on_mouseleave = make_on_mouseleave(ctx.dnd);

    let is_active = move || {
        ctx.dnd.over_read.get() == Some(key)
            && ctx.dnd.dragging_read.get().is_some_and(|active| active.is_item())
    };

    view! {
        <div
            class=move || if is_active() { "column-drop-zone active" } else { "column-drop-zone" }
            on:mouseover=on_mouseover
            on:mouseleave=on_mouseleave
        />
    }
}
