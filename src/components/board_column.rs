//! Board Column Component
//!
//! A column header (drag handle, click to rename, delete) above the
//! column's ordered items.

use leptos::prelude::*;

use board_core::{DragKey, Id};
use leptos_dragdrop::*;

use crate::components::{commits_edit, ColumnDropZone, ItemCard};
use crate::context::use_board_context;
use crate::store::{store_read, store_update, use_app_store};

#[component]
pub fn BoardColumn(column_id: Id) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_board_context();
    let key = DragKey::column(column_id);

    let title = move || {
        store_read(&store, |board| {
            board.store().column(column_id).map(|col| col.title.clone()).unwrap_or_default()
        })
    };
    let item_ids = move || {
        store_read(&store, |board| board.items_in(column_id).iter().map(|item| item.id).collect::<Vec<_>>())
    };
    let is_editing = move || store_read(&store, |board| board.is_editing(key));
    let is_dragging = move || ctx.dnd.dragging_read.get() == Some(key);
    let is_drop_target = move || {
        ctx.dnd.over_read.get() == Some(key)
            && ctx.dnd.dragging_read.get().is_some_and(|active| active.is_column())
    };

    // DnD handlers: the header is the drag handle. The whole column is a
    // target for column drags only; item drags hitting the gaps between
    // cards are swallowed, and the tail drop zone takes item-over-column.
    let on_mousedown = make_on_mousedown(ctx.dnd, key);
    let on_mouseover = make_on_filtered_mouseover(ctx.dnd, ctx.callbacks, key, DragKey::is_column);
    let on_mouseleave = make_on_mouseleave(ctx.dnd);

    let column_class = move || {
        let mut c = String::from("column");
        if is_dragging() { c.push_str(" dragging"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };

    let end_edit = move || store_update(&store, |board| board.end_edit());

    view! {
        <div
            class=column_class
            on:mouseover=on_mouseover
            on:mouseleave=on_mouseleave
        >
            <div
                class="column-header"
                on:mousedown=on_mousedown
                on:click=move |_| {
                    if ctx.click_suppressed() { return; }
                    store_update(&store, |board| board.begin_edit(key));
                }
            >
                <Show
                    when=is_editing
                    fallback=move || view! { <span class="column-title">{title}</span> }
                >
                    <input
                        class="column-title-input"
                        autofocus=true
                        prop:value=title
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            store_update(&store, |board| board.update_column(column_id, &value));
                        }
                        on:blur=move |_| end_edit()
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if commits_edit(&ev.key()) { end_edit(); }
                        }
                    />
                </Show>

                <button
                    class="delete-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        store_update(&store, |board| board.delete_column(column_id));
                    }
                >
                    "×"
                </button>
            </div>

            <div class="column-body">
                <For
                    each=item_ids
                    key=|id| *id
                    children=move |id| view! { <ItemCard item_id=id /> }
                />
                <ColumnDropZone column_id=column_id />
            </div>

            <button
                class="add-item-btn"
                on:click=move |_| {
                    if let Err(err) = store_update(&store, |board| board.create_item(column_id)) {
                        web_sys::console::error_1(&format!("[BOARD] {}", err).into());
                    }
                }
            >
                "Add Task"
            </button>
        </div>
    }
}
