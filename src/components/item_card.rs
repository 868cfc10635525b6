//! Item Card Component
//!
//! A draggable card; click to edit its label, Enter or blur to stop.

use leptos::prelude::*;

use board_core::{DragKey, Id};
use leptos_dragdrop::*;

use crate::components::commits_edit;
use crate::context::use_board_context;
use crate::store::{store_read, store_update, use_app_store};

#[component]
pub fn ItemCard(item_id: Id) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_board_context();
    let key = DragKey::item(item_id);

    let label = move || {
        store_read(&store, |board| {
            board.store().item(item_id).map(|item| item.label.clone()).unwrap_or_default()
        })
    };
    let is_editing = move || store_read(&store, |board| board.is_editing(key));
    let is_dragging = move || ctx.dnd.dragging_read.get() == Some(key);

    let on_mousedown = make_on_mousedown(ctx.dnd, key);
    let on_mouseover = make_on_target_mouseover(ctx.dnd, ctx.callbacks, key);
    let on_mouseleave = make_on_mouseleave(ctx.dnd);

    // The dragged card stays in place as a placeholder; the ghost follows the drag
    let card_class = move || if is_dragging() { "item-card placeholder" } else { "item-card" };

    let end_edit = move || store_update(&store, |board| board.end_edit());

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseover=on_mouseover
            on:mouseleave=on_mouseleave
            on:click=move |_| {
                if ctx.click_suppressed() { return; }
                store_update(&store, |board| board.begin_edit(key));
            }
        >
            <Show
                when=is_editing
                fallback=move || view! { <p class="item-label">{label}</p> }
            >
                <textarea
                    class="item-label-input"
                    autofocus=true
                    prop:value=label
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        store_update(&store, |board| board.update_item(item_id, &value));
                    }
                    on:blur=move |_| end_edit()
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if commits_edit(&ev.key()) {
                            ev.prevent_default();
                            end_edit();
                        }
                    }
                />
            </Show>

            <button
                class="delete-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    store_update(&store, |board| board.delete_item(item_id));
                }
            >
                "×"
            </button>
        </div>
    }
}
