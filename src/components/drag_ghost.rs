//! Drag Ghost Component
//!
//! Detached overlay of the entity being dragged.

use leptos::prelude::*;

use board_core::Ghost;

use crate::store::{store_read, use_app_store};

#[component]
pub fn DragGhost() -> impl IntoView {
    let store = use_app_store();
    let ghost = move || store_read(&store, |board| board.ghost());

    view! {
        <div class="drag-overlay">
            {move || match ghost() {
                Some(Ghost::Column { column, items }) => view! {
                    <div class="column ghost">
                        <div class="column-header">
                            <span class="column-title">{column.title}</span>
                        </div>
                        <div class="column-body">
                            {items.into_iter().map(|item| view! {
                                <div class="item-card">
                                    <p class="item-label">{item.label}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                }.into_any(),
                Some(Ghost::Item { item }) => view! {
                    <div class="item-card ghost">
                        <p class="item-label">{item.label}</p>
                    </div>
                }.into_any(),
                None => view! { <div class="hidden"></div> }.into_any(),
            }}
        </div>
    }
}
