//! Kanban Board Frontend App
//!
//! Owns the board store, binds the gesture layer to the engine and lays out
//! the columns.

use leptos::prelude::*;
use reactive_stores::Store;

use board_core::{BoardConfig, DragKey, Resolution};
use leptos_dragdrop::*;

use crate::components::{BoardColumn, DragGhost};
use crate::context::BoardContext;
use crate::store::{store_read, store_update, AppState, AppStore};

/// Board settings shipped with the page
const BOARD_CONFIG: &str = include_str!("../board.config.json");

fn load_config() -> BoardConfig {
    match BoardConfig::from_json(BOARD_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::warn_1(&format!("[BOARD] {}; using defaults", err).into());
            BoardConfig::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let dnd = create_dnd_signals::<DragKey>(config.activation_distance_px);
    let store: AppStore = Store::new(AppState::new(config));
    provide_context(store);

    let callbacks = DndCallbacks {
        on_start: Callback::new(move |key: DragKey| {
            let started = store_update(&store, |board| board.drag_start(key));
            web_sys::console::log_1(&format!("[DND] start {:?}: {}", key, started).into());
            started
        }),
        on_over: Callback::new(move |(active, over): (DragKey, DragKey)| {
            match store_update(&store, |board| board.drag_over(active, over)) {
                Ok(Resolution::Unchanged) => {}
                Ok(resolution) => {
                    web_sys::console::log_1(&format!("[DND] over {:?}: {:?}", over, resolution).into());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[DND] over {:?} failed: {}", over, err).into());
                }
            }
        }),
        on_end: Callback::new(move |_: ()| {
            store_update(&store, |board| board.drag_end());
        }),
        on_cancel: Callback::new(move |_: ()| {
            web_sys::console::log_1(&"[DND] cancelled".into());
            store_update(&store, |board| board.drag_cancel());
        }),
    };

    bind_global_handlers(dnd, callbacks);
    provide_context(BoardContext::new(dnd, callbacks));

    // A torn-down board stops dragging; committed moves stay.
    on_cleanup(move || store_update(&store, |board| board.drag_cancel()));

    let column_ids = move || store_read(&store, |board| board.columns().iter().map(|col| col.id).collect::<Vec<_>>());

    view! {
        <div class="board-layout">
            <div class="board-columns">
                <For
                    each=column_ids
                    key=|id| *id
                    children=move |id| view! { <BoardColumn column_id=id /> }
                />
            </div>

            <button
                class="add-column-btn"
                on:click=move |_| {
                    if let Err(err) = store_update(&store, |board| board.create_column()) {
                        web_sys::console::error_1(&format!("[BOARD] {}", err).into());
                    }
                }
            >
                "Add Column"
            </button>

            <DragGhost />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_config_parses() {
        let config = BoardConfig::from_json(BOARD_CONFIG).unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(load_config(), config);
    }
}
