//! Global Application State Store
//!
//! The board engine lives inside a Leptos reactive_stores store; every
//! mutation goes through a write guard so the view re-renders from the
//! engine's read model.

use leptos::prelude::*;
use reactive_stores::Store;
use board_core::{Board, BoardConfig};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Columns, items, drag session and edit target
    pub board: Board,
}

impl AppState {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            board: Board::with_config(config),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Read the board, tracking the access
pub fn store_read<R>(store: &AppStore, f: impl FnOnce(&Board) -> R) -> R {
    f(&*store.board().read())
}

/// Mutate the board and notify subscribers
pub fn store_update<R>(store: &AppStore, f: impl FnOnce(&mut Board) -> R) -> R {
    f(&mut *store.board().write())
}
