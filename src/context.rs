//! Application Context
//!
//! Drag-and-drop signals and engine callbacks shared with every column
//! and card via the Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::{DndCallbacks, DndSignals};
use board_core::DragKey;

#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Gesture state (pending press, active drag, hovered target)
    pub dnd: DndSignals<DragKey>,
    /// Engine entry points raised by the gesture layer
    pub callbacks: DndCallbacks<DragKey>,
}

impl BoardContext {
    pub fn new(dnd: DndSignals<DragKey>, callbacks: DndCallbacks<DragKey>) -> Self {
        Self { dnd, callbacks }
    }

    /// True while the trailing click of a drop should be swallowed
    pub fn click_suppressed(&self) -> bool {
        self.dnd.drag_just_ended_read.get_untracked()
    }
}

pub fn use_board_context() -> BoardContext {
    use_context::<BoardContext>().expect("BoardContext should be provided")
}
