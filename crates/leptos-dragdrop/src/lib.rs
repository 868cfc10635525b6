//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for Leptos, generic over the key type of the
//! draggable entities. A press only becomes a drag once the pointer moved
//! past the activation distance, so plain clicks still reach the element.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Where a press started, before it became a drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragOrigin<K> {
    pub key: K,
    pub x: i32,
    pub y: i32,
}

impl<K> DragOrigin<K> {
    /// True once either axis moved strictly more than `threshold` pixels
    pub fn activates(&self, x: i32, y: i32, threshold: i32) -> bool {
        let dx = (x - self.x).abs();
        let dy = (y - self.y).abs();
        dx > threshold || dy > threshold
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<K: Send + Sync + 'static> {
    pub dragging_read: ReadSignal<Option<K>>,
    pub dragging_write: WriteSignal<Option<K>>,
    /// Currently hovered target
    pub over_read: ReadSignal<Option<K>>,
    pub over_write: WriteSignal<Option<K>>,
    /// Set briefly after a drop so the trailing click can be ignored
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pressed but not yet dragging
    pub pending_read: ReadSignal<Option<DragOrigin<K>>>,
    pub pending_write: WriteSignal<Option<DragOrigin<K>>>,
    /// Activation distance in pixels
    pub threshold: i32,
}

/// Callbacks into the owner of the drag state
#[derive(Clone, Copy)]
pub struct DndCallbacks<K: Send + Sync + 'static> {
    /// Activation; returning false refuses the drag
    pub on_start: Callback<K, bool>,
    /// Hovered target changed: (active, over)
    pub on_over: Callback<(K, K)>,
    pub on_end: Callback<()>,
    pub on_cancel: Callback<()>,
}

pub fn create_dnd_signals<K>(threshold: i32) -> DndSignals<K>
where
    K: Copy + Send + Sync + 'static,
{
    let (dragging_read, dragging_write) = signal(None::<K>);
    let (over_read, over_write) = signal(None::<K>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<DragOrigin<K>>);
    DndSignals {
        dragging_read,
        dragging_write,
        over_read,
        over_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        threshold,
    }
}

/// End drag operation
pub fn end_drag<K>(dnd: &DndSignals<K>)
where
    K: Copy + Send + Sync + 'static,
{
    dnd.dragging_write.set(None);
    dnd.over_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for drag sources
/// Records a pending drag with its start position
pub fn make_on_mousedown<K>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Presses on controls never start a drag
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        // Nested sources: the innermost one wins
        ev.stop_propagation();
        dnd.pending_write.set(Some(DragOrigin { key, x: ev.client_x(), y: ev.client_y() }));
    }
}

/// Decide whether hovering `key` is a new drop target for the active drag.
///
/// Returns the `(active, over)` pair to report, or `None` when nothing is
/// being dragged, the target is the dragged entity itself, it is already the
/// current target, or `accepts` rejects the active key.
pub fn hover_change<K>(active: Option<K>, current: Option<K>, key: K, accepts: fn(&K) -> bool) -> Option<(K, K)>
where
    K: Copy + PartialEq,
{
    let active = active?;
    if active == key || current == Some(key) || !accepts(&active) {
        return None;
    }
    Some((active, key))
}

/// Create mouseover handler for drop targets.
///
/// `mouseover` bubbles, so nested targets stop propagation and the
/// enclosing target only sees the pointer over its own background.
pub fn make_on_target_mouseover<K>(
    dnd: DndSignals<K>,
    callbacks: DndCallbacks<K>,
    key: K,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    make_on_filtered_mouseover(dnd, callbacks, key, |_| true)
}

/// Like [`make_on_target_mouseover`], but only drags whose active key
/// passes `accepts` treat this element as a target. Others are swallowed
/// so the hover does not reach an enclosing target either.
pub fn make_on_filtered_mouseover<K>(
    dnd: DndSignals<K>,
    callbacks: DndCallbacks<K>,
    key: K,
    accepts: fn(&K) -> bool,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let change = hover_change(
            dnd.dragging_read.get_untracked(),
            dnd.over_read.get_untracked(),
            key,
            accepts,
        );
        if let Some((active, over)) = change {
            dnd.over_write.set(Some(over));
            callbacks.on_over.run((active, over));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K>(dnd: DndSignals<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.over_write.set(None);
        }
    }
}

/// Bind document-level mousemove (activation), mouseup (drop) and
/// Escape (cancel) handlers
pub fn bind_global_handlers<K>(dnd: DndSignals<K>, callbacks: DndCallbacks<K>)
where
    K: Copy + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            return;
        }
        let Some(origin) = dnd.pending_read.get_untracked() else {
            return;
        };
        if origin.activates(ev.client_x(), ev.client_y(), dnd.threshold) {
            dnd.pending_write.set(None);
            if callbacks.on_start.run(origin.key) {
                dnd.dragging_write.set(Some(origin.key));
            }
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        dnd.pending_write.set(None);
        // A plain click never started a drag; its click event fires naturally
        if dnd.dragging_read.get_untracked().is_some() {
            callbacks.on_end.run(());
            end_drag(&dnd);
        }
    });

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && dnd.dragging_read.get_untracked().is_some() {
            callbacks.on_cancel.run(());
            end_drag(&dnd);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
    on_mouseup.forget();
    on_keydown.forget();
}
