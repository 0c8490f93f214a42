//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Draggables are identified by a `u32` id, drop targets by any small
//! `Copy` value chosen by the caller (a column, a slot, ...).

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals, generic over the drop target type
pub struct DndSignals<T: Send + Sync + 'static> {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub drop_target_read: ReadSignal<Option<T>>,
    pub drop_target_write: WriteSignal<Option<T>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

impl<T: Send + Sync + 'static> Clone for DndSignals<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DndSignals<T> {}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long a finished drag keeps swallowing clicks
const CLICK_SUPPRESS_MS: i32 = 100;

pub fn create_dnd_signals<T: Send + Sync + 'static>() -> DndSignals<T> {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drop_target_read, drop_target_write) = signal(None::<T>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_read,
        start_write,
    }
}

impl<T: Copy + PartialEq + Send + Sync + 'static> DndSignals<T> {
    /// Is this draggable the one being dragged?
    pub fn is_dragging(&self, id: u32) -> bool {
        self.dragging_id_read.get() == Some(id)
    }

    /// Is any drag in progress?
    pub fn is_active(&self) -> bool {
        self.dragging_id_read.get().is_some()
    }

    /// Is this target currently hovered by a drag?
    pub fn is_over(&self, target: T) -> bool {
        self.drop_target_read.get() == Some(target)
    }

    /// True for a short moment after a drag, so the trailing click can be ignored
    pub fn just_dragged(&self) -> bool {
        self.drag_just_ended_read.get_untracked()
    }
}

/// End drag operation
pub fn end_drag<T: Send + Sync + 'static>(dnd: &DndSignals<T>) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), CLICK_SUPPRESS_MS);
        cb.forget();
    }
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<T: Send + Sync + 'static>(dnd: DndSignals<T>, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        // Keeps text from being selected while dragging
        ev.prevent_default();
        dnd.pending_id_write.set(Some(item_id));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for a drop target
pub fn make_on_target_mouseenter<T: Copy + Send + Sync + 'static>(dnd: DndSignals<T>, target: T) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(target));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<T: Send + Sync + 'static>(dnd: DndSignals<T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind document mousemove handler - starts drag if moved enough
fn bind_global_mousemove<T: Send + Sync + 'static>(dnd: DndSignals<T>) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        // Signals are gone once the owning component unmounts
        let Some(pending) = dnd.pending_id_read.try_get_untracked() else { return };
        let Some(dragging) = dnd.dragging_id_read.try_get_untracked() else { return };

        if pending.is_some() && dragging.is_none() {
            let (start_x, start_y) = dnd.start_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                log::debug!("[DND] Drag start: {:?}", pending);
                dnd.dragging_id_write.set(pending);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Bind document mouseup handler for drop detection.
///
/// `on_drop` runs once per finished drag with the dragged id and the hovered
/// target, `None` when the drag ended outside every target. A plain click
/// never reaches `on_drop`.
///
/// The listeners stay on the document for the life of the page, so bind
/// once per `DndSignals` and keep the signals alive at the root.
pub fn bind_global_mouseup<T, F>(dnd: DndSignals<T>, on_drop: F)
where
    T: Copy + std::fmt::Debug + Send + Sync + 'static,
    F: Fn(u32, Option<T>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let Some(dragging_id) = dnd.dragging_id_read.try_get_untracked() else { return };
        let drop_target = dnd.drop_target_read.get_untracked();

        match dragging_id {
            Some(dragged) => {
                log::debug!("[DND] Drop: dragged={}, target={:?}", dragged, drop_target);
                end_drag(&dnd);
                on_drop(dragged, drop_target);
            }
            None => {
                // Click, not drag: let the click event fire on the element
                dnd.pending_id_write.set(None);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}
