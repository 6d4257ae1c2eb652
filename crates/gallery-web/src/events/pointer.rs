//! Pointer handlers (down/move/up/cancel).
//!
//! The gesture begins on the wrapper and then follows the pointer at the
//! window level, so dragging keeps working when the pointer leaves the
//! container. Cancel shares the release path.

use wasm_bindgen::closure::Closure;
use web_sys as web;

use crate::events::{Callback, Subscriptions, Wiring};
use crate::view;

pub fn wire_pointer_handlers(wiring: &Wiring, subscriptions: &mut Subscriptions) {
    wire_pointerdown(wiring, subscriptions);
    wire_pointermove(wiring, subscriptions);
    wire_pointerup(wiring, subscriptions);
}

fn wire_pointerdown(wiring: &Wiring, subscriptions: &mut Subscriptions) {
    let w = wiring.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let state = w.gallery.borrow_mut().drag_start(ev.client_x() as f32);
        let layout = w.gallery.borrow().layout();
        view::apply(&w.nodes, &layout, &state);
        _ = w.nodes.wrapper.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
        log::info!("[pointer] begin drag at {}", ev.client_x());
    }) as Box<dyn FnMut(_)>);
    subscriptions.attach(&wiring.nodes.wrapper, "pointerdown", Callback::Pointer(closure));
}

fn wire_pointermove(wiring: &Wiring, subscriptions: &mut Subscriptions) {
    let w = wiring.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.gallery.borrow().is_dragging() {
            return;
        }
        let state = w.gallery.borrow_mut().drag_move(ev.client_x() as f32);
        let layout = w.gallery.borrow().layout();
        view::apply(&w.nodes, &layout, &state);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        subscriptions.attach(&wnd, "pointermove", Callback::Pointer(closure));
    }
}

fn wire_pointerup(wiring: &Wiring, subscriptions: &mut Subscriptions) {
    for event in ["pointerup", "pointercancel"] {
        let w = wiring.clone();

        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if !w.gallery.borrow().is_dragging() {
                return;
            }
            let state = w.gallery.borrow_mut().drag_end();
            let layout = w.gallery.borrow().layout();
            view::apply(&w.nodes, &layout, &state);
            ev.prevent_default();
            log::info!("[pointer] settle on slide {}", state.current_index);
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            subscriptions.attach(&wnd, event, Callback::Pointer(closure));
        }
    }
}
