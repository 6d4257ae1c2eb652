//! Debounced window-resize wiring.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use gallery_core::RESIZE_DEBOUNCE_MS;

use crate::dom;
use crate::events::{Callback, Subscriptions, Wiring};
use crate::view;

/// Owned `setTimeout` handle with cancel-on-resubmit: scheduling again
/// replaces the pending timer, so only the width in effect once input goes
/// quiet reaches the engine.
pub struct Debounce {
    delay_ms: i32,
    timer: RefCell<Option<i32>>,
    callback: Closure<dyn FnMut()>,
}

impl Debounce {
    pub fn new(delay_ms: i32, mut handler: impl FnMut() + 'static) -> Self {
        Self {
            delay_ms,
            timer: RefCell::new(None),
            callback: Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>),
        }
    }

    pub fn schedule(&self) {
        if let Some(window) = web::window() {
            if let Some(id) = self.timer.borrow_mut().take() {
                window.clear_timeout_with_handle(id);
            }
            if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                self.delay_ms,
            ) {
                *self.timer.borrow_mut() = Some(id);
            }
        }
    }

    /// Drop any pending timer without firing it.
    pub fn cancel(&self) {
        if let Some(window) = web::window() {
            if let Some(id) = self.timer.borrow_mut().take() {
                window.clear_timeout_with_handle(id);
            }
        }
    }
}

pub fn wire_debounced_resize(wiring: &Wiring, subscriptions: &mut Subscriptions) {
    let w = wiring.clone();
    let debounce = Rc::new(Debounce::new(RESIZE_DEBOUNCE_MS, move || {
        let width = dom::measure_width(&w.nodes.container);
        let state = w.gallery.borrow_mut().resize(width);
        let layout = w.gallery.borrow().layout();
        view::apply_sizing(&w.nodes, &layout);
        view::apply(&w.nodes, &layout, &state);
    }));

    let scheduler = debounce.clone();
    let listener = Closure::wrap(Box::new(move || scheduler.schedule()) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        subscriptions.attach(&wnd, "resize", Callback::Plain(listener));
        subscriptions.resize_debounce = Some(debounce);
    }
}
