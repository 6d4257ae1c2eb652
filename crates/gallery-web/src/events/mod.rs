//! Event subscription lifecycle.
//!
//! `wire` attaches every listener and returns the [`Subscriptions`] that owns
//! them; `stop` detaches them all and cancels any pending debounced relayout.
//! The engine itself holds no subscriptions.

pub mod controls;
pub mod pointer;
pub mod resize;

use gallery_core::Gallery;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::markup::GalleryDom;

/// Shared handles captured by every event closure.
#[derive(Clone)]
pub struct Wiring {
    pub gallery: Rc<RefCell<Gallery>>,
    pub nodes: Rc<GalleryDom>,
}

enum Callback {
    Plain(Closure<dyn FnMut()>),
    Pointer(Closure<dyn FnMut(web::PointerEvent)>),
}

impl Callback {
    fn function(&self) -> &js_sys::Function {
        match self {
            Callback::Plain(closure) => closure.as_ref().unchecked_ref(),
            Callback::Pointer(closure) => closure.as_ref().unchecked_ref(),
        }
    }
}

struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: Callback,
}

/// Everything `wire` registered. Keeps the closures alive; dropping this
/// without calling [`stop`](Subscriptions::stop) first leaves dangling
/// listeners behind.
pub struct Subscriptions {
    listeners: Vec<Listener>,
    resize_debounce: Option<Rc<resize::Debounce>>,
}

impl Subscriptions {
    fn new() -> Self {
        Self {
            listeners: Vec::new(),
            resize_debounce: None,
        }
    }

    fn attach(&mut self, target: &web::EventTarget, event: &'static str, callback: Callback) {
        _ = target.add_event_listener_with_callback(event, callback.function());
        self.listeners.push(Listener {
            target: target.clone(),
            event,
            callback,
        });
    }

    /// Detach every listener and cancel any pending relayout. The markup and
    /// the last rendered state are left in place.
    pub fn stop(&mut self) {
        for listener in self.listeners.drain(..) {
            _ = listener
                .target
                .remove_event_listener_with_callback(listener.event, listener.callback.function());
        }
        if let Some(debounce) = self.resize_debounce.take() {
            debounce.cancel();
        }
    }
}

pub fn wire(gallery: Rc<RefCell<Gallery>>, nodes: Rc<GalleryDom>) -> Subscriptions {
    let wiring = Wiring { gallery, nodes };
    let mut subscriptions = Subscriptions::new();
    pointer::wire_pointer_handlers(&wiring, &mut subscriptions);
    controls::wire_nav_buttons(&wiring, &mut subscriptions);
    controls::wire_dots(&wiring, &mut subscriptions);
    resize::wire_debounced_resize(&wiring, &mut subscriptions);
    subscriptions
}
