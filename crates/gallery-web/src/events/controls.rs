//! Click wiring for the nav buttons and the dot strip.

use wasm_bindgen::closure::Closure;

use crate::events::{Callback, Subscriptions, Wiring};
use crate::view;

pub fn wire_nav_buttons(wiring: &Wiring, subscriptions: &mut Subscriptions) {
    let w = wiring.clone();
    let left = Closure::wrap(Box::new(move || {
        let state = w.gallery.borrow_mut().navigate_left();
        let layout = w.gallery.borrow().layout();
        view::apply(&w.nodes, &layout, &state);
    }) as Box<dyn FnMut()>);
    subscriptions.attach(&wiring.nodes.nav_left, "click", Callback::Plain(left));

    let w = wiring.clone();
    let right = Closure::wrap(Box::new(move || {
        let state = w.gallery.borrow_mut().navigate_right();
        let layout = w.gallery.borrow().layout();
        view::apply(&w.nodes, &layout, &state);
    }) as Box<dyn FnMut()>);
    subscriptions.attach(&wiring.nodes.nav_right, "click", Callback::Plain(right));
}

pub fn wire_dots(wiring: &Wiring, subscriptions: &mut Subscriptions) {
    // The dot ordinal is the slide index; nothing is looked up at click time.
    for (i, dot) in wiring.nodes.dots.iter().enumerate() {
        let w = wiring.clone();
        let closure = Closure::wrap(Box::new(move || {
            let result = w.gallery.borrow_mut().select(i);
            match result {
                Ok(state) => {
                    let layout = w.gallery.borrow().layout();
                    view::apply(&w.nodes, &layout, &state);
                    log::info!("[dots] select slide {}", i);
                }
                Err(e) => log::error!("[dots] select failed: {}", e),
            }
        }) as Box<dyn FnMut()>);
        subscriptions.attach(dot, "click", Callback::Plain(closure));
    }
}
