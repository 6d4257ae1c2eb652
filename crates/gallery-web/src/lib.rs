//! Web front-end for the slide gallery.
//!
//! Builds the gallery markup around a host container, renders engine output
//! into the DOM, and feeds pointer, click, and debounced-resize events back
//! into the engine. All interaction logic lives in `gallery-core`; this crate
//! only translates between the DOM and the engine's render state.

use gallery_core::{Gallery, Options};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod dom;
mod events;
mod markup;
mod view;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web ready");
    Ok(())
}

/// A mounted gallery. Keeps every event listener alive; call
/// [`stop`](GalleryHandle::stop) before discarding the handle to detach them.
#[wasm_bindgen]
pub struct GalleryHandle {
    subscriptions: events::Subscriptions,
}

#[wasm_bindgen]
impl GalleryHandle {
    /// Detach all listeners and cancel any pending relayout. The markup and
    /// the last rendered state stay in the document.
    pub fn stop(&mut self) {
        self.subscriptions.stop();
    }
}

/// Attach a gallery to the container with the given element id. The
/// container's children become the slides.
#[wasm_bindgen]
pub fn mount(container_id: &str, margin: f32, start_index: usize) -> Result<GalleryHandle, JsValue> {
    init(container_id, margin, start_index)
        .map(|subscriptions| GalleryHandle { subscriptions })
        .map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

fn init(container_id: &str, margin: f32, start_index: usize) -> anyhow::Result<events::Subscriptions> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", container_id))?;

    let slide_count = container.child_element_count() as usize;
    let gallery = Gallery::new(
        slide_count,
        Options {
            margin,
            start_index,
        },
    )
    .map_err(|e| anyhow::anyhow!("cannot mount #{}: {}", container_id, e))?;

    let nodes = markup::build(&document, &container)
        .map_err(|e| anyhow::anyhow!("markup failed: {:?}", e))?;
    let nodes = Rc::new(nodes);
    let gallery = Rc::new(RefCell::new(gallery));

    let width = dom::measure_width(&nodes.container);
    {
        let mut g = gallery.borrow_mut();
        let state = g.initialize(width);
        view::apply_sizing(&nodes, &g.layout());
        view::apply(&nodes, &g.layout(), &state);
    }
    log::info!(
        "mounted #{}: {} slides, width {}",
        container_id,
        slide_count,
        width
    );

    Ok(events::wire(gallery, nodes))
}
