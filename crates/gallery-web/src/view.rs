//! Applies engine output to the DOM.

use gallery_core::{Layout, RenderState};
use web_sys as web;

use crate::markup::{GalleryDom, DOT_ACTIVE_CLASS, NAV_DISABLED_CLASS};

const TRANSITION_STYLE: &str = "all 0.25s ease 0s";

/// Write the render state: track position and transition on the wrapper,
/// active dot, and disabled nav classes. Called after every engine operation,
/// including each drag sample.
pub fn apply(nodes: &GalleryDom, layout: &Layout, state: &RenderState) {
    let transition = if state.transition_enabled {
        TRANSITION_STYLE
    } else {
        "none"
    };
    let style = format!(
        "width: {}px; transform: translate3d({}px, 0, 0); transition: {}",
        layout.track_width, state.offset_x, transition
    );
    let _ = nodes.wrapper.set_attribute("style", &style);

    set_class(&nodes.nav_left, NAV_DISABLED_CLASS, state.nav_left_disabled);
    set_class(&nodes.nav_right, NAV_DISABLED_CLASS, state.nav_right_disabled);
    for (i, dot) in nodes.dots.iter().enumerate() {
        set_class(dot, DOT_ACTIVE_CLASS, i == state.current_index);
    }
}

/// Size the slides for the current geometry. Only needed on mount and resize;
/// drag samples leave the widths alone.
pub fn apply_sizing(nodes: &GalleryDom, layout: &Layout) {
    for slide in &nodes.slides {
        let _ = slide.set_attribute("style", &format!("width: {}px", layout.slide_width));
    }
}

fn set_class(el: &web::Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}
