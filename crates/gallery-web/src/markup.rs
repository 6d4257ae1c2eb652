//! Markup construction around the host container.
//!
//! The container's existing children become the slides; the wrapper track,
//! nav buttons, and dot strip are created here. Skinning hangs off the
//! `gallery-*` classes.

use wasm_bindgen::JsValue;
use web_sys as web;

pub const GALLERY_CLASS: &str = "gallery";
pub const WRAPPER_CLASS: &str = "gallery-wrapper";
pub const SLIDE_CLASS: &str = "gallery-slide";
pub const NAV_LEFT_CLASS: &str = "gallery-nav-left";
pub const NAV_RIGHT_CLASS: &str = "gallery-nav-right";
pub const NAV_DISABLED_CLASS: &str = "gallery-nav-disabled";
pub const DOTS_CLASS: &str = "gallery-dots";
pub const DOT_CLASS: &str = "gallery-dot";
pub const DOT_ACTIVE_CLASS: &str = "gallery-dot-active";

/// Handles to every element the view layer touches.
pub struct GalleryDom {
    pub container: web::Element,
    pub wrapper: web::Element,
    pub slides: Vec<web::Element>,
    pub nav_left: web::Element,
    pub nav_right: web::Element,
    pub dots: Vec<web::Element>,
}

/// Wrap the container's children into the track/slide structure and append
/// the navigation controls. The dot at position `i` always addresses slide
/// `i`; click handlers resolve by ordinal, never by element identity.
pub fn build(document: &web::Document, container: &web::Element) -> Result<GalleryDom, JsValue> {
    container.class_list().add_1(GALLERY_CLASS)?;

    let wrapper = document.create_element("div")?;
    wrapper.class_list().add_1(WRAPPER_CLASS)?;

    // Move every child into its own slide div inside the wrapper.
    let mut slides = Vec::new();
    while let Some(child) = container.first_element_child() {
        let slide = document.create_element("div")?;
        slide.class_list().add_1(SLIDE_CLASS)?;
        slide.append_child(&child)?;
        wrapper.append_child(&slide)?;
        slides.push(slide);
    }
    container.append_child(&wrapper)?;

    let nav_left = nav_button(document, NAV_LEFT_CLASS)?;
    let nav_right = nav_button(document, NAV_RIGHT_CLASS)?;
    container.append_child(&nav_left)?;
    container.append_child(&nav_right)?;

    let dots_strip = document.create_element("div")?;
    dots_strip.class_list().add_1(DOTS_CLASS)?;
    let mut dots = Vec::with_capacity(slides.len());
    for _ in 0..slides.len() {
        let dot = document.create_element("button")?;
        dot.class_list().add_1(DOT_CLASS)?;
        dots_strip.append_child(&dot)?;
        dots.push(dot);
    }
    container.append_child(&dots_strip)?;

    Ok(GalleryDom {
        container: container.clone(),
        wrapper,
        slides,
        nav_left,
        nav_right,
        dots,
    })
}

fn nav_button(document: &web::Document, class: &str) -> Result<web::Element, JsValue> {
    let button = document.create_element("button")?;
    button.class_list().add_1(class)?;
    Ok(button)
}
