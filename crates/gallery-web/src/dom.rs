use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// CSS width of the element's frame.
#[inline]
pub fn measure_width(el: &web::Element) -> f32 {
    el.get_bounding_client_rect().width() as f32
}
