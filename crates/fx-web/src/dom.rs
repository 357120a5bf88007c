use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::Element, style: &str) {
    let _ = el.set_attribute("style", style);
}

#[inline]
pub fn viewport_width() -> f32 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn scroll_offset() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Keep the starfield canvas backing store matched to the viewport.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement) {
    canvas.set_width(viewport_width().max(1.0) as u32);
    canvas.set_height(viewport_height().max(1.0) as u32);
}

/// Measured size of an element, once layout has produced one.
pub fn measured_size(el: &web::HtmlElement) -> Option<glam::Vec2> {
    let rect = el.get_bounding_client_rect();
    let size = glam::Vec2::new(rect.width() as f32, rect.height() as f32);
    (size.x > 0.0 && size.y > 0.0).then_some(size)
}
