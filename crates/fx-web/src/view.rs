//! Retained DOM presentation for the pendulum. The core hands over a fresh
//! `RenderFrame` every call; this layer reuses the pooled segment divs and
//! only grows or shrinks the pool when the cable length changes.

use fx_core::{Pendulum, RenderFrame};
use web_sys as web;

use crate::dom;

pub struct PendulumView {
    document: web::Document,
    layer: web::HtmlElement,
    cable: web::Element,
    mic: web::HtmlElement,
    segments: Vec<web::Element>,
    pixel_size: f32,
}

impl PendulumView {
    pub fn new(
        document: web::Document,
        layer: web::HtmlElement,
        cable: web::Element,
        mic: web::HtmlElement,
        pixel_size: f32,
    ) -> Self {
        Self {
            document,
            layer,
            cable,
            mic,
            segments: Vec::new(),
            pixel_size,
        }
    }

    pub fn mic(&self) -> &web::HtmlElement {
        &self.mic
    }

    /// Apply a render frame to the DOM.
    pub fn apply(&mut self, frame: &RenderFrame) {
        while self.segments.len() < frame.segments.len() {
            match self.document.create_element("div") {
                Ok(el) => {
                    let _ = el.set_attribute("class", "cable-px");
                    let _ = self.cable.append_child(&el);
                    self.segments.push(el);
                }
                Err(e) => {
                    log::error!("cable segment create error: {:?}", e);
                    return;
                }
            }
        }
        while self.segments.len() > frame.segments.len() {
            if let Some(el) = self.segments.pop() {
                el.remove();
            }
        }
        for (el, seg) in self.segments.iter().zip(&frame.segments) {
            dom::set_style(
                el,
                &format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px",
                    seg.origin.x, seg.origin.y, self.pixel_size, self.pixel_size
                ),
            );
        }
        dom::set_style(
            &self.mic,
            &format!(
                "transform:translate({}px,{}px);opacity:{}",
                frame.mic_origin.x, frame.mic_origin.y, frame.opacity
            ),
        );
        dom::set_style(&self.layer, &format!("opacity:{}", frame.opacity));
    }

    /// Cursor affordance while a drag is held.
    pub fn set_grabbing(&self, grabbing: bool) {
        let classes = self.mic.class_list();
        let _ = if grabbing {
            classes.add_1("grabbing")
        } else {
            classes.remove_1("grabbing")
        };
    }
}

/// Render the pendulum against the live viewport and push the result to the
/// DOM. Used both by the frame loop and by drag moves, which re-render
/// immediately instead of waiting for the next frame.
pub fn render_now(pendulum: &Pendulum, view: &mut PendulumView) {
    let size = dom::measured_size(view.mic());
    let frame = pendulum.render(dom::viewport_width(), size);
    view.apply(&frame);
}
