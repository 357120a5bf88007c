#![cfg(target_arch = "wasm32")]
//! Wires the pure effect cores to the page: starfield canvas, dangling mic
//! pendulum, social links reveal and the peeker, all on the browser's single
//! event-dispatch thread.

mod audio;
mod dom;
mod events;
mod frame;
mod view;

use fx_core::{Pendulum, PendulumParams, Peeker, SocialReveal, Starfield, PIXEL_SIZE};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("bg")
        .ok_or_else(|| anyhow::anyhow!("missing #bg"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let layer =
        dom::element_by_id(&document, "mic-layer").ok_or_else(|| anyhow::anyhow!("missing #mic-layer"))?;
    let cable: web::Element = document
        .get_element_by_id("cable")
        .ok_or_else(|| anyhow::anyhow!("missing #cable"))?;
    let mic = dom::element_by_id(&document, "mic").ok_or_else(|| anyhow::anyhow!("missing #mic"))?;
    let social = dom::element_by_id(&document, "social-links")
        .ok_or_else(|| anyhow::anyhow!("missing #social-links"))?;
    let peeker_el =
        dom::element_by_id(&document, "peeker").ok_or_else(|| anyhow::anyhow!("missing #peeker"))?;

    dom::sync_canvas_size(&canvas);

    let seed = js_sys::Date::now() as u64;
    let starfield = Rc::new(RefCell::new(Starfield::new(
        canvas.width() as f32,
        canvas.height() as f32,
        seed,
    )));
    let pendulum = Rc::new(RefCell::new(Pendulum::new(PendulumParams::default())));
    let peeker = Rc::new(RefCell::new(Peeker::new(
        seed ^ 0x9E37_79B9_7F4A_7C15,
    )));
    let reveal = Rc::new(RefCell::new(SocialReveal::default()));
    let view = Rc::new(RefCell::new(view::PendulumView::new(
        document.clone(),
        layer,
        cable,
        mic.clone(),
        PIXEL_SIZE,
    )));
    let squeaker = audio::Squeaker::new();

    // Pick up the scroll position the page loaded at, then paint once before
    // the loop starts so there is no off-state flash.
    pendulum.borrow_mut().on_scroll(dom::scroll_offset());
    view::render_now(&pendulum.borrow(), &mut view.borrow_mut());

    events::wire_input_handlers(events::InputWiring {
        mic,
        social,
        peeker_el: peeker_el.clone(),
        canvas,
        pendulum: pendulum.clone(),
        view: view.clone(),
        reveal,
        peeker: peeker.clone(),
        starfield: starfield.clone(),
        squeaker,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        pendulum,
        view,
        starfield,
        peeker,
        peeker_el,
        ctx2d,
        last_instant: Instant::now(),
        peeker_events: Vec::new(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
