//! The per-frame loop: starfield update + paint, pendulum step + render,
//! peeker scheduling. Driven by a self-perpetuating requestAnimationFrame
//! closure that lives for the whole page session.

use fx_core::{Pendulum, Peeker, PeekerEvent, Starfield};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::events;
use crate::view::{self, PendulumView};

pub struct FrameContext {
    pub pendulum: Rc<RefCell<Pendulum>>,
    pub view: Rc<RefCell<PendulumView>>,
    pub starfield: Rc<RefCell<Starfield>>,
    pub peeker: Rc<RefCell<Peeker>>,
    pub peeker_el: web::HtmlElement,
    pub ctx2d: web::CanvasRenderingContext2d,

    pub last_instant: Instant,
    pub peeker_events: Vec<PeekerEvent>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        {
            let mut sky = self.starfield.borrow_mut();
            sky.update();
            draw_starfield(&self.ctx2d, &sky);
        }

        {
            let mut p = self.pendulum.borrow_mut();
            p.step();
            view::render_now(&p, &mut self.view.borrow_mut());
        }

        self.peeker_events.clear();
        self.peeker.borrow_mut().tick(dt, &mut self.peeker_events);
        if !self.peeker_events.is_empty() {
            events::apply_peeker_events(&self.peeker_el, &self.peeker_events);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn draw_starfield(ctx: &web::CanvasRenderingContext2d, sky: &Starfield) {
    let size = sky.size();
    ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    ctx.set_fill_style_str("white");
    for star in sky.stars() {
        ctx.begin_path();
        let _ = ctx.arc(
            star.position.x as f64,
            star.position.y as f64,
            star.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }
}
