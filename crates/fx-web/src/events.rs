//! Event wiring: pointer and touch gestures on the mic, scroll, resize and
//! the peeker poke. Handlers forward into the core and, for drag moves,
//! re-render immediately so the cable tracks the pointer without a frame of
//! lag.

use fx_core::{Pendulum, Peeker, PeekerEvent, SocialReveal, Starfield};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::Squeaker;
use crate::dom;
use crate::view::{self, PendulumView};

pub struct InputWiring {
    pub mic: web::HtmlElement,
    pub social: web::HtmlElement,
    pub peeker_el: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub pendulum: Rc<RefCell<Pendulum>>,
    pub view: Rc<RefCell<PendulumView>>,
    pub reveal: Rc<RefCell<SocialReveal>>,
    pub peeker: Rc<RefCell<Peeker>>,
    pub starfield: Rc<RefCell<Starfield>>,
    pub squeaker: Rc<Squeaker>,
}

pub fn wire_input_handlers(w: InputWiring) {
    // pointerdown on the mic begins a drag, unless the mic is still invisible
    {
        let pendulum = w.pendulum.clone();
        let view = w.view.clone();
        let mic = w.mic.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if pendulum.borrow_mut().drag_start() {
                let _ = mic.set_pointer_capture(ev.pointer_id());
                view.borrow().set_grabbing(true);
                log::info!("[drag] begin");
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .mic
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove tracks the drag and re-renders immediately
    {
        let pendulum = w.pendulum.clone();
        let view = w.view.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut p = pendulum.borrow_mut();
            if !p.is_dragging() {
                return;
            }
            p.drag_move(
                Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
                dom::viewport_width(),
            );
            view::render_now(&p, &mut view.borrow_mut());
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ = wnd
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerup ends the drag; harmless when none is active
    {
        let pendulum = w.pendulum.clone();
        let view = w.view.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            let mut p = pendulum.borrow_mut();
            let was_dragging = p.is_dragging();
            p.drag_end();
            if was_dragging {
                view.borrow().set_grabbing(false);
                log::info!("[drag] end");
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // touchstart on the mic mirrors pointerdown
    {
        let pendulum = w.pendulum.clone();
        let view = w.view.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if pendulum.borrow_mut().drag_start() {
                view.borrow().set_grabbing(true);
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .mic
            .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // touchmove drives the drag from the first touch point
    {
        let pendulum = w.pendulum.clone();
        let view = w.view.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            let mut p = pendulum.borrow_mut();
            if !p.is_dragging() {
                return;
            }
            if let Some(touch) = ev.touches().get(0) {
                p.drag_move(
                    Vec2::new(touch.client_x() as f32, touch.client_y() as f32),
                    dom::viewport_width(),
                );
                view::render_now(&p, &mut view.borrow_mut());
                // keep the page from scrolling underneath the drag
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // touchend and touchcancel both end the drag
    for kind in ["touchend", "touchcancel"] {
        let pendulum = w.pendulum.clone();
        let view = w.view.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            let mut p = pendulum.borrow_mut();
            let was_dragging = p.is_dragging();
            p.drag_end();
            if was_dragging {
                view.borrow().set_grabbing(false);
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ = wnd.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // scroll feeds the rope length and the social reveal latch
    {
        let pendulum = w.pendulum.clone();
        let reveal = w.reveal.clone();
        let social = w.social.clone();
        let closure = Closure::wrap(Box::new(move || {
            let offset = dom::scroll_offset();
            pendulum.borrow_mut().on_scroll(offset);
            if reveal.borrow_mut().on_scroll(offset) {
                let _ = social.class_list().add_1("revealed");
                log::info!("[reveal] social links shown at offset {:.0}", offset);
            }
        }) as Box<dyn FnMut()>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // resize re-sizes the canvas backing store and re-anchors the pendulum
    {
        let starfield = w.starfield.clone();
        let pendulum = w.pendulum.clone();
        let view = w.view.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_size(&canvas);
            starfield
                .borrow_mut()
                .resize(canvas.width() as f32, canvas.height() as f32);
            view::render_now(&pendulum.borrow(), &mut view.borrow_mut());
        }) as Box<dyn FnMut()>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // poking the peeker sends it away with a squeak
    {
        let peeker = w.peeker.clone();
        let peeker_el = w.peeker_el.clone();
        let squeaker = w.squeaker.clone();
        let closure = Closure::wrap(Box::new(move || {
            let mut events = Vec::new();
            if peeker.borrow_mut().poke(&mut events) {
                squeaker.squeak();
                apply_peeker_events(&peeker_el, &events);
                log::info!("[peeker] poked");
            }
        }) as Box<dyn FnMut()>);
        let _ = w
            .peeker_el
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Map scheduler transitions onto the peeker element's class list.
pub fn apply_peeker_events(peeker_el: &web::HtmlElement, events: &[PeekerEvent]) {
    for ev in events {
        let classes = peeker_el.class_list();
        let _ = match ev {
            PeekerEvent::Emerge => classes.add_1("peeking"),
            PeekerEvent::Retreat => classes.remove_1("peeking"),
        };
    }
}
