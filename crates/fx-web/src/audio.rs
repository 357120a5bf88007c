use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Lazily-created audio context. Browsers refuse audio before a user
/// gesture, and the squeak is always gesture-driven, so creation on first
/// use is safe.
pub struct Squeaker {
    ctx: RefCell<Option<web::AudioContext>>,
}

impl Squeaker {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            ctx: RefCell::new(None),
        })
    }

    fn context(&self) -> Option<web::AudioContext> {
        if self.ctx.borrow().is_none() {
            match web::AudioContext::new() {
                Ok(c) => *self.ctx.borrow_mut() = Some(c),
                Err(e) => {
                    log::error!("AudioContext error: {:?}", e);
                    return None;
                }
            }
        }
        self.ctx.borrow().clone()
    }

    /// Fire the one-shot squeak: a short sine chirp with a fast gain
    /// envelope, connected straight to the destination.
    pub fn squeak(&self) {
        let Some(ctx) = self.context() else {
            return;
        };
        if let Ok(src) = web::OscillatorNode::new(&ctx) {
            src.set_type(web::OscillatorType::Sine);
            let t0 = ctx.current_time() + 0.005;
            src.frequency().set_value(620.0);
            let _ = src
                .frequency()
                .exponential_ramp_to_value_at_time(1240.0, t0 + 0.09);
            let _ = src
                .frequency()
                .exponential_ramp_to_value_at_time(740.0, t0 + 0.18);
            if let Ok(g) = web::GainNode::new(&ctx) {
                g.gain().set_value(0.0);
                let _ = g.gain().linear_ramp_to_value_at_time(0.3, t0 + 0.02);
                let _ = g.gain().linear_ramp_to_value_at_time(0.0, t0 + 0.22);
                let _ = src.connect_with_audio_node(&g);
                let _ = g.connect_with_audio_node(&ctx.destination());
                let _ = src.start_with_when(t0);
                let _ = src.stop_with_when(t0 + 0.25);
            }
        }
    }
}
