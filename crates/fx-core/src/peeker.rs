//! Scheduling for the peeker creature: long hidden dwells punctuated by
//! short appearances, with an early retreat when the visitor pokes it.

use rand::prelude::*;
use std::time::Duration;

use crate::constants::{
    PEEK_HIDDEN_MAX_SEC, PEEK_HIDDEN_MIN_SEC, PEEK_SHOW_MAX_SEC, PEEK_SHOW_MIN_SEC,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeekerPhase {
    Hidden,
    Peeking,
}

/// Phase transitions drained by the host each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeekerEvent {
    /// The creature slid into view.
    Emerge,
    /// The creature slid back out, on its own or after a poke.
    Retreat,
}

pub struct Peeker {
    rng: StdRng,
    phase: PeekerPhase,
    remaining_sec: f64,
}

impl Peeker {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let remaining_sec = rng.gen_range(PEEK_HIDDEN_MIN_SEC..PEEK_HIDDEN_MAX_SEC);
        Self {
            rng,
            phase: PeekerPhase::Hidden,
            remaining_sec,
        }
    }

    pub fn phase(&self) -> PeekerPhase {
        self.phase
    }

    /// Advance the dwell timer, pushing a transition event when it expires
    /// and sampling the next dwell.
    pub fn tick(&mut self, dt: Duration, out_events: &mut Vec<PeekerEvent>) {
        self.remaining_sec -= dt.as_secs_f64();
        if self.remaining_sec > 0.0 {
            return;
        }
        match self.phase {
            PeekerPhase::Hidden => {
                self.phase = PeekerPhase::Peeking;
                self.remaining_sec = self.rng.gen_range(PEEK_SHOW_MIN_SEC..PEEK_SHOW_MAX_SEC);
                out_events.push(PeekerEvent::Emerge);
            }
            PeekerPhase::Peeking => {
                self.hide(out_events);
            }
        }
    }

    /// Interaction while peeking sends the creature away immediately and
    /// returns true so the host can play the squeak. A poke at any other
    /// time is a no-op.
    pub fn poke(&mut self, out_events: &mut Vec<PeekerEvent>) -> bool {
        if self.phase != PeekerPhase::Peeking {
            return false;
        }
        self.hide(out_events);
        true
    }

    fn hide(&mut self, out_events: &mut Vec<PeekerEvent>) {
        self.phase = PeekerPhase::Hidden;
        self.remaining_sec = self.rng.gen_range(PEEK_HIDDEN_MIN_SEC..PEEK_HIDDEN_MAX_SEC);
        out_events.push(PeekerEvent::Retreat);
    }
}
