//! Drifting starfield for the page background. Seeded so the same seed
//! reproduces the same sky, which keeps tests deterministic.

use glam::Vec2;
use rand::prelude::*;

use crate::constants::{STAR_COUNT, STAR_MAX_DRIFT, STAR_MAX_RADIUS};

/// One background star: position in canvas pixels, draw radius and per-frame
/// downward drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec2,
    pub radius: f32,
    pub drift: f32,
}

pub struct Starfield {
    stars: Vec<Star>,
    size: Vec2,
}

impl Starfield {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                radius: rng.gen::<f32>() * STAR_MAX_RADIUS,
                drift: rng.gen::<f32>() * STAR_MAX_DRIFT,
            })
            .collect();
        Self {
            stars,
            size: Vec2::new(width, height),
        }
    }

    /// Advance every star one frame; stars leaving the bottom edge wrap back
    /// to the top.
    pub fn update(&mut self) {
        for s in &mut self.stars {
            s.position.y += s.drift;
            if s.position.y > self.size.y {
                s.position.y = 0.0;
            }
        }
    }

    /// Adopt a new canvas size. Stars stranded outside the new bounds are
    /// folded back in rather than re-rolled, so a resize does not reshuffle
    /// the whole sky.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
        for s in &mut self.stars {
            if s.position.x > width {
                s.position.x %= width.max(1.0);
            }
            if s.position.y > height {
                s.position.y %= height.max(1.0);
            }
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }
}
