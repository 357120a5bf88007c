//! Dangling microphone simulation.
//!
//! The mic hangs from a fixed anchor at the top-center of the viewport. Its
//! rope length follows the page scroll offset, or the pointer while a drag
//! gesture is active, and the swing angle is integrated with a damped
//! pendulum model once per animation frame. Rendering discretizes the cable
//! into grid-snapped squares for the pixel-art look; the output is a plain
//! value the presentation layer applies however it likes.
//!
//! Everything here is platform-free and total: no call can fail, missing
//! inputs fall back to defaults.

use glam::Vec2;

use crate::constants::{
    DAMPING, DEFAULT_MIC_SIZE, DEPLOY_THRESHOLD, DRAG_OPACITY_MIN, FADE_SPAN, GRAVITY, HIDE_BELOW,
    MAX_ROPE, MAX_SWING, MIN_ROPE, OFFSCREEN_PARK, PIXEL_SIZE,
};

/// Construction-time physics and geometry constants. Never mutated after
/// the pendulum is built.
#[derive(Clone, Debug)]
pub struct PendulumParams {
    pub gravity: f32,
    pub damping: f32,
    pub max_angle: f32,
    pub min_rope: f32,
    pub max_rope: f32,
    pub pixel_size: f32,
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            damping: DAMPING,
            max_angle: MAX_SWING,
            min_rope: MIN_ROPE,
            max_rope: MAX_ROPE,
            pixel_size: PIXEL_SIZE,
        }
    }
}

/// One square of the pixel cable. `origin` is the square's top-left corner,
/// already snapped to the pixel grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CableSegment {
    pub origin: Vec2,
}

/// Output of one render call, fully replacing the previous one: the cable
/// segments from anchor to mic, the mic element's top-left translate and the
/// fade opacity for the mic and its layer. While the mic is hidden the
/// segment list is empty and `mic_origin` parks it far outside the viewport.
#[derive(Clone, Debug)]
pub struct RenderFrame {
    pub segments: Vec<CableSegment>,
    pub mic_origin: Vec2,
    pub opacity: f32,
}

/// State of the hanging mic. Angle 0 is straight down, positive toward +x;
/// velocity is in radians per frame.
pub struct Pendulum {
    params: PendulumParams,
    angle: f32,
    angular_velocity: f32,
    rope_length: f32,
    dragging: bool,
}

impl Pendulum {
    pub fn new(params: PendulumParams) -> Self {
        Self {
            params,
            angle: 0.0,
            angular_velocity: 0.0,
            rope_length: 0.0,
            dragging: false,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn rope_length(&self) -> f32 {
        self.rope_length
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Advance one animation frame. Integration is suspended while a drag is
    /// active and while the mic has not dropped past the deploy threshold.
    ///
    /// The angle clamp does not zero velocity: velocity keeps accumulating
    /// against the boundary until damping decays it, which reads as a soft
    /// settle rather than a hard stop.
    pub fn step(&mut self) {
        if self.dragging || self.rope_length <= DEPLOY_THRESHOLD {
            return;
        }
        let acceleration = -self.params.gravity * self.angle.sin();
        self.angular_velocity += acceleration;
        self.angular_velocity *= self.params.damping;
        self.angle += self.angular_velocity;
        self.angle = self.angle.clamp(-self.params.max_angle, self.params.max_angle);
    }

    /// Scroll drives the desired rope length whenever no drag is active.
    pub fn on_scroll(&mut self, offset: f32) {
        if self.dragging {
            return;
        }
        self.rope_length = offset.clamp(0.0, self.params.max_rope);
    }

    /// Mic fade derived from rope length: 0 until the deploy threshold, 1
    /// once fully dropped in.
    pub fn opacity(&self) -> f32 {
        ((self.rope_length - DEPLOY_THRESHOLD) / FADE_SPAN).clamp(0.0, 1.0)
    }

    /// Begin a drag gesture. Refused while the mic is effectively invisible,
    /// so a stray tap on the empty anchor area does nothing.
    pub fn drag_start(&mut self) -> bool {
        if self.opacity() < DRAG_OPACITY_MIN {
            return false;
        }
        self.dragging = true;
        true
    }

    /// Track the pointer while dragging: the rope follows the pointer's
    /// distance from the anchor, the angle follows its direction, and the
    /// velocity resets so a release swings from rest. Ignored when no drag
    /// is active.
    pub fn drag_move(&mut self, pointer: Vec2, viewport_width: f32) {
        if !self.dragging {
            return;
        }
        let delta = pointer - anchor(viewport_width);
        self.rope_length = delta
            .length()
            .clamp(self.params.min_rope, self.params.max_rope);
        // atan2(x, y): angle 0 points straight down, growing toward horizontal
        self.angle = delta
            .x
            .atan2(delta.y)
            .clamp(-self.params.max_angle, self.params.max_angle);
        self.angular_velocity = 0.0;
    }

    /// End the drag gesture. A no-op when not dragging.
    pub fn drag_end(&mut self) {
        self.dragging = false;
    }

    /// Pure render of the current state: no caching, the cable is rebuilt
    /// from scratch every call. `mic_size` is the measured element size, if
    /// layout has produced one yet.
    pub fn render(&self, viewport_width: f32, mic_size: Option<Vec2>) -> RenderFrame {
        let pixel = self.params.pixel_size;
        let anchor = snap(anchor(viewport_width), pixel);
        let angle = self.angle.clamp(-self.params.max_angle, self.params.max_angle);
        let opacity = self.opacity();

        if self.rope_length < HIDE_BELOW {
            return RenderFrame {
                segments: Vec::new(),
                mic_origin: Vec2::from(OFFSCREEN_PARK),
                opacity,
            };
        }

        let length = self.rope_length.max(self.params.min_rope);
        let tip = snap(anchor + length * Vec2::new(angle.sin(), angle.cos()), pixel);
        let size = match mic_size {
            Some(s) if s.x > 0.0 && s.y > 0.0 => s,
            _ => Vec2::splat(DEFAULT_MIC_SIZE),
        };

        RenderFrame {
            segments: cable(anchor, tip, pixel),
            mic_origin: tip - size * 0.5,
            opacity,
        }
    }
}

/// Top-center pivot the mic hangs from. Derived from the viewport on every
/// use since the window can resize at any time.
#[inline]
pub fn anchor(viewport_width: f32) -> Vec2 {
    Vec2::new(viewport_width * 0.5, 0.0)
}

#[inline]
fn snap(v: Vec2, pixel: f32) -> Vec2 {
    (v / pixel).round() * pixel
}

/// Discretize the anchor-to-tip line into grid-snapped squares, one per
/// `pixel` of distance, endpoints inclusive. Under one grid unit of distance
/// there is nothing to draw.
fn cable(anchor: Vec2, tip: Vec2, pixel: f32) -> Vec<CableSegment> {
    let distance = anchor.distance(tip);
    if distance < pixel {
        return Vec::new();
    }
    let steps = ((distance / pixel).floor() as usize).max(1);
    let mut segments = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        segments.push(CableSegment {
            origin: snap(anchor.lerp(tip, t), pixel),
        });
    }
    segments
}
