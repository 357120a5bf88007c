// Shared tuning constants for the page effects. Pendulum units are
// per-animation-frame (radians, radians/frame), lengths are CSS pixels.

// Pendulum physics
pub const GRAVITY: f32 = 0.002; // restoring-force coefficient
pub const DAMPING: f32 = 0.98; // velocity multiplier per step, must stay in (0,1)
pub const MAX_SWING: f32 = std::f32::consts::FRAC_PI_3; // 60 degree swing clamp

// Rope geometry
pub const MIN_ROPE: f32 = 40.0;
pub const MAX_ROPE: f32 = 320.0;
pub const PIXEL_SIZE: f32 = 4.0; // rendering grid quantum

// Visibility thresholds
pub const DEPLOY_THRESHOLD: f32 = 20.0; // below this the mic has not dropped in yet
pub const FADE_SPAN: f32 = 80.0; // rope length over which the mic fades to full opacity
pub const HIDE_BELOW: f32 = 5.0; // park the mic off-screen under this rope length
pub const DRAG_OPACITY_MIN: f32 = 0.05; // ignore grabs on an effectively invisible mic

// Mic element fallback size when not yet measurable
pub const DEFAULT_MIC_SIZE: f32 = 120.0;

// Off-screen parking spot for the hidden mic; far enough out that it can
// neither be seen nor intercept pointer events
pub const OFFSCREEN_PARK: [f32; 2] = [-1000.0, -1000.0];

// Starfield
pub const STAR_COUNT: usize = 100;
pub const STAR_MAX_RADIUS: f32 = 2.0;
pub const STAR_MAX_DRIFT: f32 = 1.0; // px per frame

// Social links reveal
pub const SOCIAL_REVEAL_OFFSET: f32 = 160.0; // scroll offset that reveals the links

// Peeker dwell times (seconds)
pub const PEEK_HIDDEN_MIN_SEC: f64 = 8.0;
pub const PEEK_HIDDEN_MAX_SEC: f64 = 20.0;
pub const PEEK_SHOW_MIN_SEC: f64 = 3.0;
pub const PEEK_SHOW_MAX_SEC: f64 = 5.0;
