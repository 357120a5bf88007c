pub mod constants;
pub mod peeker;
pub mod pendulum;
pub mod reveal;
pub mod starfield;

pub use constants::*;
pub use peeker::*;
pub use pendulum::*;
pub use reveal::*;
pub use starfield::*;
