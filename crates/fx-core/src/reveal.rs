use crate::constants::SOCIAL_REVEAL_OFFSET;

/// One-way latch for the social links strip: once the page has scrolled past
/// the threshold the links stay revealed for the rest of the session.
pub struct SocialReveal {
    threshold: f32,
    revealed: bool,
}

impl SocialReveal {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            revealed: false,
        }
    }

    /// Returns true exactly once, on the scroll event that crosses the
    /// threshold.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        if self.revealed || offset < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

impl Default for SocialReveal {
    fn default() -> Self {
        Self::new(SOCIAL_REVEAL_OFFSET)
    }
}
