//! Press-Edge Detection
//!
//! The click-to-disturb and display-toggle actions must fire once per
//! press transition, not continuously while a button or key is held. The
//! original demo kept that "was down last frame" flag in hidden static
//! state; here it is an explicit little struct so the edge logic is
//! testable without a window system.

/// Tracks a single button/key across frames and reports press edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    was_down: bool,
}

impl EdgeTrigger {
    /// Create a trigger in the released state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current pressed state; returns `true` exactly on the
    /// released -> pressed transition.
    #[inline]
    pub fn update(&mut self, down: bool) -> bool {
        let edge = down && !self.was_down;
        self.was_down = down;
        edge
    }

    /// Whether the last fed state was pressed.
    #[inline]
    pub fn is_down(&self) -> bool {
        self.was_down
    }

    /// Forget any held state (e.g. when the cursor leaves the window).
    pub fn reset(&mut self) {
        self.was_down = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_press() {
        let mut trigger = EdgeTrigger::new();
        assert!(trigger.update(true));
        assert!(!trigger.update(true));
        assert!(!trigger.update(true));
    }

    #[test]
    fn test_refires_after_release() {
        let mut trigger = EdgeTrigger::new();
        assert!(trigger.update(true));
        assert!(!trigger.update(false));
        assert!(trigger.update(true));
    }

    #[test]
    fn test_release_is_never_an_edge() {
        let mut trigger = EdgeTrigger::new();
        assert!(!trigger.update(false));
        trigger.update(true);
        assert!(!trigger.update(false));
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut trigger = EdgeTrigger::new();
        trigger.update(true);
        trigger.reset();
        assert!(!trigger.is_down());
        // A press after reset is a fresh edge.
        assert!(trigger.update(true));
    }
}
