//! Mouse Input Module
//!
//! Cursor and button tracking for the tank window, decoupled from winit so
//! the mapping logic stays testable headless. Positions are kept both in
//! raw pixels and normalized UV (bottom-left origin, Y up) — the raycaster
//! consumes the UV form directly.

/// 2D position, used for mouse coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Create a new position.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert to tuple.
    pub fn to_tuple(self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// Cursor and left-button state for the tank window.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    /// Current position in normalized UV coordinates (0.0 to 1.0).
    /// Origin is bottom-left, Y increases upward. `None` until the cursor
    /// first moves over the window.
    pub position: Option<Position>,

    /// Current position in raw pixel coordinates (top-left origin).
    pub position_pixels: Option<Position>,

    /// Whether the left button is currently held.
    pub left_down: bool,

    /// Whether the cursor is inside the window.
    pub in_window: bool,
}

impl MouseState {
    /// Create a new mouse state with no position and the button released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update mouse position from raw pixel coordinates.
    ///
    /// # Arguments
    /// * `x` - X position in pixels
    /// * `y` - Y position in pixels (origin at top)
    /// * `window_width` - Window width in pixels
    /// * `window_height` - Window height in pixels
    pub fn set_position(&mut self, x: f64, y: f64, window_width: u32, window_height: u32) {
        self.position_pixels = Some(Position::new(x as f32, y as f32));

        // Calculate normalized UV coordinates (bottom-left origin, Y up)
        let norm_x = x as f32 / window_width.max(1) as f32;
        let norm_y = 1.0 - y as f32 / window_height.max(1) as f32; // Flip Y
        self.position = Some(Position::new(norm_x, norm_y));
    }

    /// Get the normalized position as a tuple, if available.
    pub fn normalized_position(&self) -> Option<(f32, f32)> {
        self.position.map(|p| p.to_tuple())
    }

    /// Handle a left-button press/release event.
    pub fn set_left_button(&mut self, pressed: bool) {
        self.left_down = pressed;
    }

    /// Handle the cursor entering the window.
    pub fn enter_window(&mut self) {
        self.in_window = true;
    }

    /// Handle the cursor leaving the window. Positions are cleared so a
    /// stale coordinate is never raycast.
    pub fn leave_window(&mut self) {
        self.in_window = false;
        self.position = None;
        self.position_pixels = None;
    }

    /// Reset all mouse state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
