//! Input Module
//!
//! Platform-agnostic input handling for the water tank: cursor/button
//! tracking and press-edge detection. Decoupled from any specific windowing
//! system (like winit) so the logic is testable without a window.
//!
//! # Example
//!
//! ```rust,ignore
//! use ripple_tank_engine::input::{EdgeTrigger, MouseState};
//!
//! let mut mouse = MouseState::new();
//! let mut click = EdgeTrigger::new();
//!
//! mouse.set_position(100.0, 50.0, 800, 600);
//! mouse.set_left_button(true);
//! if click.update(mouse.left_down) {
//!     if let Some((u, v)) = mouse.normalized_position() {
//!         // Raycast into the tank and stamp a disturbance.
//!     }
//! }
//! ```

pub mod edge;
pub mod mouse;

pub use edge::EdgeTrigger;
pub use mouse::{MouseState, Position};
