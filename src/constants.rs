//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Sign-in card maximum width in pixels
pub const SIGN_IN_CARD_MAX_WIDTH: f32 = 480.0;

/// Submit button minimum width
pub const SUBMIT_BUTTON_MIN_WIDTH: f32 = 100.0;

/// Header bar height
pub const HEADER_HEIGHT: f32 = 44.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 640.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 520.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;
