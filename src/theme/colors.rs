//! Colors - Sign-In Theme Colors

use gpui::{Rgba, rgb, rgba};

/// Color palette - All colors are accessed via associated functions
pub struct Palette;

impl Palette {
    // Primary colors
    /// Primary accent - Blue (for main buttons and links)
    pub fn primary() -> Rgba { rgb(0x1869f5) }
    /// Primary accent when hovered
    pub fn primary_hover() -> Rgba { rgb(0x3385ff) }

    // Background colors
    /// Window background
    pub fn background() -> Rgba { rgb(0xf2f3f5) }
    /// Card background
    pub fn card_bg() -> Rgba { rgb(0xffffff) }
    /// Card footer background
    pub fn footer_bg() -> Rgba { rgb(0xf7f8fa) }
    /// Header bar background
    pub fn header_bg() -> Rgba { rgb(0x141414) }

    // Text colors
    /// Headings and input text
    pub fn text_primary() -> Rgba { rgb(0x141414) }
    /// Footer prompt
    pub fn text_secondary() -> Rgba { rgb(0x4e5052) }
    /// Notices
    pub fn text_muted() -> Rgba { rgb(0x76777a) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Validation errors
    pub fn danger() -> Rgba { rgb(0xe03f6a) }

    // Border colors
    /// Card border
    pub fn border() -> Rgba { rgb(0xdcdee0) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0x1869f5) }

    // Button colors
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Ghost button hover
    pub fn button_ghost_hover() -> Rgba { rgba(0xffffff22) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xc4c7cc) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x9d9fa3) }
}
