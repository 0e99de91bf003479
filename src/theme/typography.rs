//! Typography - Font Sizes

/// Typography constants
pub struct Typography;

impl Typography {
    /// Live region notices
    pub const TINY: f32 = 12.0;
    pub const TINY_LINE_HEIGHT: f32 = 18.0;
    /// Body text, input value and links
    pub const PARAGRAPH: f32 = 14.0;
    /// Field label
    pub const H5: f32 = 16.0;
    /// Window header title
    pub const TITLE: f32 = 18.0;
}
