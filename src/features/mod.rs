//! Features - Vertical Feature Slices
//!
//! Each feature contains its controller and the widgets that render it.

pub mod sign_in;
