//! Composite Components
//!
//! Containers assembled from primitives.

pub mod card;
