//! Application Layer
//!
//! Contains app initialization, logging setup and the host workspace.

pub mod application;
pub mod logging;
pub mod workspace;
