//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and carry the sign-in form's rules.

pub mod email;
pub mod form_state;
