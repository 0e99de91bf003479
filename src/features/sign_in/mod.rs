//! Sign-In Feature
//!
//! Email sign-in form: a GPUI-free controller and the element that renders it.

pub mod controller;
pub mod form;

pub use controller::{SignInController, SignInInputs, SignInIntent, SignInView};
pub use form::{SignInForm, SignInFormState};
