//! Sign-In GUI Library
//!
//! A controlled email sign-in form for GPUI applications, plus the small host
//! application used to run it by hand.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod components;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod theme;
