//! Settings feature slice.
//!
//! # Design
//! - Validation and the settings record are portable; persistence and the
//!   form view stay in the browser-only modules.

pub mod form;

#[cfg(target_arch = "wasm32")]
pub mod view;
