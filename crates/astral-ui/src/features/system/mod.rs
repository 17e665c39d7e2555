//! System status slice: health and metrics snapshots.
//!
//! # Design
//! - All mutations go through the pure functions in [`state`] so the fetch
//!   protocol is testable without a browser.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod refresh;
