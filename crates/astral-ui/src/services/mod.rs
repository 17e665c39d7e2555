//! Browser-facing services and their injectable seams.

pub mod token;

#[cfg(target_arch = "wasm32")]
pub mod http;
