//! Feature slices. State modules are portable; views are wasm-only.

pub mod settings;
pub mod system;

#[cfg(target_arch = "wasm32")]
pub mod agents;
#[cfg(target_arch = "wasm32")]
pub mod dashboard;
#[cfg(target_arch = "wasm32")]
pub mod login;
#[cfg(target_arch = "wasm32")]
pub mod workflows;
