//! Portable state and logic shared by the wasm app and native tests.

pub mod error;
pub mod logic;
pub mod store;
