//! Dashboard feature slice.
//!
//! # Design
//! - Read snapshots from the `AppStore` only; fetching is triggered by the
//!   app shell on mount and by the refresh button.

pub mod checks;
pub mod latency;
pub mod stats_cards;
pub mod view;
