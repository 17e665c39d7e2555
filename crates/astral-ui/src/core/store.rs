//! App-wide yewdux store.
//!
//! # Design
//! - One store with small slices; components subscribe through selectors.
//! - Slices are mutated only via the pure functions in their feature module.

use crate::features::system::state::SystemState;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Health/metrics snapshots and their fetch lifecycles.
    pub system: SystemState,
}
