//! Pure state transitions for the system status slice.
//!
//! Each fetch kind carries its own [`FetchStatus`] rather than sharing one
//! loading flag, so overlapping health and metrics fetches cannot clear each
//! other's in-flight marker. Snapshots are replaced wholesale on success and
//! retained untouched on failure; overlapping calls of the same kind are not
//! de-duplicated, so the stored snapshot is the most recently *resolved* one.

use crate::core::error::ApiError;
use astral_api_models::{HealthSnapshot, MetricsSnapshot, RootInfo};

/// Lifecycle of one fetch operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// Never started.
    #[default]
    Idle,
    /// Request issued, not yet resolved.
    InFlight,
    /// Last resolution was a success.
    Succeeded,
    /// Last resolution was a failure.
    Failed,
}

impl FetchStatus {
    /// Whether a request is currently outstanding.
    #[must_use]
    pub const fn is_in_flight(self) -> bool {
        matches!(self, Self::InFlight)
    }
}

/// Shared system status state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SystemState {
    /// Latest successfully fetched health snapshot.
    pub health: Option<HealthSnapshot>,
    /// Latest successfully fetched metrics snapshot.
    pub metrics: Option<MetricsSnapshot>,
    /// Backend identity fetched once at boot.
    pub root: Option<RootInfo>,
    /// Health fetch lifecycle.
    pub health_fetch: FetchStatus,
    /// Metrics fetch lifecycle.
    pub metrics_fetch: FetchStatus,
}

/// Any fetch currently outstanding. Pages show one spinner for both kinds,
/// matching the original console behavior.
#[must_use]
pub fn is_loading(state: &SystemState) -> bool {
    state.health_fetch.is_in_flight() || state.metrics_fetch.is_in_flight()
}

/// Mark a health fetch as issued. The previous snapshot stays visible.
pub fn begin_health(state: &mut SystemState) {
    state.health_fetch = FetchStatus::InFlight;
}

/// Resolve a health fetch. Success replaces the snapshot wholesale; failure
/// leaves the prior snapshot (possibly `None`) untouched.
pub fn finish_health(state: &mut SystemState, result: Result<HealthSnapshot, ApiError>) {
    match result {
        Ok(snapshot) => {
            state.health = Some(snapshot);
            state.health_fetch = FetchStatus::Succeeded;
        }
        Err(_) => {
            state.health_fetch = FetchStatus::Failed;
        }
    }
}

/// Mark a metrics fetch as issued.
pub fn begin_metrics(state: &mut SystemState) {
    state.metrics_fetch = FetchStatus::InFlight;
}

/// Resolve a metrics fetch; same retention rules as [`finish_health`].
pub fn finish_metrics(state: &mut SystemState, result: Result<MetricsSnapshot, ApiError>) {
    match result {
        Ok(snapshot) => {
            state.metrics = Some(snapshot);
            state.metrics_fetch = FetchStatus::Succeeded;
        }
        Err(_) => {
            state.metrics_fetch = FetchStatus::Failed;
        }
    }
}

/// Record the backend identity document.
pub fn set_root(state: &mut SystemState, info: RootInfo) {
    state.root = Some(info);
}

#[cfg(test)]
mod tests {
    use super::*;
    use astral_api_models::{DurationStats, ErrorMetrics, HealthState, RequestMetrics};
    use std::collections::BTreeMap;

    fn health(status: HealthState) -> HealthSnapshot {
        HealthSnapshot {
            status,
            checks: BTreeMap::new(),
        }
    }

    fn metrics(total: u64) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: RequestMetrics {
                total,
                duration: DurationStats {
                    count: total,
                    min: 0.001,
                    max: 0.5,
                    avg: 0.02,
                    p50: 0.015,
                    p95: 0.1,
                    p99: 0.3,
                },
            },
            errors: ErrorMetrics { total: 0 },
        }
    }

    #[test]
    fn successful_health_fetch_stores_snapshot_and_stops_loading() {
        let mut state = SystemState::default();
        assert!(!is_loading(&state));

        begin_health(&mut state);
        assert!(is_loading(&state));

        finish_health(&mut state, Ok(health(HealthState::Healthy)));
        assert!(!is_loading(&state));
        assert_eq!(state.health, Some(health(HealthState::Healthy)));
        assert_eq!(state.health_fetch, FetchStatus::Succeeded);
    }

    #[test]
    fn failed_health_fetch_keeps_prior_snapshot() {
        let mut state = SystemState::default();

        // First failure: snapshot stays None.
        begin_health(&mut state);
        finish_health(&mut state, Err(ApiError::Server { message: None }));
        assert_eq!(state.health, None);
        assert!(!is_loading(&state));

        // Failure after a success: stale snapshot is retained.
        begin_health(&mut state);
        finish_health(&mut state, Ok(health(HealthState::Degraded)));
        begin_health(&mut state);
        finish_health(&mut state, Err(ApiError::Network));
        assert_eq!(state.health, Some(health(HealthState::Degraded)));
        assert_eq!(state.health_fetch, FetchStatus::Failed);
    }

    #[test]
    fn overlapping_health_fetches_resolve_last_wins() {
        let mut state = SystemState::default();

        // Two calls issued back to back; the first issued resolves last.
        begin_health(&mut state);
        begin_health(&mut state);
        finish_health(&mut state, Ok(health(HealthState::Healthy)));
        finish_health(&mut state, Ok(health(HealthState::Unhealthy)));

        assert_eq!(state.health, Some(health(HealthState::Unhealthy)));
        assert!(!is_loading(&state));
    }

    #[test]
    fn concurrent_health_and_metrics_do_not_share_a_flag() {
        let mut state = SystemState::default();

        begin_health(&mut state);
        begin_metrics(&mut state);

        // Metrics resolves first; health must still read as loading.
        finish_metrics(&mut state, Ok(metrics(10)));
        assert!(is_loading(&state));
        assert!(state.metrics.is_some());

        finish_health(&mut state, Ok(health(HealthState::Healthy)));
        assert!(!is_loading(&state));
        assert!(state.health.is_some());
        assert!(state.metrics.is_some());
    }

    #[test]
    fn metrics_failure_keeps_prior_snapshot() {
        let mut state = SystemState::default();
        begin_metrics(&mut state);
        finish_metrics(&mut state, Ok(metrics(10)));
        begin_metrics(&mut state);
        finish_metrics(
            &mut state,
            Err(ApiError::Envelope {
                message: Some("collector offline".into()),
            }),
        );
        assert_eq!(state.metrics, Some(metrics(10)));
        assert_eq!(state.metrics_fetch, FetchStatus::Failed);
    }

    #[test]
    fn root_info_is_recorded() {
        let mut state = SystemState::default();
        set_root(
            &mut state,
            RootInfo {
                name: "AstralAgent".into(),
                version: "0.1.0".into(),
                environment: "development".into(),
                docs: None,
            },
        );
        assert_eq!(state.root.as_ref().map(|info| info.name.as_str()), Some("AstralAgent"));
    }
}
