#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the AstralAgent system API.
//!
//! These types mirror the payloads served by the platform's system endpoints
//! (`/`, `/health`, `/metrics`, `/ping`) so the console and any future CLI
//! decode the same contract. The optional response envelope the backend wraps
//! around payloads is decoded here as well, keeping that logic testable
//! outside the browser.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Overall or per-component health classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    /// All checks passing.
    Healthy,
    /// Operational with at least one failing non-critical check.
    Degraded,
    /// One or more critical checks failing.
    Unhealthy,
    /// Status not reported or unrecognized.
    #[default]
    #[serde(other)]
    Unknown,
}

impl HealthState {
    /// Stable lowercase label matching the wire format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Unhealthy => "unhealthy",
            Self::Unknown => "unknown",
        }
    }
}

/// Result of a single registered health check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Outcome of this check.
    pub status: HealthState,
    /// Optional human-readable explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Free-form diagnostic details keyed by field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, Value>>,
}

/// Snapshot returned by `GET /health`, replaced wholesale on each fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    /// Aggregate status across all checks.
    pub status: HealthState,
    /// Per-component results keyed by check name.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckResult>,
}

/// Request-duration distribution in floating-point seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DurationStats {
    /// Number of samples observed.
    pub count: u64,
    /// Fastest observed request.
    pub min: f64,
    /// Slowest observed request.
    pub max: f64,
    /// Arithmetic mean.
    pub avg: f64,
    /// Median.
    pub p50: f64,
    /// 95th percentile.
    pub p95: f64,
    /// 99th percentile.
    pub p99: f64,
}

/// Request counters plus latency distribution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestMetrics {
    /// Total requests served since boot.
    pub total: u64,
    /// Latency distribution for those requests.
    pub duration: DurationStats,
}

/// Error counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMetrics {
    /// Total errored requests since boot.
    pub total: u64,
}

/// Snapshot returned by `GET /metrics`, replaced wholesale on each fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Request counters and latency stats.
    pub requests: RequestMetrics,
    /// Error counters.
    pub errors: ErrorMetrics,
}

/// Identity document returned by `GET /`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootInfo {
    /// Application name.
    pub name: String,
    /// Deployed version string.
    pub version: String,
    /// Environment label (`development`, `production`, ...).
    pub environment: String,
    /// Path to interactive API docs when exposed.
    #[serde(default)]
    pub docs: Option<String>,
}

/// Optional application-level wrapper around any payload.
///
/// The backend may return `{ code, success, message, data }` with a logical
/// status independent of the transport status; `code == 0` or
/// `success == true` means logical success.
#[derive(Clone, Debug, Deserialize)]
struct Envelope {
    code: Option<i64>,
    success: Option<bool>,
    message: Option<String>,
    data: Option<Value>,
}

impl Envelope {
    fn is_success(&self) -> bool {
        self.code == Some(0) || self.success == Some(true)
    }
}

/// Failure produced while unwrapping a response body.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The envelope reported logical failure despite a 2xx transport status.
    #[error("{}", message.as_deref().unwrap_or("request failed"))]
    Failure {
        /// Server-supplied failure message, when present.
        message: Option<String>,
    },
    /// The body (or its `data` field) did not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Unwrap an optional envelope and decode the payload.
///
/// Bodies without a `code`/`success` field are decoded directly; enveloped
/// bodies are unwrapped when logically successful and rejected otherwise.
///
/// # Errors
/// [`EnvelopeError::Failure`] when the envelope indicates logical failure,
/// [`EnvelopeError::Decode`] when the payload does not deserialize.
pub fn decode_body<T>(body: Value) -> Result<T, EnvelopeError>
where
    T: serde::de::DeserializeOwned,
{
    let enveloped = body
        .as_object()
        .is_some_and(|map| map.contains_key("code") || map.contains_key("success"));
    if !enveloped {
        return Ok(serde_json::from_value(body)?);
    }
    let envelope: Envelope = serde_json::from_value(body)?;
    if envelope.is_success() {
        Ok(serde_json::from_value(envelope.data.unwrap_or(Value::Null))?)
    } else {
        Err(EnvelopeError::Failure {
            message: envelope.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_body_decodes_directly() {
        let body = json!({"status": "healthy", "checks": {}});
        let snapshot: HealthSnapshot = decode_body(body).unwrap();
        assert_eq!(snapshot.status, HealthState::Healthy);
        assert!(snapshot.checks.is_empty());
    }

    #[test]
    fn envelope_code_zero_unwraps_data() {
        let body = json!({"code": 0, "data": {"status": "degraded", "checks": {}}});
        let snapshot: HealthSnapshot = decode_body(body).unwrap();
        assert_eq!(snapshot.status, HealthState::Degraded);
    }

    #[test]
    fn envelope_success_true_unwraps_data() {
        let body = json!({"success": true, "data": {"name": "AstralAgent", "version": "0.1.0", "environment": "development"}});
        let info: RootInfo = decode_body(body).unwrap();
        assert_eq!(info.name, "AstralAgent");
        assert!(info.docs.is_none());
    }

    #[test]
    fn failing_envelope_carries_message() {
        let body = json!({"code": 4001, "message": "agent quota exceeded", "data": null});
        let err = decode_body::<HealthSnapshot>(body).unwrap_err();
        match err {
            EnvelopeError::Failure { message } => {
                assert_eq!(message.as_deref(), Some("agent quota exceeded"));
            }
            EnvelopeError::Decode(_) => panic!("expected logical failure"),
        }
    }

    #[test]
    fn failing_envelope_without_message_uses_fallback_display() {
        let body = json!({"success": false, "data": null});
        let err = decode_body::<HealthSnapshot>(body).unwrap_err();
        assert_eq!(err.to_string(), "request failed");
    }

    #[test]
    fn unknown_health_state_maps_to_unknown() {
        let body = json!({
            "status": "booting",
            "checks": {
                "database": {"status": "healthy", "message": null},
                "cache": {"status": "unhealthy", "message": "connection refused", "details": {"error_type": "ConnectionError"}}
            }
        });
        let snapshot: HealthSnapshot = decode_body(body).unwrap();
        assert_eq!(snapshot.status, HealthState::Unknown);
        assert_eq!(snapshot.checks["database"].status, HealthState::Healthy);
        let cache = &snapshot.checks["cache"];
        assert_eq!(cache.message.as_deref(), Some("connection refused"));
        assert!(cache.details.as_ref().unwrap().contains_key("error_type"));
    }

    #[test]
    fn metrics_snapshot_matches_backend_shape() {
        let body = json!({
            "requests": {
                "total": 1204,
                "duration": {"count": 1204, "min": 0.001, "max": 2.5, "avg": 0.032, "p50": 0.021, "p95": 0.14, "p99": 0.9}
            },
            "errors": {"total": 7}
        });
        let metrics: MetricsSnapshot = decode_body(body).unwrap();
        assert_eq!(metrics.requests.total, 1204);
        assert_eq!(metrics.errors.total, 7);
        assert!((metrics.requests.duration.p95 - 0.14).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let body = json!({"code": 0, "data": "not an object"});
        let err = decode_body::<HealthSnapshot>(body).unwrap_err();
        assert!(matches!(err, EnvelopeError::Decode(_)));
    }
}
