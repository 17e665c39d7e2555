//! Typed failure taxonomy for API calls.
//!
//! # Design
//! - The HTTP client returns these values instead of firing notifications
//!   itself; the app shell decides how each failure is surfaced.
//! - One variant per distinguishable failure so tests can assert the exact
//!   branch a response took.

use astral_api_models::EnvelopeError;
use thiserror::Error;

/// Route navigated to when the session is rejected.
pub const LOGIN_PATH: &str = "/login";

/// Normalized outcome of a failed API call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 2xx transport status, but the response envelope reported failure.
    #[error("{}", message.as_deref().unwrap_or("request failed"))]
    Envelope {
        /// Message carried by the envelope, when present.
        message: Option<String>,
    },
    /// Transport 401: the stored session is no longer valid.
    #[error("unauthorized (401)")]
    Unauthorized,
    /// Transport 403: authenticated but not allowed.
    #[error("forbidden (403)")]
    Forbidden,
    /// Transport 404: the resource does not exist.
    #[error("not found (404)")]
    NotFound,
    /// Transport 500: server fault.
    #[error("server error (500)")]
    Server {
        /// Server-supplied message, when the body carried one.
        message: Option<String>,
    },
    /// Any other non-2xx transport status.
    #[error("unexpected status {status}")]
    Status {
        /// The transport status code.
        status: u16,
        /// Server-supplied message, when the body carried one.
        message: Option<String>,
    },
    /// No response was received at all.
    #[error("network unreachable")]
    Network,
    /// The request could not be constructed or sent.
    #[error("request not sent: {detail}")]
    Request {
        /// Diagnostic detail from the transport layer.
        detail: String,
    },
    /// A 2xx body that did not match the expected shape.
    #[error("malformed response: {detail}")]
    Decode {
        /// Diagnostic detail from the decoder.
        detail: String,
    },
}

impl ApiError {
    /// Classify a non-2xx transport status, keeping any server message.
    #[must_use]
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            500 => Self::Server { message },
            _ => Self::Status { status, message },
        }
    }

    /// User-facing notice shown for this failure. Every variant maps to
    /// exactly one message; there is no silent branch.
    #[must_use]
    pub fn notice(&self) -> String {
        match self {
            Self::Envelope { message } | Self::Status { message, .. } => message
                .clone()
                .unwrap_or_else(|| "Request failed".to_string()),
            Self::Unauthorized => "Unauthorized, please sign in again".to_string(),
            Self::Forbidden => "You do not have permission to access this resource".to_string(),
            Self::NotFound => "The requested resource does not exist".to_string(),
            Self::Server { message } => message
                .clone()
                .unwrap_or_else(|| "Server error".to_string()),
            Self::Network => "Network error, please check your connection".to_string(),
            Self::Request { .. } => "Request could not be sent".to_string(),
            Self::Decode { .. } => "Received a malformed response from the server".to_string(),
        }
    }

    /// Whether this failure invalidates the stored session.
    #[must_use]
    pub const fn requires_reauth(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<EnvelopeError> for ApiError {
    fn from(value: EnvelopeError) -> Self {
        match value {
            EnvelopeError::Failure { message } => Self::Envelope { message },
            EnvelopeError::Decode(err) => Self::Decode {
                detail: err.to_string(),
            },
        }
    }
}

/// What the presentation layer must do after a failed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailureEffects {
    /// Transient notification text (always present).
    pub notice: String,
    /// Remove the persisted auth token.
    pub clear_token: bool,
    /// Navigate away, with the target path.
    pub redirect_to: Option<&'static str>,
}

/// Map a failure to its presentation side effects.
///
/// Only [`ApiError::Unauthorized`] clears the token and redirects; every
/// failure produces exactly one notice.
#[must_use]
pub fn failure_effects(error: &ApiError) -> FailureEffects {
    let reauth = error.requires_reauth();
    FailureEffects {
        notice: error.notice(),
        clear_token: reauth,
        redirect_to: if reauth { Some(LOGIN_PATH) } else { None },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_their_variants() {
        assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, None), ApiError::Forbidden);
        assert_eq!(ApiError::from_status(404, None), ApiError::NotFound);
        assert_eq!(
            ApiError::from_status(500, Some("db down".into())),
            ApiError::Server {
                message: Some("db down".into())
            }
        );
        assert_eq!(
            ApiError::from_status(518, None),
            ApiError::Status {
                status: 518,
                message: None
            }
        );
    }

    #[test]
    fn server_message_is_surfaced_in_the_notice() {
        let error = ApiError::from_status(500, Some("db down".into()));
        assert!(error.notice().contains("db down"));
    }

    #[test]
    fn each_failure_kind_has_a_distinct_default_notice() {
        let notices = [
            ApiError::Envelope { message: None }.notice(),
            ApiError::Unauthorized.notice(),
            ApiError::Forbidden.notice(),
            ApiError::NotFound.notice(),
            ApiError::Server { message: None }.notice(),
            ApiError::Network.notice(),
            ApiError::Request {
                detail: "bad header".into(),
            }
            .notice(),
        ];
        for notice in &notices {
            assert!(!notice.is_empty());
        }
        // 401/403/404/network/request all read differently.
        assert_ne!(notices[1], notices[2]);
        assert_ne!(notices[1], notices[3]);
        assert_ne!(notices[5], notices[6]);
    }

    #[test]
    fn only_unauthorized_forces_reauth() {
        assert!(ApiError::Unauthorized.requires_reauth());
        for error in [
            ApiError::Forbidden,
            ApiError::NotFound,
            ApiError::Server { message: None },
            ApiError::Network,
            ApiError::Envelope { message: None },
        ] {
            assert!(!error.requires_reauth());
        }
    }

    #[test]
    fn unauthorized_effects_clear_token_and_redirect_to_login() {
        let effects = failure_effects(&ApiError::Unauthorized);
        assert!(effects.clear_token);
        assert_eq!(effects.redirect_to, Some(LOGIN_PATH));
    }

    #[test]
    fn a_rejected_session_empties_the_token_store() {
        use crate::services::token::{MemoryTokenStore, TokenStore};

        // A 401 classifies the same way whichever endpoint returned it, so
        // applying its effects must leave the store empty and one redirect
        // decision, exactly as the presentation subscriber does.
        let tokens = MemoryTokenStore::with_token("tok-123");
        let effects = failure_effects(&ApiError::from_status(401, None));
        if effects.clear_token {
            tokens.clear();
        }
        assert_eq!(tokens.load(), None);
        assert_eq!(effects.redirect_to, Some(LOGIN_PATH));
    }

    #[test]
    fn other_failures_only_notify() {
        for error in [
            ApiError::Forbidden,
            ApiError::Network,
            ApiError::Envelope {
                message: Some("quota exceeded".into()),
            },
        ] {
            let effects = failure_effects(&error);
            assert!(!effects.clear_token);
            assert_eq!(effects.redirect_to, None);
            assert_eq!(effects.notice, error.notice());
        }
    }

    #[test]
    fn envelope_failures_convert_with_their_message() {
        let source = EnvelopeError::Failure {
            message: Some("quota exceeded".into()),
        };
        assert_eq!(
            ApiError::from(source),
            ApiError::Envelope {
                message: Some("quota exceeded".into())
            }
        );
    }
}
