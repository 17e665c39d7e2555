//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - One client per settings generation; saving settings rebuilds it.
//! - The token store is created once and shared with the failure handler.

use crate::features::settings::form::ConsoleSettings;
use crate::services::http::ApiClient;
use crate::services::token::TokenStore;
use std::rc::Rc;

/// Shared API client context for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
    /// Persisted-token access shared with the failure handler.
    pub tokens: Rc<dyn TokenStore>,
}

impl ApiCtx {
    /// Create a new context from the active settings.
    pub(crate) fn new(settings: &ConsoleSettings, tokens: Rc<dyn TokenStore>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(
                &settings.api_base_url,
                settings.timeout_ms,
                tokens.clone(),
            )),
            tokens,
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
