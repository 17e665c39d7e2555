//! HTTP client for the system API (REST).
//!
//! # Design
//! - Attach the bearer token on the way out, normalize every outcome to
//!   `Result<T, ApiError>` on the way in. No notifications or navigation
//!   happen here; see `app::effects` for that.

use crate::core::error::ApiError;
use crate::services::token::TokenStore;
use astral_api_models::{decode_body, HealthSnapshot, MetricsSnapshot, RootInfo};
use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use std::rc::Rc;

/// Thin client over the platform's system endpoints.
#[derive(Clone)]
pub(crate) struct ApiClient {
    base_url: String,
    timeout_ms: u32,
    tokens: Rc<dyn TokenStore>,
}

impl ApiClient {
    pub(crate) fn new(base_url: &str, timeout_ms: u32, tokens: Rc<dyn TokenStore>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_ms,
            tokens,
        }
    }

    pub(crate) async fn fetch_root(&self) -> Result<RootInfo, ApiError> {
        self.get_json("/").await
    }

    pub(crate) async fn fetch_health(&self) -> Result<HealthSnapshot, ApiError> {
        self.get_json("/health").await
    }

    pub(crate) async fn fetch_metrics(&self) -> Result<MetricsSnapshot, ApiError> {
        self.get_json("/metrics").await
    }

    /// Liveness probe; the body is ignored.
    pub(crate) async fn ping(&self) -> Result<(), ApiError> {
        let response = self.send(self.request("/ping")).await?;
        let status = response.status();
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(ApiError::from_status(status, server_message(response).await))
        }
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.send(self.request(path)).await?;
        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(ApiError::from_status(status, server_message(response).await));
        }
        let body: Value = response.json().await.map_err(|err| ApiError::Decode {
            detail: err.to_string(),
        })?;
        decode_body(body).map_err(ApiError::from)
    }

    fn request(&self, path: &str) -> Request {
        let request = Request::get(&format!("{}{}", self.base_url, path));
        match self.tokens.load() {
            Some(token) => request.header("Authorization", &format!("Bearer {token}")),
            None => request,
        }
    }

    /// Send with the fixed request timeout. A timed-out fetch is abandoned to
    /// the browser and reported as a network failure.
    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        let send = request.send();
        let deadline = TimeoutFuture::new(self.timeout_ms);
        futures::pin_mut!(send, deadline);
        match select(send, deadline).await {
            Either::Left((outcome, _)) => outcome.map_err(|err| classify_send_error(&err)),
            Either::Right(((), _)) => Err(ApiError::Network),
        }
    }
}

/// Pull a `message` field out of an error body, when there is one.
async fn server_message(response: Response) -> Option<String> {
    let body = response.json::<Value>().await.ok()?;
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn classify_send_error(error: &gloo_net::Error) -> ApiError {
    match error {
        // The fetch itself rejected: no response was received.
        gloo_net::Error::JsError(_) => ApiError::Network,
        other => ApiError::Request {
            detail: other.to_string(),
        },
    }
}
