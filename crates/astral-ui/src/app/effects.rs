//! Presentation-layer handling of API failures.
//!
//! The HTTP client only returns typed errors; this module turns a resolved
//! failure into its visible consequences: one toast per failure, and for a
//! rejected session a token wipe plus a full-page redirect to the login
//! route.

use crate::components::toast::ToastKind;
use crate::core::error::{failure_effects, ApiError};
use crate::services::token::TokenStore;
use gloo::utils::window;
use std::rc::Rc;
use yew::Callback;

/// Apply the side effects for a failed call.
pub(crate) fn report_failure(
    error: &ApiError,
    tokens: &Rc<dyn TokenStore>,
    notify: &Callback<(ToastKind, String)>,
) {
    let effects = failure_effects(error);
    notify.emit((ToastKind::Error, effects.notice));
    if effects.clear_token {
        tokens.clear();
    }
    if let Some(path) = effects.redirect_to {
        let _ = window().location().set_href(path);
    }
}
