//! Fetch orchestration for the system slice.
//!
//! Each operation follows the same protocol: mark in-flight, call the API,
//! resolve through the pure reducers. Failures are logged to the console and
//! handed to the caller's failure handler; the previous snapshot stays put.
//! Overlapping calls are not de-duplicated.

use crate::core::error::ApiError;
use crate::core::store::AppStore;
use crate::features::system::state;
use crate::services::http::ApiClient;
use gloo::console;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::Callback;
use yewdux::prelude::Dispatch;

pub(crate) fn refresh_health(
    dispatch: &Dispatch<AppStore>,
    client: &Rc<ApiClient>,
    on_failure: &Callback<ApiError>,
) {
    dispatch.reduce_mut(|store| state::begin_health(&mut store.system));
    let dispatch = dispatch.clone();
    let client = client.clone();
    let on_failure = on_failure.clone();
    spawn_local(async move {
        let result = client.fetch_health().await;
        if let Err(error) = &result {
            console::error!("health fetch failed", error.to_string());
            on_failure.emit(error.clone());
        }
        dispatch.reduce_mut(|store| state::finish_health(&mut store.system, result));
    });
}

pub(crate) fn refresh_metrics(
    dispatch: &Dispatch<AppStore>,
    client: &Rc<ApiClient>,
    on_failure: &Callback<ApiError>,
) {
    dispatch.reduce_mut(|store| state::begin_metrics(&mut store.system));
    let dispatch = dispatch.clone();
    let client = client.clone();
    let on_failure = on_failure.clone();
    spawn_local(async move {
        let result = client.fetch_metrics().await;
        if let Err(error) = &result {
            console::error!("metrics fetch failed", error.to_string());
            on_failure.emit(error.clone());
        }
        dispatch.reduce_mut(|store| state::finish_metrics(&mut store.system, result));
    });
}

/// Fetch the backend identity once at boot. Shown in the shell footer;
/// failures go through the shared failure handler like any other call, so a
/// rejected session on this endpoint still clears the token and redirects.
pub(crate) fn load_root(
    dispatch: &Dispatch<AppStore>,
    client: &Rc<ApiClient>,
    on_failure: &Callback<ApiError>,
) {
    let dispatch = dispatch.clone();
    let client = client.clone();
    let on_failure = on_failure.clone();
    spawn_local(async move {
        match client.fetch_root().await {
            Ok(info) => dispatch.reduce_mut(|store| state::set_root(&mut store.system, info)),
            Err(error) => {
                console::error!("identity fetch failed", error.to_string());
                on_failure.emit(error);
            }
        }
    });
}
