//! Settings page view.
//!
//! # Design
//! - Keep the view controlled and emit a validated record via callback;
//!   persistence stays in the app shell.

use crate::features::settings::form::{parse_settings, ConsoleSettings, SettingsError};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsPageProps {
    pub settings: ConsoleSettings,
    pub on_save: Callback<ConsoleSettings>,
    pub on_test_connection: Callback<()>,
    pub test_busy: bool,
}

#[function_component(SettingsPage)]
pub(crate) fn settings_page(props: &SettingsPageProps) -> Html {
    let api_base_url = use_state(|| props.settings.api_base_url.clone());
    let timeout_ms = use_state(|| props.settings.timeout_ms.to_string());
    let debug = use_state(|| props.settings.debug);
    let error = use_state(|| None as Option<SettingsError>);

    {
        let api_base_url = api_base_url.clone();
        let timeout_ms = timeout_ms.clone();
        let debug = debug.clone();
        use_effect_with_deps(
            move |settings: &ConsoleSettings| {
                api_base_url.set(settings.api_base_url.clone());
                timeout_ms.set(settings.timeout_ms.to_string());
                debug.set(settings.debug);
                || ()
            },
            props.settings.clone(),
        );
    }

    let on_url_input = {
        let api_base_url = api_base_url.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            api_base_url.set(input.value());
        })
    };
    let on_timeout_input = {
        let timeout_ms = timeout_ms.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            timeout_ms.set(input.value());
        })
    };
    let on_debug_toggle = {
        let debug = debug.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            debug.set(input.checked());
        })
    };
    let on_submit = {
        let api_base_url = api_base_url.clone();
        let timeout_ms = timeout_ms.clone();
        let debug = debug.clone();
        let error = error.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match parse_settings(&api_base_url, &timeout_ms, *debug) {
                Ok(settings) => {
                    error.set(None);
                    on_save.emit(settings);
                }
                Err(failure) => error.set(Some(failure)),
            }
        })
    };
    let on_reset = {
        let api_base_url = api_base_url.clone();
        let timeout_ms = timeout_ms.clone();
        let debug = debug.clone();
        let error = error.clone();
        let settings = props.settings.clone();
        Callback::from(move |_| {
            api_base_url.set(settings.api_base_url.clone());
            timeout_ms.set(settings.timeout_ms.to_string());
            debug.set(settings.debug);
            error.set(None);
        })
    };
    let on_test = {
        let on_test_connection = props.on_test_connection.clone();
        Callback::from(move |_| on_test_connection.emit(()))
    };

    html! {
        <section class="settings-page">
            <div class="panel">
                <h2>{"Settings"}</h2>
                <form onsubmit={on_submit}>
                    <label class="field">
                        <span>{"API base URL"}</span>
                        <input
                            type="text"
                            value={(*api_base_url).clone()}
                            placeholder="http://localhost:8000"
                            oninput={on_url_input}
                        />
                    </label>
                    <label class="field">
                        <span>{"Request timeout (ms)"}</span>
                        <input
                            type="number"
                            value={(*timeout_ms).clone()}
                            placeholder="30000"
                            oninput={on_timeout_input}
                        />
                    </label>
                    <label class="field toggle">
                        <span>{"Debug logging"}</span>
                        <input type="checkbox" checked={*debug} onchange={on_debug_toggle} />
                    </label>
                    {(*error).map_or_else(Html::default, |failure| html! {
                        <p class="field-error">{failure.to_string()}</p>
                    })}
                    <div class="actions">
                        <button type="submit" class="btn btn-primary">{"Save settings"}</button>
                        <button type="button" class="btn" onclick={on_reset}>{"Reset"}</button>
                        <button type="button" class="btn btn-ghost" disabled={props.test_busy} onclick={on_test}>
                            {if props.test_busy { "Testing…" } else { "Test connection" }}
                        </button>
                    </div>
                </form>
            </div>
        </section>
    }
}
