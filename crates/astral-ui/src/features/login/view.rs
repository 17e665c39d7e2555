//! Login page view.
//!
//! The platform has no interactive sign-in flow yet; this page persists a
//! bearer token so requests stop being rejected after a 401 redirect.

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoginPageProps {
    pub on_save: Callback<String>,
}

#[function_component(LoginPage)]
pub(crate) fn login_page(props: &LoginPageProps) -> Html {
    let token = use_state(String::new);
    let empty = use_state(|| false);

    let on_input = {
        let token = token.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            token.set(input.value());
        })
    };
    let on_submit = {
        let token = token.clone();
        let empty = empty.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let value = token.trim().to_string();
            if value.is_empty() {
                empty.set(true);
                return;
            }
            empty.set(false);
            on_save.emit(value);
        })
    };

    html! {
        <section class="login-page">
            <div class="panel narrow">
                <h2>{"Sign in"}</h2>
                <p class="muted">{"Paste an API token issued for this console."}</p>
                <form onsubmit={on_submit}>
                    <label class="field">
                        <span>{"API token"}</span>
                        <input
                            type="password"
                            value={(*token).clone()}
                            oninput={on_input}
                        />
                    </label>
                    {if *empty {
                        html! { <p class="field-error">{"A token is required."}</p> }
                    } else {
                        Html::default()
                    }}
                    <button type="submit" class="btn btn-primary">{"Save token"}</button>
                </form>
            </div>
        </section>
    }
}
