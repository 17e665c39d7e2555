//! Application shell: boot, routing and side-effect wiring.

use crate::app::api::ApiCtx;
use crate::breakpoints::Breakpoint;
use crate::components::shell::AppShell;
use crate::components::toast::{Toast, ToastHost, ToastKind};
use crate::core::error::ApiError;
use crate::core::store::AppStore;
use crate::features::agents::view::AgentsPage;
use crate::features::dashboard::view::DashboardPage;
use crate::features::login::view::LoginPage;
use crate::features::settings::form::ConsoleSettings;
use crate::features::settings::view::SettingsPage;
use crate::features::system::refresh;
use crate::features::workflows::view::WorkflowsPage;
use crate::services::token::{BrowserTokenStore, TokenStore};
use gloo::events::EventListener;
use gloo::utils::window;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{use_selector, Dispatch};

mod api;
mod effects;
mod preferences;
pub(crate) mod routes;

use routes::Route;

#[function_component(AstralApp)]
fn astral_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let settings = use_state(preferences::load_settings);
    let api_ctx = use_memo(
        |settings: &ConsoleSettings| ApiCtx::new(settings, Rc::new(BrowserTokenStore)),
        (*settings).clone(),
    );
    let toasts = use_state(Vec::<Toast>::new);
    let toast_id = use_state(|| 0u64);
    let breakpoint = use_state(current_breakpoint);
    let test_busy = use_state(|| false);

    let notify = {
        let toasts = toasts.clone();
        let toast_id = toast_id.clone();
        Callback::from(move |(kind, message): (ToastKind, String)| {
            push_toast(&toasts, &toast_id, kind, message);
        })
    };
    let on_failure = {
        let api_ctx = (*api_ctx).clone();
        let notify = notify.clone();
        Callback::from(move |error: ApiError| {
            effects::report_failure(&error, &api_ctx.tokens, &notify);
        })
    };

    {
        let breakpoint = breakpoint.clone();
        use_effect_with_deps(
            move |bp: &Breakpoint| {
                apply_breakpoint(*bp);
                let handler = EventListener::new(&window(), "resize", move |_event| {
                    let next = current_breakpoint();
                    if next != *breakpoint {
                        breakpoint.set(next);
                    }
                });
                move || drop(handler)
            },
            *breakpoint,
        );
    }

    let refresh_all = {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        let on_failure = on_failure.clone();
        Callback::from(move |_: ()| {
            refresh::refresh_health(&dispatch, &api_ctx.client, &on_failure);
            refresh::refresh_metrics(&dispatch, &api_ctx.client, &on_failure);
        })
    };

    {
        // Boot (and every settings change): identity plus both snapshots.
        let dispatch = dispatch.clone();
        let refresh_all = refresh_all.clone();
        let on_failure = on_failure.clone();
        let api_ctx_dep = (*api_ctx).clone();
        use_effect_with_deps(
            move |api_ctx: &ApiCtx| {
                refresh::load_root(&dispatch, &api_ctx.client, &on_failure);
                refresh_all.emit(());
                || ()
            },
            api_ctx_dep,
        );
    }

    let on_save_settings = {
        let settings = settings.clone();
        let notify = notify.clone();
        Callback::from(move |next: ConsoleSettings| {
            preferences::persist_settings(&next);
            settings.set(next);
            notify.emit((ToastKind::Success, "Settings saved".to_string()));
        })
    };
    let on_test_connection = {
        let api_ctx = (*api_ctx).clone();
        let notify = notify.clone();
        let on_failure = on_failure.clone();
        let test_busy = test_busy.clone();
        Callback::from(move |()| {
            if *test_busy {
                return;
            }
            test_busy.set(true);
            let client = api_ctx.client.clone();
            let notify = notify.clone();
            let on_failure = on_failure.clone();
            let test_busy = test_busy.clone();
            spawn_local(async move {
                match client.ping().await {
                    Ok(()) => notify.emit((ToastKind::Success, "Connection OK".to_string())),
                    Err(error) => on_failure.emit(error),
                }
                test_busy.set(false);
            });
        })
    };
    let on_save_token = {
        let api_ctx = (*api_ctx).clone();
        Callback::from(move |token: String| {
            api_ctx.tokens.save(&token);
            // Full reload so every page restarts with the new session.
            let _ = window().location().set_href("/");
        })
    };
    let dismiss_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| {
            toasts.set(
                (*toasts)
                    .iter()
                    .cloned()
                    .filter(|toast| toast.id != id)
                    .collect(),
            );
        })
    };

    html! {
        <BrowserRouter>
            <AppChrome
                breakpoint={*breakpoint}
                settings={(*settings).clone()}
                on_refresh={refresh_all}
                on_save_settings={on_save_settings}
                on_test_connection={on_test_connection}
                test_busy={*test_busy}
                on_save_token={on_save_token}
            />
            <ToastHost toasts={(*toasts).clone()} on_dismiss={dismiss_toast} />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
struct AppChromeProps {
    breakpoint: Breakpoint,
    settings: ConsoleSettings,
    on_refresh: Callback<()>,
    on_save_settings: Callback<ConsoleSettings>,
    on_test_connection: Callback<()>,
    test_busy: bool,
    on_save_token: Callback<String>,
}

#[function_component(AppChrome)]
fn app_chrome(props: &AppChromeProps) -> Html {
    let active = use_route::<Route>().unwrap_or(Route::Dashboard);
    let root = use_selector(|store: &AppStore| store.system.root.clone());

    let on_refresh = props.on_refresh.clone();
    let settings = props.settings.clone();
    let on_save_settings = props.on_save_settings.clone();
    let on_test_connection = props.on_test_connection.clone();
    let test_busy = props.test_busy;
    let on_save_token = props.on_save_token.clone();

    html! {
        <AppShell active={active} breakpoint={props.breakpoint} root={(*root).clone()}>
            <Switch<Route> render={move |route| match route {
                Route::Dashboard => html! { <DashboardPage on_refresh={on_refresh.clone()} /> },
                Route::Agents => html! { <AgentsPage /> },
                Route::Workflows => html! { <WorkflowsPage /> },
                Route::Settings => html! {
                    <SettingsPage
                        settings={settings.clone()}
                        on_save={on_save_settings.clone()}
                        on_test_connection={on_test_connection.clone()}
                        test_busy={test_busy}
                    />
                },
                Route::Login => html! { <LoginPage on_save={on_save_token.clone()} /> },
                Route::NotFound => html! {
                    <div class="placeholder-page">
                        <h2>{"Not found"}</h2>
                        <p class="muted">{"Use the navigation to return to a supported view."}</p>
                    </div>
                },
            }} />
        </AppShell>
    }
}

fn push_toast(
    toasts: &UseStateHandle<Vec<Toast>>,
    next_id: &UseStateHandle<u64>,
    kind: ToastKind,
    message: String,
) {
    let id = **next_id + 1;
    next_id.set(id);
    let mut list = (**toasts).clone();
    list.push(Toast { id, message, kind });
    if list.len() > 4 {
        let drain = list.len() - 4;
        list.drain(0..drain);
    }
    toasts.set(list);
}

fn apply_breakpoint(bp: Breakpoint) {
    if let Some(body) = gloo::utils::document().body() {
        let _ = body.set_attribute("data-bp", bp.name);
    }
}

fn current_breakpoint() -> Breakpoint {
    let width = window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(1280.0) as u16;
    crate::breakpoints::for_width(width)
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<AstralApp>::with_root(root).render();
    } else {
        yew::Renderer::<AstralApp>::new().render();
    }
}
