//! Dual-mode application chrome.
//!
//! # Design
//! - One shell, two layouts: sidebar navigation from tablet width up, a
//!   bottom tab bar on phones (the original mobile console's TabBar).

use crate::app::routes::Route;
use crate::breakpoints::Breakpoint;
use crate::core::logic::{nav_layout, NavLayout};
use astral_api_models::RootInfo;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub active: Route,
    pub breakpoint: Breakpoint,
    pub root: Option<RootInfo>,
}

const NAV_ITEMS: [(Route, &str); 4] = [
    (Route::Dashboard, "Dashboard"),
    (Route::Agents, "Agents"),
    (Route::Workflows, "Workflows"),
    (Route::Settings, "Settings"),
];

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let layout = nav_layout(props.breakpoint);

    let identity = props.root.as_ref().map_or_else(
        || html! { <span class="muted">{"offline"}</span> },
        |info| {
            html! {
                <span class="muted">
                    {format!("{} v{} ({})", info.name, info.version, info.environment)}
                </span>
            }
        },
    );

    match layout {
        NavLayout::Sidebar => html! {
            <div class="app-shell desktop">
                <aside class="sidebar">
                    <div class="brand">
                        <strong>{"AstralAgent"}</strong>
                        <span class="muted">{"Admin Console"}</span>
                    </div>
                    <nav>
                        {for NAV_ITEMS.iter().map(|(route, label)| nav_item(route.clone(), label, &props.active))}
                    </nav>
                    <div class="sidebar-footer">{identity}</div>
                </aside>
                <main class="content">{props.children.clone()}</main>
            </div>
        },
        NavLayout::TabBar => html! {
            <div class="app-shell mobile">
                <main class="content">{props.children.clone()}</main>
                <nav class="tab-bar">
                    {for NAV_ITEMS.iter().map(|(route, label)| nav_item(route.clone(), label, &props.active))}
                </nav>
            </div>
        },
    }
}

fn nav_item(route: Route, label: &str, active: &Route) -> Html {
    let class = classes!("nav-item", (route == *active).then_some("active"));
    html! {
        <Link<Route> to={route} classes={class}>{label}</Link<Route>>
    }
}
