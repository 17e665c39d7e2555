//! Dashboard page view.

use crate::core::store::AppStore;
use crate::features::dashboard::checks::HealthChecksPanel;
use crate::features::dashboard::latency::LatencyPanel;
use crate::features::dashboard::stats_cards::StatsCards;
use crate::features::system::state::is_loading;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct DashboardPageProps {
    pub on_refresh: Callback<()>,
}

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page(props: &DashboardPageProps) -> Html {
    let health = use_selector(|store: &AppStore| store.system.health.clone());
    let metrics = use_selector(|store: &AppStore| store.system.metrics.clone());
    let loading = use_selector(|store: &AppStore| is_loading(&store.system));

    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_| on_refresh.emit(()))
    };

    html! {
        <section class="dashboard-page">
            <div class="panel-head">
                <div>
                    <p class="eyebrow">{"System"}</p>
                    <h2>{"Dashboard"}</h2>
                </div>
                <button class="btn btn-ghost" disabled={*loading} onclick={on_refresh}>
                    {if *loading { "Refreshing…" } else { "Refresh" }}
                </button>
            </div>
            {if *loading && health.is_none() && metrics.is_none() {
                html! { <div class="loading-state"><span class="spinner" aria-label="Loading" /></div> }
            } else {
                html! {
                    <>
                        <StatsCards health={(*health).clone()} metrics={(*metrics).clone()} />
                        <HealthChecksPanel health={(*health).clone()} />
                        <LatencyPanel metrics={(*metrics).clone()} />
                    </>
                }
            }}
        </section>
    }
}
