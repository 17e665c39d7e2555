//! Headline stat cards: requests, latency, errors, overall health.

use crate::core::logic::{format_count, format_millis, status_tone};
use astral_api_models::{HealthSnapshot, HealthState, MetricsSnapshot};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct StatsCardsProps {
    pub health: Option<HealthSnapshot>,
    pub metrics: Option<MetricsSnapshot>,
}

#[function_component(StatsCards)]
pub(crate) fn stats_cards(props: &StatsCardsProps) -> Html {
    let requests = props
        .metrics
        .as_ref()
        .map_or_else(|| "0".to_string(), |m| format_count(m.requests.total));
    let avg = props
        .metrics
        .as_ref()
        .map_or_else(|| "0 ms".to_string(), |m| format_millis(m.requests.duration.avg));
    let errors = props
        .metrics
        .as_ref()
        .map_or_else(|| "0".to_string(), |m| format_count(m.errors.total));
    let status = props
        .health
        .as_ref()
        .map_or(HealthState::Unknown, |h| h.status);

    html! {
        <div class="stats-grid">
            {stat_card("Total requests", html! { <span class="stat-value">{requests}</span> })}
            {stat_card("Avg response", html! { <span class="stat-value">{avg}</span> })}
            {stat_card("Total errors", html! { <span class="stat-value error">{errors}</span> })}
            {stat_card("System status", html! {
                <span class={classes!("pill", status_tone(status))}>{status.as_str()}</span>
            })}
        </div>
    }
}

fn stat_card(label: &str, value: Html) -> Html {
    html! {
        <div class="card stat-card">
            <span class="stat-label muted">{label}</span>
            {value}
        </div>
    }
}
