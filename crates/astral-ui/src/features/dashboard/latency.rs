//! Request latency percentile panel.

use crate::core::logic::format_millis_precise;
use astral_api_models::MetricsSnapshot;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LatencyPanelProps {
    pub metrics: Option<MetricsSnapshot>,
}

#[function_component(LatencyPanel)]
pub(crate) fn latency_panel(props: &LatencyPanelProps) -> Html {
    let Some(metrics) = &props.metrics else {
        return Html::default();
    };
    let duration = &metrics.requests.duration;
    let rows = [
        ("Min", duration.min),
        ("P50", duration.p50),
        ("P95", duration.p95),
        ("P99", duration.p99),
        ("Max", duration.max),
    ];

    html! {
        <div class="panel">
            <h3>{"Latency"}</h3>
            <div class="metrics-list">
                {for rows.iter().map(|(label, seconds)| html! {
                    <div class="metric-row">
                        <span class="muted">{*label}</span>
                        <span class="metric-value">{format_millis_precise(*seconds)}</span>
                    </div>
                })}
            </div>
        </div>
    }
}
