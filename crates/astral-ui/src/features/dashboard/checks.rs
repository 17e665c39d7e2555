//! Per-component health check list.

use crate::core::logic::status_tone;
use astral_api_models::{CheckResult, HealthSnapshot};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct HealthChecksPanelProps {
    pub health: Option<HealthSnapshot>,
}

#[function_component(HealthChecksPanel)]
pub(crate) fn health_checks_panel(props: &HealthChecksPanelProps) -> Html {
    let checks = props.health.as_ref().map(|h| &h.checks);

    html! {
        <div class="panel">
            <h3>{"Health checks"}</h3>
            {match checks {
                Some(checks) if !checks.is_empty() => html! {
                    <div class="health-list">
                        {for checks.iter().map(|(name, check)| render_check(name, check))}
                    </div>
                },
                _ => html! { <p class="muted empty">{"No health check data"}</p> },
            }}
        </div>
    }
}

fn render_check(name: &str, check: &CheckResult) -> Html {
    html! {
        <div class="health-item" key={name.to_string()}>
            <div class="health-header">
                <span class="health-name">{name}</span>
                <span class={classes!("pill", status_tone(check.status))}>
                    {check.status.as_str()}
                </span>
            </div>
            {check.message.as_ref().map_or_else(Html::default, |message| html! {
                <p class="health-message muted">{message.clone()}</p>
            })}
            {check.details.as_ref().map_or_else(Html::default, |details| html! {
                <dl class="health-details">
                    {for details.iter().map(|(key, value)| html! {
                        <div class="health-detail-row">
                            <dt>{key.clone()}</dt>
                            <dd>{value.to_string()}</dd>
                        </div>
                    })}
                </dl>
            })}
        </div>
    }
}
