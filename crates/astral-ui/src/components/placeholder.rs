//! Empty-state panel for pages that only exist as navigation targets.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PlaceholderPanelProps {
    pub title: AttrValue,
    pub body: AttrValue,
    pub action_label: AttrValue,
}

#[function_component(PlaceholderPanel)]
pub(crate) fn placeholder_panel(props: &PlaceholderPanelProps) -> Html {
    html! {
        <section class="placeholder-page">
            <div class="panel">
                <h2>{props.title.clone()}</h2>
                <div class="empty-state">
                    <p class="muted">{props.body.clone()}</p>
                    <button class="btn btn-primary" disabled=true>
                        {props.action_label.clone()}
                    </button>
                </div>
            </div>
        </section>
    }
}
