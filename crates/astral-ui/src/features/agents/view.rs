//! Agents page view.

use crate::components::placeholder::PlaceholderPanel;
use yew::prelude::*;

#[function_component(AgentsPage)]
pub(crate) fn agents_page() -> Html {
    html! {
        <PlaceholderPanel
            title="Agents"
            body="No agents yet"
            action_label="Create agent"
        />
    }
}
