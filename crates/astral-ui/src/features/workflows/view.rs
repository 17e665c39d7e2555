//! Workflows page view.

use crate::components::placeholder::PlaceholderPanel;
use yew::prelude::*;

#[function_component(WorkflowsPage)]
pub(crate) fn workflows_page() -> Html {
    html! {
        <PlaceholderPanel
            title="Workflows"
            body="No workflows yet"
            action_label="Create workflow"
        />
    }
}
