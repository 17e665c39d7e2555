//! Routing definitions for the console.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Dashboard,
    #[at("/agents")]
    Agents,
    #[at("/workflows")]
    Workflows,
    #[at("/settings")]
    Settings,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}
