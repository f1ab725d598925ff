//! Routing definitions for the Qinglong UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/qinglong")]
    Qinglong,
    #[at("/explore")]
    Explore,
    #[not_found]
    #[at("/404")]
    NotFound,
}
