//! Route-aware header navigation link.
//!
//! # Design
//! - All class and icon decisions come from [`crate::core::nav::render`].
//! - The selected segment is read from the router location unless the caller pins one.
//! - Labels resolve through the [`TranslationBundle`] context.

use crate::app::Route;
use crate::components::atoms::icons::nav_icon;
use crate::core::nav::{NavItem, render};
use crate::core::route::StaticRoute;
use crate::i18n::TranslationBundle;
use yew::prelude::*;
use yew_router::prelude::{Link, Routable, use_location};

#[derive(Properties, PartialEq)]
pub(crate) struct NavLinkProps {
    #[prop_or_default]
    pub item: NavItem,
    #[prop_or_default]
    pub class: Classes,
    /// Overrides the segment read from the router.
    #[prop_or_default]
    pub segment: Option<AttrValue>,
}

#[function_component(NavLink)]
pub(crate) fn nav_link(props: &NavLinkProps) -> Html {
    let location = use_location();
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();

    let route = props.segment.as_ref().map_or_else(
        || StaticRoute::from_path(location.as_ref().map_or("/", |loc| loc.path())),
        |segment| StaticRoute::from_path(segment),
    );
    let extra = props.class.to_string();
    let markup = render(&props.item, &route, &bundle, Some(extra.as_str()));

    let target = Route::recognize(markup.href).unwrap_or(Route::NotFound);
    let icon = nav_icon(
        markup.icon.kind,
        markup.icon.variant,
        Classes::from(markup.icon.classes.to_string()),
    );
    html! {
        <Link<Route> to={target} classes={Classes::from(markup.classes.to_string())}>
            {icon}
            {markup.label}
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct QinglongNavProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Header link to the Qinglong workspace.
#[function_component(QinglongNav)]
pub(crate) fn qinglong_nav(props: &QinglongNavProps) -> Html {
    html! { <NavLink item={NavItem::QINGLONG} class={props.class.clone()} /> }
}
