//! SVG glyphs for header navigation links.

use crate::core::nav::{IconVariant, NavIcon};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub variant: IconVariant,
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={props.class.clone()}
            viewBox="0 0 24 24"
            fill="currentColor"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

/// Hammer glyph in line or fill rendition.
#[function_component(HammerIcon)]
pub(crate) fn hammer_icon(props: &IconProps) -> Html {
    let path = match props.variant {
        IconVariant::Fill => {
            "M17 8V2h3a1 1 0 0 1 1 1v4a1 1 0 0 1-1 1h-3Zm-2 14a1 1 0 0 1-1 1h-4a1 1 0 0 1-1-1V8H2.5V6.074a1 1 0 0 1 .496-.864L8.5 2H15v20Z"
        }
        IconVariant::Line => {
            "M20 2a1 1 0 0 1 1 1v4a1 1 0 0 1-1 1h-4v14a1 1 0 0 1-1 1h-4a1 1 0 0 1-1-1V8H2.5V6.074a1 1 0 0 1 .496-.864L8.5 2H20Zm-4 2H9.041L4.5 6.649V6H12v15h2V6h2V4Zm3 0h-1v2h1V4Z"
        }
    };
    icon_svg(props, html! { <path d={path} /> })
}

/// Glyph for `kind` in the requested rendition.
pub(crate) fn nav_icon(kind: NavIcon, variant: IconVariant, class: Classes) -> Html {
    match kind {
        NavIcon::Hammer => html! { <HammerIcon {class} {variant} /> },
    }
}
