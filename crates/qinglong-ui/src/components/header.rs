//! Top navigation bar hosting the header links.

use crate::components::nav_link::QinglongNav;
use crate::i18n::TranslationBundle;
use yew::prelude::*;

#[function_component(MainHeader)]
pub(crate) fn main_header() -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let dir = bundle.dir();

    html! {
        <header class="sticky top-0 flex h-14 items-center justify-between px-4" dir={dir}>
            <strong class="text-base">{"Qinglong"}</strong>
            <nav
                class="flex items-center gap-1"
                aria-label={bundle.text("nav.aria", "Main navigation")}
            >
                <QinglongNav class={classes!("ml-2", "flex", "h-8", "items-center", "rounded-xl", "px-3")} />
            </nav>
            <span class="text-xs opacity-60">{bundle.locale.label()}</span>
        </header>
    }
}
