use crate::components::header::MainHeader;
use crate::i18n::{LocaleCode, TranslationBundle};
use gloo::console;
use preferences::load_locale;
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

mod preferences;
mod routes;

#[function_component(QinglongApp)]
pub(crate) fn qinglong_app() -> Html {
    let locale = use_state(load_locale);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| load_bundle(locale), locale)
    };

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <BrowserRouter>
                <MainHeader />
                <main class="px-4 py-6">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ContextProvider<TranslationBundle>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Qinglong} /> },
        Route::Qinglong => html! { <Section label_key="common.menus.qinglong" /> },
        Route::Explore => html! { <Section label_key="common.menus.explore" /> },
        Route::NotFound => html! { <Section label_key="not_found.title" /> },
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    label_key: &'static str,
}

#[function_component(Section)]
fn section(props: &SectionProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    html! { <h1 class="text-xl font-semibold">{bundle.text(props.label_key, props.label_key)}</h1> }
}

fn load_bundle(locale: LocaleCode) -> TranslationBundle {
    match TranslationBundle::load(locale) {
        Ok(bundle) => {
            console::debug!("locale bundle loaded", locale.code());
            bundle
        }
        Err(err) => {
            console::error!("locale bundle failed", locale.code(), err.to_string());
            TranslationBundle::new(locale)
        }
    }
}

/// Mount the app on `#root`, or on the document body when it is absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<QinglongApp>::with_root(root).render();
    } else {
        yew::Renderer::<QinglongApp>::new().render();
    }
}
