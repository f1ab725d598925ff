//! Environment helpers for the app shell.

use crate::core::route::query_param;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use anyhow::anyhow;
use gloo::console;
use gloo::utils::window;

pub(crate) const LOCALE_QUERY_KEY: &str = "lang";

/// Locale from `?lang=`, then `navigator.language`, then the default.
pub(crate) fn load_locale() -> LocaleCode {
    match query_locale() {
        Ok(Some(locale)) => return locale,
        Ok(None) => {}
        Err(err) => console::warn!("locale query unavailable", err.to_string()),
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

fn query_locale() -> anyhow::Result<Option<LocaleCode>> {
    let search = window()
        .location()
        .search()
        .map_err(|err| anyhow!("location.search failed: {err:?}"))?;
    Ok(query_param(&search, LOCALE_QUERY_KEY).and_then(|tag| LocaleCode::from_lang_tag(&tag)))
}
