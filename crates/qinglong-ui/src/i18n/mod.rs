//! JSON-backed translations with per-locale bundles and an injectable resolver.

use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;
use thiserror::Error;

/// Supported locale codes for the console header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// English.
    En,
    /// Chinese (Simplified).
    ZhHans,
    /// Chinese (Traditional).
    ZhHant,
    /// Japanese.
    Ja,
    /// Korean.
    Ko,
    /// German.
    De,
    /// French.
    Fr,
    /// Spanish.
    Es,
    /// Portuguese.
    Pt,
    /// Russian.
    Ru,
    /// Arabic.
    Ar,
}

impl LocaleCode {
    #[must_use]
    /// All supported locales in display order.
    pub const fn all() -> [Self; 11] {
        [
            Self::En,
            Self::ZhHans,
            Self::ZhHant,
            Self::Ja,
            Self::Ko,
            Self::De,
            Self::Fr,
            Self::Es,
            Self::Pt,
            Self::Ru,
            Self::Ar,
        ]
    }

    /// BCP 47 tag for the locale; Chinese carries its script subtag.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhHans => "zh-Hans",
            Self::ZhHant => "zh-Hant",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Es => "es",
            Self::Pt => "pt",
            Self::Ru => "ru",
            Self::Ar => "ar",
        }
    }

    /// Human-friendly label for dropdowns.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::ZhHans => "简体中文",
            Self::ZhHant => "繁體中文",
            Self::Ja => "日本語",
            Self::Ko => "한국어",
            Self::De => "Deutsch",
            Self::Fr => "Français",
            Self::Es => "Español",
            Self::Pt => "Português",
            Self::Ru => "Русский",
            Self::Ar => "العربية",
        }
    }

    /// Map an arbitrary browser language tag to a supported locale, falling back to None.
    ///
    /// Chinese tags pick the traditional script for `Hant`, `TW`, `HK` and `MO`
    /// and simplified otherwise.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase().replace('_', "-");
        let mut parts = lowered.split('-');
        let base = parts.next().unwrap_or_default();
        if base == "zh" {
            let traditional = parts.any(|part| matches!(part, "hant" | "tw" | "hk" | "mo"));
            return Some(if traditional { Self::ZhHant } else { Self::ZhHans });
        }
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Failures raised while parsing a locale bundle.
#[derive(Debug, Error)]
pub enum I18nError {
    /// The bundle source was not valid JSON.
    #[error("locale '{locale}' is not valid JSON: {source}")]
    InvalidJson {
        /// Locale tag of the failing bundle.
        locale: &'static str,
        /// Underlying parser failure.
        #[source]
        source: serde_json::Error,
    },
    /// The bundle parsed but its root was not a JSON object.
    #[error("locale '{locale}' root must be an object")]
    NotAnObject {
        /// Locale tag of the failing bundle.
        locale: &'static str,
    },
    /// The `meta` block did not match the expected shape.
    #[error("locale '{locale}' has malformed meta: {source}")]
    InvalidMeta {
        /// Locale tag of the failing bundle.
        locale: &'static str,
        /// Underlying shape mismatch.
        #[source]
        source: serde_json::Error,
    },
}

/// Bundle-level settings stored under `meta`.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
struct BundleMeta {
    #[serde(default)]
    rtl: bool,
}

/// Key-to-string resolver handed to render functions.
pub trait Translate {
    /// Resolve `key` to display text.
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
    rtl: bool,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale && self.tree == other.tree
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale, falling back to English.
    ///
    /// A bundle that fails to parse degrades to an empty tree so every lookup
    /// resolves through the English fallback. Use [`TranslationBundle::load`]
    /// to observe the failure.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        Self::load(locale).unwrap_or_else(|_| Self {
            locale,
            tree: Value::Null,
            rtl: false,
        })
    }

    /// Parse the embedded bundle for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError`] when the embedded JSON is malformed.
    pub fn load(locale: LocaleCode) -> Result<Self, I18nError> {
        Self::try_from_json(locale, raw_locale(locale))
    }

    /// Parse a bundle from raw JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::InvalidJson`] on parse failure,
    /// [`I18nError::NotAnObject`] when the root is not an object and
    /// [`I18nError::InvalidMeta`] when `meta` has the wrong shape.
    pub fn try_from_json(locale: LocaleCode, raw: &str) -> Result<Self, I18nError> {
        let tree: Value = serde_json::from_str(raw).map_err(|source| I18nError::InvalidJson {
            locale: locale.code(),
            source,
        })?;
        if !tree.is_object() {
            return Err(I18nError::NotAnObject {
                locale: locale.code(),
            });
        }
        let meta = match tree.get("meta") {
            Some(raw_meta) => BundleMeta::deserialize(raw_meta).map_err(|source| {
                I18nError::InvalidMeta {
                    locale: locale.code(),
                    source,
                }
            })?,
            None => BundleMeta::default(),
        };
        Ok(Self {
            locale,
            tree,
            rtl: meta.rtl,
        })
    }

    /// Resolve a dotted path (`section.key`) with English fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&EN_FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }

    /// Whether the locale prefers RTL layout (bidi).
    #[must_use]
    pub const fn rtl(&self) -> bool {
        self.rtl
    }

    /// Value for the HTML `dir` attribute.
    #[must_use]
    pub const fn dir(&self) -> &'static str {
        if self.rtl { "rtl" } else { "ltr" }
    }
}

impl Default for TranslationBundle {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl Translate for TranslationBundle {
    /// Missing keys render as the key itself.
    fn translate(&self, key: &str) -> String {
        self.text(key, key)
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::ZhHans => include_str!("../../i18n/zh-Hans.json"),
        LocaleCode::ZhHant => include_str!("../../i18n/zh-Hant.json"),
        LocaleCode::Ja => include_str!("../../i18n/ja.json"),
        LocaleCode::Ko => include_str!("../../i18n/ko.json"),
        LocaleCode::De => include_str!("../../i18n/de.json"),
        LocaleCode::Fr => include_str!("../../i18n/fr.json"),
        LocaleCode::Es => include_str!("../../i18n/es.json"),
        LocaleCode::Pt => include_str!("../../i18n/pt.json"),
        LocaleCode::Ru => include_str!("../../i18n/ru.json"),
        LocaleCode::Ar => include_str!("../../i18n/ar.json"),
    }
}
