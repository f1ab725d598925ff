//! DOM-free rendering contract for the main header navigation links.
//!
//! # Design
//! - A link is a const [`NavItem`]; nothing about it is resolved at runtime except
//!   the selected route segment and the translated label.
//! - Route and localization are explicit inputs ([`RouteContext`], [`Translate`]).
//! - [`render`] is pure; the Yew component only maps [`NavLinkMarkup`] onto `Html`.

use crate::core::route::RouteContext;
use crate::i18n::Translate;
use std::fmt;

/// Classes every header link carries.
pub const BASE_CLASSES: &str = "group text-sm font-medium";
/// Classes added while the link's segment is selected.
pub const ACTIVE_CLASSES: &str = "font-semibold bg-components-main-nav-nav-button-bg-active \
     hover:bg-components-main-nav-nav-button-bg-active-hover shadow-md \
     text-components-main-nav-nav-button-text-active";
/// Classes added while another segment (or none) is selected.
pub const INACTIVE_CLASSES: &str = "text-components-main-nav-nav-button-text \
     hover:bg-components-main-nav-nav-button-bg-hover";
/// Classes applied to the leading icon.
pub const ICON_CLASSES: &str = "mr-2 w-4 h-4";

/// Icon glyph families available to header links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavIcon {
    /// Hammer glyph.
    Hammer,
}

/// Line or fill rendition of a glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IconVariant {
    /// Stroked outline.
    #[default]
    Line,
    /// Solid fill.
    Fill,
}

/// Whether a link matches the selected route segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Activation {
    /// The link's segment is selected.
    Active,
    /// Any other segment, or none, is selected.
    Inactive,
}

impl Activation {
    /// Compare the selected segment with the item's segment (exact, case-sensitive).
    #[must_use]
    pub fn for_segment(item: &NavItem, segment: Option<&str>) -> Self {
        if segment == Some(item.segment) {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    /// `true` for [`Activation::Active`].
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Icon rendition paired with this state.
    #[must_use]
    pub const fn icon_variant(self) -> IconVariant {
        match self {
            Self::Active => IconVariant::Fill,
            Self::Inactive => IconVariant::Line,
        }
    }

    const fn classes(self) -> &'static str {
        match self {
            Self::Active => ACTIVE_CLASSES,
            Self::Inactive => INACTIVE_CLASSES,
        }
    }
}

/// Static description of one header link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Top-level route segment that activates the link.
    pub segment: &'static str,
    /// Link target.
    pub href: &'static str,
    /// Translation key for the label.
    pub label_key: &'static str,
    /// Leading icon glyph.
    pub icon: NavIcon,
}

impl NavItem {
    /// The Qinglong workspace link.
    pub const QINGLONG: Self = Self {
        segment: "qinglong",
        href: "/qinglong",
        label_key: "common.menus.qinglong",
        icon: NavIcon::Hammer,
    };
}

impl Default for NavItem {
    fn default() -> Self {
        Self::QINGLONG
    }
}

/// Ordered, whitespace-normalised set of class tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Append every whitespace-separated token of `classes`; blank input is ignored.
    pub fn push(&mut self, classes: &str) {
        self.tokens
            .extend(classes.split_whitespace().map(ToString::to_string));
    }

    /// Whether `token` is present.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|existing| existing == token)
    }

    /// Tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Number of tokens.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the list has no tokens.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        let mut list = Self::new();
        list.push(classes);
        list
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// Rendered leading icon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconMarkup {
    /// Glyph family.
    pub kind: NavIcon,
    /// Line or fill rendition.
    pub variant: IconVariant,
    /// Icon classes.
    pub classes: ClassList,
}

/// Rendered header link, ready to be mapped onto an anchor element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLinkMarkup {
    /// Link target.
    pub href: &'static str,
    /// Activation derived from the route context.
    pub activation: Activation,
    /// Anchor classes: base, state, then caller extras.
    pub classes: ClassList,
    /// Leading icon.
    pub icon: IconMarkup,
    /// Localized label.
    pub label: String,
}

/// Render `item` against the current route and translator.
///
/// `extra_class` is appended after the computed classes.
#[must_use]
pub fn render<R, T>(
    item: &NavItem,
    route: &R,
    translator: &T,
    extra_class: Option<&str>,
) -> NavLinkMarkup
where
    R: RouteContext + ?Sized,
    T: Translate + ?Sized,
{
    let activation = Activation::for_segment(item, route.segment());

    let mut classes = ClassList::from(BASE_CLASSES);
    classes.push(activation.classes());
    if let Some(extra) = extra_class {
        classes.push(extra);
    }

    NavLinkMarkup {
        href: item.href,
        activation,
        classes,
        icon: IconMarkup {
            kind: item.icon,
            variant: activation.icon_variant(),
            classes: ClassList::from(ICON_CLASSES),
        },
        label: translator.translate(item.label_key),
    }
}

/// [`render`] for [`NavItem::QINGLONG`].
#[must_use]
pub fn render_qinglong<R, T>(route: &R, translator: &T, extra_class: Option<&str>) -> NavLinkMarkup
where
    R: RouteContext + ?Sized,
    T: Translate + ?Sized,
{
    render(&NavItem::QINGLONG, route, translator, extra_class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::route::StaticRoute;
    use crate::i18n::{LocaleCode, TranslationBundle};

    fn english(key: &str) -> String {
        match key {
            "common.menus.qinglong" => "Qinglong".to_string(),
            other => other.to_string(),
        }
    }

    fn assert_tokens(classes: &ClassList, expected: &str) {
        for token in expected.split_whitespace() {
            assert!(classes.contains(token), "missing class {token} in {classes}");
        }
    }

    fn assert_absent(classes: &ClassList, unexpected: &str) {
        for token in unexpected.split_whitespace() {
            assert!(!classes.contains(token), "unexpected class {token} in {classes}");
        }
    }

    #[test]
    fn selected_segment_renders_active() {
        let markup = render_qinglong(&Some("qinglong"), &english, None);
        assert_eq!(markup.activation, Activation::Active);
        assert_eq!(markup.icon.variant, IconVariant::Fill);
        assert_tokens(&markup.classes, BASE_CLASSES);
        assert_tokens(&markup.classes, ACTIVE_CLASSES);
        assert_absent(&markup.classes, "text-components-main-nav-nav-button-text");
        assert_eq!(markup.label, "Qinglong");
    }

    #[test]
    fn other_segment_renders_inactive() {
        let markup = render_qinglong(&Some("explore"), &english, None);
        assert_eq!(markup.activation, Activation::Inactive);
        assert_eq!(markup.icon.variant, IconVariant::Line);
        assert_tokens(&markup.classes, INACTIVE_CLASSES);
        assert_absent(&markup.classes, ACTIVE_CLASSES);
        assert_eq!(markup.label, "Qinglong");
    }

    #[test]
    fn missing_segment_renders_inactive() {
        let markup = render_qinglong(&None::<&str>, &english, None);
        assert_eq!(markup.activation, Activation::Inactive);
        assert_eq!(markup.icon.variant, IconVariant::Line);
    }

    #[test]
    fn near_misses_stay_inactive() {
        for segment in ["Qinglong", "qinglong ", "qinglong-admin", "", "/qinglong"] {
            let markup = render_qinglong(&segment, &english, None);
            assert_eq!(markup.activation, Activation::Inactive, "segment {segment:?}");
        }
    }

    #[test]
    fn href_is_fixed() {
        for route in [Some("qinglong"), Some("apps"), None] {
            let markup = render_qinglong(&route, &|_: &str| String::new(), Some("x"));
            assert_eq!(markup.href, "/qinglong");
        }
    }

    #[test]
    fn label_is_translated_key() {
        let echo = |key: &str| format!("<{key}>");
        let markup = render_qinglong(&Some("explore"), &echo, None);
        assert_eq!(markup.label, "<common.menus.qinglong>");
    }

    #[test]
    fn extra_class_is_appended_in_both_states() {
        for route in [Some("qinglong"), Some("explore")] {
            let markup = render_qinglong(&route, &english, Some("ml-2"));
            assert!(markup.classes.contains("ml-2"));
            assert_eq!(markup.classes.iter().last(), Some("ml-2"));
            assert_tokens(&markup.classes, BASE_CLASSES);
        }
    }

    #[test]
    fn blank_extra_class_adds_nothing() {
        let plain = render_qinglong(&Some("explore"), &english, None);
        let blank = render_qinglong(&Some("explore"), &english, Some("   "));
        assert_eq!(plain, blank);
    }

    #[test]
    fn extra_class_never_replaces_state_classes() {
        let markup = render_qinglong(&Some("qinglong"), &english, Some("font-normal shadow-none"));
        assert_tokens(&markup.classes, ACTIVE_CLASSES);
        assert_tokens(&markup.classes, "font-normal shadow-none");
    }

    #[test]
    fn rendering_is_repeatable() {
        let route = StaticRoute::from_path("/qinglong/jobs");
        let first = render_qinglong(&route, &english, Some("ml-2"));
        let second = render_qinglong(&route, &english, Some("ml-2"));
        assert_eq!(first, second);
    }

    #[test]
    fn icon_keeps_fixed_classes() {
        let markup = render_qinglong(&Some("qinglong"), &english, Some("ml-2"));
        assert_eq!(markup.icon.kind, NavIcon::Hammer);
        assert_eq!(markup.icon.classes.to_string(), ICON_CLASSES);
    }

    #[test]
    fn bundle_translator_resolves_label() {
        let bundle = TranslationBundle::new(LocaleCode::ZhHans);
        let markup = render_qinglong(&"qinglong", &bundle, None);
        assert_eq!(markup.label, "青龙");
    }

    #[test]
    fn class_list_normalises_whitespace() {
        let mut list = ClassList::from("  a   b ");
        list.push("");
        list.push("c\td");
        assert_eq!(list.to_string(), "a b c d");
        assert_eq!(list.len(), 4);
        assert!(ClassList::new().is_empty());
    }

    #[test]
    fn default_item_is_qinglong() {
        assert_eq!(NavItem::default(), NavItem::QINGLONG);
        assert_eq!(IconVariant::default(), IconVariant::Line);
    }
}
