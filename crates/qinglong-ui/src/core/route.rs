//! Route context helpers: which top-level segment is selected.

/// Read-only view of the current route handed to render functions.
pub trait RouteContext {
    /// Active top-level segment, or `None` at the site root.
    fn segment(&self) -> Option<&str>;
}

impl RouteContext for Option<&str> {
    fn segment(&self) -> Option<&str> {
        *self
    }
}

impl RouteContext for &str {
    fn segment(&self) -> Option<&str> {
        Some(*self)
    }
}

impl RouteContext for String {
    fn segment(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

/// Route context captured from a location path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticRoute {
    segment: Option<String>,
}

impl StaticRoute {
    /// Capture the selected segment of `path`.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        Self {
            segment: selected_segment(path).map(ToString::to_string),
        }
    }
}

impl RouteContext for StaticRoute {
    fn segment(&self) -> Option<&str> {
        self.segment.as_deref()
    }
}

/// First non-empty segment of a location path.
///
/// Query strings and fragments are dropped and `(group)` segments are skipped.
#[must_use]
pub fn selected_segment(path: &str) -> Option<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/')
        .find(|segment| !segment.is_empty() && !is_route_group(segment))
}

fn is_route_group(segment: &str) -> bool {
    segment.starts_with('(') && segment.ends_with(')')
}

/// Decoded value of `name` in a `?a=b&c=d` query string.
#[must_use]
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| {
            urlencoding::decode(&value.replace('+', " "))
                .ok()
                .map(|decoded| decoded.into_owned())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_segment() {
        assert_eq!(selected_segment("/"), None);
        assert_eq!(selected_segment(""), None);
        assert_eq!(selected_segment("/?lang=en"), None);
    }

    #[test]
    fn first_segment_is_selected() {
        assert_eq!(selected_segment("/qinglong"), Some("qinglong"));
        assert_eq!(selected_segment("/qinglong/"), Some("qinglong"));
        assert_eq!(selected_segment("//explore/apps"), Some("explore"));
        assert_eq!(selected_segment("/qinglong?tab=jobs#top"), Some("qinglong"));
    }

    #[test]
    fn route_groups_are_skipped() {
        assert_eq!(selected_segment("/(console)/qinglong"), Some("qinglong"));
        assert_eq!(selected_segment("/(console)"), None);
    }

    #[test]
    fn static_route_exposes_segment() {
        assert_eq!(StaticRoute::from_path("/explore/x").segment(), Some("explore"));
        assert_eq!(StaticRoute::from_path("/").segment(), None);
        assert_eq!(StaticRoute::default(), StaticRoute::from_path(""));
    }

    #[test]
    fn plain_values_are_route_contexts() {
        assert_eq!(Some("qinglong").segment(), Some("qinglong"));
        assert_eq!(None::<&str>.segment(), None);
        assert_eq!("explore".segment(), Some("explore"));
        assert_eq!(String::from("apps").segment(), Some("apps"));
    }

    #[test]
    fn query_param_decodes_values() {
        assert_eq!(query_param("?lang=zh-CN", "lang").as_deref(), Some("zh-CN"));
        assert_eq!(query_param("a=1&lang=pt%2DBR", "lang").as_deref(), Some("pt-BR"));
        assert_eq!(query_param("?q=a+b", "q").as_deref(), Some("a b"));
        assert_eq!(query_param("?lang", "lang"), None);
        assert_eq!(query_param("", "lang"), None);
    }
}
