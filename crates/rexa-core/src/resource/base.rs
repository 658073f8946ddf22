//! Configured API base origin.

use url::Url;

use super::reference::strip_url_whitespace;

/// The API base, pre-split into the two forms resolution needs.
#[derive(Debug, Clone)]
pub struct ApiBase {
    raw: String,
    /// Base with a single trailing slash removed; rooted paths are appended to it.
    rooted_prefix: String,
    /// Base parsed with a guaranteed trailing slash; `None` if it does not parse.
    join_base: Option<Url>,
}

impl ApiBase {
    pub fn new(raw: &str) -> Self {
        let cleaned = strip_url_whitespace(raw);
        let raw: &str = &cleaned;
        let rooted_prefix = raw.strip_suffix('/').unwrap_or(raw).to_string();
        let with_slash = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        };
        let join_base = match Url::parse(&with_slash) {
            Ok(u) => Some(u),
            Err(e) => {
                tracing::warn!("api base {:?} is not a valid URL: {}", raw, e);
                None
            }
        };
        Self {
            raw: raw.to_string(),
            rooted_prefix,
            join_base,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when `reference` is the base followed by a path, i.e. it needs no
    /// further resolution.
    pub fn contains(&self, reference: &str) -> bool {
        reference
            .strip_prefix(&self.rooted_prefix)
            .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Concatenates a path that starts with `/` onto the base.
    pub fn join_rooted(&self, path: &str) -> String {
        format!("{}{}", self.rooted_prefix, path)
    }

    /// Resolves a relative reference per URL rules; `None` when resolution fails.
    pub fn join_relative(&self, reference: &str) -> Option<String> {
        let base = self.join_base.as_ref()?;
        base.join(reference).ok().map(|u| u.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooted_strips_single_trailing_slash() {
        assert_eq!(
            ApiBase::new("http://localhost:8000/").join_rooted("/a"),
            "http://localhost:8000/a"
        );
        assert_eq!(
            ApiBase::new("http://localhost:8000").join_rooted("/a"),
            "http://localhost:8000/a"
        );
    }

    #[test]
    fn relative_join_uses_base_path() {
        let base = ApiBase::new("https://svc.example/api");
        assert_eq!(
            base.join_relative("out/x.json").as_deref(),
            Some("https://svc.example/api/out/x.json")
        );
    }

    #[test]
    fn contains_requires_path_separator() {
        let base = ApiBase::new("http://h/api/");
        assert!(base.contains("http://h/api/x.png"));
        assert!(base.contains("http://h/api/"));
        assert!(!base.contains("http://h/apix/y"));
        assert!(!base.contains("http://h/api"));
        assert!(!base.contains("http://other/api/x"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let base = ApiBase::new(" http://h\t/api \n");
        assert_eq!(base.as_str(), "http://h/api");
        assert_eq!(base.join_rooted("/a"), "http://h/api/a");
    }

    #[test]
    fn invalid_base_cannot_join() {
        let base = ApiBase::new("not a url");
        assert_eq!(base.join_relative("x"), None);
        assert_eq!(base.join_rooted("/x"), "not a url/x");
    }
}
