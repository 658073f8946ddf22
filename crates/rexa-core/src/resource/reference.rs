//! Tagged resource references.

use std::borrow::Cow;

use super::base::ApiBase;
use super::static_path::rewrite_static_output;

/// A raw reference classified by shape.
///
/// Classification happens once, when a reference crosses into the client;
/// `to_absolute` then resolves it without re-scanning the string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceReference {
    /// Already under the API base, typically a URL this resolver produced.
    Resolved(String),
    /// A backend path with a `static/output` segment, rewritten to `/static/output/...`.
    StaticOutput(String),
    /// `scheme://...`, used as-is.
    Absolute(String),
    /// A server-rooted path (`/...`).
    Rooted(String),
    /// Anything else; resolved relative to the API base.
    Relative(String),
}

/// True when `s` starts with `scheme://` (RFC 3986 scheme characters).
fn has_scheme(s: &str) -> bool {
    let Some((scheme, _)) = s.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn is_tab_or_newline(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}

/// Drops what a URL parser would ignore: leading and trailing C0 controls
/// and spaces, and every ASCII tab or newline.
pub fn strip_url_whitespace(raw: &str) -> Cow<'_, str> {
    let trimmed = raw.trim_matches(|c: char| c <= ' ');
    if trimmed.contains(is_tab_or_newline) {
        Cow::Owned(trimmed.chars().filter(|c| !is_tab_or_newline(*c)).collect())
    } else {
        Cow::Borrowed(trimmed)
    }
}

impl ResourceReference {
    /// Classifies an already whitespace-stripped reference.
    ///
    /// References under the API base are final. Otherwise the
    /// `static/output` rewrite wins over every other shape, including
    /// absolute URLs on other hosts.
    pub fn classify(raw: &str, base: &ApiBase) -> Self {
        if base.contains(raw) {
            return Self::Resolved(raw.to_string());
        }
        if let Some(path) = rewrite_static_output(raw) {
            return Self::StaticOutput(path);
        }
        if has_scheme(raw) {
            Self::Absolute(raw.to_string())
        } else if raw.starts_with('/') {
            Self::Rooted(raw.to_string())
        } else {
            Self::Relative(raw.to_string())
        }
    }

    pub fn to_absolute(&self, base: &ApiBase) -> String {
        match self {
            Self::Resolved(url) | Self::Absolute(url) => url.clone(),
            Self::StaticOutput(path) | Self::Rooted(path) => base.join_rooted(path),
            Self::Relative(path) => match base.join_relative(path) {
                // Dot segments can climb out of the base onto an output path.
                Some(joined) if !base.contains(&joined) => match rewrite_static_output(&joined) {
                    Some(output) => base.join_rooted(&output),
                    None => joined,
                },
                Some(joined) => joined,
                None => {
                    tracing::debug!("could not resolve {:?} against {}", path, base.as_str());
                    path.clone()
                }
            },
        }
    }
}
