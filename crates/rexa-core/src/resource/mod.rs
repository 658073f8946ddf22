//! Resource reference resolution.
//!
//! The conversion service hands back references to rendered images and JSON
//! dumps in several shapes: absolute URLs, server-rooted paths, bare relative
//! paths, and backend filesystem paths that contain a `static/output`
//! directory (with either slash style). This module turns all of them into a
//! single absolute URL usable as an image source or download link.
//!
//! Resolution is idempotent: feeding a resolved URL back through the
//! resolver returns it unchanged, so records can be re-normalized on every
//! read without drift.

mod base;
mod extension;
mod reference;
mod static_path;

pub use base::ApiBase;
pub use extension::{repair_image_extension, IMAGE_SUFFIX};
pub use reference::{strip_url_whitespace, ResourceReference};
pub use static_path::{rewrite_static_output, STATIC_OUTPUT_PREFIX};

/// Whether a reference points at a rendered image or a downloadable artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Image,
    Artifact,
}

/// Resolves raw resource references against a configured API base.
#[derive(Debug, Clone)]
pub struct Resolver {
    base: ApiBase,
}

impl Resolver {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            base: ApiBase::new(api_base_url),
        }
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    /// Resolves an optional reference. Absent stays absent.
    pub fn resolve(&self, reference: Option<&str>, kind: ResourceKind) -> Option<String> {
        reference.map(|r| self.resolve_str(r, kind))
    }

    /// Resolves a single reference into an absolute URL.
    ///
    /// Whitespace a URL parser would ignore is dropped first; a reference
    /// that is empty afterwards stays empty. The rest is classified,
    /// absolutized against the API base, and for images gets its extension
    /// repaired on the final URL.
    pub fn resolve_str(&self, reference: &str, kind: ResourceKind) -> String {
        let cleaned = strip_url_whitespace(reference);
        if cleaned.is_empty() {
            return String::new();
        }
        let absolute = ResourceReference::classify(&cleaned, &self.base).to_absolute(&self.base);
        match kind {
            ResourceKind::Image => repair_image_extension(&absolute).into_owned(),
            ResourceKind::Artifact => absolute,
        }
    }
}

#[cfg(test)]
mod tests;
