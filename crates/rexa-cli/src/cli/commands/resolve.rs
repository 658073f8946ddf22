//! `rexa resolve <reference>` – show how a raw reference resolves.

use rexa_core::config::RexaConfig;
use rexa_core::resource::{strip_url_whitespace, ResourceKind, ResourceReference, Resolver};

pub fn run_resolve(cfg: &RexaConfig, reference: &str, image: bool) {
    let kind = if image {
        ResourceKind::Image
    } else {
        ResourceKind::Artifact
    };
    let resolver = Resolver::new(&cfg.api_base_url);
    tracing::debug!(
        "{:?} classified as {:?}",
        reference,
        ResourceReference::classify(&strip_url_whitespace(reference), resolver.base())
    );
    println!("{}", resolver.resolve_str(reference, kind));
}
