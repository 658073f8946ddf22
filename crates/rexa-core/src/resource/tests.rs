use proptest::prelude::*;

use super::*;

const BASE: &str = "http://localhost:8000";

fn resolver() -> Resolver {
    Resolver::new(BASE)
}

/// References covering every shape, both slash styles, and suffix variants.
const SAMPLES: &[&str] = &[
    "",
    "x.png",
    "out/x.png",
    "out/x.png.png",
    "out/x.json",
    "out/x",
    "/static/output/a.png",
    "/static/output/a.png.png",
    r"C:\srv\static\output\a.png",
    r"\\fileserver\share\Static\Output\b.json",
    "static/output/c.png",
    "STATIC/OUTPUT/c.png",
    "https://cdn.example/a.png",
    "https://cdn.example/static/output/a.png",
    "//cdn.example/a.png",
    "../up/x.png",
    "./here.json",
    "a b.png",
    "?q=1",
    "#frag",
    "mailto:someone@example.com",
    "http:[",
    "/",
    "out/x.png ",
    " out/x.png",
    "out/x.png\t",
    "out/x.p\nng",
    "out/x.png\u{1}",
    "   ",
    "../static/./output/x.png",
    "http://localhost:8000/out/x.png",
];

const BASES: &[&str] = &[
    BASE,
    "http://localhost:8000/",
    "https://svc.example/api",
    "http://h/static/output",
    "not a url",
];

#[test]
fn resolve_is_idempotent_for_all_shapes() {
    for base in BASES {
        let r = Resolver::new(base);
        for kind in [ResourceKind::Image, ResourceKind::Artifact] {
            for raw in SAMPLES {
                let once = r.resolve_str(raw, kind);
                let twice = r.resolve_str(&once, kind);
                assert_eq!(once, twice, "base={base} kind={kind:?} raw={raw:?}");
            }
        }
    }
}

#[test]
fn absent_passes_through() {
    assert_eq!(resolver().resolve(None, ResourceKind::Image), None);
    assert_eq!(resolver().resolve(None, ResourceKind::Artifact), None);
}

#[test]
fn empty_passes_through() {
    assert_eq!(resolver().resolve(Some(""), ResourceKind::Image).as_deref(), Some(""));
}

#[test]
fn image_extension_is_doubled_once() {
    let r = resolver();
    let once = r.resolve_str("out/x.png", ResourceKind::Image);
    assert_eq!(once, "http://localhost:8000/out/x.png.png");
    assert!(once.ends_with(".png.png"));
    assert!(!once.ends_with(".png.png.png"));
    assert_eq!(r.resolve_str("out/x.png.png", ResourceKind::Image), once);
}

#[test]
fn artifacts_keep_their_extension() {
    assert_eq!(
        resolver().resolve_str("out/x.png", ResourceKind::Artifact),
        "http://localhost:8000/out/x.png"
    );
}

#[test]
fn static_segment_rewrite_matches_rooted_path() {
    let r = resolver();
    for kind in [ResourceKind::Image, ResourceKind::Artifact] {
        assert_eq!(
            r.resolve_str(r"C:\srv\static\output\a.png", kind),
            r.resolve_str("/static/output/a.png", kind)
        );
    }
    assert_eq!(
        r.resolve_str(r"C:\srv\static\output\a.json", ResourceKind::Artifact),
        "http://localhost:8000/static/output/a.json"
    );
}

#[test]
fn absolute_passthrough_regardless_of_base() {
    for base in [BASE, "https://other.example/", "garbage"] {
        assert_eq!(
            Resolver::new(base).resolve_str("https://cdn.example/a.png.png", ResourceKind::Image),
            "https://cdn.example/a.png.png"
        );
        assert_eq!(
            Resolver::new(base).resolve_str("https://cdn.example/a.json", ResourceKind::Artifact),
            "https://cdn.example/a.json"
        );
    }
}

#[test]
fn rooted_path_uses_base_without_trailing_slash() {
    assert_eq!(
        Resolver::new("http://localhost:8000/").resolve_str("/files/a.json", ResourceKind::Artifact),
        "http://localhost:8000/files/a.json"
    );
}

#[test]
fn unresolvable_relative_is_returned_rewritten() {
    assert_eq!(
        Resolver::new("not a url").resolve_str("out/x.png", ResourceKind::Image),
        "out/x.png.png"
    );
}

#[test]
fn resolved_urls_parse() {
    let r = resolver();
    for raw in SAMPLES.iter().filter(|s| !s.is_empty() && **s != "http:[") {
        let out = r.resolve_str(raw, ResourceKind::Artifact);
        if !out.contains(' ') {
            assert!(url::Url::parse(&out).is_ok(), "{raw:?} -> {out:?}");
        }
    }
}

#[test]
fn whitespace_around_image_is_ignored() {
    let r = resolver();
    for raw in ["out/x.png ", " out/x.png", "out/x.png\t", "out/x.p\nng"] {
        assert_eq!(
            r.resolve_str(raw, ResourceKind::Image),
            "http://localhost:8000/out/x.png.png",
            "{raw:?}"
        );
    }
    assert_eq!(r.resolve_str(" \t", ResourceKind::Image), "");
}

#[test]
fn base_under_output_directory_is_stable() {
    let r = Resolver::new("http://h/static/output");
    let once = r.resolve_str("a.json", ResourceKind::Artifact);
    assert_eq!(once, "http://h/static/output/a.json");
    assert_eq!(r.resolve_str(&once, ResourceKind::Artifact), once);
    assert_eq!(
        r.resolve_str(r"C:\srv\static\output\b.png", ResourceKind::Image),
        "http://h/static/output/static/output/b.png.png"
    );
}

fn reference_parts() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("static"),
        Just("STATIC"),
        Just("output"),
        Just("Output"),
        Just("/"),
        Just("\\"),
        Just(".png"),
        Just(".json"),
        Just(".."),
        Just("."),
        Just(" "),
        Just("\t"),
        Just("\n"),
        Just("\r"),
        Just("\u{1}"),
        Just("http://"),
        Just("https://cdn.example"),
        Just("http://localhost:8000"),
        Just("http://h/static/output"),
        Just("C:"),
        Just("x"),
        Just("%20"),
        Just("?v=1"),
        Just("#f"),
        Just(":"),
    ]
}

fn reference() -> impl Strategy<Value = String> {
    prop::collection::vec(reference_parts(), 0..10).prop_map(|parts| parts.concat())
}

fn base_url() -> impl Strategy<Value = &'static str> {
    prop::sample::select(BASES)
}

proptest! {
    #[test]
    fn resolve_is_idempotent(raw in reference(), base in base_url(), image in any::<bool>()) {
        let kind = if image { ResourceKind::Image } else { ResourceKind::Artifact };
        let r = Resolver::new(base);
        let once = r.resolve_str(&raw, kind);
        let twice = r.resolve_str(&once, kind);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn resolved_images_never_end_in_single_png(raw in reference(), base in base_url()) {
        let out = Resolver::new(base).resolve_str(&raw, ResourceKind::Image);
        prop_assert!(!out.ends_with(".png") || out.ends_with(".png.png"), "{:?} -> {:?}", raw, out);
    }
}
