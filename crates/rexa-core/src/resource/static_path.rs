//! Detection and rewrite of backend `static/output` paths.

/// Canonical prefix every rewritten output path starts with.
pub const STATIC_OUTPUT_PREFIX: &str = "/static/output/";

const STATIC: &[u8] = b"static";
const OUTPUT: &[u8] = b"output";

fn is_sep(b: u8) -> bool {
    b == b'/' || b == b'\\'
}

/// Matches `static<sep>output<sep>` at the start of `bytes`; returns its length.
fn match_segment(bytes: &[u8]) -> Option<usize> {
    let len = STATIC.len() + OUTPUT.len() + 2;
    if bytes.len() < len {
        return None;
    }
    let (s, rest) = bytes.split_at(STATIC.len());
    let ok = s.eq_ignore_ascii_case(STATIC)
        && is_sep(rest[0])
        && rest[1..=OUTPUT.len()].eq_ignore_ascii_case(OUTPUT)
        && is_sep(rest[OUTPUT.len() + 1]);
    ok.then_some(len)
}

/// Returns the byte offset just past the first `static<sep>output<sep>` segment.
///
/// The segment must either open the reference or follow a separator, so
/// `foo/static/output/x` and `C:\srv\static\output\x` match but
/// `mystatic/output/x` does not.
fn find_segment_end(reference: &str) -> Option<usize> {
    let bytes = reference.as_bytes();
    if let Some(len) = match_segment(bytes) {
        return Some(len);
    }
    bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| is_sep(**b))
        .find_map(|(i, _)| match_segment(&bytes[i + 1..]).map(|len| i + 1 + len))
}

/// Rewrites a reference containing a `static/output` segment into a
/// server-rooted `/static/output/...` path with forward slashes only.
///
/// Anything before the segment (drive letters, checkout directories, hosts)
/// is dropped. Returns `None` when there is no such segment.
pub fn rewrite_static_output(reference: &str) -> Option<String> {
    let end = find_segment_end(reference)?;
    // The matched segment is ASCII, so `end` is a char boundary.
    let rest = reference[end..].replace('\\', "/");
    Some(format!("{STATIC_OUTPUT_PREFIX}{rest}"))
}
