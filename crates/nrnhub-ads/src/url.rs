//! Creative URL handling.
//!
//! Stored image paths arrive in several shapes: bare upload paths,
//! absolute URLs minted against an old host, and strings assembled from
//! missing client-side values (literal `undefined` segments, doubled
//! upload directories). Both functions here are idempotent, since stored
//! values may already have passed through them.

/// The directory uploaded creatives are served from.
pub const UPLOAD_DIR: &str = "Uploads/ads";

/// Delivery transform: make a stored image path absolute.
///
/// Values that already carry a scheme pass through unchanged; anything
/// else is prefixed with the configured base URL.
pub fn absolutize(base: &str, path: &str) -> String {
    if has_scheme(path) {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Console transform: rewrite a stored or just-uploaded creative path
/// into a canonical absolute URL on the configured base.
///
/// Handles absolute URLs whose origin must be rewritten, relative paths,
/// doubled separators and upload-directory segments from concatenation,
/// and literal `undefined` segments from missing intermediate values.
pub fn normalize_image_url(base: &str, input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let (origin, base_segments) = split_origin(base.trim_end_matches('/'));

    let path_part = strip_scheme_and_host(trimmed);
    let mut segments: Vec<&str> = path_part
        .split('/')
        .filter(|s| !s.is_empty() && *s != "undefined")
        .collect();

    // Re-normalizing an already-normalized URL sees the base path again.
    let base_parts: Vec<&str> = base_segments
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();
    if !base_parts.is_empty() && segments.starts_with(&base_parts[..]) {
        segments.drain(..base_parts.len());
    }

    let segments = collapse_upload_dirs(&segments);

    let mut out = origin.to_string();
    for part in base_parts.iter().chain(segments.iter()) {
        out.push('/');
        out.push_str(part);
    }
    out
}

/// Drop repeated `Uploads/ads` pairs produced by concatenating an
/// already-prefixed path onto the upload directory.
fn collapse_upload_dirs<'a>(segments: &[&'a str]) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::with_capacity(segments.len());
    let mut i = 0;
    while i < segments.len() {
        let is_pair = i + 1 < segments.len()
            && segments[i].eq_ignore_ascii_case("uploads")
            && segments[i + 1].eq_ignore_ascii_case("ads");
        let follows_pair = out.len() >= 2
            && out[out.len() - 2].eq_ignore_ascii_case("uploads")
            && out[out.len() - 1].eq_ignore_ascii_case("ads");
        if is_pair && follows_pair {
            i += 2;
        } else {
            out.push(segments[i]);
            i += 1;
        }
    }
    out
}

fn has_scheme(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Return the path-and-query part of a URL, or the input unchanged when
/// it carries no scheme.
fn strip_scheme_and_host(value: &str) -> &str {
    let Some(rest) = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"))
    else {
        return value;
    };
    match rest.find('/') {
        Some(idx) => &rest[idx..],
        None => "",
    }
}

/// Split an absolute base URL into its origin and path parts. A base
/// without a scheme is treated as pure origin.
fn split_origin(base: &str) -> (&str, &str) {
    let Some(scheme_end) = base.find("://") else {
        return (base, "");
    };
    let after = &base[scheme_end + 3..];
    match after.find('/') {
        Some(idx) => base.split_at(scheme_end + 3 + idx),
        None => (base, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://nrnhub.com";

    #[test]
    fn test_absolutize_prefixes_relative_paths() {
        assert_eq!(
            absolutize(BASE, "Uploads/ads/banner.png"),
            "https://nrnhub.com/Uploads/ads/banner.png"
        );
        assert_eq!(
            absolutize(BASE, "/Uploads/ads/banner.png"),
            "https://nrnhub.com/Uploads/ads/banner.png"
        );
    }

    #[test]
    fn test_absolutize_passes_through_absolute_urls() {
        let url = "https://cdn.example.com/x.png";
        assert_eq!(absolutize(BASE, url), url);
    }

    #[test]
    fn test_absolutize_idempotent() {
        let once = absolutize(BASE, "Uploads/ads/banner.png");
        assert_eq!(absolutize(BASE, &once), once);
    }

    #[test]
    fn test_normalize_relative_path() {
        assert_eq!(
            normalize_image_url(BASE, "Uploads/ads/banner.png"),
            "https://nrnhub.com/Uploads/ads/banner.png"
        );
    }

    #[test]
    fn test_normalize_rewrites_foreign_origin() {
        assert_eq!(
            normalize_image_url(BASE, "http://old-host:5000/Uploads/ads/banner.png"),
            "https://nrnhub.com/Uploads/ads/banner.png"
        );
    }

    #[test]
    fn test_normalize_strips_undefined_segments() {
        assert_eq!(
            normalize_image_url(BASE, "undefined/Uploads/ads/undefined/banner.png"),
            "https://nrnhub.com/Uploads/ads/banner.png"
        );
    }

    #[test]
    fn test_normalize_collapses_doubled_separators() {
        assert_eq!(
            normalize_image_url(BASE, "//Uploads//ads///banner.png"),
            "https://nrnhub.com/Uploads/ads/banner.png"
        );
    }

    #[test]
    fn test_normalize_collapses_doubled_upload_dirs() {
        assert_eq!(
            normalize_image_url(BASE, "Uploads/ads/Uploads/ads/banner.png"),
            "https://nrnhub.com/Uploads/ads/banner.png"
        );
        assert_eq!(
            normalize_image_url(BASE, "Uploads/ads/Uploads/ads/Uploads/ads/banner.png"),
            "https://nrnhub.com/Uploads/ads/banner.png"
        );
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [
            "Uploads/ads/banner.png",
            "http://old-host/Uploads/ads/Uploads/ads/x.jpg",
            "undefined/undefined/y.webp",
            "//a//b//c.png",
            "https://nrnhub.com/Uploads/ads/z.gif",
        ];
        for input in inputs {
            let once = normalize_image_url(BASE, input);
            let twice = normalize_image_url(BASE, &once);
            assert_eq!(once, twice, "not idempotent for {:?}", input);
            assert!(!once.contains("undefined"), "undefined survived {:?}", input);
        }
    }

    #[test]
    fn test_normalize_idempotent_with_base_path() {
        let base = "https://nrnhub.com/app";
        let once = normalize_image_url(base, "Uploads/ads/banner.png");
        assert_eq!(once, "https://nrnhub.com/app/Uploads/ads/banner.png");
        assert_eq!(normalize_image_url(base, &once), once);
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize_image_url(BASE, "   "), "");
    }
}
