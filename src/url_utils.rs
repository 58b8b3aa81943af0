//! URL utility functions.
//!
//! Link targets found on a page are resolved against the URL the page was
//! fetched from, using standard base + relative resolution.

use url::Url;

/// Parse the URL a page was fetched from.
///
/// # Returns
/// * `Some(Url)` if `s` is an absolute URL that can serve as a base, `None` otherwise
#[must_use]
pub fn parse_base_url(s: &str) -> Option<Url> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    match Url::parse(s) {
        Ok(url) if !url.cannot_be_a_base() => Some(url),
        _ => None,
    }
}

/// Check whether `href` already carries its own scheme.
///
/// Such URLs are independent of any base and are returned as written.
#[must_use]
pub fn is_absolute_url(href: &str) -> bool {
    Url::parse(href.trim()).is_ok()
}

/// Resolve `href` against `base`.
///
/// # Arguments
/// * `base` - The page URL, or `None` if it could not be parsed
/// * `href` - The raw attribute value (relative, scheme-relative, query- or
///   fragment-only, or absolute)
///
/// # Returns
/// * Absolute `href` values unchanged
/// * Relative values resolved against `base` (an empty `href` yields the base)
/// * `href` unchanged when there is no base or resolution fails
///
/// Resolved URLs are serialized by the `url` crate: non-ASCII characters and
/// spaces in the path are percent-encoded and hosts are lowercased and
/// IDNA-encoded.
#[must_use]
pub fn join_url(base: Option<&Url>, href: &str) -> String {
    if is_absolute_url(href) {
        return href.to_string();
    }

    let Some(base) = base else {
        return href.to_string();
    };

    match base.join(href) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://books.toscrape.com/catalogue/page-1.html").unwrap()
    }

    #[test]
    fn test_parse_base_url() {
        assert!(parse_base_url("https://books.toscrape.com/").is_some());
        assert!(parse_base_url("  http://example.com/a  ").is_some());
        assert!(parse_base_url("").is_none());
        assert!(parse_base_url("catalogue/page-1.html").is_none());
        assert!(parse_base_url("mailto:someone@example.com").is_none());
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://example.com/a"));
        assert!(is_absolute_url("mailto:someone@example.com"));
        assert!(!is_absolute_url("page-2.html"));
        assert!(!is_absolute_url("//cdn.example.com/x"));
        assert!(!is_absolute_url("?page=2"));
    }

    #[test]
    fn test_join_relative_path() {
        let base = base();
        assert_eq!(
            join_url(Some(&base), "page-2.html"),
            "https://books.toscrape.com/catalogue/page-2.html"
        );
        assert_eq!(
            join_url(Some(&base), "a-light-in-the-attic_1000/index.html"),
            "https://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html"
        );
    }

    #[test]
    fn test_join_parent_and_root_paths() {
        let base = base();
        assert_eq!(
            join_url(Some(&base), "../index.html"),
            "https://books.toscrape.com/index.html"
        );
        assert_eq!(
            join_url(Some(&base), "/media/cache/x.jpg"),
            "https://books.toscrape.com/media/cache/x.jpg"
        );
    }

    #[test]
    fn test_join_scheme_relative_query_and_fragment() {
        let base = base();
        assert_eq!(
            join_url(Some(&base), "//cdn.example.com/x.html"),
            "https://cdn.example.com/x.html"
        );
        assert_eq!(
            join_url(Some(&base), "?sort=price"),
            "https://books.toscrape.com/catalogue/page-1.html?sort=price"
        );
        assert_eq!(
            join_url(Some(&base), "#top"),
            "https://books.toscrape.com/catalogue/page-1.html#top"
        );
    }

    #[test]
    fn test_join_empty_href_yields_base() {
        let base = base();
        assert_eq!(
            join_url(Some(&base), ""),
            "https://books.toscrape.com/catalogue/page-1.html"
        );
    }

    #[test]
    fn test_absolute_href_unchanged() {
        let base = base();
        for href in [
            "https://other.example.org/book.html",
            "http://example.com",
            "mailto:someone@example.com",
        ] {
            assert_eq!(join_url(Some(&base), href), href);
        }
    }

    #[test]
    fn test_join_percent_encodes_and_normalizes() {
        let base = base();
        assert_eq!(
            join_url(Some(&base), "книга 1/index.html"),
            "https://books.toscrape.com/catalogue/%D0%BA%D0%BD%D0%B8%D0%B3%D0%B0%201/index.html"
        );
        assert_eq!(
            join_url(Some(&base), "//Mirror.Example.ORG/b.html"),
            "https://mirror.example.org/b.html"
        );
        assert_eq!(
            join_url(Some(&base), "//bücher.example/x.html"),
            "https://xn--bcher-kva.example/x.html"
        );
    }

    #[test]
    fn test_missing_base_keeps_href() {
        assert_eq!(join_url(None, "page-2.html"), "page-2.html");
        assert_eq!(join_url(None, "https://example.com/x"), "https://example.com/x");
    }
}
