//! Request locale resolution.
//!
//! Every page lives under a locale prefix (`/{locale}/shop`). A request that
//! arrives without one is redirected to the prefixed path, choosing the locale
//! in this order:
//!
//! 1. A supported locale already in the path: pass through, nothing to do
//! 2. The `NEXT_LOCALE` cookie, if it names a supported locale
//! 3. The first supported primary subtag in `Accept-Language`, in header order
//! 4. The configured default
//!
//! Static assets and internal prefixes bypass resolution entirely.
//!
//! ```
//! use xyra_core::locale::{Resolution, resolve_request};
//! use xyra_core::Locale;
//!
//! let resolution = resolve_request("/", None, Some("ja,en;q=0.5"), Locale::En);
//! assert_eq!(
//!     resolution,
//!     Resolution::Redirect { locale: Locale::Ja, location: "/ja".to_string() }
//! );
//! ```

use crate::types::Locale;

/// Cookie that remembers the visitor's locale.
pub const LOCALE_COOKIE: &str = "NEXT_LOCALE";

/// Lifetime of the locale cookie (one year).
pub const LOCALE_COOKIE_MAX_AGE_SECS: i64 = 365 * 24 * 60 * 60;

/// Path prefixes owned by other parts of the server.
const BYPASS_PREFIXES: &[&str] = &["/_next", "/api", "/static", "/health"];

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The path is not a page (asset or internal route); leave it alone.
    Bypass,
    /// The path already carries a supported locale.
    PassThrough(Locale),
    /// The path has no locale; send the client to `location` and remember `locale`.
    Redirect {
        /// Locale chosen for the visitor.
        locale: Locale,
        /// Locale-prefixed path to redirect to.
        location: String,
    },
}

/// Resolve the locale for a request path.
///
/// Never fails: unsupported cookies, malformed headers and unknown path
/// segments all fall through to the next rule and finally to `default`.
#[must_use]
pub fn resolve_request(
    path: &str,
    cookie: Option<&str>,
    accept_language: Option<&str>,
    default: Locale,
) -> Resolution {
    if is_bypassed(path) {
        return Resolution::Bypass;
    }

    if let Some(locale) = path_locale(path) {
        return Resolution::PassThrough(locale);
    }

    let locale = cookie
        .and_then(Locale::from_code)
        .or_else(|| accept_language.and_then(negotiate))
        .unwrap_or(default);

    Resolution::Redirect {
        locale,
        location: prefixed_path(path, locale),
    }
}

/// The supported locale in the first path segment, if any.
///
/// Matches `/fr` and `/fr/...` but not `/french` or `/de/...`.
#[must_use]
pub fn path_locale(path: &str) -> Option<Locale> {
    let segment = path.strip_prefix('/')?.split('/').next()?;
    Locale::from_code(segment)
}

/// Whether resolution should skip this path.
///
/// Skips anything whose last segment has a file extension (`/favicon.ico`,
/// `/static/css/main.css`) and the internal route prefixes.
#[must_use]
pub fn is_bypassed(path: &str) -> bool {
    let last_segment = path.rsplit('/').next().unwrap_or_default();
    if last_segment.contains('.') {
        return true;
    }

    BYPASS_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// Parse an `Accept-Language` header into supported locales, in header order.
///
/// Each comma-separated entry has its `;q=` weight dropped, is trimmed and
/// lowercased, and is reduced to its primary subtag (`fr-CA` becomes `fr`).
/// Entries that do not name a supported locale are skipped.
pub fn parse_accept_language(header: &str) -> impl Iterator<Item = Locale> + '_ {
    header.split(',').filter_map(|entry| {
        let tag = entry.split(';').next().unwrap_or_default().trim();
        let primary = tag.split('-').next().unwrap_or_default();
        Locale::from_code(&primary.to_ascii_lowercase())
    })
}

/// The first supported locale in an `Accept-Language` header.
#[must_use]
pub fn negotiate(header: &str) -> Option<Locale> {
    parse_accept_language(header).next()
}

/// Prefix a locale-less path with `locale`.
///
/// The root path maps to `/{locale}` rather than `/{locale}/`.
#[must_use]
pub fn prefixed_path(path: &str, locale: Locale) -> String {
    match path {
        "" | "/" => format!("/{locale}"),
        p if p.starts_with('/') => format!("/{locale}{p}"),
        p => format!("/{locale}/{p}"),
    }
}

/// Rewrite a path for a different locale.
///
/// Replaces the existing locale segment if there is one, otherwise prefixes.
///
/// ```
/// use xyra_core::locale::switch_locale_path;
/// use xyra_core::Locale;
///
/// assert_eq!(switch_locale_path("/fr/shop", Locale::Ja), "/ja/shop");
/// assert_eq!(switch_locale_path("/fr", Locale::Zh), "/zh");
/// assert_eq!(switch_locale_path("/about", Locale::En), "/en/about");
/// ```
#[must_use]
pub fn switch_locale_path(path: &str, locale: Locale) -> String {
    let rest = path_locale(path).map_or(path, |current| {
        path.get(1 + current.code().len()..).unwrap_or_default()
    });
    prefixed_path(rest, locale)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn redirect(locale: Locale, location: &str) -> Resolution {
        Resolution::Redirect {
            locale,
            location: location.to_string(),
        }
    }

    #[test]
    fn test_localized_paths_pass_through() {
        for locale in Locale::ALL {
            let shop = format!("/{locale}/shop");
            assert_eq!(
                resolve_request(&shop, None, None, Locale::En),
                Resolution::PassThrough(locale)
            );
            let root = format!("/{locale}");
            assert_eq!(
                resolve_request(&root, Some("zh"), Some("fr"), Locale::En),
                Resolution::PassThrough(locale)
            );
        }
    }

    #[test]
    fn test_cookie_wins_over_header() {
        assert_eq!(
            resolve_request("/shop", Some("fr"), Some("ja"), Locale::En),
            redirect(Locale::Fr, "/fr/shop")
        );
    }

    #[test]
    fn test_invalid_cookie_falls_back_to_header() {
        assert_eq!(
            resolve_request("/about", Some("klingon"), Some("zh-CN,zh;q=0.9"), Locale::En),
            redirect(Locale::Zh, "/zh/about")
        );
    }

    #[test]
    fn test_root_redirect_from_header() {
        assert_eq!(
            resolve_request("/", None, Some("ja,en;q=0.5"), Locale::En),
            redirect(Locale::Ja, "/ja")
        );
    }

    #[test]
    fn test_header_order_is_authoritative() {
        // q-values are not re-sorted; the first supported tag wins
        assert_eq!(
            resolve_request("/", None, Some("fr;q=0.1, ja;q=0.9"), Locale::En),
            redirect(Locale::Fr, "/fr")
        );
    }

    #[test]
    fn test_header_skips_unsupported_tags() {
        assert_eq!(
            resolve_request("/shop", None, Some("de-DE, es;q=0.8, FR-ca;q=0.5"), Locale::En),
            redirect(Locale::Fr, "/fr/shop")
        );
    }

    #[test]
    fn test_default_when_nothing_matches() {
        assert_eq!(
            resolve_request("/shop", None, Some("de, *;q=0.1"), Locale::Zh),
            redirect(Locale::Zh, "/zh/shop")
        );
        assert_eq!(
            resolve_request("/shop", None, None, Locale::En),
            redirect(Locale::En, "/en/shop")
        );
    }

    #[test]
    fn test_malformed_headers_do_not_panic() {
        for header in ["", ",,,", ";;q=", "-", "  ;q=abc , ", "\u{1F3A3}", "en-;q"] {
            let resolution = resolve_request("/", None, Some(header), Locale::En);
            assert!(matches!(resolution, Resolution::Redirect { .. }), "{header:?}");
        }
        assert_eq!(
            resolve_request("/", None, Some("en-;q"), Locale::Fr),
            redirect(Locale::En, "/en")
        );
    }

    #[test]
    fn test_unsupported_path_locale_redirects() {
        assert_eq!(
            resolve_request("/de/shop", None, None, Locale::En),
            redirect(Locale::En, "/en/de/shop")
        );
        assert_eq!(
            resolve_request("/english", Some("ja"), None, Locale::En),
            redirect(Locale::Ja, "/ja/english")
        );
    }

    #[test]
    fn test_assets_and_internal_routes_bypass() {
        for path in [
            "/favicon.ico",
            "/static/css/main.css",
            "/static",
            "/api/cart",
            "/_next/data",
            "/health",
            "/health/ready",
            "/robots.txt",
        ] {
            assert_eq!(
                resolve_request(path, None, Some("fr"), Locale::En),
                Resolution::Bypass,
                "{path}"
            );
        }
    }

    #[test]
    fn test_bypass_prefix_respects_segments() {
        assert!(!is_bypassed("/apiary"));
        assert!(!is_bypassed("/healthy"));
        assert!(is_bypassed("/api"));
    }

    #[test]
    fn test_only_last_segment_extension_bypasses() {
        assert!(!is_bypassed("/v1.2/shop"));
        assert!(is_bypassed("/v1.2/catalog.json"));
        assert_eq!(
            resolve_request("/v1.2/shop", None, None, Locale::En),
            Resolution::Redirect {
                location: "/en/v1.2/shop".to_string(),
                locale: Locale::En,
            }
        );
    }

    #[test]
    fn test_parse_accept_language_order() {
        let locales: Vec<_> = parse_accept_language("zh-TW, en-GB;q=0.8, xx, ja").collect();
        assert_eq!(locales, vec![Locale::Zh, Locale::En, Locale::Ja]);
    }

    #[test]
    fn test_prefixed_path() {
        assert_eq!(prefixed_path("/", Locale::Fr), "/fr");
        assert_eq!(prefixed_path("", Locale::Fr), "/fr");
        assert_eq!(prefixed_path("/product/crystal-minnow", Locale::Ja), "/ja/product/crystal-minnow");
        assert_eq!(prefixed_path("shop", Locale::En), "/en/shop");
    }

    #[test]
    fn test_switch_locale_path() {
        assert_eq!(switch_locale_path("/fr/product/mermaid-tears", Locale::En), "/en/product/mermaid-tears");
        assert_eq!(switch_locale_path("/ja", Locale::Fr), "/fr");
        assert_eq!(switch_locale_path("/", Locale::Zh), "/zh");
        assert_eq!(switch_locale_path("/english/shop", Locale::Fr), "/fr/english/shop");
    }
}
