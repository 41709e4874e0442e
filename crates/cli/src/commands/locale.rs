//! Locale resolution tracing.
//!
//! Runs the same resolver as the storefront middleware and explains the
//! outcome, which helps when a visitor reports landing in the wrong language.

use xyra_core::{
    Locale,
    locale::{LOCALE_COOKIE, LOCALE_COOKIE_MAX_AGE_SECS, Resolution, resolve_request},
};

use super::CliError;

/// Explain how a request for `path` would be routed.
///
/// # Errors
///
/// Returns `CliError::Locale` if `default` is not a supported locale.
/// Unsupported cookie or header values are not errors; the resolver ignores
/// them just as it does for real requests.
pub fn resolve(
    path: &str,
    cookie: Option<&str>,
    accept_language: Option<&str>,
    default: &str,
) -> Result<String, CliError> {
    let default = default.trim().to_ascii_lowercase().parse::<Locale>()?;

    tracing::debug!(path, ?cookie, ?accept_language, %default, "Resolving locale");

    let report = match resolve_request(path, cookie, accept_language, default) {
        Resolution::Bypass => format!("{path}: bypass (asset or internal path, no redirect)"),
        Resolution::PassThrough(locale) => {
            format!("{path}: pass through (locale {locale} from path)")
        }
        Resolution::Redirect { locale, location } => format!(
            "{path}: 307 redirect to {location}\n\
             Set-Cookie: {LOCALE_COOKIE}={locale}; Path=/; Max-Age={LOCALE_COOKIE_MAX_AGE_SECS}; SameSite=Lax"
        ),
    };

    Ok(report)
}
