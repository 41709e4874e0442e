//! Locale redirect middleware and extractor.
//!
//! Runs before routing for every request. Paths without a supported locale
//! prefix are redirected (307, so form posts keep their method and body) to
//! the prefixed path and the chosen locale is remembered in the
//! `NEXT_LOCALE` cookie. See [`xyra_core::locale`] for the resolution rules.

use axum::{
    extract::{FromRequestParts, OriginalUri, Request, State},
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{ACCEPT_LANGUAGE, COOKIE, LOCATION, SET_COOKIE},
        request::Parts,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_sessions::cookie::{Cookie, SameSite, time::Duration};
use xyra_core::Locale;
use xyra_core::locale::{
    LOCALE_COOKIE, LOCALE_COOKIE_MAX_AGE_SECS, Resolution, path_locale, resolve_request,
};

use crate::error::AppError;
use crate::state::AppState;

/// Middleware that sends locale-less page requests to their localized URL.
pub async fn locale_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let headers = request.headers();
    let cookie = locale_cookie(headers);
    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    let resolution = resolve_request(
        request.uri().path(),
        cookie.as_deref(),
        accept_language,
        state.config().default_locale,
    );

    match resolution {
        Resolution::Bypass | Resolution::PassThrough(_) => next.run(request).await,
        Resolution::Redirect { locale, location } => {
            let location = match request.uri().query() {
                Some(query) => format!("{location}?{query}"),
                None => location,
            };

            tracing::debug!(
                path = %request.uri().path(),
                %locale,
                %location,
                "Redirecting to localized path"
            );

            locale_redirect(&location, locale)
        }
    }
}

/// Build the `307` redirect carrying the locale cookie.
fn locale_redirect(location: &str, locale: Locale) -> Response {
    let Ok(location) = HeaderValue::from_str(location) else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let mut response = StatusCode::TEMPORARY_REDIRECT.into_response();
    let headers = response.headers_mut();
    headers.insert(LOCATION, location);
    if let Some(cookie) = locale_cookie_header(locale) {
        headers.append(SET_COOKIE, cookie);
    }
    response
}

/// `Set-Cookie` value remembering `locale` for a year.
#[must_use]
pub fn locale_cookie_header(locale: Locale) -> Option<HeaderValue> {
    let cookie = Cookie::build((LOCALE_COOKIE, locale.code()))
        .path("/")
        .max_age(Duration::seconds(LOCALE_COOKIE_MAX_AGE_SECS))
        .same_site(SameSite::Lax)
        .build();

    HeaderValue::from_str(&cookie.to_string()).ok()
}

/// Value of the `NEXT_LOCALE` cookie, if the request carries one.
///
/// Unparseable cookie headers are ignored rather than rejected.
#[must_use]
pub fn locale_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == LOCALE_COOKIE)
        .map(|cookie| cookie.value().to_owned())
}

/// Extractor for the locale of a localized page.
///
/// Reads the first segment of the request path. A segment that is not a
/// supported locale is rejected as not found; the middleware has already
/// redirected every other locale-less page.
#[derive(Debug, Clone, Copy)]
pub struct PageLocale(pub Locale);

impl<S> FromRequestParts<S> for PageLocale
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map_or_else(|| parts.uri.path(), |uri| uri.0.path());

        path_locale(path)
            .map(Self)
            .ok_or_else(|| AppError::NotFound(path.to_string()))
    }
}
