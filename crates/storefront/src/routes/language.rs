//! Language switch route handler.

use axum::{
    extract::Query,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;
use xyra_core::{Locale, locale::switch_locale_path};

use super::page::local_path;
use crate::error::add_breadcrumb;
use crate::middleware::{PageLocale, locale_cookie_header};

/// Language switch query parameters.
#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    pub to: Option<String>,
    pub return_to: Option<String>,
}

/// Switch to another locale and go back to the same page in it.
///
/// Remembers the choice in the locale cookie. An unsupported `to` leaves
/// the locale unchanged and sets no cookie.
#[instrument(skip_all, fields(from = %locale))]
pub async fn switch(
    PageLocale(locale): PageLocale,
    Query(query): Query<LanguageQuery>,
) -> Response {
    let fallback = format!("/{locale}");
    let return_to = query
        .return_to
        .as_deref()
        .and_then(local_path)
        .unwrap_or(&fallback);

    let Some(target) = query.to.as_deref().and_then(|to| to.parse::<Locale>().ok()) else {
        tracing::debug!(to = ?query.to, "Ignoring unsupported locale");
        return Redirect::to(return_to).into_response();
    };

    let location = switched_location(return_to, target);
    add_breadcrumb(
        "locale",
        "Switched language",
        Some(&[("from", locale.code()), ("to", target.code())]),
    );

    let mut response = Redirect::to(&location).into_response();
    if let Some(cookie) = locale_cookie_header(target) {
        response.headers_mut().append(SET_COOKIE, cookie);
    }
    response
}

/// `return_to` rewritten for `target`, keeping its query string.
fn switched_location(return_to: &str, target: Locale) -> String {
    match return_to.split_once('?') {
        Some((path, query)) => format!("{}?{query}", switch_locale_path(path, target)),
        None => switch_locale_path(return_to, target),
    }
}
