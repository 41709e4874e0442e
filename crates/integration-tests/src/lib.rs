//! Integration tests for the XYRA storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p xyra-integration-tests
//! ```
//!
//! The storefront router is driven in-process with `tower::ServiceExt`, so
//! no server or port is needed. [`TestContext`] keeps a cookie jar between
//! requests, which is what carries the session (and with it the cart) and
//! the locale cookie from one request to the next.
//!
//! # Test Categories
//!
//! - `locale_redirects` - Locale negotiation at the request boundary
//! - `cart_flow` - Session-held cart across requests
//! - `pages` - Page rendering and not-found handling

use std::collections::BTreeMap;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use tower::ServiceExt;
use tower_sessions::cookie::Cookie;
use url::form_urlencoded;
use xyra_storefront::{AppState, StorefrontConfig, app};

/// A storefront instance plus one visitor's cookie jar.
pub struct TestContext {
    app: Router,
    cookies: BTreeMap<String, String>,
}

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header, if present.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    /// `Set-Cookie` header values.
    pub fn set_cookies(&self) -> impl Iterator<Item = &str> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// A storefront with the default configuration and an empty cookie jar.
    ///
    /// # Panics
    ///
    /// Panics if the embedded dictionaries fail to load.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StorefrontConfig::default())
    }

    /// A storefront with an explicit configuration.
    ///
    /// # Panics
    ///
    /// Panics if the embedded dictionaries fail to load.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_config(config: StorefrontConfig) -> Self {
        let state = AppState::new(config).expect("dictionaries load");
        Self {
            app: app(state),
            cookies: BTreeMap::new(),
        }
    }

    /// Current value of a cookie in the jar.
    #[must_use]
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// Put a cookie in the jar as if the browser already had it.
    pub fn set_cookie(&mut self, name: &str, value: &str) {
        self.cookies.insert(name.to_string(), value.to_string());
    }

    /// `GET uri`.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.get_with(uri, &[]).await
    }

    /// `GET uri` with extra request headers.
    pub async fn get_with(&mut self, uri: &str, headers: &[(&str, &str)]) -> TestResponse {
        self.send(Method::GET, uri, headers, Body::empty()).await
    }

    /// `POST uri` with a URL-encoded form body.
    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();

        self.send(
            Method::POST,
            uri,
            &[(
                header::CONTENT_TYPE.as_str(),
                "application/x-www-form-urlencoded",
            )],
            Body::from(body),
        )
        .await
    }

    #[allow(clippy::expect_used)]
    async fn send(
        &mut self,
        method: Method,
        uri: &str,
        headers: &[(&str, &str)],
        body: Body,
    ) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        if !self.cookies.is_empty() {
            let jar = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            request = request.header(header::COOKIE, jar);
        }

        let response = self
            .app
            .clone()
            .oneshot(request.body(body).expect("valid request"))
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        let response = TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        };
        self.store_cookies(&response);
        response
    }

    fn store_cookies(&mut self, response: &TestResponse) {
        for raw in response.set_cookies() {
            let Ok(cookie) = Cookie::parse(raw) else {
                continue;
            };
            let expired = cookie
                .max_age()
                .is_some_and(|max_age| max_age.is_zero() || max_age.is_negative());
            if expired {
                self.cookies.remove(cookie.name());
            } else {
                self.cookies
                    .insert(cookie.name().to_string(), cookie.value().to_string());
            }
        }
    }
}
