//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Health check
//! GET  /static/*                - Stylesheet and other assets
//!
//! # Pages (every page path starts with a locale: en, fr, ja, zh)
//! GET  /{lang}                  - Home page
//! GET  /{lang}/shop             - Product grid (?category=Reels|Lures|Baits|Gifts)
//! GET  /{lang}/about            - Brand story
//! GET  /{lang}/product/{id}     - Product detail (404 page for unknown IDs)
//! GET  /{lang}/language         - Switch language (?to=ja&return_to=/fr/shop)
//!
//! # Cart (form posts, answered with 303 to return_to or the cart page)
//! GET  /{lang}/cart             - Cart page
//! POST /{lang}/cart/add         - Add product (product_id, quantity?)
//! POST /{lang}/cart/update      - Set quantity (product_id, quantity)
//! POST /{lang}/cart/remove      - Remove product (product_id)
//! POST /{lang}/cart/open        - Show cart drawer
//! POST /{lang}/cart/close       - Hide cart drawer
//! GET  /{lang}/cart/count       - Cart count badge (fragment)
//! ```
//!
//! Requests for paths without a locale never reach these handlers; the
//! locale middleware redirects them first.

pub mod about;
pub mod cart;
pub mod home;
pub mod language;
pub mod page;
pub mod products;
pub mod shop;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{OriginalUri, Request, State},
    http::StatusCode,
    middleware::{from_fn, from_fn_with_state},
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use xyra_core::locale::path_locale;

use crate::filters;
use crate::middleware::{
    SessionCart, create_session_layer, locale_middleware, request_id_middleware,
    security_headers_middleware,
};
use crate::state::AppState;
use page::Page;

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub page: Page,
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
        .route("/count", get(cart::count))
}

/// Create the localized page routes.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/{lang}", get(home::home))
        .route("/{lang}/shop", get(shop::index))
        .route("/{lang}/about", get(about::about))
        .route("/{lang}/product/{id}", get(products::show))
        .route("/{lang}/language", get(language::switch))
        .nest("/{lang}/cart", cart_routes())
}

/// Build the complete storefront application.
///
/// Sentry layers are left to the binary so tests run without a Sentry hub.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());
    let static_files = ServeDir::new(&state.config().static_dir);

    Router::new()
        .route("/health", get(health))
        .merge(page_routes())
        .nest_service("/static", static_files)
        .fallback(not_found)
        .layer(from_fn_with_state(state.clone(), locale_middleware))
        .layer(session_layer)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Render the not-found page for unmatched localized paths.
async fn not_found(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    cart: SessionCart,
) -> impl IntoResponse {
    let locale = path_locale(uri.path()).unwrap_or(state.config().default_locale);
    let path = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string);

    tracing::debug!(path = %uri.path(), "No route matched");

    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            page: Page::new(&state, locale, path, cart.cart()),
        },
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{
            Request, StatusCode,
            header::{ACCEPT_LANGUAGE, CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        },
    };
    use tower::ServiceExt;

    use super::*;
    use crate::config::StorefrontConfig;

    fn test_app() -> Router {
        app(AppState::new(StorefrontConfig::default()).unwrap())
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "ok");
    }

    #[tokio::test]
    async fn test_root_redirects_by_accept_language() {
        let request = Request::builder()
            .uri("/")
            .header(ACCEPT_LANGUAGE, "ja,en;q=0.5")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/ja");
        let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with("NEXT_LOCALE=ja"));
    }

    #[tokio::test]
    async fn test_cookie_wins_and_query_is_kept() {
        let request = Request::builder()
            .uri("/shop?category=Reels")
            .header(COOKIE, "NEXT_LOCALE=fr")
            .header(ACCEPT_LANGUAGE, "ja")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "/fr/shop?category=Reels"
        );
    }

    #[tokio::test]
    async fn test_localized_pages_render() {
        for uri in ["/en", "/fr/shop", "/ja/about", "/zh/cart", "/en/product/muse-bfs-pink"] {
            let response = test_app().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert!(response.headers().get(SET_COOKIE).is_none_or(|cookie| {
                !cookie.to_str().unwrap().starts_with("NEXT_LOCALE")
            }));
        }
    }

    #[tokio::test]
    async fn test_page_uses_locale_strings() {
        let response = test_app().oneshot(get("/fr/shop")).await.unwrap();
        let body = body_string(response).await;
        assert!(body.contains("lang=\"fr\""));
        assert!(body.contains("Boutique"));
    }

    #[tokio::test]
    async fn test_shop_category_filter() {
        let response = test_app()
            .oneshot(get("/en/shop?category=Reels"))
            .await
            .unwrap();
        let body = body_string(response).await;
        assert!(body.contains("/en/product/muse-bfs-pink"));
        assert!(body.contains("/en/product/blanc-de-chine-spin"));
        assert!(!body.contains("/en/product/mermaid-tears"));
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let response = test_app()
            .oneshot(get("/en/product/does-not-exist"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsupported_locale_segment_redirects_then_404s() {
        let response = test_app().oneshot(get("/de/shop")).await.unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/en/de/shop");

        let response = test_app().oneshot(get("/en/de/shop")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_bypassed_paths_are_not_redirected() {
        let response = test_app().oneshot(get("/api/shop")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(LOCATION).is_none());

        let response = test_app().oneshot(get("/favicon.ico")).await.unwrap();
        assert!(response.headers().get(LOCATION).is_none());
    }

    #[tokio::test]
    async fn test_add_to_cart_redirects_back() {
        let request = Request::builder()
            .method("POST")
            .uri("/en/cart/add")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(
                "product_id=crystal-minnow&return_to=%2Fen%2Fproduct%2Fcrystal-minnow",
            ))
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "/en/product/crystal-minnow"
        );
        assert!(response.headers().get(SET_COOKIE).is_some());
    }

    #[tokio::test]
    async fn test_add_unknown_product_is_not_found() {
        let request = Request::builder()
            .method("POST")
            .uri("/en/cart/add")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("product_id=nope"))
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_language_switch_sets_cookie() {
        let response = test_app()
            .oneshot(get("/fr/language?to=ja&return_to=%2Ffr%2Fshop"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/ja/shop");
        let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with("NEXT_LOCALE=ja"));
    }

    #[tokio::test]
    async fn test_language_switch_ignores_unsupported_target() {
        let response = test_app()
            .oneshot(get("/fr/language?to=de&return_to=%2Ffr%2Fshop"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/fr/shop");
        assert!(response.headers().get(SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_security_and_request_id_headers() {
        let response = test_app().oneshot(get("/en")).await.unwrap();
        let headers = response.headers();
        assert!(headers.contains_key("x-request-id"));
        assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
        assert!(headers.contains_key("content-security-policy"));
    }

    #[tokio::test]
    async fn test_upstream_request_id_is_echoed() {
        let request = Request::builder()
            .uri("/health")
            .header("x-request-id", "edge-123")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.headers().get("x-request-id").unwrap(), "edge-123");
    }
}
