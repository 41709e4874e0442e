//! Integration tests for page rendering.

use axum::http::StatusCode;
use xyra_integration_tests::TestContext;

#[tokio::test]
async fn test_home_shows_featured_and_gift_set() {
    let mut ctx = TestContext::new();
    let response = ctx.get("/en").await;

    assert_eq!(response.status, StatusCode::OK);
    for id in ["muse-bfs-pink", "blanc-de-chine-spin", "crystal-minnow", "candy-box-set"] {
        assert!(response.body.contains(&format!("/en/product/{id}")), "{id}");
    }
}

#[tokio::test]
async fn test_pages_render_in_each_locale() {
    let mut ctx = TestContext::new();
    let cases = [
        ("/en/about", "Our Story"),
        ("/fr/shop", "La Collection"),
        ("/ja/cart", "ショップ"),
        ("/zh/shop", "全部系列"),
    ];

    for (path, expected) in cases {
        let response = ctx.get(path).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(response.body.contains(expected), "{path} missing {expected}");
    }
}

#[tokio::test]
async fn test_shop_filters_by_category() {
    let mut ctx = TestContext::new();

    let response = ctx.get("/en/shop?category=Baits").await;
    assert!(response.body.contains("Mermaid Tears Soft Baits"));
    assert!(!response.body.contains("Crystal Minnow Pendant"));

    // Unknown category shows everything
    let response = ctx.get("/en/shop?category=Rods").await;
    assert!(response.body.contains("Mermaid Tears Soft Baits"));
    assert!(response.body.contains("Crystal Minnow Pendant"));
}

#[tokio::test]
async fn test_product_page_lists_related_from_same_category() {
    let mut ctx = TestContext::new();
    let response = ctx.get("/en/product/blanc-de-chine-spin").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Blanc De Chine Spinning Reel | XYRA"));
    assert!(response.body.contains("/en/product/muse-bfs-pink"));
    assert!(!response.body.contains("/en/product/mermaid-tears"));
}

#[tokio::test]
async fn test_unknown_product_renders_not_found_page() {
    let mut ctx = TestContext::new();
    let response = ctx.get("/fr/product/nope").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("lang=\"fr\""));
    assert!(response.body.contains("/fr"));
}

#[tokio::test]
async fn test_unmatched_localized_path_is_not_found() {
    let mut ctx = TestContext::new();
    let response = ctx.get("/ja/nowhere/at/all").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("lang=\"ja\""));
}

#[tokio::test]
async fn test_footer_copyright_has_year() {
    let mut ctx = TestContext::new();
    let response = ctx.get("/en").await;
    assert!(!response.body.contains("{year}"));
    assert!(response.body.contains("All rights reserved."));
}
