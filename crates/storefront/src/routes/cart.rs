//! Cart route handlers.
//!
//! The cart lives in the visitor's session (see [`SessionCart`]). Mutations
//! are plain form posts answered with `303 See Other`, either back to the
//! page named by the `return_to` field or to the cart page.

use std::{fmt, str::FromStr};

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{FromRequest, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Deserializer, de};
use tracing::instrument;
use xyra_core::{Catalog, Locale};

use super::page::{Page, local_path};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::{PageLocale, SessionCart};
use crate::state::AppState;

/// Form body extractor whose rejections render as [`AppError::BadRequest`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct CartForm<T>(pub T);

/// Parse an optional numeric field, treating a blank value as absent.
///
/// A cleared `<input type="number">` is submitted as `quantity=`.
fn blank_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub quantity: Option<u32>,
    pub return_to: Option<String>,
}

/// Update quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    /// Blank leaves the line as it is.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub quantity: Option<i64>,
    pub return_to: Option<String>,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
    pub return_to: Option<String>,
}

/// Drawer open/close form data.
#[derive(Debug, Deserialize)]
pub struct DrawerForm {
    pub return_to: Option<String>,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartShowTemplate {
    pub page: Page,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Where to send the visitor after a cart form post.
fn back(locale: Locale, return_to: Option<&str>) -> Response {
    let fallback = format!("/{locale}/cart");
    let target = return_to.and_then(local_path).unwrap_or(&fallback);
    Redirect::to(target).into_response()
}

/// Display the cart page.
pub async fn show(page: Page) -> impl IntoResponse {
    CartShowTemplate { page }
}

/// Add a product to the cart.
///
/// A missing quantity adds one unit; zero adds nothing.
#[instrument(skip(state, cart), fields(locale = %locale))]
pub async fn add(
    State(state): State<AppState>,
    PageLocale(locale): PageLocale,
    mut cart: SessionCart,
    CartForm(form): CartForm<AddToCartForm>,
) -> Result<Response> {
    let product = state
        .catalog()
        .get_by_id(&form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;
    let quantity = form.quantity.unwrap_or(1);

    let cart = cart
        .update(|cart| cart.add_item_quantity(product, quantity))
        .await?;

    add_breadcrumb(
        "cart",
        "Added product",
        Some(&[
            ("product_id", form.product_id.as_str()),
            ("quantity", quantity.to_string().as_str()),
        ]),
    );
    tracing::info!(
        product_id = %form.product_id,
        quantity,
        total_items = cart.total_items(),
        "Added to cart"
    );

    Ok(back(locale, form.return_to.as_deref()))
}

/// Set the quantity of a cart line; zero or less removes it.
#[instrument(skip(cart), fields(locale = %locale))]
pub async fn update(
    PageLocale(locale): PageLocale,
    mut cart: SessionCart,
    CartForm(form): CartForm<UpdateCartForm>,
) -> Result<Response> {
    if let Some(quantity) = form.quantity {
        cart.update(|cart| cart.set_quantity(&form.product_id, quantity))
            .await?;

        add_breadcrumb(
            "cart",
            "Updated quantity",
            Some(&[
                ("product_id", form.product_id.as_str()),
                ("quantity", quantity.to_string().as_str()),
            ]),
        );
    }

    Ok(back(locale, form.return_to.as_deref()))
}

/// Remove a cart line. Removing an absent product is not an error.
#[instrument(skip(cart), fields(locale = %locale))]
pub async fn remove(
    PageLocale(locale): PageLocale,
    mut cart: SessionCart,
    CartForm(form): CartForm<RemoveFromCartForm>,
) -> Result<Response> {
    cart.update(|cart| cart.remove_item(&form.product_id)).await?;

    add_breadcrumb(
        "cart",
        "Removed product",
        Some(&[("product_id", form.product_id.as_str())]),
    );

    Ok(back(locale, form.return_to.as_deref()))
}

/// Show the cart drawer.
pub async fn open(
    PageLocale(locale): PageLocale,
    cart: SessionCart,
    CartForm(form): CartForm<DrawerForm>,
) -> Result<Response> {
    set_drawer(locale, cart, form, true).await
}

/// Hide the cart drawer.
pub async fn close(
    PageLocale(locale): PageLocale,
    cart: SessionCart,
    CartForm(form): CartForm<DrawerForm>,
) -> Result<Response> {
    set_drawer(locale, cart, form, false).await
}

async fn set_drawer(
    locale: Locale,
    mut cart: SessionCart,
    form: DrawerForm,
    open: bool,
) -> Result<Response> {
    cart.update(|cart| cart.set_open(open)).await?;
    Ok(back(locale, form.return_to.as_deref()))
}

/// Get the cart count badge fragment.
pub async fn count(cart: SessionCart) -> impl IntoResponse {
    CartCountTemplate {
        count: cart.cart().total_items(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{StatusCode, header::LOCATION};

    use super::*;

    #[test]
    fn test_back_uses_local_return_path() {
        let response = back(Locale::Fr, Some("/fr/product/crystal-minnow"));
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "/fr/product/crystal-minnow"
        );
    }

    #[test]
    fn test_back_refuses_foreign_return_path() {
        let response = back(Locale::Ja, Some("//evil.example/"));
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/ja/cart");

        let response = back(Locale::Ja, None);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/ja/cart");
    }
}
