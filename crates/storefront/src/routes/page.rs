//! Shared page chrome: locale, UI strings, cart drawer and language menu.
//!
//! Every HTML page template carries a [`Page`] and renders its header, cart
//! drawer and footer from it via `base.html`.

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::request::Parts,
};
use chrono::Datelike;
use url::form_urlencoded;
use xyra_core::{Cart, CartItem, Dictionary, Locale, Product, locale::prefixed_path};

use crate::error::AppError;
use crate::middleware::{PageLocale, SessionCart};
use crate::state::AppState;

/// Brand name appended to page titles.
const BRAND: &str = "XYRA";

/// Layout context shared by all pages.
pub struct Page {
    /// Locale the page is rendered in.
    pub locale: Locale,
    /// UI strings for `locale`.
    pub t: Dictionary,
    /// Current path and query, used as `return_to` by forms.
    pub path: String,
    /// Cart drawer contents.
    pub cart: CartView,
    /// Language menu entries.
    pub languages: Vec<LanguageLink>,
    year: i32,
}

impl Page {
    /// Build the page context for `locale` at `path`.
    #[must_use]
    pub fn new(state: &AppState, locale: Locale, path: String, cart: &Cart) -> Self {
        let t = state.dictionary(locale);
        let languages = Locale::ALL
            .into_iter()
            .map(|target| LanguageLink::new(&t, locale, target, &path))
            .collect();

        Self {
            locale,
            cart: CartView::new(cart),
            languages,
            path,
            t,
            year: chrono::Utc::now().year(),
        }
    }

    /// Localized URL for a site path such as `/shop`.
    #[must_use]
    pub fn href(&self, path: &str) -> String {
        prefixed_path(path, self.locale)
    }

    /// `<title>` text for a page named `name`.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn title(&self, name: &str) -> String {
        format!("{name} | {BRAND}")
    }

    /// Footer copyright line with the current year.
    #[must_use]
    pub fn copyright(&self) -> String {
        let year = self.year.to_string();
        self.t.format("footer.copyright", &[("year", year.as_str())])
    }
}

impl FromRequestParts<AppState> for Page {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let PageLocale(locale) = PageLocale::from_request_parts(parts, state).await?;
        let cart = SessionCart::from_request_parts(parts, state).await?;
        let path = request_path(parts);

        Ok(Self::new(state, locale, path, cart.cart()))
    }
}

/// Path and query of the request as the client sent it.
#[must_use]
pub fn request_path(parts: &Parts) -> String {
    let uri = parts
        .extensions
        .get::<OriginalUri>()
        .map_or(&parts.uri, |uri| &uri.0);

    uri.path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string)
}

/// Accept `raw` as a redirect target only if it stays on this site.
///
/// The value must be an absolute path. Scheme-relative (`//host`) and
/// backslash forms are refused because browsers treat them as other origins.
#[must_use]
pub fn local_path(raw: &str) -> Option<&str> {
    let local = raw.starts_with('/')
        && !raw.starts_with("//")
        && !raw.contains('\\')
        && !raw.chars().any(char::is_control);

    local.then_some(raw)
}

/// One entry of the language menu.
pub struct LanguageLink {
    pub code: &'static str,
    pub label: String,
    pub href: String,
    pub current: bool,
}

impl LanguageLink {
    fn new(t: &Dictionary, current: Locale, target: Locale, return_to: &str) -> Self {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("to", target.code())
            .append_pair("return_to", return_to)
            .finish();

        Self {
            code: target.code(),
            label: t.get(&format!("language.{}", target.code())).to_string(),
            href: format!("/{current}/language?{query}"),
            current: target == current,
        }
    }
}

/// Cart drawer display data.
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub total_items: u64,
    pub subtotal: String,
    pub total: String,
    pub is_open: bool,
}

impl CartView {
    #[must_use]
    pub fn new(cart: &Cart) -> Self {
        // Shipping is free, so the total is the subtotal
        let total = cart.total_price().to_string();

        Self {
            items: cart.items().iter().map(CartLineView::from).collect(),
            total_items: cart.total_items(),
            subtotal: total.clone(),
            total,
            is_open: cart.is_open(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One cart line for display.
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub image_ref: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    /// Quantity submitted by the "-" button; zero removes the line.
    pub decrease_to: i64,
    pub increase_to: i64,
}

impl From<&CartItem> for CartLineView {
    fn from(item: &CartItem) -> Self {
        let quantity = i64::from(item.quantity);

        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            image_ref: item.image_ref.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price.to_string(),
            line_total: item.line_total().to_string(),
            decrease_to: quantity - 1,
            increase_to: quantity + 1,
        }
    }
}

/// Product card and detail display data.
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub category: &'static str,
    pub category_key: &'static str,
    pub description: String,
    pub features: Vec<String>,
    pub image_ref: String,
    pub href: String,
}

impl ProductView {
    #[must_use]
    pub fn new(product: &Product, locale: Locale) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.name(),
            category_key: product.category.dictionary_key(),
            description: product.description.clone(),
            features: product.features.clone(),
            image_ref: product.image_ref.clone(),
            href: format!("/{locale}/product/{}", product.id),
        }
    }

    /// Views for `products`, in order.
    #[must_use]
    pub fn list<'a>(products: impl IntoIterator<Item = &'a Product>, locale: Locale) -> Vec<Self> {
        products
            .into_iter()
            .map(|product| Self::new(product, locale))
            .collect()
    }
}
