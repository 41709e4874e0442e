//! Session-backed cart extractor.
//!
//! Each visitor's [`Cart`] is serialized into their session under
//! [`keys::CART`]. Handlers take a [`SessionCart`], mutate the cart through
//! [`SessionCart::update`], and the new state is written back before the
//! response is built.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;
use xyra_core::Cart;

use crate::error::AppError;
use crate::models::session_keys as keys;

/// The visitor's cart together with the session it came from.
///
/// # Example
///
/// ```rust,ignore
/// async fn count(cart: SessionCart) -> String {
///     cart.cart().total_items().to_string()
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SessionCart {
    session: Session,
    cart: Cart,
}

impl SessionCart {
    /// The cart as it was loaded (or last saved).
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Apply `change` to the cart and persist the result.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store rejects the write.
    pub async fn update<F>(&mut self, change: F) -> Result<&Cart, AppError>
    where
        F: FnOnce(&mut Cart),
    {
        change(&mut self.cart);
        self.session.insert(keys::CART, &self.cart).await?;
        Ok(&self.cart)
    }
}

impl<S> FromRequestParts<S> for SessionCart
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

        let cart = match session.get::<Cart>(keys::CART).await {
            Ok(cart) => cart.unwrap_or_default(),
            Err(e) => {
                // A cart written by an older build may no longer deserialize
                tracing::warn!(error = %e, "Discarding unreadable session cart");
                Cart::default()
            }
        };

        Ok(Self { session, cart })
    }
}
