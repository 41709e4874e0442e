//! Session keys.
//!
//! Everything a visitor session holds is listed here so keys never collide.

/// Session keys.
pub mod keys {
    /// Key for the serialized [`xyra_core::Cart`].
    pub const CART: &str = "cart";
}
