//! Storefront models that are not part of the shared domain.

pub mod session;

pub use session::keys as session_keys;
