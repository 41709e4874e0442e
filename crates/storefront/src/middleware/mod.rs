//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request span with `request_id` field)
//! 3. Request ID (fills the span field, tags Sentry)
//! 4. Security headers
//! 5. Session layer (tower-sessions, in-memory store)
//! 6. Locale redirect (runs before routing, so it sees unmatched paths too)

pub mod cart;
pub mod locale;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use cart::SessionCart;
pub use locale::{PageLocale, locale_cookie, locale_cookie_header, locale_middleware};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
