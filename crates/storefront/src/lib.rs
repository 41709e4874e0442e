//! XYRA Storefront library.
//!
//! The HTTP application lives here so the binary, the router tests and the
//! integration tests all build the same [`routes::app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

pub use config::StorefrontConfig;
pub use routes::app;
pub use state::AppState;
