//! XYRA Core - Shared domain library.
//!
//! This crate provides the domain model used across all XYRA components:
//! - `storefront` - Public-facing multilingual shop
//! - `cli` - Command-line tools for inspecting the catalog and translations
//!
//! # Architecture
//!
//! The core crate contains only types, traits and pure functions - no I/O,
//! no HTTP, no session handling. This keeps it lightweight and allows the same
//! locale and cart rules to be used by the server, the CLI and the tests.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices and locales
//! - [`locale`] - Request locale resolution and locale-prefixed paths
//! - [`catalog`] - Read-only product catalog
//! - [`cart`] - Per-session shopping cart state
//! - [`dictionary`] - Flat UI string lookup per locale

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod dictionary;
pub mod locale;
pub mod types;

pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, Category, Product, StaticCatalog};
pub use dictionary::{Dictionaries, Dictionary, DictionaryError};
pub use locale::Resolution;
pub use types::*;
