//! Application state shared across handlers.

use std::sync::Arc;

use xyra_core::{Dictionaries, DictionaryError, Dictionary, Locale, StaticCatalog};

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Everything behind it is
/// immutable after startup; per-visitor state lives in the session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: StaticCatalog,
    dictionaries: Dictionaries,
}

impl AppState {
    /// Create a new application state with the XYRA catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded dictionaries fail to load.
    pub fn new(config: StorefrontConfig) -> Result<Self, DictionaryError> {
        Self::with_catalog(config, StaticCatalog::xyra())
    }

    /// Create a new application state with an explicit catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded dictionaries fail to load.
    pub fn with_catalog(
        config: StorefrontConfig,
        catalog: StaticCatalog,
    ) -> Result<Self, DictionaryError> {
        let dictionaries = Dictionaries::load(config.default_locale)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                dictionaries,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &StaticCatalog {
        &self.inner.catalog
    }

    /// UI strings for `locale`.
    #[must_use]
    pub fn dictionary(&self, locale: Locale) -> Dictionary {
        self.inner.dictionaries.lookup(locale)
    }
}
