//! Command implementations.
//!
//! Each command returns its report as a `String`; `main` writes it to stdout.

pub mod catalog;
pub mod dictionary;
pub mod locale;

use thiserror::Error;
use xyra_core::{DictionaryError, LocaleError};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// No product has the requested ID.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category name is not one of the catalog's categories.
    #[error("Unknown category: {0}. Valid categories: Reels, Lures, Baits, Gifts")]
    UnknownCategory(String),

    /// One or more locales lack translations.
    #[error("{count} translation keys missing\n{report}")]
    MissingTranslations { count: usize, report: String },

    /// Locale argument is not supported.
    #[error(transparent)]
    Locale(#[from] LocaleError),

    /// Embedded dictionaries failed to load.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
