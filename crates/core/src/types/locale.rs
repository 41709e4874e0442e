//! Supported storefront locales.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Locale`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// The code is not one of the supported locales.
    #[error("unsupported locale: {0:?}")]
    Unsupported(String),
}

/// A language the storefront is translated into.
///
/// The URL prefix, the `NEXT_LOCALE` cookie and the dictionary files all use
/// the lowercase two-letter code returned by [`Locale::code`].
///
/// ```
/// use xyra_core::Locale;
///
/// assert_eq!(Locale::from_code("ja"), Some(Locale::Ja));
/// assert_eq!(Locale::from_code("de"), None);
/// assert_eq!(Locale::default(), Locale::En);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    Ja,
    Zh,
}

impl Locale {
    /// Every supported locale, in menu order.
    pub const ALL: [Self; 4] = [Self::En, Self::Fr, Self::Ja, Self::Zh];

    /// The two-letter code used in URLs and cookies.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Ja => "ja",
            Self::Zh => "zh",
        }
    }

    /// Look up a locale by its exact (lowercase) code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| LocaleError::Unsupported(s.to_owned()))
    }
}
