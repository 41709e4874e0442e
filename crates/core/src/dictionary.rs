//! Flat UI string lookup per locale.
//!
//! Translations live in `crates/core/locales/{code}.json` as flat
//! `"section.key": "text"` objects and are compiled into the binary. Lookups
//! never fail: a key missing from a locale falls back to the default locale's
//! text, and a key missing everywhere renders as the key itself so gaps are
//! visible on the page instead of breaking it.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::types::Locale;

type Entries = BTreeMap<String, String>;

/// Errors that can occur when loading dictionaries.
#[derive(thiserror::Error, Debug)]
pub enum DictionaryError {
    /// A dictionary file is not a flat JSON object of strings.
    #[error("invalid {locale} dictionary: {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
    /// The default locale has no dictionary to fall back to.
    #[error("no dictionary for default locale {0}")]
    MissingDefault(Locale),
}

/// Embedded dictionary sources.
const SOURCES: [(Locale, &str); 4] = [
    (Locale::En, include_str!("../locales/en.json")),
    (Locale::Fr, include_str!("../locales/fr.json")),
    (Locale::Ja, include_str!("../locales/ja.json")),
    (Locale::Zh, include_str!("../locales/zh.json")),
];

/// All loaded dictionaries plus the fallback locale.
#[derive(Debug, Clone)]
pub struct Dictionaries {
    default: Locale,
    by_locale: HashMap<Locale, Arc<Entries>>,
}

impl Dictionaries {
    /// Load the embedded dictionaries.
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded file fails to parse.
    pub fn load(default: Locale) -> Result<Self, DictionaryError> {
        Self::from_sources(default, &SOURCES)
    }

    /// Load dictionaries from explicit JSON sources.
    ///
    /// # Errors
    ///
    /// Returns an error if a source fails to parse or no source is given for
    /// `default`.
    pub fn from_sources(
        default: Locale,
        sources: &[(Locale, &str)],
    ) -> Result<Self, DictionaryError> {
        let mut by_locale = HashMap::with_capacity(sources.len());
        for &(locale, json) in sources {
            let entries: Entries = serde_json::from_str(json)
                .map_err(|source| DictionaryError::Parse { locale, source })?;
            by_locale.insert(locale, Arc::new(entries));
        }

        if !by_locale.contains_key(&default) {
            return Err(DictionaryError::MissingDefault(default));
        }

        Ok(Self { default, by_locale })
    }

    /// The dictionary for `locale`, or the default one if it was not loaded.
    #[must_use]
    pub fn lookup(&self, locale: Locale) -> Dictionary {
        let fallback = self.default_entries();
        let entries = self
            .by_locale
            .get(&locale)
            .map_or_else(|| Arc::clone(&fallback), Arc::clone);
        Dictionary {
            locale: if self.by_locale.contains_key(&locale) {
                locale
            } else {
                self.default
            },
            entries,
            fallback,
        }
    }

    /// Keys present in the default dictionary but missing from `locale`, sorted.
    #[must_use]
    pub fn missing_keys(&self, locale: Locale) -> Vec<&str> {
        let default = self.default_entries_ref();
        match self.by_locale.get(&locale) {
            Some(entries) => default
                .keys()
                .filter(|key| !entries.contains_key(*key))
                .map(String::as_str)
                .collect(),
            None => default.keys().map(String::as_str).collect(),
        }
    }

    fn default_entries(&self) -> Arc<Entries> {
        self.by_locale
            .get(&self.default)
            .map_or_else(|| Arc::new(Entries::new()), Arc::clone)
    }

    fn default_entries_ref(&self) -> &Entries {
        static EMPTY: Entries = BTreeMap::new();
        self.by_locale
            .get(&self.default)
            .map_or(&EMPTY, |entries| &**entries)
    }
}

/// UI strings for one locale.
///
/// Cheap to clone; templates hold one and call [`Dictionary::get`].
#[derive(Debug, Clone)]
pub struct Dictionary {
    locale: Locale,
    entries: Arc<Entries>,
    fallback: Arc<Entries>,
}

impl Dictionary {
    /// The locale these strings are for.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Text for `key`, falling back to the default locale, then to `key`.
    #[must_use]
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries
            .get(key)
            .or_else(|| self.fallback.get(key))
            .map_or(key, String::as_str)
    }

    /// Text for `key` with `{name}` placeholders replaced.
    #[must_use]
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.get(key).to_owned(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }
}
