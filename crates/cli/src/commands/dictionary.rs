//! Dictionary completeness check.

use std::fmt::Write;

use tracing::{info, warn};
use xyra_core::{Dictionaries, Locale};

use super::CliError;

/// Report keys present in the default locale but missing elsewhere.
///
/// # Errors
///
/// Returns `CliError::MissingTranslations` if any locale is incomplete, or
/// `CliError::Dictionary` if the embedded files fail to parse.
pub fn check() -> Result<String, CliError> {
    report(&Dictionaries::load(Locale::default())?)
}

fn report(dictionaries: &Dictionaries) -> Result<String, CliError> {
    let mut out = String::new();
    let mut missing_total = 0;

    for locale in Locale::ALL {
        let missing = dictionaries.missing_keys(locale);
        if missing.is_empty() {
            let _ = writeln!(out, "{locale}: ok");
            continue;
        }

        warn!(%locale, missing = missing.len(), "Locale is missing translations");
        missing_total += missing.len();
        let _ = writeln!(out, "{locale}: {} missing", missing.len());
        for key in missing {
            let _ = writeln!(out, "  - {key}");
        }
    }

    if missing_total > 0 {
        return Err(CliError::MissingTranslations {
            count: missing_total,
            report: out.trim_end().to_string(),
        });
    }

    info!("All locales complete");

    Ok(out.trim_end().to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dictionaries_pass() {
        let out = check().unwrap();
        assert_eq!(out.lines().count(), 4);
        assert!(out.lines().all(|line| line.ends_with(": ok")));
    }

    #[test]
    fn test_missing_keys_fail() {
        let dictionaries = Dictionaries::from_sources(
            Locale::En,
            &[
                (Locale::En, r#"{"a": "A", "b": "B"}"#),
                (Locale::Fr, r#"{"a": "A"}"#),
                (Locale::Ja, r#"{"a": "A", "b": "B"}"#),
                (Locale::Zh, r#"{"a": "A", "b": "B"}"#),
            ],
        )
        .unwrap();

        let err = report(&dictionaries).unwrap_err();
        assert!(matches!(err, CliError::MissingTranslations { count: 1, ref report } if report.contains("  - b")));
    }
}
