//! POSIX locale to TMDB language tag conversion.

/// Used when no locale is configured or it cannot be read.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Converts a locale such as `en_US.UTF-8` into `en-US`.
///
/// A bare language (`hu`) is paired with its upper-cased self (`hu-HU`).
/// Returns `None` for `C`, `POSIX` and empty values.
#[must_use]
pub fn tmdb_language_tag(locale: &str) -> Option<String> {
    let identifier = locale
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    if identifier.is_empty() || identifier == "C" || identifier == "POSIX" {
        return None;
    }

    if identifier.contains('_') {
        Some(identifier.replace('_', "-"))
    } else {
        Some(format!("{identifier}-{}", identifier.to_uppercase()))
    }
}
