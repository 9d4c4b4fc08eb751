//! Built-in locale registry and BCP-47-ish tag lookup.

use crate::Locale;

pub static EN_US: Locale = Locale::en_us();

pub static DE_DE: Locale = Locale::de_de();

pub static FR_FR: Locale = Locale::fr_fr();

pub static ES_ES: Locale = Locale::es_es();

fn normalize_locale_id(id: &str) -> Option<&'static str> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Normalize common locale tag spellings:
    // - treat `-` and `_` as equivalent
    // - match case-insensitively
    let mut key = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        let ch = match ch {
            '_' => '-',
            other => other,
        };
        key.push(ch.to_ascii_lowercase());
    }

    // Handle POSIX locale tags like `en_US.UTF-8` or `de_DE@euro` by dropping
    // the encoding / modifier suffix.
    if let Some(idx) = key.find('.') {
        key.truncate(idx);
    }
    if let Some(idx) = key.find('@') {
        key.truncate(idx);
    }

    match key.as_str() {
        "en-us" | "en" => Some("en-US"),
        "de-de" | "de" => Some("de-DE"),
        "fr-fr" | "fr" => Some("fr-FR"),
        "es-es" | "es" => Some("es-ES"),
        _ => {
            // Fall back to the language part for region-specific variants we
            // don't explicitly list (e.g. `fr-CA`, `de-AT`, `en-AU`).
            let lang = key.split('-').next().unwrap_or("");
            match lang {
                "en" => Some("en-US"),
                "de" => Some("de-DE"),
                "fr" => Some("fr-FR"),
                "es" => Some("es-ES"),
                _ => None,
            }
        }
    }
}

pub fn get_locale(id: &str) -> Option<&'static Locale> {
    match normalize_locale_id(id)? {
        "en-US" => Some(&EN_US),
        "de-DE" => Some(&DE_DE),
        "fr-FR" => Some(&FR_FR),
        "es-ES" => Some(&ES_ES),
        _ => None,
    }
}
