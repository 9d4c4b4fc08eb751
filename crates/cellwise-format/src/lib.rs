//! Locale-aware plain-number rendering.
//!
//! This crate provides two layers:
//! - [`Locale`] definitions carrying the separators and logical literals a
//!   calculation engine needs for text/number coercion.
//! - [`locale`] registry helpers resolving BCP-47-ish locale tags to the
//!   built-in locales, plus [`format_number`]/[`format_number_grouped`] for
//!   rendering `f64` values with locale separators.

pub mod locale;

mod number;

pub use locale::{get_locale, DE_DE, EN_US, ES_ES, FR_FR};
pub use number::{format_number, format_number_grouped};

/// A locale definition used for number coercion and formatting separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// Canonical BCP-47 tag (e.g. `"en-US"`).
    pub id: &'static str,
    /// Decimal separator (e.g. `.` in `en-US`, `,` in many EU locales).
    pub decimal_sep: char,
    /// Thousands separator (e.g. `,` in `en-US`, `.` in `de-DE`).
    pub thousands_sep: char,
    /// Rendering of logical `true` (all built-in locales use `"TRUE"`).
    pub true_literal: &'static str,
    /// Rendering of logical `false` (all built-in locales use `"FALSE"`).
    pub false_literal: &'static str,
}

impl Locale {
    pub const fn en_us() -> Self {
        Self {
            id: "en-US",
            decimal_sep: '.',
            thousands_sep: ',',
            true_literal: "TRUE",
            false_literal: "FALSE",
        }
    }

    pub const fn de_de() -> Self {
        Self {
            id: "de-DE",
            decimal_sep: ',',
            thousands_sep: '.',
            true_literal: "TRUE",
            false_literal: "FALSE",
        }
    }

    /// French (France). Thousands grouping uses U+00A0 NO-BREAK SPACE; some
    /// environments prefer U+202F NARROW NO-BREAK SPACE, but U+00A0 is widely
    /// supported.
    pub const fn fr_fr() -> Self {
        Self {
            id: "fr-FR",
            decimal_sep: ',',
            thousands_sep: '\u{00A0}',
            true_literal: "TRUE",
            false_literal: "FALSE",
        }
    }

    pub const fn es_es() -> Self {
        Self {
            id: "es-ES",
            decimal_sep: ',',
            thousands_sep: '.',
            true_literal: "TRUE",
            false_literal: "FALSE",
        }
    }

    /// Render a boolean with this locale's logical literals.
    pub const fn logical_literal(&self, value: bool) -> &'static str {
        if value {
            self.true_literal
        } else {
            self.false_literal
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}
