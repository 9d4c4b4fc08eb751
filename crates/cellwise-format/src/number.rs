//! Plain-number rendering with locale separators.

use crate::Locale;

/// Format a number the way text coercion renders it: locale decimal
/// separator, no thousands grouping.
///
/// This matches how a calculation engine stringifies numbers for
/// concatenation; grouping separators would not survive a parse back to a
/// number in every locale, so they are reserved for display surfaces
/// ([`format_number_grouped`]).
pub fn format_number(value: f64, locale: &Locale) -> String {
    // Avoid displaying negative zero (can show up after floating point
    // operations).
    if value == 0.0 {
        return "0".to_string();
    }

    let s = value.to_string();

    // Preserve scientific notation as-is except for applying the locale
    // decimal separator to the mantissa.
    if let Some((mantissa, exp)) = split_exponent(&s) {
        let mantissa = apply_decimal_sep(mantissa, locale);
        return format!("{mantissa}{exp}");
    }

    apply_decimal_sep(&s, locale)
}

/// Format a number with thousands grouping for display surfaces.
pub fn format_number_grouped(value: f64, locale: &Locale) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let s = value.to_string();

    if let Some((mantissa, exp)) = split_exponent(&s) {
        let mantissa = group_mantissa(mantissa, locale);
        return format!("{mantissa}{exp}");
    }

    group_mantissa(&s, locale)
}

fn split_exponent(s: &str) -> Option<(&str, &str)> {
    if let Some(idx) = s.find('e') {
        Some((&s[..idx], &s[idx..]))
    } else if let Some(idx) = s.find('E') {
        Some((&s[..idx], &s[idx..]))
    } else {
        None
    }
}

fn apply_decimal_sep(mantissa: &str, locale: &Locale) -> String {
    match mantissa.split_once('.') {
        Some((int_part, frac_part)) => {
            format!("{int_part}{}{frac_part}", locale.decimal_sep)
        }
        None => mantissa.to_string(),
    }
}

fn group_mantissa(mantissa: &str, locale: &Locale) -> String {
    // Handle sign separately so grouping code only sees digits.
    let (sign, unsigned) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    // If the mantissa isn't a plain digit string (NaN/inf), leave unchanged.
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if !int_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return mantissa.to_string();
    }

    let grouped_int = group_thousands(int_part, locale.thousands_sep);

    if frac_part.is_empty() {
        format!("{sign}{grouped_int}")
    } else {
        format!("{sign}{grouped_int}{}{}", locale.decimal_sep, frac_part)
    }
}

fn group_thousands(int_part: &str, sep: char) -> String {
    let bytes = int_part.as_bytes();
    let len = bytes.len();
    if len <= 3 {
        return int_part.to_string();
    }

    let mut out = String::with_capacity(len + len / 3);
    let mut first_group = len % 3;
    if first_group == 0 {
        first_group = 3;
    }

    out.push_str(&int_part[..first_group]);
    let mut idx = first_group;
    while idx < len {
        out.push(sep);
        out.push_str(&int_part[idx..idx + 3]);
        idx += 3;
    }

    out
}
