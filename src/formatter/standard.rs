use crate::duration::Duration;

use super::literals::FormatLiterals;
use super::pad::{trim_trailing_zeros, truncate_fraction, zero_pad};

/// How much of the standard layout is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completeness {
    /// `[-][d.]hh:mm:ss[.fffffff]`: leading day field only when non-zero.
    /// Locale-derived layouts strip trailing fraction zeros; the invariant
    /// layouts emit the full fraction width whenever it is non-zero.
    Minimum,
    /// `[-]d.hh:mm:ss.fffffff`: day field always present, fraction at full
    /// width.
    Full,
}

/// Renders one of the canonical layouts.
///
/// Invariant layouts use the shared literal constants and ignore `pattern`;
/// otherwise the literals are extracted fresh from the locale's canonical
/// pattern, with fixed invariant widths when the layout is `Full`.
pub fn format_standard(
    value: &Duration,
    is_invariant: bool,
    pattern: &str,
    completeness: Completeness,
) -> String {
    let extracted;
    let literal: &FormatLiterals = if is_invariant {
        FormatLiterals::invariant(value.is_negative())
    } else {
        extracted = FormatLiterals::from_pattern(pattern, completeness == Completeness::Full);
        &extracted
    };

    let fraction = truncate_fraction(value.fraction_ticks(), literal.ff);

    let mut result = String::new();
    result.push_str(literal.start());
    if completeness == Completeness::Full || value.days() != 0 {
        // The day count carries no leading zeros in the standard layouts.
        result.push_str(&value.days().to_string());
        result.push_str(literal.day_hour_sep());
    }
    result.push_str(&zero_pad(u64::from(value.hours()), literal.hh));
    result.push_str(literal.hour_minute_sep());
    result.push_str(&zero_pad(u64::from(value.minutes()), literal.mm));
    result.push_str(literal.minute_second_sep());
    result.push_str(&zero_pad(u64::from(value.seconds()), literal.ss));
    if !is_invariant && completeness == Completeness::Minimum {
        let (trimmed, digits) = trim_trailing_zeros(fraction, literal.ff);
        if digits > 0 {
            result.push_str(literal.second_fraction_sep());
            result.push_str(&zero_pad(trimmed, digits));
        }
    } else if completeness == Completeness::Full || fraction != 0 {
        result.push_str(literal.second_fraction_sep());
        result.push_str(&zero_pad(fraction, literal.ff));
    }
    result.push_str(literal.end());
    result
}
