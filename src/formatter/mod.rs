use crate::duration::Duration;

pub mod error;
mod custom;
mod literals;
mod locale;
pub mod options;
mod pad;
mod standard;

pub use custom::format_custom;
pub use error::FormatterError;
pub use literals::FormatLiterals;
pub use locale::{Locale, default_locale, get_locale, get_locale_or_default};
pub use options::FormatterOptions;
pub use standard::{Completeness, format_standard};

/// Formats a duration with the invariant locale.
///
/// An empty `spec` selects the compact layout; a single letter selects one
/// of the standard layouts; anything longer is a custom pattern.
pub fn format(value: &Duration, spec: &str) -> Result<String, FormatterError> {
    format_with_options(value, spec, FormatterOptions::default())
}

pub fn format_with_options(
    value: &Duration,
    spec: &str,
    options: FormatterOptions,
) -> Result<String, FormatterError> {
    let spec = if spec.is_empty() { "c" } else { spec };

    let mut chars = spec.chars();
    if let (Some(letter), None) = (chars.next(), chars.next()) {
        return match letter {
            'c' | 't' | 'T' => Ok(format_standard(value, true, spec, Completeness::Minimum)),
            'g' | 'G' => {
                let tag = if options.locale.is_empty() {
                    None
                } else {
                    Some(options.locale.as_str())
                };
                let locale = get_locale_or_default(tag);
                let pattern = if value.is_negative() {
                    locale.full_negative_pattern()
                } else {
                    locale.full_positive_pattern()
                };
                let completeness = if letter == 'g' {
                    Completeness::Minimum
                } else {
                    Completeness::Full
                };
                Ok(format_standard(value, false, pattern, completeness))
            }
            _ => Err(FormatterError::InvalidFormat(spec.to_string())),
        };
    }

    format_custom(value, spec)
}
