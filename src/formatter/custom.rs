use crate::duration::Duration;
use crate::parser::model::TokenKind;
use crate::parser::tokenize;

use super::error::FormatterError;
use super::pad::{trim_trailing_zeros, truncate_fraction, zero_pad};

/// Interprets an arbitrary pattern token by token.
///
/// The custom grammar has no sign token, so a negative duration renders as
/// its magnitude.
pub fn format_custom(value: &Duration, pattern: &str) -> Result<String, FormatterError> {
    let tokens = tokenize(pattern)?;

    let mut result = String::new();
    for token in &tokens {
        let count = token.repeat().unwrap_or(1);
        match token.kind {
            TokenKind::Days => result.push_str(&zero_pad(value.days(), count)),
            TokenKind::Hours => result.push_str(&zero_pad(u64::from(value.hours()), count)),
            TokenKind::Minutes => result.push_str(&zero_pad(u64::from(value.minutes()), count)),
            TokenKind::Seconds => result.push_str(&zero_pad(u64::from(value.seconds()), count)),
            TokenKind::Fraction => {
                let truncated = truncate_fraction(value.fraction_ticks(), count);
                result.push_str(&zero_pad(truncated, count));
            }
            TokenKind::FractionOpt => {
                let truncated = truncate_fraction(value.fraction_ticks(), count);
                let (trimmed, digits) = trim_trailing_zeros(truncated, count);
                if digits > 0 {
                    result.push_str(&zero_pad(trimmed, digits));
                }
            }
            TokenKind::Literal => result.push_str(token.text().unwrap_or_default()),
        }
    }
    Ok(result)
}
