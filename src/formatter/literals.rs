use std::mem;
use std::sync::OnceLock;

use crate::constants::MAX_FRACTION_DIGITS;

/// Separator literals and field widths extracted from a canonical duration
/// pattern, driving the standard layouts.
///
/// The six literals are positional: start (usually the sign), day/hour,
/// hour/minute, minute/second and second/fraction separators, and a trailing
/// end literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatLiterals {
    literals: [String; 6],
    pub dd: usize,
    pub hh: usize,
    pub mm: usize,
    pub ss: usize,
    pub ff: usize,
    app_compat_literal: String,
}

static POSITIVE_INVARIANT: OnceLock<FormatLiterals> = OnceLock::new();
static NEGATIVE_INVARIANT: OnceLock<FormatLiterals> = OnceLock::new();

impl FormatLiterals {
    pub fn start(&self) -> &str {
        &self.literals[0]
    }

    pub fn day_hour_sep(&self) -> &str {
        &self.literals[1]
    }

    pub fn hour_minute_sep(&self) -> &str {
        &self.literals[2]
    }

    pub fn minute_second_sep(&self) -> &str {
        &self.literals[3]
    }

    pub fn second_fraction_sep(&self) -> &str {
        &self.literals[4]
    }

    pub fn end(&self) -> &str {
        &self.literals[5]
    }

    /// Minute/second and second/fraction separators joined, kept for
    /// compatibility with consumers that match on the combined literal.
    pub fn app_compat_literal(&self) -> &str {
        &self.app_compat_literal
    }

    /// One of the two fixed invariant literal sets, shared process-wide.
    pub fn invariant(is_negative: bool) -> &'static FormatLiterals {
        if is_negative {
            NEGATIVE_INVARIANT.get_or_init(|| Self::init_invariant(true))
        } else {
            POSITIVE_INVARIANT.get_or_init(|| Self::init_invariant(false))
        }
    }

    fn init_invariant(is_negative: bool) -> Self {
        let sign = if is_negative { "-" } else { "" };
        Self {
            literals: [
                sign.to_string(),
                ".".to_string(),
                ":".to_string(),
                ":".to_string(),
                ".".to_string(),
                String::new(),
            ],
            dd: 2,
            hh: 2,
            mm: 2,
            ss: 2,
            ff: MAX_FRACTION_DIGITS,
            app_compat_literal: ":.".to_string(),
        }
    }

    /// Decomposes a locale's canonical pattern into separator literals and
    /// field widths.
    ///
    /// Canonical patterns place their fields in the fixed order
    /// `d h m s f|F`; a pattern violating that order is malformed locale
    /// data, asserted in debug builds and clamped in release builds. When
    /// `use_invariant_widths` is set, observed widths are replaced by the
    /// invariant ones so the rendered layout stays fixed width.
    pub fn from_pattern(pattern: &str, use_invariant_widths: bool) -> Self {
        let mut literals: [String; 6] = Default::default();
        let (mut dd, mut hh, mut mm, mut ss, mut ff) = (0usize, 0, 0, 0, 0);

        let mut buffer = String::new();
        let mut in_quote = false;
        let mut quote = '\'';
        let mut field = 0usize;
        let mut chars = pattern.chars();

        while let Some(ch) = chars.next() {
            match ch {
                '\'' | '"' if in_quote && quote == ch => in_quote = false,
                '\'' | '"' if !in_quote => {
                    quote = ch;
                    in_quote = true;
                }
                '\\' if !in_quote => {
                    // The backslash and the character it escapes contribute
                    // nothing to the literals.
                    chars.next();
                }
                'd' if !in_quote => {
                    advance_field(&mut field, 1, &mut literals, &mut buffer);
                    dd += 1;
                }
                'h' if !in_quote => {
                    advance_field(&mut field, 2, &mut literals, &mut buffer);
                    hh += 1;
                }
                'm' if !in_quote => {
                    advance_field(&mut field, 3, &mut literals, &mut buffer);
                    mm += 1;
                }
                's' if !in_quote => {
                    advance_field(&mut field, 4, &mut literals, &mut buffer);
                    ss += 1;
                }
                'f' | 'F' if !in_quote => {
                    advance_field(&mut field, 5, &mut literals, &mut buffer);
                    ff += 1;
                }
                _ => buffer.push(ch),
            }
        }

        debug_assert!(field == 5, "canonical duration pattern is missing fields");
        literals[5] = buffer;

        if use_invariant_widths {
            dd = 2;
            hh = 2;
            mm = 2;
            ss = 2;
            ff = MAX_FRACTION_DIGITS;
        } else {
            // Widths come from trusted locale data; out-of-range counts are
            // clamped to the defaults rather than rejected.
            if dd < 1 || dd > 2 {
                dd = 2;
            }
            if hh < 1 || hh > 2 {
                hh = 2;
            }
            if mm < 1 || mm > 2 {
                mm = 2;
            }
            if ss < 1 || ss > 2 {
                ss = 2;
            }
            if ff < 1 || ff > MAX_FRACTION_DIGITS {
                ff = MAX_FRACTION_DIGITS;
            }
        }

        let app_compat_literal = format!("{}{}", literals[3], literals[4]);
        Self {
            literals,
            dd,
            hh,
            mm,
            ss,
            ff,
            app_compat_literal,
        }
    }
}

/// Moves the scanner to `target`, committing the pending separator buffer to
/// the slot just before the field being entered.
fn advance_field(field: &mut usize, target: usize, literals: &mut [String; 6], buffer: &mut String) {
    debug_assert!(
        *field == target || *field + 1 == target,
        "field out of order in canonical duration pattern"
    );
    if *field < target {
        literals[target - 1] = mem::take(buffer);
        *field = target;
    }
}
