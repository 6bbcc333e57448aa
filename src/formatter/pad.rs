use crate::constants::{MAX_FRACTION_DIGITS, POW10};

/// Left-pads `value` with zeros to at least `width` digits.
pub fn zero_pad(value: u64, width: usize) -> String {
    format!("{value:0width$}")
}

/// Keeps the `digits` most significant digits of a 7-digit fraction.
pub fn truncate_fraction(fraction_ticks: u32, digits: usize) -> u64 {
    u64::from(fraction_ticks) / POW10[MAX_FRACTION_DIGITS - digits]
}

/// Drops trailing zero digits, returning the remaining value and its
/// effective digit count (zero when nothing significant remains).
pub fn trim_trailing_zeros(mut fraction: u64, mut digits: usize) -> (u64, usize) {
    while digits > 0 && fraction % 10 == 0 {
        fraction /= 10;
        digits -= 1;
    }
    (fraction, digits)
}
