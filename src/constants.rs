/// A tick is 100 nanoseconds; seven decimal digits fully represent the
/// sub-second remainder of a duration.
pub const MAX_FRACTION_DIGITS: usize = 7;

pub const TICKS_PER_MILLISECOND: i64 = 10_000;
pub const TICKS_PER_SECOND: i64 = TICKS_PER_MILLISECOND * 1_000;
pub const TICKS_PER_MINUTE: i64 = TICKS_PER_SECOND * 60;
pub const TICKS_PER_HOUR: i64 = TICKS_PER_MINUTE * 60;
pub const TICKS_PER_DAY: i64 = TICKS_PER_HOUR * 24;

/// Powers of ten up to the full fraction width, indexed by exponent.
pub const POW10: [u64; MAX_FRACTION_DIGITS + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
];
