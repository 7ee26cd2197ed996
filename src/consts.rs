/// Smallest valid year (inclusive)
pub const MIN_YEAR: u32 = 1;

/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u32 = 1;

/// Largest day number any month can have
pub const MAX_DAY: u32 = 31;

/// Month number for February
pub const FEBRUARY: u32 = 2;

/// Months in a calendar year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u32 = 400;

/// Date component separator of the canonical `YYYY-MM-DD` form
pub const DATE_SEPARATOR: char = '-';

/// Zero-padded width of the year in the canonical form
pub const YEAR_WIDTH: usize = 4;
/// Zero-padded width of the month in the canonical form
pub const MONTH_WIDTH: usize = 2;
/// Zero-padded width of the day in the canonical form
pub const DAY_WIDTH: usize = 2;

/// Total length of a canonical date string
pub const CANONICAL_LEN: usize = YEAR_WIDTH + 1 + MONTH_WIDTH + 1 + DAY_WIDTH;
