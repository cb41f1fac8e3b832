use std::ops::Range;

pub const LEGACY_LEN: usize = 11;
pub const MODERN_LEN: usize = 12;

pub const LEGACY_LOCATION_RANGE: Range<usize> = 0..2;
pub const LEGACY_YEAR_OFFSET: usize = 2;
pub const LEGACY_WEEK_RANGE: Range<usize> = 3..5;
pub const LEGACY_BASE_YEAR: u16 = 2000;
pub const LEGACY_MAX_WEEK: u8 = 53;

pub const MODERN_LOCATION_RANGE: Range<usize> = 0..3;
pub const MODERN_SEMESTER_OFFSET: usize = 3;
pub const MODERN_WEEK_OFFSET: usize = 4;
pub const MODERN_BASE_YEAR: u16 = 2010;
pub const WEEKS_PER_SEMESTER: u8 = 26;

// Shared by both formats; the modern layout leaves offsets 3..5 to the date codes.
pub const ID_RANGE: Range<usize> = 5..8;
pub const MODEL_OFFSET: usize = 8;
