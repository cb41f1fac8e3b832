//! Offline decoder for manufacturer serial numbers.
//!
//! Two historical layouts are supported and told apart by length:
//! - 11 characters (legacy): location, decimal year digit, decimal week.
//! - 12 characters (modern): location, semester code, week-in-half code,
//!   both looked up in exclusion-filtered alphabets.
//!
//! Every serial carries an identifier at `[5, 8)` and a model code from
//! offset 8 onward, independent of the layout. Decoding is a pure function
//! of the input; the two code tables are constant data.
//!
//! # Examples
//! ```
//! use sndecode_core::decode;
//!
//! let serial = decode("C02051AABCD")?;
//! assert_eq!(serial.location(), "C0");
//! assert_eq!((serial.year(), serial.week()), (2002, 5));
//! # Ok::<(), sndecode_core::ValidationError>(())
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

mod serial;

pub use serial::{
    CodeTable, ErrorKind, FormatIssue, SEMESTER_TABLE, SerialDecoder, SerialFormat,
    ValidationError, WEEK_TABLE, decode,
};

/// Year and week of manufacture; orders chronologically.
///
/// # Examples
/// ```
/// use sndecode_core::ManufactureDate;
///
/// let early = ManufactureDate { year: 2003, week: 52 };
/// let late = ManufactureDate { year: 2004, week: 1 };
/// assert!(early < late);
/// assert_eq!(late.to_string(), "2004-W01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ManufactureDate {
    pub year: u16,
    pub week: u8,
}

impl fmt::Display for ManufactureDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

/// A successfully decoded serial number.
///
/// Immutable once built. `Display` yields the normalised input verbatim.
/// Equality is structural; use [`DecodedSerial::manufactured`] or
/// [`DecodedSerial::cmp_manufactured`] to order by manufacture date.
///
/// # Examples
/// ```
/// use sndecode_core::DecodedSerial;
///
/// let mut serials: Vec<DecodedSerial> = ["W8953XYZABC", "C02051AABCD", "C02031AABCD"]
///     .iter()
///     .map(|raw| raw.parse())
///     .collect::<Result<_, _>>()?;
/// serials.sort_by_key(DecodedSerial::manufactured);
/// let order: Vec<String> = serials.iter().map(ToString::to_string).collect();
/// assert_eq!(order, ["C02031AABCD", "C02051AABCD", "W8953XYZABC"]);
/// # Ok::<(), sndecode_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DecodedSerial {
    serial: String,
    format: SerialFormat,
    location: String,
    year: u16,
    week: u8,
    id: String,
    model: String,
}

impl DecodedSerial {
    /// The upper-cased input.
    pub fn as_str(&self) -> &str {
        &self.serial
    }

    pub fn len(&self) -> usize {
        self.serial.len()
    }

    /// Always false: decoded serials have 11 or 12 characters.
    pub fn is_empty(&self) -> bool {
        self.serial.is_empty()
    }

    pub fn format(&self) -> SerialFormat {
        self.format
    }

    /// Manufacturing location code.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Year of manufacture.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Week of manufacture.
    pub fn week(&self) -> u8 {
        self.week
    }

    /// Unique identifier segment.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Model number segment.
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn manufactured(&self) -> ManufactureDate {
        ManufactureDate {
            year: self.year,
            week: self.week,
        }
    }

    /// Compares by year, then week. Location, id and model are ignored.
    pub fn cmp_manufactured(&self, other: &Self) -> Ordering {
        self.manufactured().cmp(&other.manufactured())
    }
}

impl fmt::Display for DecodedSerial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serial)
    }
}

impl AsRef<str> for DecodedSerial {
    fn as_ref(&self) -> &str {
        &self.serial
    }
}

impl FromStr for DecodedSerial {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl TryFrom<&str> for DecodedSerial {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        decode(value)
    }
}
