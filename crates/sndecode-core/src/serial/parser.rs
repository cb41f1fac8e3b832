use std::fmt;

use log::{debug, trace};
use serde::Serialize;

use super::error::{FormatIssue, ValidationError};
use super::layout;
use super::reader::SerialReader;
use super::tables::{CodeTable, SEMESTER_TABLE, WEEK_TABLE};
use crate::{DecodedSerial, ManufactureDate};

/// The two supported serial layouts, selected by length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SerialFormat {
    /// 11 characters, plain decimal year digit and week number.
    Legacy,
    /// 12 characters, letter-coded semester and week.
    Modern,
}

impl SerialFormat {
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            layout::LEGACY_LEN => Some(SerialFormat::Legacy),
            layout::MODERN_LEN => Some(SerialFormat::Modern),
            _ => None,
        }
    }

    pub fn len(self) -> usize {
        match self {
            SerialFormat::Legacy => layout::LEGACY_LEN,
            SerialFormat::Modern => layout::MODERN_LEN,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SerialFormat::Legacy => "legacy",
            SerialFormat::Modern => "modern",
        }
    }
}

impl fmt::Display for SerialFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decodes serial numbers against the semester and week code tables.
///
/// # Examples
/// ```
/// use sndecode_core::SerialDecoder;
///
/// let decoder = SerialDecoder::new();
/// let serial = decoder.decode("c02051aabcd")?;
/// assert_eq!(serial.to_string(), "C02051AABCD");
/// assert_eq!(serial.year(), 2002);
/// # Ok::<(), sndecode_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SerialDecoder {
    semester: &'static CodeTable,
    week: &'static CodeTable,
}

impl Default for SerialDecoder {
    fn default() -> Self {
        Self::new()
    }
}

struct DateFields<'a> {
    location: &'a str,
    date: ManufactureDate,
}

impl SerialDecoder {
    pub fn new() -> Self {
        Self {
            semester: &SEMESTER_TABLE,
            week: &WEEK_TABLE,
        }
    }

    pub fn semester_table(&self) -> &'static CodeTable {
        self.semester
    }

    pub fn week_table(&self) -> &'static CodeTable {
        self.week
    }

    /// Upper-cases `input` and decodes it. Never returns a partial record.
    pub fn decode(&self, input: &str) -> Result<DecodedSerial, ValidationError> {
        let serial = input.to_ascii_uppercase();
        let result = self.decode_normalized(serial);
        match &result {
            Ok(decoded) => debug!(
                "decoded {} serial {} ({})",
                decoded.format(),
                decoded,
                decoded.manufactured()
            ),
            Err(err) => debug!("rejected serial: {err}"),
        }
        result
    }

    fn decode_normalized(&self, serial: String) -> Result<DecodedSerial, ValidationError> {
        if let Err(issue) = check_charset(&serial) {
            return Err(ValidationError::InvalidFormat { serial, issue });
        }
        let Some(format) = SerialFormat::from_len(serial.len()) else {
            let length = serial.len();
            return Err(ValidationError::UnsupportedFormat { serial, length });
        };
        trace!("serial {serial} uses the {format} layout");

        let reader = SerialReader::new(&serial);
        let fields = match format {
            SerialFormat::Legacy => read_legacy_date(&reader),
            SerialFormat::Modern => self.read_modern_date(&reader),
        }
        .and_then(|fields| {
            let id = reader.read_slice(layout::ID_RANGE)?;
            let model = reader.read_tail(layout::MODEL_OFFSET)?;
            Ok((
                fields.location.to_string(),
                fields.date,
                id.to_string(),
                model.to_string(),
            ))
        });

        match fields {
            Ok((location, date, id, model)) => Ok(DecodedSerial {
                serial,
                format,
                location,
                year: date.year,
                week: date.week,
                id,
                model,
            }),
            Err(issue) => Err(ValidationError::InvalidFormat { serial, issue }),
        }
    }

    fn read_modern_date<'a>(
        &self,
        reader: &SerialReader<'a>,
    ) -> Result<DateFields<'a>, FormatIssue> {
        reader.require_len(layout::MODERN_LEN)?;
        let location = reader.read_slice(layout::MODERN_LOCATION_RANGE)?;

        let code = reader.read_char(layout::MODERN_SEMESTER_OFFSET)?;
        let semester = self
            .semester
            .get(code)
            .ok_or(FormatIssue::UnknownSemesterCode { ch: code })?;

        let code = reader.read_char(layout::MODERN_WEEK_OFFSET)?;
        let week_in_half = self
            .week
            .get(code)
            .ok_or(FormatIssue::UnknownWeekCode { ch: code })?;

        Ok(DateFields {
            location,
            date: ManufactureDate {
                year: layout::MODERN_BASE_YEAR + u16::from(semester / 2),
                week: layout::WEEKS_PER_SEMESTER * (semester % 2) + week_in_half,
            },
        })
    }
}

fn read_legacy_date<'a>(reader: &SerialReader<'a>) -> Result<DateFields<'a>, FormatIssue> {
    reader.require_len(layout::LEGACY_LEN)?;
    let location = reader.read_slice(layout::LEGACY_LOCATION_RANGE)?;
    let year = layout::LEGACY_BASE_YEAR + u16::from(reader.read_digit(layout::LEGACY_YEAR_OFFSET)?);
    let week = reader.read_decimal(layout::LEGACY_WEEK_RANGE)?;
    if !(1..=layout::LEGACY_MAX_WEEK).contains(&week) {
        return Err(FormatIssue::WeekOutOfRange { week });
    }
    Ok(DateFields {
        location,
        date: ManufactureDate { year, week },
    })
}

fn check_charset(serial: &str) -> Result<(), FormatIssue> {
    if serial.is_empty() {
        return Err(FormatIssue::Empty);
    }
    match serial
        .chars()
        .enumerate()
        .find(|(_, ch)| !(ch.is_ascii_uppercase() || ch.is_ascii_digit()))
    {
        Some((index, ch)) => Err(FormatIssue::NonAlphanumeric { ch, index }),
        None => Ok(()),
    }
}

/// Decodes `input` with the default tables.
///
/// # Examples
/// ```
/// use sndecode_core::{SerialFormat, decode};
///
/// let serial = decode("W80C11AB1234")?;
/// assert_eq!(serial.format(), SerialFormat::Modern);
/// assert_eq!(serial.location(), "W80");
/// assert_eq!((serial.year(), serial.week()), (2010, 1));
/// # Ok::<(), sndecode_core::ValidationError>(())
/// ```
pub fn decode(input: &str) -> Result<DecodedSerial, ValidationError> {
    SerialDecoder::new().decode(input)
}

#[cfg(test)]
mod tests {
    use super::{SerialDecoder, SerialFormat, decode};
    use crate::serial::error::{ErrorKind, FormatIssue, ValidationError};

    fn issue(input: &str) -> FormatIssue {
        match decode(input).unwrap_err() {
            ValidationError::InvalidFormat { issue, .. } => issue,
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn format_from_len() {
        assert_eq!(SerialFormat::from_len(11), Some(SerialFormat::Legacy));
        assert_eq!(SerialFormat::from_len(12), Some(SerialFormat::Modern));
        assert_eq!(SerialFormat::from_len(10), None);
        assert_eq!(SerialFormat::Modern.len(), 12);
    }

    #[test]
    fn decode_legacy() {
        let serial = decode("C02051AABCD").unwrap();
        assert_eq!(serial.format(), SerialFormat::Legacy);
        assert_eq!(serial.location(), "C0");
        assert_eq!(serial.year(), 2002);
        assert_eq!(serial.week(), 5);
        assert_eq!(serial.id(), "1AA");
        assert_eq!(serial.model(), "BCD");
    }

    #[test]
    fn decode_legacy_week_bounds() {
        assert_eq!(decode("W8953XYZABC").unwrap().week(), 53);
        assert_eq!(decode("W8901XYZABC").unwrap().week(), 1);
        assert_eq!(
            issue("W8954XYZABC"),
            FormatIssue::WeekOutOfRange { week: 54 }
        );
        assert_eq!(issue("W8900XYZABC"), FormatIssue::WeekOutOfRange { week: 0 });
    }

    #[test]
    fn decode_legacy_rejects_letter_codes() {
        assert_eq!(issue("C0X051AABCD"), FormatIssue::YearNotDigit { ch: 'X' });
        assert_eq!(
            issue("C02L51AABCD"),
            FormatIssue::WeekNotNumeric {
                code: "L5".to_string()
            }
        );
    }

    #[test]
    fn decode_modern_first_half() {
        let serial = decode("W80CC1AB1234").unwrap();
        assert_eq!(serial.format(), SerialFormat::Modern);
        assert_eq!(serial.location(), "W80");
        assert_eq!(serial.year(), 2010);
        assert_eq!(serial.week(), 10);
        assert_eq!(serial.id(), "1AB");
        assert_eq!(serial.model(), "1234");
    }

    #[test]
    fn decode_modern_second_half() {
        // D = semester 1 -> 2010, second half; Y = 27
        let serial = decode("C07DY0000000").unwrap();
        assert_eq!(serial.year(), 2010);
        assert_eq!(serial.week(), 53);

        // Z = semester 19 -> 2019, second half; 1 = 1
        let serial = decode("C07Z10000000").unwrap();
        assert_eq!(serial.year(), 2019);
        assert_eq!(serial.week(), 27);
    }

    #[test]
    fn decode_modern_rejects_unknown_codes() {
        assert_eq!(
            issue("C07A10000000"),
            FormatIssue::UnknownSemesterCode { ch: 'A' }
        );
        assert_eq!(
            issue("C07C00000000"),
            FormatIssue::UnknownWeekCode { ch: '0' }
        );
        assert_eq!(
            issue("C07CS0000000"),
            FormatIssue::UnknownWeekCode { ch: 'S' }
        );
    }

    #[test]
    fn decode_rejects_non_alphanumeric() {
        assert_eq!(
            issue("C02-51AABCD"),
            FormatIssue::NonAlphanumeric { ch: '-', index: 3 }
        );
        assert_eq!(issue(""), FormatIssue::Empty);
        assert_eq!(issue("é"), FormatIssue::NonAlphanumeric { ch: 'é', index: 0 });
    }

    #[test]
    fn charset_checked_before_length() {
        let err = decode("a b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert_eq!(err.serial(), "A B");
    }

    #[test]
    fn decode_rejects_other_lengths() {
        let err = decode("c0205").unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedFormat {
                serial: "C0205".to_string(),
                length: 5
            }
        );
    }

    #[test]
    fn decoder_exposes_tables() {
        let decoder = SerialDecoder::default();
        assert_eq!(decoder.semester_table().len(), 20);
        assert_eq!(decoder.week_table().len(), 27);
    }
}
