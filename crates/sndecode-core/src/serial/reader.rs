use std::ops::Range;

use super::error::FormatIssue;

/// Bounded access to a normalised serial (upper-case ASCII alphanumerics).
pub struct SerialReader<'a> {
    serial: &'a str,
}

impl<'a> SerialReader<'a> {
    pub fn new(serial: &'a str) -> Self {
        Self { serial }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), FormatIssue> {
        if self.serial.len() < needed {
            return Err(FormatIssue::Truncated {
                needed,
                actual: self.serial.len(),
            });
        }
        Ok(())
    }

    pub fn read_char(&self, offset: usize) -> Result<char, FormatIssue> {
        self.serial
            .as_bytes()
            .get(offset)
            .map(|&byte| byte as char)
            .ok_or(FormatIssue::Truncated {
                needed: offset + 1,
                actual: self.serial.len(),
            })
    }

    pub fn read_slice(&self, range: Range<usize>) -> Result<&'a str, FormatIssue> {
        self.serial
            .get(range.clone())
            .ok_or(FormatIssue::Truncated {
                needed: range.end,
                actual: self.serial.len(),
            })
    }

    /// Everything from `offset` to the end.
    pub fn read_tail(&self, offset: usize) -> Result<&'a str, FormatIssue> {
        self.read_slice(offset..self.serial.len().max(offset))
    }

    pub fn read_digit(&self, offset: usize) -> Result<u8, FormatIssue> {
        let ch = self.read_char(offset)?;
        ch.to_digit(10)
            .map(|digit| digit as u8)
            .ok_or(FormatIssue::YearNotDigit { ch })
    }

    pub fn read_decimal(&self, range: Range<usize>) -> Result<u8, FormatIssue> {
        let code = self.read_slice(range)?;
        if code.is_empty() || !code.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(FormatIssue::WeekNotNumeric {
                code: code.to_string(),
            });
        }
        code.parse().map_err(|_| FormatIssue::WeekNotNumeric {
            code: code.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SerialReader;
    use crate::serial::error::FormatIssue;

    #[test]
    fn read_slice_in_bounds() {
        let reader = SerialReader::new("C02051AABCD");
        assert_eq!(reader.read_slice(0..2).unwrap(), "C0");
        assert_eq!(reader.read_tail(8).unwrap(), "BCD");
    }

    #[test]
    fn read_past_end_is_truncated() {
        let reader = SerialReader::new("ABC");
        assert_eq!(
            reader.read_char(3).unwrap_err(),
            FormatIssue::Truncated {
                needed: 4,
                actual: 3
            }
        );
        assert!(reader.read_slice(1..5).is_err());
        assert!(reader.require_len(4).is_err());
        assert!(reader.require_len(3).is_ok());
    }

    #[test]
    fn read_tail_past_end_is_truncated() {
        let reader = SerialReader::new("ABC");
        assert_eq!(reader.read_tail(3).unwrap(), "");
        assert!(reader.read_tail(5).is_err());
    }

    #[test]
    fn read_digit_rejects_letters() {
        let reader = SerialReader::new("A7");
        assert_eq!(reader.read_digit(1).unwrap(), 7);
        assert_eq!(
            reader.read_digit(0).unwrap_err(),
            FormatIssue::YearNotDigit { ch: 'A' }
        );
    }

    #[test]
    fn read_decimal_two_digits() {
        let reader = SerialReader::new("X05L5");
        assert_eq!(reader.read_decimal(1..3).unwrap(), 5);
        assert_eq!(
            reader.read_decimal(3..5).unwrap_err(),
            FormatIssue::WeekNotNumeric {
                code: "L5".to_string()
            }
        );
    }
}
