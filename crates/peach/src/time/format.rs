//! Format capability: textual parse/render for the time variants.

use crate::error::{Error, Result};
use crate::time::calendar::{Date, Datetime, Timestamp};

pub trait Format {
    fn format_date(&self, d: &Date) -> String;
    fn format_datetime(&self, d: &Datetime) -> String;
    fn format_timestamp(&self, d: &Timestamp) -> String;

    fn parse_date(&self, text: &str) -> Result<Date>;
    fn parse_datetime(&self, text: &str) -> Result<Datetime>;
    fn parse_timestamp(&self, text: &str) -> Result<Timestamp>;
}

/// The default fixed-width layout: `"YYYY-MM-DD"`, `"YYYY-MM-DD hh:mm"`,
/// `"YYYY-MM-DD hh:mm:ss"`, zero-padded. On parse, any single non-digit
/// ASCII character is accepted as the separator between the date and
/// time parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct W3cDatetimeFormat;

impl Format for W3cDatetimeFormat {
    fn format_date(&self, d: &Date) -> String {
        d.to_string()
    }

    fn format_datetime(&self, d: &Datetime) -> String {
        d.to_string()
    }

    fn format_timestamp(&self, d: &Timestamp) -> String {
        d.to_string()
    }

    fn parse_date(&self, text: &str) -> Result<Date> {
        let mut s = Scanner::new(text);
        let parsed = s.date_part().filter(|_| s.at_end());
        match parsed {
            Some((y, m, d)) => Ok(Date::new(y, m, d)),
            None => Err(malformed(text, "YYYY-MM-DD")),
        }
    }

    fn parse_datetime(&self, text: &str) -> Result<Datetime> {
        let mut s = Scanner::new(text);
        let parsed = s.datetime_part().filter(|_| s.at_end());
        match parsed {
            Some((y, mo, d, h, mi)) => Ok(Datetime::new(y, mo, d, h, mi)),
            None => Err(malformed(text, "YYYY-MM-DD hh:mm")),
        }
    }

    fn parse_timestamp(&self, text: &str) -> Result<Timestamp> {
        let mut s = Scanner::new(text);
        let parsed = s.timestamp_part().filter(|_| s.at_end());
        match parsed {
            Some((y, mo, d, h, mi, sec)) => Ok(Timestamp::new(y, mo, d, h, mi, sec)),
            None => Err(malformed(text, "YYYY-MM-DD hh:mm:ss")),
        }
    }
}

fn malformed(text: &str, layout: &str) -> Error {
    Error::InvalidArgument(format!("cannot parse '{text}' as {layout}"))
}

/// Fixed-width scanner over the ASCII layout. Returns `None` on any
/// mismatch; the caller turns that into an `InvalidArgument`.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Scanner<'a> {
        Scanner {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn number(&mut self, width: usize) -> Option<i64> {
        let end = self.pos.checked_add(width)?;
        let digits = self.bytes.get(self.pos..end)?;
        if !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }
        self.pos = end;
        Some(
            digits
                .iter()
                .fold(0i64, |acc, d| acc * 10 + i64::from(d - b'0')),
        )
    }

    fn expect(&mut self, byte: u8) -> Option<()> {
        if self.bytes.get(self.pos) == Some(&byte) {
            self.pos += 1;
            Some(())
        } else {
            None
        }
    }

    /// One non-digit ASCII character, e.g. space or 'T'.
    fn separator(&mut self) -> Option<()> {
        match self.bytes.get(self.pos) {
            Some(b) if b.is_ascii() && !b.is_ascii_digit() => {
                self.pos += 1;
                Some(())
            }
            _ => None,
        }
    }

    fn at_end(&self) -> bool {
        self.pos == self.bytes.len()
    }

    fn date_part(&mut self) -> Option<(i64, i64, i64)> {
        let year = self.number(4)?;
        self.expect(b'-')?;
        let month = self.number(2)?;
        self.expect(b'-')?;
        let date = self.number(2)?;
        Some((year, month, date))
    }

    fn datetime_part(&mut self) -> Option<(i64, i64, i64, i64, i64)> {
        let (year, month, date) = self.date_part()?;
        self.separator()?;
        let hour = self.number(2)?;
        self.expect(b':')?;
        let minute = self.number(2)?;
        Some((year, month, date, hour, minute))
    }

    fn timestamp_part(&mut self) -> Option<(i64, i64, i64, i64, i64, i64)> {
        let (year, month, date, hour, minute) = self.datetime_part()?;
        self.expect(b':')?;
        let second = self.number(2)?;
        Some((year, month, date, hour, minute, second))
    }
}
