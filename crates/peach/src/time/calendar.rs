//! The `Date` / `Datetime` / `Timestamp` variants and cross-variant
//! comparison.
//!
//! Each variant is a thin wrapper over the shared field-set engine in
//! [`fields`](crate::time::fields): constructors normalize immediately,
//! and every field-changing operation returns a new instance. Setting or
//! adding to a field the variant does not carry, or a name that does not
//! resolve to a field at all, is a no-op.

use core::cmp::Ordering;
use core::fmt;

use crate::error::Result;
use crate::time::clock::{Clock, SystemClock};
use crate::time::fields::{self, days_in_month, Field, FieldSet, TimeKind};
use crate::time::format::{Format, W3cDatetimeFormat};

/// Capability of exposing named integer time fields. Comparison queries
/// this instead of sniffing concrete types, so any time-like value can
/// participate.
pub trait Time {
    fn kind(&self) -> TimeKind;

    /// Value of a field, `None` when this variant does not carry it.
    fn field(&self, field: Field) -> Option<i64>;

    /// Field access by (permissive) name; unknown names yield `None`.
    fn get(&self, name: &str) -> Option<i64> {
        Field::lookup(name).and_then(|f| self.field(f))
    }

    fn before(&self, other: &dyn Time) -> bool
    where
        Self: Sized,
    {
        compare(self, other) == Ordering::Less
    }

    fn after(&self, other: &dyn Time) -> bool
    where
        Self: Sized,
    {
        compare(self, other) == Ordering::Greater
    }
}

/// Field-wise comparison, coarse to fine, over the fields both sides
/// carry; a field missing on either side is skipped. Equal shared fields
/// are broken by variant rank, so a `Date` orders strictly before a
/// `Datetime` or `Timestamp` of the same day.
pub fn compare(a: &dyn Time, b: &dyn Time) -> Ordering {
    for field in Field::ALL {
        if let (Some(x), Some(y)) = (a.field(field), b.field(field)) {
            if x != y {
                return x.cmp(&y);
            }
        }
    }
    a.kind().cmp(&b.kind())
}

fn apply<'a, I>(kind: TimeKind, mut fields: FieldSet, entries: I) -> FieldSet
where
    I: IntoIterator<Item = (&'a str, i64)>,
{
    let mut touched = false;
    for (name, value) in entries {
        if let Some(field) = Field::lookup(name) {
            if kind.has(field) {
                fields.set(field, value);
                touched = true;
            }
        }
    }
    if touched {
        fields.adjust(kind);
    }
    fields
}

/// A calendar day: year, month and day-of-month fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i64,
    month: i64,
    date: i64,
}

impl Date {
    pub fn new(year: i64, month: i64, date: i64) -> Date {
        let mut fields = FieldSet::default();
        fields.set(Field::Year, year);
        fields.set(Field::Month, month);
        fields.set(Field::Date, date);
        fields.adjust(TimeKind::Date);
        Date::from_fields(&fields)
    }

    /// Today according to the system clock.
    pub fn now() -> Date {
        Date::now_with(&SystemClock)
    }

    /// Today according to the given clock.
    pub fn now_with(clock: &dyn Clock) -> Date {
        clock.timestamp().to_date()
    }

    /// Parses `"YYYY-MM-DD"` with the default format.
    pub fn parse(text: &str) -> Result<Date> {
        W3cDatetimeFormat.parse_date(text)
    }

    pub fn parse_with(text: &str, format: &dyn Format) -> Result<Date> {
        format.parse_date(text)
    }

    fn from_fields(fields: &FieldSet) -> Date {
        Date {
            year: fields.get(Field::Year),
            month: fields.get(Field::Month),
            date: fields.get(Field::Date),
        }
    }

    fn fields(&self) -> FieldSet {
        let mut fields = FieldSet::default();
        fields.set(Field::Year, self.year);
        fields.set(Field::Month, self.month);
        fields.set(Field::Date, self.date);
        fields
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> i64 {
        self.month
    }

    pub fn date(&self) -> i64 {
        self.date
    }

    /// New instance with one field replaced, then normalized.
    pub fn set(&self, name: &str, value: i64) -> Date {
        Date::from_fields(&apply(TimeKind::Date, self.fields(), [(name, value)]))
    }

    pub fn add(&self, name: &str, delta: i64) -> Date {
        match self.get(name) {
            Some(current) => self.set(name, current + delta),
            None => *self,
        }
    }

    /// Replaces several fields at once and normalizes the result in a
    /// single pass.
    pub fn set_all<'a, I>(&self, entries: I) -> Date
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        Date::from_fields(&apply(TimeKind::Date, self.fields(), entries))
    }

    /// Weekday index 0-6, Sunday is 0.
    pub fn day_of_week(&self) -> i64 {
        fields::day_of_week(self.year, self.month, self.date)
    }

    pub fn is_leap_year(&self) -> bool {
        fields::is_leap_year(self.year)
    }

    /// Number of days in this instance's month.
    pub fn date_count(&self) -> i64 {
        days_in_month(self.year, self.month)
    }

    pub fn to_date(&self) -> Date {
        *self
    }

    /// Widens to a `Datetime` at 00:00.
    pub fn to_datetime(&self) -> Datetime {
        Datetime::new(self.year, self.month, self.date, 0, 0)
    }

    /// Widens to a `Timestamp` at 00:00:00.
    pub fn to_timestamp(&self) -> Timestamp {
        Timestamp::new(self.year, self.month, self.date, 0, 0, 0)
    }

    pub fn format_with(&self, format: &dyn Format) -> String {
        format.format_date(self)
    }
}

impl Time for Date {
    fn kind(&self) -> TimeKind {
        TimeKind::Date
    }

    fn field(&self, field: Field) -> Option<i64> {
        match field {
            Field::Year => Some(self.year),
            Field::Month => Some(self.month),
            Field::Date => Some(self.date),
            _ => None,
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.date)
    }
}

/// A calendar day plus wall-clock hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Datetime {
    year: i64,
    month: i64,
    date: i64,
    hour: i64,
    minute: i64,
}

impl Datetime {
    pub fn new(year: i64, month: i64, date: i64, hour: i64, minute: i64) -> Datetime {
        let mut fields = FieldSet::default();
        fields.set(Field::Year, year);
        fields.set(Field::Month, month);
        fields.set(Field::Date, date);
        fields.set(Field::Hour, hour);
        fields.set(Field::Minute, minute);
        fields.adjust(TimeKind::Datetime);
        Datetime::from_fields(&fields)
    }

    /// The current minute according to the system clock.
    pub fn now() -> Datetime {
        Datetime::now_with(&SystemClock)
    }

    pub fn now_with(clock: &dyn Clock) -> Datetime {
        clock.timestamp().to_datetime()
    }

    /// Parses `"YYYY-MM-DD hh:mm"` with the default format. Any single
    /// non-digit ASCII character is accepted as the separator between
    /// the date and time parts.
    pub fn parse(text: &str) -> Result<Datetime> {
        W3cDatetimeFormat.parse_datetime(text)
    }

    pub fn parse_with(text: &str, format: &dyn Format) -> Result<Datetime> {
        format.parse_datetime(text)
    }

    fn from_fields(fields: &FieldSet) -> Datetime {
        Datetime {
            year: fields.get(Field::Year),
            month: fields.get(Field::Month),
            date: fields.get(Field::Date),
            hour: fields.get(Field::Hour),
            minute: fields.get(Field::Minute),
        }
    }

    fn fields(&self) -> FieldSet {
        let mut fields = FieldSet::default();
        fields.set(Field::Year, self.year);
        fields.set(Field::Month, self.month);
        fields.set(Field::Date, self.date);
        fields.set(Field::Hour, self.hour);
        fields.set(Field::Minute, self.minute);
        fields
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> i64 {
        self.month
    }

    pub fn date(&self) -> i64 {
        self.date
    }

    pub fn hour(&self) -> i64 {
        self.hour
    }

    pub fn minute(&self) -> i64 {
        self.minute
    }

    pub fn set(&self, name: &str, value: i64) -> Datetime {
        Datetime::from_fields(&apply(TimeKind::Datetime, self.fields(), [(name, value)]))
    }

    pub fn add(&self, name: &str, delta: i64) -> Datetime {
        match self.get(name) {
            Some(current) => self.set(name, current + delta),
            None => *self,
        }
    }

    pub fn set_all<'a, I>(&self, entries: I) -> Datetime
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        Datetime::from_fields(&apply(TimeKind::Datetime, self.fields(), entries))
    }

    pub fn day_of_week(&self) -> i64 {
        fields::day_of_week(self.year, self.month, self.date)
    }

    pub fn is_leap_year(&self) -> bool {
        fields::is_leap_year(self.year)
    }

    pub fn date_count(&self) -> i64 {
        days_in_month(self.year, self.month)
    }

    /// Narrows to the calendar day, dropping the time of day.
    pub fn to_date(&self) -> Date {
        Date::new(self.year, self.month, self.date)
    }

    pub fn to_datetime(&self) -> Datetime {
        *self
    }

    pub fn to_timestamp(&self) -> Timestamp {
        Timestamp::new(self.year, self.month, self.date, self.hour, self.minute, 0)
    }

    /// Time-of-day part as `"hh:mm"`.
    pub fn format_time(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    pub fn format_with(&self, format: &dyn Format) -> String {
        format.format_datetime(self)
    }
}

impl Time for Datetime {
    fn kind(&self) -> TimeKind {
        TimeKind::Datetime
    }

    fn field(&self, field: Field) -> Option<i64> {
        match field {
            Field::Year => Some(self.year),
            Field::Month => Some(self.month),
            Field::Date => Some(self.date),
            Field::Hour => Some(self.hour),
            Field::Minute => Some(self.minute),
            Field::Second => None,
        }
    }
}

impl fmt::Display for Datetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.date, self.hour, self.minute
        )
    }
}

/// A calendar day plus hour, minute and second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    year: i64,
    month: i64,
    date: i64,
    hour: i64,
    minute: i64,
    second: i64,
}

impl Timestamp {
    pub fn new(year: i64, month: i64, date: i64, hour: i64, minute: i64, second: i64) -> Timestamp {
        let mut fields = FieldSet::default();
        fields.set(Field::Year, year);
        fields.set(Field::Month, month);
        fields.set(Field::Date, date);
        fields.set(Field::Hour, hour);
        fields.set(Field::Minute, minute);
        fields.set(Field::Second, second);
        fields.adjust(TimeKind::Timestamp);
        Timestamp::from_fields(&fields)
    }

    /// The current second according to the system clock.
    pub fn now() -> Timestamp {
        Timestamp::now_with(&SystemClock)
    }

    pub fn now_with(clock: &dyn Clock) -> Timestamp {
        clock.timestamp()
    }

    /// Parses `"YYYY-MM-DD hh:mm:ss"` with the default format.
    pub fn parse(text: &str) -> Result<Timestamp> {
        W3cDatetimeFormat.parse_timestamp(text)
    }

    pub fn parse_with(text: &str, format: &dyn Format) -> Result<Timestamp> {
        format.parse_timestamp(text)
    }

    fn from_fields(fields: &FieldSet) -> Timestamp {
        Timestamp {
            year: fields.get(Field::Year),
            month: fields.get(Field::Month),
            date: fields.get(Field::Date),
            hour: fields.get(Field::Hour),
            minute: fields.get(Field::Minute),
            second: fields.get(Field::Second),
        }
    }

    fn fields(&self) -> FieldSet {
        let mut fields = FieldSet::default();
        fields.set(Field::Year, self.year);
        fields.set(Field::Month, self.month);
        fields.set(Field::Date, self.date);
        fields.set(Field::Hour, self.hour);
        fields.set(Field::Minute, self.minute);
        fields.set(Field::Second, self.second);
        fields
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> i64 {
        self.month
    }

    pub fn date(&self) -> i64 {
        self.date
    }

    pub fn hour(&self) -> i64 {
        self.hour
    }

    pub fn minute(&self) -> i64 {
        self.minute
    }

    pub fn second(&self) -> i64 {
        self.second
    }

    pub fn set(&self, name: &str, value: i64) -> Timestamp {
        Timestamp::from_fields(&apply(TimeKind::Timestamp, self.fields(), [(name, value)]))
    }

    pub fn add(&self, name: &str, delta: i64) -> Timestamp {
        match self.get(name) {
            Some(current) => self.set(name, current + delta),
            None => *self,
        }
    }

    pub fn set_all<'a, I>(&self, entries: I) -> Timestamp
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        Timestamp::from_fields(&apply(TimeKind::Timestamp, self.fields(), entries))
    }

    pub fn day_of_week(&self) -> i64 {
        fields::day_of_week(self.year, self.month, self.date)
    }

    pub fn is_leap_year(&self) -> bool {
        fields::is_leap_year(self.year)
    }

    pub fn date_count(&self) -> i64 {
        days_in_month(self.year, self.month)
    }

    pub fn to_date(&self) -> Date {
        Date::new(self.year, self.month, self.date)
    }

    pub fn to_datetime(&self) -> Datetime {
        Datetime::new(self.year, self.month, self.date, self.hour, self.minute)
    }

    pub fn to_timestamp(&self) -> Timestamp {
        *self
    }

    /// Time-of-day part as `"hh:mm:ss"`.
    pub fn format_time(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    pub fn format_with(&self, format: &dyn Format) -> String {
        format.format_timestamp(self)
    }
}

impl Time for Timestamp {
    fn kind(&self) -> TimeKind {
        TimeKind::Timestamp
    }

    fn field(&self, field: Field) -> Option<i64> {
        match field {
            Field::Year => Some(self.year),
            Field::Month => Some(self.month),
            Field::Date => Some(self.date),
            Field::Hour => Some(self.hour),
            Field::Minute => Some(self.minute),
            Field::Second => Some(self.second),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.date, self.hour, self.minute, self.second
        )
    }
}
