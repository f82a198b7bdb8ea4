//! Field-based calendar types.
//!
//! `Date`, `Datetime` and `Timestamp` are immutable value objects built
//! on one shared field-normalization engine: any out-of-range field
//! (day 32, month 14, minute 60) carries into the next coarser field
//! until every field settles in its valid range. "Now" and textual
//! parse/render go through the pluggable [`Clock`] and [`Format`]
//! capabilities, so both are deterministic in tests.

pub mod calendar;
pub mod clock;
pub mod fields;
pub mod format;

pub use self::calendar::{compare, Date, Datetime, Time, Timestamp};
pub use self::clock::{Clock, FixedClock, OffsetClock, SystemClock};
pub use self::fields::{days_in_month, is_leap_year, Field, TimeKind};
pub use self::format::{Format, W3cDatetimeFormat};
