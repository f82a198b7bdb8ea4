//! The field model and the adjuster chain shared by every time variant.

/// Time fields in coarse-to-fine order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Year,
    Month,
    Date,
    Hour,
    Minute,
    Second,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Year,
        Field::Month,
        Field::Date,
        Field::Hour,
        Field::Minute,
        Field::Second,
    ];

    /// Permissive field-name lookup, keyed on how the name begins:
    /// "y..." is the year, "mo..." the month, "mi..." the minute, and
    /// "d...", "h...", "s..." the date, hour and second. Anything else,
    /// including a bare "m", yields `None`, which callers treat as a
    /// no-op rather than an error.
    pub fn lookup(name: &str) -> Option<Field> {
        let n = name.trim().to_ascii_lowercase();
        if n.starts_with("mi") {
            return Some(Field::Minute);
        }
        if n.starts_with("mo") {
            return Some(Field::Month);
        }
        match n.as_bytes().first() {
            Some(b'y') => Some(Field::Year),
            Some(b'd') => Some(Field::Date),
            Some(b'h') => Some(Field::Hour),
            Some(b's') => Some(Field::Second),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Which fields a time variant carries. The ordering doubles as the
/// rank used to break ties between variants with equal shared fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeKind {
    Date,
    Datetime,
    Timestamp,
}

impl TimeKind {
    pub fn fields(self) -> &'static [Field] {
        match self {
            TimeKind::Date => &Field::ALL[..3],
            TimeKind::Datetime => &Field::ALL[..5],
            TimeKind::Timestamp => &Field::ALL[..6],
        }
    }

    pub fn has(self, field: Field) -> bool {
        self.fields().contains(&field)
    }
}

/// Normalizes a fixed-range field by carrying one unit into the next
/// coarser field per step. Month, hour, minute and second have constant
/// spans; the date field is handled separately because its upper bound
/// depends on the surrounding year and month.
struct FieldAdjuster {
    field: Field,
    upper: Field,
    min: i64,
    max: i64,
}

impl FieldAdjuster {
    const fn new(field: Field, upper: Field, min: i64, max: i64) -> Self {
        Self {
            field,
            upper,
            min,
            max,
        }
    }

    fn span(&self) -> i64 {
        self.max - self.min + 1
    }

    fn move_up(&self, fields: &mut FieldSet) {
        fields.set(self.upper, fields.get(self.upper) + 1);
        fields.set(self.field, fields.get(self.field) - self.span());
    }

    fn move_down(&self, fields: &mut FieldSet) {
        fields.set(self.upper, fields.get(self.upper) - 1);
        fields.set(self.field, fields.get(self.field) + self.span());
    }
}

const MONTH_ADJUSTER: FieldAdjuster = FieldAdjuster::new(Field::Month, Field::Year, 1, 12);
const HOUR_ADJUSTER: FieldAdjuster = FieldAdjuster::new(Field::Hour, Field::Date, 0, 23);
const MINUTE_ADJUSTER: FieldAdjuster = FieldAdjuster::new(Field::Minute, Field::Hour, 0, 59);
const SECOND_ADJUSTER: FieldAdjuster = FieldAdjuster::new(Field::Second, Field::Minute, 0, 59);

/// One integer slot per field. Construction-time normalization happens
/// here; the public variants never expose an out-of-range field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FieldSet {
    values: [i64; 6],
}

impl FieldSet {
    pub fn get(&self, field: Field) -> i64 {
        self.values[field.index()]
    }

    pub fn set(&mut self, field: Field, value: i64) {
        self.values[field.index()] = value;
    }

    /// Settles every applicable field into its valid range, carrying
    /// overflow and underflow into the next coarser field. Each step
    /// strictly shrinks one violation and the chain is acyclic (rooted
    /// at the unbounded year), so the loop terminates.
    pub fn adjust(&mut self, kind: TimeKind) {
        while self.adjust_step(kind) {}
    }

    fn adjust_step(&mut self, kind: TimeKind) -> bool {
        let month = self.get(Field::Month);
        if month < 1 {
            MONTH_ADJUSTER.move_down(self);
            return true;
        }
        if month > 12 {
            MONTH_ADJUSTER.move_up(self);
            return true;
        }

        // Date borrows against the length of the month it moves into,
        // so the carry is one month per step.
        let date = self.get(Field::Date);
        if date < 1 {
            let mut year = self.get(Field::Year);
            let mut month = self.get(Field::Month) - 1;
            if month < 1 {
                year -= 1;
                month += 12;
            }
            self.set(Field::Year, year);
            self.set(Field::Month, month);
            self.set(Field::Date, date + days_in_month(year, month));
            return true;
        }
        let count = days_in_month(self.get(Field::Year), month);
        if date > count {
            self.set(Field::Date, date - count);
            self.set(Field::Month, month + 1);
            return true;
        }

        for adjuster in [&HOUR_ADJUSTER, &MINUTE_ADJUSTER, &SECOND_ADJUSTER] {
            if !kind.has(adjuster.field) {
                break;
            }
            let value = self.get(adjuster.field);
            if value < adjuster.min {
                adjuster.move_down(self);
                return true;
            }
            if value > adjuster.max {
                adjuster.move_up(self);
                return true;
            }
        }
        false
    }
}

/// Gregorian leap-year rule: divisible by 400, or by 4 but not by 100.
pub fn is_leap_year(year: i64) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Number of days in the given month, leap years accounted for.
pub fn days_in_month(year: i64, month: i64) -> i64 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Proleptic Gregorian day number of a civil date, with day 0 at
/// 1970-01-01.
pub(crate) fn days_from_civil(year: i64, month: i64, date: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + date - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

/// Weekday index 0-6 with Sunday as 0.
pub(crate) fn day_of_week(year: i64, month: i64, date: i64) -> i64 {
    (days_from_civil(year, month, date) + 4).rem_euclid(7)
}
