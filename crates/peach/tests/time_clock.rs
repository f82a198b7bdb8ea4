use chrono::{Datelike, Timelike};
use peach_rs::time::clock::timestamp_from_unix;
use peach_rs::time::{Clock, Date, Datetime, FixedClock, OffsetClock, SystemClock, Time, Timestamp};

#[test]
fn fixed_clock_is_deterministic() {
    let clock = FixedClock::new(1234567890);
    assert_eq!(
        clock.timestamp(),
        Timestamp::new(2009, 2, 13, 23, 31, 30)
    );
    assert_eq!(Date::now_with(&clock), Date::new(2009, 2, 13));
    assert_eq!(
        Datetime::now_with(&clock),
        Datetime::new(2009, 2, 13, 23, 31)
    );
    assert_eq!(Timestamp::now_with(&clock), clock.timestamp());
}

#[test]
fn now_defaults_to_the_system_clock() {
    let t = Timestamp::now();
    let hour_ago = Timestamp::now_with(&OffsetClock::new(-3600));
    let hour_ahead = Timestamp::now_with(&OffsetClock::new(3600));
    assert!(t.after(&hour_ago));
    assert!(t.before(&hour_ahead));
}

#[test]
fn offset_clock_shifts_its_base() {
    let base = FixedClock::new(1234567890);
    let clock = OffsetClock::with_base(1800, base);
    assert_eq!(clock.unix_time(), 1234569690);
    assert_eq!(
        clock.timestamp(),
        Timestamp::new(2009, 2, 14, 0, 1, 30)
    );

    let back = OffsetClock::with_base(-3600, base);
    assert_eq!(
        back.timestamp(),
        Timestamp::new(2009, 2, 13, 22, 31, 30)
    );
}

#[test]
fn offset_clock_defaults_to_the_system_clock() {
    let clock = OffsetClock::new(-3600);
    let system = SystemClock.unix_time();
    let shifted = clock.unix_time();
    // Both reads happen within the same test; allow a tick of slack.
    let diff = system - 3600 - shifted;
    assert!(diff.abs() <= 1, "unexpected offset drift: {diff}");
}

#[test]
fn unix_conversion_agrees_with_chrono() {
    for secs in [0i64, 86399, 951_868_800, 1234567890, 4102444800] {
        let ours = timestamp_from_unix(secs);
        let theirs = chrono::DateTime::from_timestamp(secs, 0).unwrap();
        assert_eq!(ours.year(), i64::from(theirs.year()), "year of {secs}");
        assert_eq!(ours.month(), i64::from(theirs.month()), "month of {secs}");
        assert_eq!(ours.date(), i64::from(theirs.day()), "day of {secs}");
        assert_eq!(ours.hour(), i64::from(theirs.hour()), "hour of {secs}");
        assert_eq!(ours.minute(), i64::from(theirs.minute()), "minute of {secs}");
        assert_eq!(ours.second(), i64::from(theirs.second()), "second of {secs}");
    }
}

#[test]
fn weekday_agrees_with_chrono() {
    for (y, m, d) in [
        (1970, 1, 1),
        (1990, 4, 1),
        (2000, 2, 29),
        (2012, 5, 21),
        (2100, 3, 1),
    ] {
        let ours = Date::new(y, m, d).day_of_week();
        let theirs = chrono::NaiveDate::from_ymd_opt(y as i32, m as u32, d as u32)
            .unwrap()
            .weekday()
            .num_days_from_sunday();
        assert_eq!(ours, i64::from(theirs), "weekday of {y}-{m}-{d}");
    }
}
