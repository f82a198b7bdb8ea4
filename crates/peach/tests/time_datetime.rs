use core::cmp::Ordering;

use peach_rs::time::{compare, Date, Datetime, Time, Timestamp};

#[test]
fn construction_normalizes_time_of_day() {
    assert_eq!(
        Datetime::new(2011, 12, 31, 23, 60),
        Datetime::new(2012, 1, 1, 0, 0)
    );
    assert_eq!(
        Datetime::new(2012, 5, 21, 24, 0),
        Datetime::new(2012, 5, 22, 0, 0)
    );
    assert_eq!(
        Timestamp::new(2012, 2, 29, 23, 59, 60),
        Timestamp::new(2012, 3, 1, 0, 0, 0)
    );
}

#[test]
fn negative_fields_borrow_downward() {
    assert_eq!(
        Datetime::new(2012, 5, 21, -1, 30),
        Datetime::new(2012, 5, 20, 23, 30)
    );
    assert_eq!(
        Timestamp::new(2012, 1, 1, 0, 0, -1),
        Timestamp::new(2011, 12, 31, 23, 59, 59)
    );
}

#[test]
fn adding_seconds_matches_adding_days() {
    let t = Timestamp::new(2012, 5, 21, 7, 30, 15);
    assert_eq!(t.add("second", 86400), t.add("date", 1));
    assert_eq!(t.add("minute", 1440), t.add("date", 1));
}

#[test]
fn set_all_cascades_across_all_fields() {
    let t = Timestamp::new(2012, 1, 1, 0, 0, 0)
        .set_all([("month", 14), ("date", 31), ("hour", 23), ("minute", 60)]);
    // 2013-02-31 23:60 -> 2013-03-04 00:00 (Feb 2013 has 28 days).
    assert_eq!(t, Timestamp::new(2013, 3, 4, 0, 0, 0));
}

#[test]
fn display_and_format_time() {
    let dt = Datetime::new(2012, 5, 21, 7, 3);
    assert_eq!(dt.to_string(), "2012-05-21 07:03");
    assert_eq!(dt.format_time(), "07:03");

    let ts = Timestamp::new(2012, 5, 21, 7, 3, 9);
    assert_eq!(ts.to_string(), "2012-05-21 07:03:09");
    assert_eq!(ts.format_time(), "07:03:09");
}

#[test]
fn narrowing_and_widening_casts() {
    let ts = Timestamp::new(2012, 5, 21, 7, 30, 15);
    assert_eq!(ts.to_date(), Date::new(2012, 5, 21));
    assert_eq!(ts.to_datetime(), Datetime::new(2012, 5, 21, 7, 30));
    assert_eq!(
        ts.to_datetime().to_timestamp(),
        Timestamp::new(2012, 5, 21, 7, 30, 0)
    );
}

#[test]
fn a_date_orders_before_richer_variants_of_the_same_day() {
    let d = Date::new(2012, 5, 21);
    let dt = Datetime::new(2012, 5, 21, 0, 0);
    let ts = Timestamp::new(2012, 5, 21, 0, 0, 0);

    assert_eq!(compare(&d, &dt), Ordering::Less);
    assert_eq!(compare(&d, &ts), Ordering::Less);
    assert_eq!(compare(&dt, &ts), Ordering::Less);
    assert!(d.before(&dt));
    assert!(dt.after(&d));
    assert!(!d.after(&dt));
}

#[test]
fn shared_fields_dominate_variant_rank() {
    let late_datetime = Datetime::new(2012, 5, 20, 23, 59);
    let next_day = Date::new(2012, 5, 21);
    assert!(late_datetime.before(&next_day));
    assert!(next_day.after(&late_datetime));

    let ts = Timestamp::new(2012, 5, 21, 10, 30, 0);
    let dt = Datetime::new(2012, 5, 21, 10, 31);
    assert_eq!(compare(&ts, &dt), Ordering::Less);
}

#[test]
fn unknown_fields_are_ignored_on_richer_variants_too() {
    let dt = Datetime::new(2012, 5, 21, 7, 30);
    assert_eq!(dt.set("second", 10), dt);
    assert_eq!(dt.add("gibberish", 10), dt);
    assert_eq!(dt.get("sec"), None);
    assert_eq!(dt.get("min"), Some(30));
}
