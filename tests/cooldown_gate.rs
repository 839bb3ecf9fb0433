use chrono::{DateTime, Duration, TimeZone, Utc};
use marriage_bot::cooldown::{self, DisplayUnit};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn never_used_is_open() {
    assert!(cooldown::DAILY.check(now(), None).is_ok());
    assert!(cooldown::AFFECTION.check(now(), None).is_ok());
}

#[test]
fn window_boundary_is_open() {
    let last = now() - Duration::hours(24);
    assert!(cooldown::DAILY.check(now(), Some(last)).is_ok());
    let last = now() - Duration::minutes(60);
    assert!(cooldown::AFFECTION.check(now(), Some(last)).is_ok());
}

#[test]
fn daily_remaining_rounds_up_to_hours() {
    let cases = [
        (Duration::seconds(1), 24),
        (Duration::hours(1), 23),
        (Duration::minutes(90), 23),
        (Duration::hours(23) + Duration::minutes(59), 1),
    ];
    for (elapsed, hours) in cases {
        let active = cooldown::DAILY
            .check(now(), Some(now() - elapsed))
            .expect_err("gate should be closed");
        assert_eq!(active.remaining, hours, "after {:?}", elapsed);
        assert_eq!(active.unit, DisplayUnit::Hours);
    }
}

#[test]
fn affection_remaining_rounds_up_to_minutes() {
    let active = cooldown::AFFECTION
        .check(now(), Some(now() - Duration::minutes(10)))
        .unwrap_err();
    assert_eq!(active.remaining, 50);
    assert_eq!(active.to_string(), "50 minutes");

    let active = cooldown::AFFECTION
        .check(now(), Some(now() - Duration::seconds(59 * 60 + 30)))
        .unwrap_err();
    assert_eq!(active.remaining, 1);
    assert_eq!(active.to_string(), "1 minute");
}

#[test]
fn future_last_use_counts_as_just_used() {
    let active = cooldown::AFFECTION
        .check(now(), Some(now() + Duration::minutes(5)))
        .unwrap_err();
    assert_eq!(active.remaining, 60);
}
