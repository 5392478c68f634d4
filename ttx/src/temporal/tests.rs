use crate::{
  calendar::{
    CalendarError, Date, DateTime, Day, Instant, Month, Time, Timestamp, Year, YearMonth, ZoneId,
    ZonedDateTime,
  },
  clock::FixedClock,
  temporal::{CalendarKind, CalendarValue, Temporal},
};
use core::cmp::Ordering;

fn date(y: i16, month: Month, d: u8) -> Date {
  Date::from_ymd(Year::from_num(y).unwrap(), month, Day::from_num(d).unwrap()).unwrap()
}

#[test]
fn instants_round_down_to_the_start_of_the_represented_period() {
  let first_of_june = date(2020, Month::June, 1);
  assert_eq!(
    YearMonth::new(Year::from_num(2020).unwrap(), Month::June).to_instant().unwrap(),
    first_of_june.to_instant().unwrap()
  );
  assert_eq!(
    first_of_june.to_instant().unwrap(),
    DateTime::new(first_of_june, Time::ZERO).to_instant().unwrap()
  );
}

#[test]
fn calendar_order_and_instant_order_agree() {
  let lhs = date(2020, Month::June, 1);
  let rhs = date(2020, Month::June, 2);
  assert!(lhs < rhs);
  assert!(lhs.to_instant().unwrap() < rhs.to_instant().unwrap());
  assert_eq!(lhs.compare_to(&rhs).unwrap(), Ordering::Less);
}

#[test]
fn dynamic_comparison_of_different_kinds_is_a_kind_mismatch() {
  let lhs = CalendarValue::Date(date(2020, Month::June, 1));
  let rhs = CalendarValue::ZonedDateTime(ZonedDateTime::new(
    DateTime::new(date(2020, Month::June, 1), Time::ZERO),
    ZoneId::UTC,
  ));
  assert!(matches!(
    lhs.compare_to(&rhs),
    Err(crate::Error::CalendarError(CalendarError::KindMismatch {
      lhs: CalendarKind::Date,
      rhs: CalendarKind::ZonedDateTime,
    }))
  ));
}

#[test]
fn dynamic_comparison_against_the_wire_instant_is_always_permitted() {
  let lhs = CalendarValue::Date(date(1970, Month::January, 2));
  let rhs = CalendarValue::Timestamp(Timestamp::new(86_400, crate::calendar::Nanosecond::ZERO));
  assert_eq!(lhs.compare_to(&rhs).unwrap(), Ordering::Equal);
  assert_eq!(rhs.compare_to(&lhs).unwrap(), Ordering::Equal);
}

#[test]
fn non_point_in_time_values_have_no_instant() {
  let value = CalendarValue::Time(Time::ZERO);
  assert!(!value.is_point_in_time());
  assert!(matches!(
    value.to_instant(),
    Err(crate::Error::CalendarError(CalendarError::NotAPointInTime(CalendarKind::Time)))
  ));
}

#[test]
fn is_between_excludes_the_start_and_includes_the_end() {
  let start = date(2020, Month::June, 1);
  let mid = date(2020, Month::June, 2);
  let end = date(2020, Month::June, 3);
  assert!(mid.is_between(&start, &end).unwrap());
  assert!(!start.is_between(&start, &end).unwrap());
  assert!(end.is_between(&start, &end).unwrap());
}

#[test]
fn is_between_rejects_unordered_bounds() {
  let start = date(2020, Month::June, 1);
  let end = date(2020, Month::June, 3);
  assert!(matches!(
    date(2020, Month::June, 2).is_between(&end, &start),
    Err(crate::Error::CalendarError(CalendarError::InvalidComparisonBounds))
  ));
  assert!(matches!(
    date(2020, Month::June, 2).is_between(&start, &start),
    Err(crate::Error::CalendarError(CalendarError::InvalidComparisonBounds))
  ));
}

#[test]
fn relative_time_is_strict() {
  let now = Instant::from_timestamp(1_577_836_800, 0).unwrap();
  let clock = FixedClock::new(now);
  let same: Timestamp = now.into();
  assert!(!same.is_in_future(&clock).unwrap());
  assert!(!same.is_in_past(&clock).unwrap());
  let later = Timestamp::new(1_577_836_801, crate::calendar::Nanosecond::ZERO);
  assert!(later.is_in_future(&clock).unwrap());
  assert!(!later.is_in_past(&clock).unwrap());
}

#[test]
fn zero_valued_year_month_has_no_instant() {
  assert!(matches!(
    YearMonth::default().to_instant(),
    Err(crate::Error::CalendarError(CalendarError::ZeroValue("YearMonth")))
  ));
}

#[test]
fn instant_comparison_overloads_accept_raw_and_wire_instants() {
  let value = date(1970, Month::January, 2);
  let instant = Instant::from_timestamp(86_400, 0).unwrap();
  assert!(value.is_same_as_instant(instant).unwrap());
  assert!(value.is_after_instant(Instant::EPOCH).unwrap());
  assert!(value.is_before_instant(Timestamp::new(90_000, crate::calendar::Nanosecond::ZERO)).unwrap());
  assert!(value.is_before_or_same_as_instant(instant).unwrap());
  assert!(value.is_after_or_same_as_instant(instant).unwrap());
}
