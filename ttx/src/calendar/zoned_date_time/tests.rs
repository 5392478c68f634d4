use crate::{
  calendar::{
    CalendarError, Date, DateTime, Day, Hour, Minute, Month, Second, Time, Year, ZoneId,
    ZonedDateTime,
  },
  convert::{NativeConvert, NativeText, Stringify},
};

fn paris(y: i16, mo: Month, d: u8, h: u8, mi: u8, s: u8) -> ZonedDateTime {
  let date = Date::from_ymd(Year::from_num(y).unwrap(), mo, Day::from_num(d).unwrap()).unwrap();
  let time = Time::from_hms(
    Hour::from_num(h).unwrap(),
    Minute::from_num(mi).unwrap(),
    Second::from_num(s).unwrap(),
  );
  ZonedDateTime::new(DateTime::new(date, time), ZoneId::from_name("Europe/Paris").unwrap())
}

#[test]
fn canonical_text_round_trips() {
  let summer = paris(2018, Month::June, 5, 13, 45, 30);
  assert_eq!(summer.to_text().unwrap(), "2018-06-05T13:45:30+02:00[Europe/Paris]");
  assert_eq!(ZonedDateTime::from_text("2018-06-05T13:45:30+02:00[Europe/Paris]").unwrap(), summer);
  let winter = paris(2018, Month::December, 5, 13, 45, 30);
  assert_eq!(winter.to_text().unwrap(), "2018-12-05T13:45:30+01:00[Europe/Paris]");
  assert_eq!(ZonedDateTime::from_text(&winter.to_text().unwrap()).unwrap(), winter);
}

#[test]
fn text_without_a_zone_designator_is_rejected() {
  assert!(matches!(
    ZonedDateTime::from_text("2018-06-05T13:45:30+02:00"),
    Err(crate::Error::CalendarError(CalendarError::MissingZoneDesignator))
  ));
  assert!(matches!(
    ZonedDateTime::from_text("2018-06-05T13:45:30+02:00[Europe/Paris"),
    Err(crate::Error::CalendarError(CalendarError::MissingZoneDesignator))
  ));
}

#[test]
fn text_with_an_unresolvable_zone_is_rejected() {
  assert!(matches!(
    ZonedDateTime::from_text("2018-06-05T13:45:30+02:00[Mars/Olympus]"),
    Err(crate::Error::CalendarError(CalendarError::UnknownTimeZone))
  ));
}

#[test]
fn text_with_a_disagreeing_offset_is_rejected() {
  assert!(matches!(
    ZonedDateTime::from_text("2018-06-05T13:45:30+03:00[Europe/Paris]"),
    Err(crate::Error::CalendarError(CalendarError::OffsetZoneDisagreement))
  ));
}

#[test]
fn ambiguous_local_times_resolve_to_the_earlier_occurrence() {
  let repeated = paris(2018, Month::October, 28, 2, 30, 0);
  let native = repeated.to_native().unwrap();
  assert_eq!(native.to_native_text(), "2018-10-28T02:30:00+02:00[Europe/Paris]");
}

#[test]
fn skipped_local_times_are_rejected() {
  let skipped = paris(2018, Month::March, 25, 2, 30, 0);
  assert!(matches!(
    skipped.to_native(),
    Err(crate::Error::CalendarError(CalendarError::NonexistentLocalTime))
  ));
}

#[test]
fn zero_value_is_rejected_by_concrete_conversions() {
  assert!(matches!(
    ZonedDateTime::default().to_text(),
    Err(crate::Error::CalendarError(CalendarError::ZeroValue("ZonedDateTime")))
  ));
  assert!(matches!(
    ZonedDateTime::ZERO.to_native(),
    Err(crate::Error::CalendarError(CalendarError::ZeroValue("ZonedDateTime")))
  ));
}

#[test]
fn native_conversion_round_trips() {
  let zoned = paris(2018, Month::June, 5, 13, 45, 30);
  assert_eq!(ZonedDateTime::from_native(zoned.to_native().unwrap()).unwrap(), zoned);
}
