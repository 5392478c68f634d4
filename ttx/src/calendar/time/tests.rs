use crate::{
  calendar::{CalendarError, Hour, Minute, Nanosecond, Second, Time},
  convert::{NativeConvert, Stringify},
};

fn _8_48_05_234445009() -> Time {
  instance(8, 48, 5, 234_445_009)
}

fn _14_20_30() -> Time {
  instance(14, 20, 30, 0)
}

#[test]
fn canonical_text_round_trips() {
  assert_eq!(Time::ZERO.to_text().unwrap(), "00:00:00");
  assert_eq!(Time::MAX.to_text().unwrap(), "23:59:59.999999999");
  assert_eq!(_8_48_05_234445009().to_text().unwrap(), "08:48:05.234445009");
  assert_eq!(_14_20_30().to_text().unwrap(), "14:20:30");

  let valid = [
    "09:08:07",
    "09:08:07.1",
    "09:08:07.12",
    "09:08:07.123",
    "09:08:07.1234",
    "09:08:07.12345",
    "09:08:07.123456",
    "09:08:07.1234567",
    "09:08:07.12345678",
    "09:08:07.123456789",
  ];
  for str in valid {
    let time = Time::from_text(str).unwrap();
    assert_eq!(Time::from_text(&time.to_text().unwrap()).unwrap(), time);
  }
}

#[test]
fn malformed_text_is_rejected() {
  let invalid = [
    "",
    "x",
    "15",
    "15:8:",
    "23:59:61",
    "24:00:00",
    "12:60:00",
    "23:54:35 GMT",
    "1441497364.649",
    "12:34:56.x",
  ];
  for str in invalid {
    assert!(Time::from_text(str).is_err(), "{str}");
  }
}

#[test]
fn native_conversion_round_trips() {
  for time in [Time::ZERO, Time::MAX, _8_48_05_234445009(), _14_20_30()] {
    assert_eq!(Time::from_native(time.to_native().unwrap()).unwrap(), time);
  }
}

#[test]
fn leap_second_representations_are_rejected() {
  let native = chrono::NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
  assert!(matches!(
    Time::from_native(native),
    Err(crate::Error::CalendarError(CalendarError::InvalidNanosecond { .. }))
  ));
  assert!(Time::from_text("23:59:60").is_err());
}

fn instance(h: u8, m: u8, s: u8, ns: u32) -> Time {
  Time::from_hms_ns(
    Hour::from_num(h).unwrap(),
    Minute::from_num(m).unwrap(),
    Second::from_num(s).unwrap(),
    Nanosecond::from_num(ns).unwrap(),
  )
}
