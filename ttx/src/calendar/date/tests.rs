use crate::{
  calendar::{CalendarError, Date, Day, Month, Weekday, Year},
  convert::{NativeConvert, Stringify},
};

fn _2025_04_20() -> Date {
  instance(2025, Month::April, 20)
}

#[test]
fn from_ymd_deals_with_leap_years() {
  assert!(Date::from_ymd(year(2024), Month::February, day(29)).is_ok());
  assert!(matches!(
    Date::from_ymd(year(2023), Month::February, day(29)),
    Err(CalendarError::InvalidDayForMonth { received: 29, days_in_month: 28 })
  ));
  assert!(matches!(
    Date::from_ymd(year(2023), Month::April, day(31)),
    Err(CalendarError::InvalidDayForMonth { received: 31, days_in_month: 30 })
  ));
}

#[test]
fn canonical_text_round_trips() {
  assert_eq!(_2025_04_20().to_text().unwrap(), "2025-04-20");
  assert_eq!(Date::from_text("2025-04-20").unwrap(), _2025_04_20());
  assert_eq!(Date::ZERO.to_text().unwrap(), "0000-01-01");
  for date in [Date::MIN, Date::MAX, Date::CE, Date::EPOCH, Date::ZERO] {
    assert_eq!(Date::from_text(&date.to_text().unwrap()).unwrap(), date);
  }
}

#[test]
fn malformed_text_is_rejected() {
  let invalid = ["", "x", "2020-13-01", "2020-02-30", "2020-00-10", "20200110", "2020-01-10T"];
  for elem in invalid {
    assert!(Date::from_text(elem).is_err(), "{elem}");
  }
}

#[test]
fn native_conversion_round_trips() {
  for date in [Date::MIN, Date::MAX, Date::EPOCH, _2025_04_20()] {
    assert_eq!(Date::from_native(date.to_native().unwrap()).unwrap(), date);
  }
  let native = chrono::NaiveDate::from_ymd_opt(1999, 2, 3).unwrap();
  assert_eq!(Date::from_native(native).unwrap().to_native().unwrap(), native);
}

#[test]
fn weekday() {
  assert_eq!(Date::EPOCH.weekday(), Weekday::Thursday);
  assert_eq!(_2025_04_20().weekday(), Weekday::Sunday);
  assert_eq!(instance(2000, Month::January, 1).weekday(), Weekday::Saturday);
}

fn day(num: u8) -> Day {
  Day::from_num(num).unwrap()
}

fn instance(y: i16, month: Month, d: u8) -> Date {
  Date::from_ymd(year(y), month, day(d)).unwrap()
}

fn year(num: i16) -> Year {
  Year::from_num(num).unwrap()
}
