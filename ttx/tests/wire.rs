#![cfg(feature = "serde")]

use ttx::calendar::{
  Date, DateTime, Day, Hour, Instant, Minute, Month, Nanosecond, Second, Time, Timestamp, Year,
  YearMonth, ZoneId, ZonedDateTime,
};

#[test]
fn values_travel_as_their_canonical_strings() {
  let date = Date::from_ymd(
    Year::from_num(2025).unwrap(),
    Month::April,
    Day::from_num(20).unwrap(),
  )
  .unwrap();
  assert_eq!(serde_json::to_string(&date).unwrap(), "\"2025-04-20\"");
  assert_eq!(serde_json::from_str::<Date>("\"2025-04-20\"").unwrap(), date);

  let time = Time::from_hms_ns(
    Hour::from_num(13).unwrap(),
    Minute::from_num(45).unwrap(),
    Second::from_num(30).unwrap(),
    Nanosecond::ZERO,
  );
  assert_eq!(serde_json::to_string(&time).unwrap(), "\"13:45:30\"");

  let date_time = DateTime::new(date, time);
  assert_eq!(serde_json::to_string(&date_time).unwrap(), "\"2025-04-20T13:45:30\"");
  assert_eq!(
    serde_json::from_str::<DateTime>("\"2025-04-20T13:45:30\"").unwrap(),
    date_time
  );

  let timestamp = Timestamp::new(0, Nanosecond::ZERO);
  assert_eq!(serde_json::to_string(&timestamp).unwrap(), "\"1970-01-01T00:00:00Z\"");

  let zoned = ZonedDateTime::new(date_time, ZoneId::from_name("America/Sao_Paulo").unwrap());
  let json = serde_json::to_string(&zoned).unwrap();
  assert_eq!(json, "\"2025-04-20T13:45:30-03:00[America/Sao_Paulo]\"");
  assert_eq!(serde_json::from_str::<ZonedDateTime>(&json).unwrap(), zoned);
}

#[test]
fn malformed_wire_strings_are_rejected() {
  assert!(serde_json::from_str::<Date>("\"2025-13-01\"").is_err());
  assert!(serde_json::from_str::<Timestamp>("\"not a timestamp\"").is_err());
  assert!(serde_json::from_str::<YearMonth>("\"\"").is_err());
}

#[test]
fn instants_keep_their_numeric_components() {
  let instant = Instant::from_timestamp(94_780_799, 999_999_999).unwrap();
  let json = serde_json::to_string(&instant).unwrap();
  assert_eq!(serde_json::from_str::<Instant>(&json).unwrap(), instant);
}
