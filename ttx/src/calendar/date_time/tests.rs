use crate::{
  calendar::{Date, DateTime, Day, Hour, Instant, Minute, Month, Nanosecond, Second, Time, Year},
  clock::FixedClock,
  convert::{NativeConvert, Stringify},
};

fn _2001_07_08_00_34_59_026490000() -> DateTime {
  let date = Date::from_ymd(
    Year::from_num(2001).unwrap(),
    Month::July,
    Day::from_num(8).unwrap(),
  )
  .unwrap();
  let time = Time::from_hms_ns(
    Hour::from_num(0).unwrap(),
    Minute::from_num(34).unwrap(),
    Second::from_num(59).unwrap(),
    Nanosecond::from_num(26_490_000).unwrap(),
  );
  DateTime::new(date, time)
}

#[test]
fn canonical_text_round_trips() {
  let date_time = _2001_07_08_00_34_59_026490000();
  assert_eq!(date_time.to_text().unwrap(), "2001-07-08T00:34:59.026490");
  assert_eq!(DateTime::from_text("2001-07-08T00:34:59.026490").unwrap(), date_time);
  assert_eq!(DateTime::EPOCH.to_text().unwrap(), "1970-01-01T00:00:00");
  for elem in [DateTime::MIN, DateTime::MAX, DateTime::ZERO, DateTime::EPOCH] {
    assert_eq!(DateTime::from_text(&elem.to_text().unwrap()).unwrap(), elem);
  }
}

#[test]
fn malformed_text_is_rejected() {
  let invalid = ["", "2001-07-08", "00:34:59", "2001-07-08 00:34:59", "2001-07-08T00:34:59Z"];
  for elem in invalid {
    assert!(DateTime::from_text(elem).is_err(), "{elem}");
  }
}

#[test]
fn native_conversion_round_trips() {
  for elem in [DateTime::MIN, DateTime::MAX, DateTime::EPOCH, _2001_07_08_00_34_59_026490000()] {
    assert_eq!(DateTime::from_native(elem.to_native().unwrap()).unwrap(), elem);
  }
}

#[test]
fn from_instant_interprets_the_reading_in_utc() {
  let instant = Instant::from_timestamp(994_552_499, 26_490_000).unwrap();
  assert_eq!(DateTime::from_instant(instant).unwrap(), _2001_07_08_00_34_59_026490000());
  assert_eq!(DateTime::now(&FixedClock::new(instant)).unwrap(), _2001_07_08_00_34_59_026490000());
  assert_eq!(DateTime::from_instant(Instant::EPOCH).unwrap(), DateTime::EPOCH);
}
