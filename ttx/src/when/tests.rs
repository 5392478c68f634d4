use crate::{
  calendar::{CalendarError, Date, Day, Instant, Month, Nanosecond, Timestamp, Year},
  clock::FixedClock,
  temporal::CalendarValue,
  when::{FieldValue, When, WhenRequirement, check_field},
};

// 2020-01-01T00:00:00Z
const T0_SECONDS: i64 = 1_577_836_800;

fn frozen_clock() -> FixedClock {
  FixedClock::new(Instant::from_timestamp(T0_SECONDS, 0).unwrap())
}

fn five_minutes_after_t0() -> FieldValue {
  FieldValue::Timestamp(Timestamp::new(T0_SECONDS + 300, Nanosecond::ZERO))
}

#[test]
fn undefined_requirement_succeeds_without_any_evaluation() {
  let when = When::new(WhenRequirement::Undefined);
  let values = [FieldValue::Unsupported("bytes")];
  assert_eq!(check_field(&when, "payload.raw", &values, &frozen_clock()).unwrap(), None);
}

#[test]
fn future_value_with_future_requirement_passes() {
  let when = When::new(WhenRequirement::Future);
  let values = [five_minutes_after_t0()];
  assert_eq!(check_field(&when, "order.deadline", &values, &frozen_clock()).unwrap(), None);
}

#[test]
fn future_value_with_past_requirement_is_reported_once() {
  let when = When::new(WhenRequirement::Past);
  let values = [five_minutes_after_t0()];
  let violation = check_field(&when, "order.created", &values, &frozen_clock()).unwrap().unwrap();
  assert_eq!(violation.field_path(), "order.created");
  assert_eq!(violation.message(), "must be in the past");
  assert_eq!(
    violation.value().unpack().unwrap(),
    CalendarValue::Timestamp(Timestamp::new(T0_SECONDS + 300, Nanosecond::ZERO))
  );
}

#[test]
fn value_equal_to_now_violates_both_requirements() {
  let values = [FieldValue::Timestamp(Timestamp::new(T0_SECONDS, Nanosecond::ZERO))];
  for requirement in [WhenRequirement::Future, WhenRequirement::Past] {
    let when = When::new(requirement);
    let violation = check_field(&when, "event.at", &values, &frozen_clock()).unwrap();
    assert!(violation.is_some(), "{requirement:?}");
  }
}

#[test]
fn the_first_violating_value_short_circuits() {
  let when = When::new(WhenRequirement::Future);
  let values = [
    five_minutes_after_t0(),
    FieldValue::Timestamp(Timestamp::new(T0_SECONDS - 1, Nanosecond::ZERO)),
    FieldValue::Timestamp(Timestamp::new(T0_SECONDS - 2, Nanosecond::ZERO)),
  ];
  let violation = check_field(&when, "batch.instants", &values, &frozen_clock()).unwrap().unwrap();
  assert_eq!(
    violation.value().unpack().unwrap(),
    CalendarValue::Timestamp(Timestamp::new(T0_SECONDS - 1, Nanosecond::ZERO))
  );
}

#[test]
fn unsupported_field_types_are_configuration_errors() {
  let when = When::new(WhenRequirement::Future);
  let values = [FieldValue::Unsupported("bytes")];
  assert!(matches!(
    check_field(&when, "payload.raw", &values, &frozen_clock()),
    Err(crate::Error::CalendarError(CalendarError::UnsupportedTemporalField("bytes")))
  ));
}

#[test]
fn calendar_values_are_also_accepted() {
  let when = When::new(WhenRequirement::Past);
  let date = Date::from_ymd(
    Year::from_num(2019).unwrap(),
    Month::December,
    Day::from_num(31).unwrap(),
  )
  .unwrap();
  let values = [FieldValue::Temporal(CalendarValue::Date(date))];
  assert_eq!(check_field(&when, "birth.date", &values, &frozen_clock()).unwrap(), None);
  let future_when = When::new(WhenRequirement::Future);
  let violation =
    check_field(&future_when, "birth.date", &values, &frozen_clock()).unwrap().unwrap();
  assert_eq!(violation.value().unpack().unwrap(), CalendarValue::Date(date));
  assert_eq!(violation.value().text(), "2019-12-31");
}

#[test]
fn custom_templates_substitute_the_requirement_name() {
  let when = When::new(WhenRequirement::Future).with_message("the deadline has to lie in the {when}");
  let values = [FieldValue::Timestamp(Timestamp::new(T0_SECONDS - 60, Nanosecond::ZERO))];
  let violation = check_field(&when, "order.deadline", &values, &frozen_clock()).unwrap().unwrap();
  assert_eq!(violation.message(), "the deadline has to lie in the future");
}
