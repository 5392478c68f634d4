#![allow(deprecated, reason = "deprecated value types keep their registry entries")]

use crate::{
  calendar::{
    Date, DateTime, Month, OffsetDateTime, OffsetTime, Time, Timestamp, Weekday, YearMonth,
    ZoneId, ZoneOffset, ZonedDateTime,
  },
  convert::Stringify,
  temporal::{CalendarKind, CalendarValue},
};
use core::marker::PhantomData;
use std::sync::OnceLock;

static REGISTRY: OnceLock<Vec<Box<dyn AnyStringifier>>> = OnceLock::new();

/// Type-erased [`Stringify`] discoverable by generic (de)serialization code that does not know
/// concrete types ahead of time.
pub trait AnyStringifier: Send + Sync {
  /// Kind handled by this stringifier
  fn kind(&self) -> CalendarKind;

  /// Canonical text of a generically received value. Fails when `value` carries another kind.
  fn to_text_any(&self, value: &CalendarValue) -> crate::Result<String>;

  /// Parses the canonical text into a generically returned value.
  fn from_text_any(&self, input: &str) -> crate::Result<CalendarValue>;
}

struct Entry<V> {
  kind: CalendarKind,
  phantom: PhantomData<fn() -> V>,
}

impl<V> AnyStringifier for Entry<V>
where
  V: Into<CalendarValue> + Stringify + TryFrom<CalendarValue, Error = crate::Error>,
{
  #[inline]
  fn kind(&self) -> CalendarKind {
    self.kind
  }

  #[inline]
  fn to_text_any(&self, value: &CalendarValue) -> crate::Result<String> {
    V::try_from(*value)?.to_text()
  }

  #[inline]
  fn from_text_any(&self, input: &str) -> crate::Result<CalendarValue> {
    Ok(V::from_text(input)?.into())
  }
}

/// All registered stringifiers. The table is built at the first call and is immutable
/// afterwards.
#[inline]
pub fn registry() -> &'static [Box<dyn AnyStringifier>] {
  fn entry<V>(kind: CalendarKind) -> Box<dyn AnyStringifier>
  where
    V: Into<CalendarValue> + Stringify + TryFrom<CalendarValue, Error = crate::Error> + 'static,
  {
    Box::new(Entry::<V> { kind, phantom: PhantomData })
  }

  REGISTRY.get_or_init(|| {
    vec![
      entry::<Date>(CalendarKind::Date),
      entry::<DateTime>(CalendarKind::DateTime),
      entry::<Month>(CalendarKind::Month),
      entry::<OffsetDateTime>(CalendarKind::OffsetDateTime),
      entry::<OffsetTime>(CalendarKind::OffsetTime),
      entry::<Time>(CalendarKind::Time),
      entry::<Timestamp>(CalendarKind::Timestamp),
      entry::<Weekday>(CalendarKind::Weekday),
      entry::<YearMonth>(CalendarKind::YearMonth),
      entry::<ZoneId>(CalendarKind::ZoneId),
      entry::<ZoneOffset>(CalendarKind::ZoneOffset),
      entry::<ZonedDateTime>(CalendarKind::ZonedDateTime),
    ]
  })
}

/// Stringifier registered for the given `kind`, if any.
#[inline]
pub fn stringifier(kind: CalendarKind) -> Option<&'static dyn AnyStringifier> {
  registry().iter().find(|elem| elem.kind() == kind).map(|elem| &**elem)
}

#[cfg(test)]
mod tests {
  use crate::{
    calendar::{CalendarError, Time, Timestamp},
    convert::{registry, stringifier},
    temporal::{CalendarKind, CalendarValue},
  };

  #[test]
  fn every_kind_has_a_registered_stringifier() {
    let kinds = [
      CalendarKind::Date,
      CalendarKind::DateTime,
      CalendarKind::Month,
      CalendarKind::OffsetDateTime,
      CalendarKind::OffsetTime,
      CalendarKind::Time,
      CalendarKind::Timestamp,
      CalendarKind::Weekday,
      CalendarKind::YearMonth,
      CalendarKind::ZoneId,
      CalendarKind::ZoneOffset,
      CalendarKind::ZonedDateTime,
    ];
    assert_eq!(registry().len(), kinds.len());
    for kind in kinds {
      assert_eq!(stringifier(kind).unwrap().kind(), kind);
    }
  }

  #[test]
  fn erased_stringifiers_round_trip_without_concrete_types() {
    let value = CalendarValue::Timestamp(Timestamp::ZERO);
    let entry = stringifier(CalendarKind::Timestamp).unwrap();
    let text = entry.to_text_any(&value).unwrap();
    assert_eq!(text, "1970-01-01T00:00:00Z");
    assert_eq!(entry.from_text_any(&text).unwrap(), value);
  }

  #[test]
  fn erased_stringifiers_reject_values_of_other_kinds() {
    let entry = stringifier(CalendarKind::Date).unwrap();
    assert!(matches!(
      entry.to_text_any(&CalendarValue::Time(Time::ZERO)),
      Err(crate::Error::CalendarError(CalendarError::UnexpectedKind {
        expected: CalendarKind::Date,
        received: CalendarKind::Time,
      }))
    ));
  }
}
