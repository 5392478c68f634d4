#![allow(deprecated, reason = "deprecated value types still travel through the generic layer")]

use crate::{
  calendar::{
    CalendarError, Date, DateTime, Instant, Month, OffsetDateTime, OffsetTime, Time, Timestamp,
    Weekday, YearMonth, ZoneId, ZoneOffset, ZonedDateTime,
  },
  temporal::{CalendarKind, Temporal},
};
use core::cmp::Ordering;

/// Closed sum of every calendar value type.
///
/// Generic code that receives values of unknown concrete types operates over this structure
/// instead of inspecting runtime types in an open-ended way.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CalendarValue {
  /// See [`Date`]
  Date(Date),
  /// See [`DateTime`]
  DateTime(DateTime),
  /// See [`Month`]
  Month(Month),
  /// See [`OffsetDateTime`]
  OffsetDateTime(OffsetDateTime),
  /// See [`OffsetTime`]
  OffsetTime(OffsetTime),
  /// See [`Time`]
  Time(Time),
  /// See [`Timestamp`]
  Timestamp(Timestamp),
  /// See [`Weekday`]
  Weekday(Weekday),
  /// See [`YearMonth`]
  YearMonth(YearMonth),
  /// See [`ZoneId`]
  ZoneId(ZoneId),
  /// See [`ZoneOffset`]
  ZoneOffset(ZoneOffset),
  /// See [`ZonedDateTime`]
  ZonedDateTime(ZonedDateTime),
}

impl CalendarValue {
  /// If the underlying concrete type is able to produce a canonical instant.
  #[inline]
  pub const fn is_point_in_time(&self) -> bool {
    matches!(
      self,
      Self::Date(_)
        | Self::DateTime(_)
        | Self::OffsetDateTime(_)
        | Self::Timestamp(_)
        | Self::YearMonth(_)
        | Self::ZonedDateTime(_)
    )
  }
}

impl Temporal for CalendarValue {
  #[inline]
  fn kind(&self) -> CalendarKind {
    match self {
      Self::Date(_) => CalendarKind::Date,
      Self::DateTime(_) => CalendarKind::DateTime,
      Self::Month(_) => CalendarKind::Month,
      Self::OffsetDateTime(_) => CalendarKind::OffsetDateTime,
      Self::OffsetTime(_) => CalendarKind::OffsetTime,
      Self::Time(_) => CalendarKind::Time,
      Self::Timestamp(_) => CalendarKind::Timestamp,
      Self::Weekday(_) => CalendarKind::Weekday,
      Self::YearMonth(_) => CalendarKind::YearMonth,
      Self::ZoneId(_) => CalendarKind::ZoneId,
      Self::ZoneOffset(_) => CalendarKind::ZoneOffset,
      Self::ZonedDateTime(_) => CalendarKind::ZonedDateTime,
    }
  }

  #[inline]
  fn to_instant(&self) -> crate::Result<Instant> {
    match self {
      Self::Date(elem) => elem.to_instant(),
      Self::DateTime(elem) => elem.to_instant(),
      Self::OffsetDateTime(elem) => elem.to_instant(),
      Self::Timestamp(elem) => elem.to_instant(),
      Self::YearMonth(elem) => elem.to_instant(),
      Self::ZonedDateTime(elem) => elem.to_instant(),
      Self::Month(_) | Self::OffsetTime(_) | Self::Time(_) | Self::Weekday(_) | Self::ZoneId(_)
      | Self::ZoneOffset(_) => Err(CalendarError::NotAPointInTime(self.kind()).into()),
    }
  }

  /// Dynamic comparison demands identical concrete kinds before any value inspection, with the
  /// exception of the wire instant that is comparable against everything.
  #[inline]
  fn compare_to(&self, other: &Self) -> crate::Result<Ordering> {
    let lhs = self.kind();
    let rhs = other.kind();
    let either_is_wire = lhs == CalendarKind::Timestamp || rhs == CalendarKind::Timestamp;
    if lhs != rhs && !either_is_wire {
      return Err(CalendarError::KindMismatch { lhs, rhs }.into());
    }
    Ok(self.to_instant()?.cmp(&other.to_instant()?))
  }
}

macro_rules! value_conversions {
  ($(($variant:ident, $ty:ty)),* $(,)?) => {
    $(
      impl From<$ty> for CalendarValue {
        #[inline]
        fn from(from: $ty) -> Self {
          Self::$variant(from)
        }
      }

      impl TryFrom<CalendarValue> for $ty {
        type Error = crate::Error;

        #[inline]
        fn try_from(from: CalendarValue) -> Result<Self, Self::Error> {
          match from {
            CalendarValue::$variant(elem) => Ok(elem),
            _ => Err(
              CalendarError::UnexpectedKind {
                expected: CalendarKind::$variant,
                received: from.kind(),
              }
              .into(),
            ),
          }
        }
      }
    )*
  };
}

value_conversions!(
  (Date, Date),
  (DateTime, DateTime),
  (Month, Month),
  (OffsetDateTime, OffsetDateTime),
  (OffsetTime, OffsetTime),
  (Time, Time),
  (Timestamp, Timestamp),
  (Weekday, Weekday),
  (YearMonth, YearMonth),
  (ZoneId, ZoneId),
  (ZoneOffset, ZoneOffset),
  (ZonedDateTime, ZonedDateTime),
);
