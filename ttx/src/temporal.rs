//! Cross-type point-in-time capability.

mod kind;
#[cfg(test)]
mod tests;
mod value;

pub use kind::CalendarKind;
pub use value::CalendarValue;

use crate::{
  calendar::{CalendarError, Date, DateTime, Day, Instant, OffsetDateTime, Timestamp, YearMonth, ZonedDateTime},
  clock::Clock,
  convert::NativeConvert,
};
use core::cmp::Ordering;

/// Capability of producing a canonical [`Instant`] alongside the comparison and relative-time
/// operations derived from it.
///
/// Values of a coarser precision round down to the start of the period they represent, e.g. a
/// [`YearMonth`] produces the first nanosecond of the first day of the month in UTC.
pub trait Temporal {
  /// Concrete kind of the implementation
  fn kind(&self) -> CalendarKind;

  /// Canonical instant. The one required primitive, everything else is derived.
  fn to_instant(&self) -> crate::Result<Instant>;

  /// Compares two values of the same concrete type.
  #[inline]
  fn compare_to(&self, other: &Self) -> crate::Result<Ordering>
  where
    Self: Sized,
  {
    Ok(self.to_instant()?.cmp(&other.to_instant()?))
  }

  /// Compares against a raw instant or against the wire instant.
  #[inline]
  fn compare_instant(&self, other: impl Into<Instant>) -> crate::Result<Ordering>
  where
    Self: Sized,
  {
    Ok(self.to_instant()?.cmp(&other.into()))
  }

  /// If this value comes strictly before `other`.
  #[inline]
  fn is_before(&self, other: &Self) -> crate::Result<bool>
  where
    Self: Sized,
  {
    Ok(self.compare_to(other)? == Ordering::Less)
  }

  /// If this value comes strictly before the given instant.
  #[inline]
  fn is_before_instant(&self, other: impl Into<Instant>) -> crate::Result<bool>
  where
    Self: Sized,
  {
    Ok(self.compare_instant(other)? == Ordering::Less)
  }

  /// If this value comes before `other` or refers the same instant.
  #[inline]
  fn is_before_or_same_as(&self, other: &Self) -> crate::Result<bool>
  where
    Self: Sized,
  {
    Ok(self.compare_to(other)? != Ordering::Greater)
  }

  /// If this value comes before the given instant or refers the same one.
  #[inline]
  fn is_before_or_same_as_instant(&self, other: impl Into<Instant>) -> crate::Result<bool>
  where
    Self: Sized,
  {
    Ok(self.compare_instant(other)? != Ordering::Greater)
  }

  /// If this value refers the same instant of `other`.
  #[inline]
  fn is_same_as(&self, other: &Self) -> crate::Result<bool>
  where
    Self: Sized,
  {
    Ok(self.compare_to(other)? == Ordering::Equal)
  }

  /// If this value refers the given instant.
  #[inline]
  fn is_same_as_instant(&self, other: impl Into<Instant>) -> crate::Result<bool>
  where
    Self: Sized,
  {
    Ok(self.compare_instant(other)? == Ordering::Equal)
  }

  /// If this value comes strictly after `other`.
  #[inline]
  fn is_after(&self, other: &Self) -> crate::Result<bool>
  where
    Self: Sized,
  {
    Ok(self.compare_to(other)? == Ordering::Greater)
  }

  /// If this value comes strictly after the given instant.
  #[inline]
  fn is_after_instant(&self, other: impl Into<Instant>) -> crate::Result<bool>
  where
    Self: Sized,
  {
    Ok(self.compare_instant(other)? == Ordering::Greater)
  }

  /// If this value comes after `other` or refers the same instant.
  #[inline]
  fn is_after_or_same_as(&self, other: &Self) -> crate::Result<bool>
  where
    Self: Sized,
  {
    Ok(self.compare_to(other)? != Ordering::Less)
  }

  /// If this value comes after the given instant or refers the same one.
  #[inline]
  fn is_after_or_same_as_instant(&self, other: impl Into<Instant>) -> crate::Result<bool>
  where
    Self: Sized,
  {
    Ok(self.compare_instant(other)? != Ordering::Less)
  }

  /// If this value lies after `start` and up to `end`.
  ///
  /// The lower bound is exclusive while the upper bound is inclusive. Fails when `start` does
  /// not come strictly before `end`.
  #[inline]
  fn is_between(&self, start: &Self, end: &Self) -> crate::Result<bool>
  where
    Self: Sized,
  {
    if start.compare_to(end)? != Ordering::Less {
      return Err(CalendarError::InvalidComparisonBounds.into());
    }
    Ok(self.is_after(start)? && self.is_before_or_same_as(end)?)
  }

  /// If this value comes strictly after the current reading of `clock`.
  #[inline]
  fn is_in_future<C>(&self, clock: &C) -> crate::Result<bool>
  where
    C: Clock,
    Self: Sized,
  {
    Ok(self.to_instant()? > clock.now())
  }

  /// If this value comes strictly before the current reading of `clock`.
  #[inline]
  fn is_in_past<C>(&self, clock: &C) -> crate::Result<bool>
  where
    C: Clock,
    Self: Sized,
  {
    Ok(self.to_instant()? < clock.now())
  }
}

impl Temporal for Date {
  #[inline]
  fn kind(&self) -> CalendarKind {
    CalendarKind::Date
  }

  #[inline]
  fn to_instant(&self) -> crate::Result<Instant> {
    DateTime::new(*self, crate::calendar::Time::ZERO).to_instant()
  }
}

impl Temporal for DateTime {
  #[inline]
  fn kind(&self) -> CalendarKind {
    CalendarKind::DateTime
  }

  #[inline]
  fn to_instant(&self) -> crate::Result<Instant> {
    let utc = self.native().and_utc();
    Ok(Instant::from_timestamp(utc.timestamp(), utc.timestamp_subsec_nanos())?)
  }
}

impl Temporal for OffsetDateTime {
  #[inline]
  fn kind(&self) -> CalendarKind {
    CalendarKind::OffsetDateTime
  }

  #[inline]
  fn to_instant(&self) -> crate::Result<Instant> {
    let native = self.to_native()?;
    Ok(Instant::from_timestamp(native.timestamp(), native.timestamp_subsec_nanos())?)
  }
}

impl Temporal for ZonedDateTime {
  #[inline]
  fn kind(&self) -> CalendarKind {
    CalendarKind::ZonedDateTime
  }

  #[inline]
  fn to_instant(&self) -> crate::Result<Instant> {
    let native = self.to_native()?;
    Ok(Instant::from_timestamp(native.timestamp(), native.timestamp_subsec_nanos())?)
  }
}

impl Temporal for YearMonth {
  #[inline]
  fn kind(&self) -> CalendarKind {
    CalendarKind::YearMonth
  }

  #[inline]
  fn to_instant(&self) -> crate::Result<Instant> {
    if self.is_zero() {
      return Err(CalendarError::ZeroValue("YearMonth").into());
    }
    Date::from_ymd(self.year(), self.month(), Day::ONE)?.to_instant()
  }
}

impl Temporal for Timestamp {
  #[inline]
  fn kind(&self) -> CalendarKind {
    CalendarKind::Timestamp
  }

  #[inline]
  fn to_instant(&self) -> crate::Result<Instant> {
    Ok((*self).into())
  }
}
