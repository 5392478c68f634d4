#[cfg(test)]
mod tests;

use crate::{
  calendar::{CalendarError, Date, Instant, Time},
  clock::Clock,
};
use core::fmt::{Debug, Display, Formatter};

/// Calendar date combined with a clock time, without any zone or offset information.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateTime {
  date: Date,
  time: Time,
}

impl DateTime {
  /// Instance that refers the UNIX epoch (1970-01-01).
  pub const EPOCH: Self = Self::new(Date::EPOCH, Time::ZERO);
  /// Instance with the maximum allowed value of `32766-12-31 23:59:59.999_999_999`
  pub const MAX: Self = Self::new(Date::MAX, Time::MAX);
  /// Instance with the minimum allowed value of `-32767-01-01 00:00:00.000_000_000`
  pub const MIN: Self = Self::new(Date::MIN, Time::ZERO);
  /// Instance with the all-zero wire value of `0000-01-01 00:00:00.000_000_000`
  pub const ZERO: Self = Self::new(Date::ZERO, Time::ZERO);

  /// New instance from basic parameters
  #[inline]
  pub const fn new(date: Date, time: Time) -> Self {
    Self { date, time }
  }

  /// New instance from the UTC interpretation of the given `instant`.
  #[inline]
  pub fn from_instant(instant: Instant) -> crate::Result<Self> {
    use crate::convert::NativeConvert;
    let native = chrono::DateTime::from_timestamp(instant.seconds(), instant.nanosecond().num())
      .ok_or(CalendarError::InvalidTimestamp)?;
    Self::from_native(native.naive_utc())
  }

  /// New instance with the current date and time in UTC.
  #[inline]
  pub fn now<C>(clock: &C) -> crate::Result<Self>
  where
    C: Clock,
  {
    Self::from_instant(clock.now())
  }

  /// See [`Date`].
  #[inline]
  pub const fn date(self) -> Date {
    self.date
  }

  /// See [`Time`].
  #[inline]
  pub const fn time(self) -> Time {
    self.time
  }

  pub(crate) fn native(self) -> chrono::NaiveDateTime {
    chrono::NaiveDateTime::new(self.date.native(), self.time.native())
  }
}

impl Debug for DateTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Default for DateTime {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

impl Display for DateTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", self.native().format("%Y-%m-%dT%H:%M:%S%.f"))
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::{calendar::DateTime, convert::Stringify};
  use core::fmt;
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Visitor},
  };

  impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      struct LocalVisitor;

      impl Visitor<'_> for LocalVisitor {
        type Value = DateTime;

        #[inline]
        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
          formatter.write_str("a formatted date and time string")
        }

        #[inline]
        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
          E: Error,
        {
          DateTime::from_text(value).map_err(E::custom)
        }
      }

      deserializer.deserialize_str(LocalVisitor)
    }
  }

  impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      serializer.serialize_str(&self.to_text().map_err(serde::ser::Error::custom)?)
    }
  }
}
