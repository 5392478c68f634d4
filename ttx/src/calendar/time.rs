#[cfg(test)]
mod tests;

use crate::calendar::{Hour, Minute, Nanosecond, Second};
use core::{
  fmt::{Debug, Display, Formatter},
  hint::unreachable_unchecked,
};

/// Clock time with nanosecond precision.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Time {
  hour: Hour,
  minute: Minute,
  second: Second,
  nanosecond: Nanosecond,
}

impl Time {
  /// Instance with the maximum allowed value of `23:59:59.999_999_999`
  pub const MAX: Self = Self::from_hms_ns(Hour::MAX, Minute::MAX, Second::MAX, Nanosecond::MAX);
  /// Instance with the minimum allowed value of `00:00:00.000_000_000`
  pub const ZERO: Self = Self::from_hms(Hour::ZERO, Minute::ZERO, Second::ZERO);

  /// New instance without nanosecond precision.
  #[inline]
  pub const fn from_hms(hour: Hour, minute: Minute, second: Second) -> Self {
    Self { hour, minute, second, nanosecond: Nanosecond::ZERO }
  }

  /// New instance with nanosecond precision.
  #[inline]
  pub const fn from_hms_ns(
    hour: Hour,
    minute: Minute,
    second: Second,
    nanosecond: Nanosecond,
  ) -> Self {
    Self { hour, minute, second, nanosecond }
  }

  /// Hour of the day
  #[inline]
  pub const fn hour(self) -> Hour {
    self.hour
  }

  /// Minute of the hour
  #[inline]
  pub const fn minute(self) -> Minute {
    self.minute
  }

  /// Nanosecond of the second
  #[inline]
  pub const fn nanosecond(self) -> Nanosecond {
    self.nanosecond
  }

  /// Second of the minute
  #[inline]
  pub const fn second(self) -> Second {
    self.second
  }

  pub(crate) fn native(self) -> chrono::NaiveTime {
    let hour = u32::from(self.hour.num());
    let minute = u32::from(self.minute.num());
    let second = u32::from(self.second.num());
    match chrono::NaiveTime::from_hms_nano_opt(hour, minute, second, self.nanosecond.num()) {
      Some(elem) => elem,
      // SAFETY: all components are validated at construction
      None => unsafe { unreachable_unchecked() },
    }
  }
}

impl Debug for Time {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Default for Time {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

impl Display for Time {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", self.native().format("%H:%M:%S%.f"))
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::{calendar::Time, convert::Stringify};
  use core::fmt;
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Visitor},
  };

  impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      struct LocalVisitor;

      impl Visitor<'_> for LocalVisitor {
        type Value = Time;

        #[inline]
        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
          formatter.write_str("a formatted time string")
        }

        #[inline]
        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
          E: Error,
        {
          Time::from_text(value).map_err(E::custom)
        }
      }

      deserializer.deserialize_str(LocalVisitor)
    }
  }

  impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      serializer.serialize_str(&self.to_text().map_err(serde::ser::Error::custom)?)
    }
  }
}
