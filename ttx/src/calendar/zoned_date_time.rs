#[cfg(test)]
mod tests;

use crate::calendar::{DateTime, ZoneId};
use core::fmt::{Debug, Display, Formatter};

/// Calendar date and clock time bound to an IANA time zone.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ZonedDateTime {
  date_time: DateTime,
  zone: ZoneId,
}

impl ZonedDateTime {
  /// Instance with the all-zero wire value, which does not stand for a concrete point in time.
  pub const ZERO: Self = Self::new(DateTime::ZERO, ZoneId::UTC);

  /// New instance from basic parameters
  #[inline]
  pub const fn new(date_time: DateTime, zone: ZoneId) -> Self {
    Self { date_time, zone }
  }

  /// See [`DateTime`].
  #[inline]
  pub const fn date_time(self) -> DateTime {
    self.date_time
  }

  /// If the instance carries the all-zero wire value. Such a value is indistinguishable from an
  /// absent one and is rejected by every operation that demands a concrete point in time.
  #[inline]
  pub fn is_zero(self) -> bool {
    self.date_time == DateTime::ZERO
  }

  /// See [`ZoneId`].
  #[inline]
  pub const fn zone(self) -> ZoneId {
    self.zone
  }
}

impl Debug for ZonedDateTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Default for ZonedDateTime {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

impl Display for ZonedDateTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}[{}]", self.date_time, self.zone)
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::{calendar::ZonedDateTime, convert::Stringify};
  use core::fmt;
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Visitor},
  };

  impl<'de> Deserialize<'de> for ZonedDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      struct LocalVisitor;

      impl Visitor<'_> for LocalVisitor {
        type Value = ZonedDateTime;

        #[inline]
        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
          formatter.write_str("a formatted date and time string with a zone designator")
        }

        #[inline]
        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
          E: Error,
        {
          ZonedDateTime::from_text(value).map_err(E::custom)
        }
      }

      deserializer.deserialize_str(LocalVisitor)
    }
  }

  impl Serialize for ZonedDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      serializer.serialize_str(&self.to_text().map_err(serde::ser::Error::custom)?)
    }
  }
}
