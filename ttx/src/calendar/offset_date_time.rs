use crate::calendar::{DateTime, ZoneOffset};
use core::fmt::{Debug, Display, Formatter};

/// Calendar date and clock time displaced from UTC by a fixed offset.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OffsetDateTime {
  date_time: DateTime,
  offset: ZoneOffset,
}

impl OffsetDateTime {
  /// Instance with the all-zero wire value
  pub const ZERO: Self = Self::new(DateTime::ZERO, ZoneOffset::UTC);

  /// New instance from basic parameters
  #[inline]
  pub const fn new(date_time: DateTime, offset: ZoneOffset) -> Self {
    Self { date_time, offset }
  }

  /// See [`DateTime`].
  #[inline]
  pub const fn date_time(self) -> DateTime {
    self.date_time
  }

  /// See [`ZoneOffset`].
  #[inline]
  pub const fn offset(self) -> ZoneOffset {
    self.offset
  }
}

impl Debug for OffsetDateTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Default for OffsetDateTime {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

impl Display for OffsetDateTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}{}", self.date_time, self.offset)
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::{calendar::OffsetDateTime, convert::Stringify};
  use core::fmt;
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Visitor},
  };

  impl<'de> Deserialize<'de> for OffsetDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      struct LocalVisitor;

      impl Visitor<'_> for LocalVisitor {
        type Value = OffsetDateTime;

        #[inline]
        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
          formatter.write_str("a formatted date and time string with an offset")
        }

        #[inline]
        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
          E: Error,
        {
          OffsetDateTime::from_text(value).map_err(E::custom)
        }
      }

      deserializer.deserialize_str(LocalVisitor)
    }
  }

  impl Serialize for OffsetDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      serializer.serialize_str(&self.to_text().map_err(serde::ser::Error::custom)?)
    }
  }
}
