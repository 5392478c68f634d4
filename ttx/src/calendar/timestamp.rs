use crate::{
  calendar::{CalendarError, Instant, Nanosecond},
  clock::Clock,
  convert::Stringify,
};
use core::fmt::{Debug, Display, Formatter};

/// Wire instant with nanosecond precision.
///
/// Carries the same components of [`Instant`] but exists as a value type of its own so that it
/// can travel through the conversion layer, the stringifier registry and the validation
/// constraint like any other calendar value.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp {
  seconds: i64,
  nanosecond: Nanosecond,
}

impl Timestamp {
  /// Instance with the all-zero wire value, which refers the UNIX epoch (1970-01-01).
  pub const ZERO: Self = Self { seconds: 0, nanosecond: Nanosecond::ZERO };

  /// New instance from the number of whole seconds since the UNIX epoch alongside the
  /// sub-second remainder.
  #[inline]
  pub const fn new(seconds: i64, nanosecond: Nanosecond) -> Self {
    Self { seconds, nanosecond }
  }

  /// New instance with the current reading of the given `clock`.
  #[inline]
  pub fn now<C>(clock: &C) -> Self
  where
    C: Clock,
  {
    clock.now().into()
  }

  /// Parses the web-safe form produced by [`Timestamp::to_web_safe_text`].
  #[inline]
  pub fn from_web_safe_text(input: &str) -> crate::Result<Self> {
    let mut bytes = Vec::from(input.as_bytes());
    restore_separators(&mut bytes)?;
    let text = String::from_utf8(bytes).map_err(|_err| CalendarError::InvalidWebSafeTimestamp)?;
    Self::from_text(&text)
  }

  /// Sub-second remainder
  #[inline]
  pub const fn nanosecond(self) -> Nanosecond {
    self.nanosecond
  }

  /// Number of whole seconds since the UNIX epoch
  #[inline]
  pub const fn seconds(self) -> i64 {
    self.seconds
  }

  /// Canonical text with the time separators replaced by dashes, suitable for identifiers in
  /// places where colons are not allowed.
  #[inline]
  pub fn to_web_safe_text(self) -> crate::Result<String> {
    let mut bytes = self.to_text()?.into_bytes();
    replace_separators(&mut bytes)?;
    String::from_utf8(bytes).map_err(|_err| CalendarError::InvalidWebSafeTimestamp.into())
  }
}

impl Debug for Timestamp {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Timestamp")
      .field("seconds", &self.seconds)
      .field("nanosecond", &self.nanosecond.num())
      .finish()
  }
}

impl Display for Timestamp {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    match self.to_text() {
      Ok(elem) => f.write_str(&elem),
      Err(_) => <Self as Debug>::fmt(self, f),
    }
  }
}

impl From<Instant> for Timestamp {
  #[inline]
  fn from(from: Instant) -> Self {
    Self { seconds: from.seconds(), nanosecond: from.nanosecond() }
  }
}

impl From<Timestamp> for Instant {
  #[inline]
  fn from(from: Timestamp) -> Self {
    Self::new(from.seconds, from.nanosecond)
  }
}

// The canonical form is `<date>T<time>Z` with a four digit year, which places the time
// separators at the fixed offsets 13 and 16.
fn replace_separators(bytes: &mut [u8]) -> crate::Result<()> {
  swap_at(bytes, 13, b':', b'-')?;
  swap_at(bytes, 16, b':', b'-')
}

fn restore_separators(bytes: &mut [u8]) -> crate::Result<()> {
  swap_at(bytes, 13, b'-', b':')?;
  swap_at(bytes, 16, b'-', b':')
}

fn swap_at(bytes: &mut [u8], idx: usize, expected: u8, desired: u8) -> crate::Result<()> {
  let Some(elem) = bytes.get_mut(idx) else {
    return Err(CalendarError::InvalidWebSafeTimestamp.into());
  };
  if *elem != expected {
    return Err(CalendarError::InvalidWebSafeTimestamp.into());
  }
  *elem = desired;
  Ok(())
}


#[cfg(feature = "serde")]
mod serde {
  use crate::{calendar::Timestamp, convert::Stringify};
  use core::fmt;
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Visitor},
  };

  impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      struct LocalVisitor;

      impl Visitor<'_> for LocalVisitor {
        type Value = Timestamp;

        #[inline]
        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
          formatter.write_str("a formatted timestamp string")
        }

        #[inline]
        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
          E: Error,
        {
          Timestamp::from_text(value).map_err(E::custom)
        }
      }

      deserializer.deserialize_str(LocalVisitor)
    }
  }

  impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      serializer.serialize_str(&self.to_text().map_err(serde::ser::Error::custom)?)
    }
  }
}
