use crate::calendar::CalendarError;

/// This particular structure can represent at most one second in nanoseconds.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Nanosecond(u32);

impl Nanosecond {
  /// Instance with the maximum allowed value of `999_999_999`
  pub const MAX: Self = Self(999_999_999);
  /// Instance with the minimum allowed value of `0`
  pub const ZERO: Self = Self(0);

  /// Creates a new instance from a valid `num` number.
  #[inline]
  pub const fn from_num(num: u32) -> Result<Self, CalendarError> {
    if num > 999_999_999 {
      return Err(CalendarError::InvalidNanosecond { received: num });
    }
    Ok(Self(num))
  }

  /// Integer representation
  #[inline]
  pub const fn num(self) -> u32 {
    self.0
  }
}

impl TryFrom<u32> for Nanosecond {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: u32) -> Result<Self, Self::Error> {
    Ok(Self::from_num(from)?)
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::calendar::Nanosecond;
  use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

  impl<'de> Deserialize<'de> for Nanosecond {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      let num = u32::deserialize(deserializer)?;
      Nanosecond::from_num(num).map_err(D::Error::custom)
    }
  }

  impl Serialize for Nanosecond {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      serializer.serialize_u32(self.num())
    }
  }
}
