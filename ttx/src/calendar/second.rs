use crate::calendar::CalendarError;

/// Second of the minute.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Second(u8);

impl Second {
  /// Instance with the maximum allowed value of `59`
  pub const MAX: Self = Self(59);
  /// Instance with the minimum allowed value of `0`
  pub const ZERO: Self = Self(0);

  /// Creates a new instance from a valid `num` number.
  #[inline]
  pub const fn from_num(num: u8) -> Result<Self, CalendarError> {
    if num > 59 {
      return Err(CalendarError::InvalidSecond { received: num });
    }
    Ok(Self(num))
  }

  /// Integer representation
  #[inline]
  pub const fn num(self) -> u8 {
    self.0
  }
}

impl TryFrom<u8> for Second {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: u8) -> Result<Self, Self::Error> {
    Ok(Self::from_num(from)?)
  }
}
