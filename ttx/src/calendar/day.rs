use crate::calendar::CalendarError;

/// Day of the month.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Day(u8);

impl Day {
  /// Instance with the maximum allowed value of `31`
  pub const MAX: Self = Self(31);
  /// Instance with the minimum allowed value of `1`
  pub const ONE: Self = Self(1);

  /// Creates a new instance from a valid `num` number.
  #[inline]
  pub const fn from_num(num: u8) -> Result<Self, CalendarError> {
    if num < 1 || num > 31 {
      return Err(CalendarError::InvalidDay { received: num });
    }
    Ok(Self(num))
  }

  /// Integer representation
  #[inline]
  pub const fn num(self) -> u8 {
    self.0
  }
}

impl TryFrom<u8> for Day {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: u8) -> Result<Self, Self::Error> {
    Ok(Self::from_num(from)?)
  }
}
