use crate::calendar::CalendarError;

/// Proleptic Gregorian calendar year.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Year(i16);

impl Year {
  /// Instance that refers the common era (0001)
  pub const CE: Self = Self(1);
  /// Instance that refers the UNIX epoch (1970)
  pub const EPOCH: Self = Self(1970);
  /// Instance with the maximum allowed value of `32766`
  pub const MAX: Self = Self(32766);
  /// Instance with the minimum allowed value of `-32767`
  pub const MIN: Self = Self(-32767);
  /// Instance with the all-zero wire value
  pub const ZERO: Self = Self(0);

  /// Creates a new instance from a valid `num` number.
  #[inline]
  pub const fn from_num(num: i16) -> Result<Self, CalendarError> {
    if num < Self::MIN.0 || num > Self::MAX.0 {
      return Err(CalendarError::InvalidYear { received: num as i32 });
    }
    Ok(Self(num))
  }

  /// A leap year has 366 days instead of the usual 365.
  #[inline]
  pub const fn is_leap_year(self) -> bool {
    (self.0 % 4 == 0 && self.0 % 100 != 0) || self.0 % 400 == 0
  }

  /// Integer representation
  #[inline]
  pub const fn num(self) -> i16 {
    self.0
  }
}

impl TryFrom<i16> for Year {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: i16) -> Result<Self, Self::Error> {
    Ok(Self::from_num(from)?)
  }
}

impl TryFrom<i32> for Year {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: i32) -> Result<Self, Self::Error> {
    let Ok(narrow) = i16::try_from(from) else {
      return Err(CalendarError::InvalidYear { received: from }.into());
    };
    Ok(Self::from_num(narrow)?)
  }
}
