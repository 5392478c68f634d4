use crate::calendar::CalendarError;

/// Month of the year.
///
/// The zero ordinal of the wire representation marks an absent month and is rejected at
/// construction.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Month {
  /// First month
  January = 1,
  /// Second month
  February = 2,
  /// Third month
  March = 3,
  /// Fourth month
  April = 4,
  /// Fifth month
  May = 5,
  /// Sixth month
  June = 6,
  /// Seventh month
  July = 7,
  /// Eighth month
  August = 8,
  /// Ninth month
  September = 9,
  /// Tenth month
  October = 10,
  /// Eleventh month
  November = 11,
  /// Twelfth month
  December = 12,
}

impl Month {
  /// Creates a new instance from a valid `num` number.
  #[inline]
  pub const fn from_num(num: u8) -> Result<Self, CalendarError> {
    Ok(match num {
      1 => Self::January,
      2 => Self::February,
      3 => Self::March,
      4 => Self::April,
      5 => Self::May,
      6 => Self::June,
      7 => Self::July,
      8 => Self::August,
      9 => Self::September,
      10 => Self::October,
      11 => Self::November,
      12 => Self::December,
      _ => return Err(CalendarError::InvalidMonth { received: Some(num) }),
    })
  }

  /// Number of days of this month in a year with the given leap characteristic.
  #[inline]
  pub const fn days(self, is_leap_year: bool) -> u8 {
    match self {
      Self::January
      | Self::March
      | Self::May
      | Self::July
      | Self::August
      | Self::October
      | Self::December => 31,
      Self::April | Self::June | Self::September | Self::November => 30,
      Self::February => {
        if is_leap_year {
          29
        } else {
          28
        }
      }
    }
  }

  /// Capitalized English name
  #[inline]
  pub const fn name(self) -> &'static str {
    match self {
      Self::January => "January",
      Self::February => "February",
      Self::March => "March",
      Self::April => "April",
      Self::May => "May",
      Self::June => "June",
      Self::July => "July",
      Self::August => "August",
      Self::September => "September",
      Self::October => "October",
      Self::November => "November",
      Self::December => "December",
    }
  }

  /// Integer representation
  #[inline]
  pub const fn num(self) -> u8 {
    self as u8
  }
}

impl TryFrom<u8> for Month {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: u8) -> Result<Self, Self::Error> {
    Ok(Self::from_num(from)?)
  }
}
