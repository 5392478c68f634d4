use crate::calendar::CalendarError;

/// Day of the week.
///
/// The zero ordinal of the wire representation marks an absent weekday and is rejected at
/// construction.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Weekday {
  /// First day starting at Monday according to the ISO-8601 specification.
  Monday = 1,
  /// Second day
  Tuesday = 2,
  /// Third day
  Wednesday = 3,
  /// Fourth day
  Thursday = 4,
  /// Fifth day
  Friday = 5,
  /// Sixth day
  Saturday = 6,
  /// Seventh day
  Sunday = 7,
}

impl Weekday {
  /// Creates a new instance from a valid `num` number.
  #[inline]
  pub const fn from_num(num: u8) -> Result<Self, CalendarError> {
    Ok(match num {
      1 => Self::Monday,
      2 => Self::Tuesday,
      3 => Self::Wednesday,
      4 => Self::Thursday,
      5 => Self::Friday,
      6 => Self::Saturday,
      7 => Self::Sunday,
      _ => return Err(CalendarError::InvalidWeekday { received: Some(num) }),
    })
  }

  /// Capitalized English name
  #[inline]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Monday => "Monday",
      Self::Tuesday => "Tuesday",
      Self::Wednesday => "Wednesday",
      Self::Thursday => "Thursday",
      Self::Friday => "Friday",
      Self::Saturday => "Saturday",
      Self::Sunday => "Sunday",
    }
  }

  /// Integer representation starting at Monday
  #[inline]
  pub const fn num(self) -> u8 {
    self as u8
  }
}

impl TryFrom<u8> for Weekday {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: u8) -> Result<Self, Self::Error> {
    Ok(Self::from_num(from)?)
  }
}
