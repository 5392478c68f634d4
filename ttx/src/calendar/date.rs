#[cfg(test)]
mod tests;

use crate::calendar::{CalendarError, Day, Month, Weekday, Year};
use chrono::Datelike;
use core::{
  fmt::{Debug, Display, Formatter},
  hint::unreachable_unchecked,
};

/// Proleptic Gregorian calendar date.
///
/// Can represent years from -32767 to +32766.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date {
  year: Year,
  month: Month,
  day: Day,
}

impl Date {
  /// Instance that refers the common era (0001-01-01).
  pub const CE: Self = if let Ok(elem) = Self::from_ymd(Year::CE, Month::January, Day::ONE) {
    elem
  } else {
    panic!();
  };
  /// Instance that refers the UNIX epoch (1970-01-01).
  pub const EPOCH: Self = if let Ok(elem) = Self::from_ymd(Year::EPOCH, Month::January, Day::ONE) {
    elem
  } else {
    panic!();
  };
  /// Instance with the maximum allowed value of `32766-12-31`
  pub const MAX: Self = if let Ok(elem) = Self::from_ymd(Year::MAX, Month::December, Day::MAX) {
    elem
  } else {
    panic!();
  };
  /// Instance with the minimum allowed value of `-32767-01-01`
  pub const MIN: Self = if let Ok(elem) = Self::from_ymd(Year::MIN, Month::January, Day::ONE) {
    elem
  } else {
    panic!();
  };
  /// Instance with the all-zero wire value of `0000-01-01`
  pub const ZERO: Self = if let Ok(elem) = Self::from_ymd(Year::ZERO, Month::January, Day::ONE) {
    elem
  } else {
    panic!();
  };

  /// Constructs a new instance that automatically deals with leap years.
  #[inline]
  pub const fn from_ymd(year: Year, month: Month, day: Day) -> Result<Self, CalendarError> {
    let days_in_month = month.days(year.is_leap_year());
    if day.num() > days_in_month {
      return Err(CalendarError::InvalidDayForMonth { received: day.num(), days_in_month });
    }
    Ok(Self { year, month, day })
  }

  /// Day of the month
  #[inline]
  pub const fn day(self) -> Day {
    self.day
  }

  /// Month of the year
  #[inline]
  pub const fn month(self) -> Month {
    self.month
  }

  /// Day of week
  #[inline]
  pub fn weekday(self) -> Weekday {
    match self.native().weekday() {
      chrono::Weekday::Mon => Weekday::Monday,
      chrono::Weekday::Tue => Weekday::Tuesday,
      chrono::Weekday::Wed => Weekday::Wednesday,
      chrono::Weekday::Thu => Weekday::Thursday,
      chrono::Weekday::Fri => Weekday::Friday,
      chrono::Weekday::Sat => Weekday::Saturday,
      chrono::Weekday::Sun => Weekday::Sunday,
    }
  }

  /// Year
  #[inline]
  pub const fn year(self) -> Year {
    self.year
  }

  pub(crate) fn native(self) -> chrono::NaiveDate {
    let year = i32::from(self.year.num());
    let month = u32::from(self.month.num());
    let day = u32::from(self.day.num());
    match chrono::NaiveDate::from_ymd_opt(year, month, day) {
      Some(elem) => elem,
      // SAFETY: construction validates the triple within the range supported by the native
      // counterpart
      None => unsafe { unreachable_unchecked() },
    }
  }
}

impl Debug for Date {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Default for Date {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

impl Display for Date {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", self.native().format("%Y-%m-%d"))
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::{calendar::Date, convert::Stringify};
  use core::fmt;
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Visitor},
  };

  impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      struct LocalVisitor;

      impl Visitor<'_> for LocalVisitor {
        type Value = Date;

        #[inline]
        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
          formatter.write_str("a formatted date string")
        }

        #[inline]
        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
          E: Error,
        {
          Date::from_text(value).map_err(E::custom)
        }
      }

      deserializer.deserialize_str(LocalVisitor)
    }
  }

  impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      serializer.serialize_str(&self.to_text().map_err(serde::ser::Error::custom)?)
    }
  }
}
