use crate::calendar::{Month, Year};
use core::fmt::{Debug, Display, Formatter};

/// Year combined with a month, without a day.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct YearMonth {
  year: Year,
  month: Month,
}

impl YearMonth {
  /// Instance with the all-zero wire value, which does not stand for a concrete point in time.
  pub const ZERO: Self = Self::new(Year::ZERO, Month::January);

  /// New instance from basic parameters
  #[inline]
  pub const fn new(year: Year, month: Month) -> Self {
    Self { year, month }
  }

  /// If the instance carries the all-zero wire value. Such a value is indistinguishable from an
  /// absent one and is rejected by every operation that demands a concrete point in time.
  #[inline]
  pub fn is_zero(self) -> bool {
    self == Self::ZERO
  }

  /// See [`Month`].
  #[inline]
  pub const fn month(self) -> Month {
    self.month
  }

  /// See [`Year`].
  #[inline]
  pub const fn year(self) -> Year {
    self.year
  }
}

impl Debug for YearMonth {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Default for YearMonth {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

impl Display for YearMonth {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    let year = self.year.num();
    if year < 0 {
      write!(f, "-{:04}-{:02}", year.unsigned_abs(), self.month.num())
    } else {
      write!(f, "{:04}-{:02}", year, self.month.num())
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    calendar::{CalendarError, Month, Year, YearMonth},
    convert::{NativeConvert, Stringify},
  };

  #[test]
  fn canonical_text_round_trips() {
    let year_month = YearMonth::new(Year::from_num(2018).unwrap(), Month::June);
    assert_eq!(year_month.to_text().unwrap(), "2018-06");
    assert_eq!(YearMonth::from_text("2018-06").unwrap(), year_month);
    let ancient = YearMonth::new(Year::from_num(-44).unwrap(), Month::March);
    assert_eq!(ancient.to_text().unwrap(), "-0044-03");
    assert_eq!(YearMonth::from_text("-0044-03").unwrap(), ancient);
  }

  #[test]
  fn malformed_text_is_rejected() {
    for elem in ["", "2018", "2018-13", "2018-00", "x-06"] {
      assert!(YearMonth::from_text(elem).is_err(), "{elem}");
    }
  }

  #[test]
  fn zero_value_is_rejected_by_concrete_conversions() {
    assert!(matches!(
      YearMonth::default().to_native(),
      Err(crate::Error::CalendarError(CalendarError::ZeroValue("YearMonth")))
    ));
    assert!(matches!(
      YearMonth::ZERO.to_text(),
      Err(crate::Error::CalendarError(CalendarError::ZeroValue("YearMonth")))
    ));
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::{calendar::YearMonth, convert::Stringify};
  use core::fmt;
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Visitor},
  };

  impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      struct LocalVisitor;

      impl Visitor<'_> for LocalVisitor {
        type Value = YearMonth;

        #[inline]
        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
          formatter.write_str("a formatted year and month string")
        }

        #[inline]
        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
          E: Error,
        {
          YearMonth::from_text(value).map_err(E::custom)
        }
      }

      deserializer.deserialize_str(LocalVisitor)
    }
  }

  impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      serializer.serialize_str(&self.to_text().map_err(serde::ser::Error::custom)?)
    }
  }
}
