use crate::calendar::{
  CalendarError, MILLISECONDS_PER_SECOND, NANOSECONDS_PER_MILLISECOND, NANOSECONDS_PER_SECOND,
  SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
  misc::u32i64,
};

/// A span of time with nanosecond precision.
///
/// Differently from [`core::time::Duration`], this structure allows negative durations.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Duration {
  seconds: i64,
  nanosecond: i32,
}

impl Duration {
  /// Instance without intervals.
  pub const ZERO: Self = Self { seconds: 0, nanosecond: 0 };

  /// Creates a new instance from the specified number of days.
  #[inline]
  pub const fn from_days(days: i64) -> Result<Self, CalendarError> {
    let Some(seconds) = days.checked_mul(u32i64(SECONDS_PER_DAY)) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    Self::from_seconds(seconds)
  }

  /// Creates a new instance from the specified number of hours.
  #[inline]
  pub const fn from_hours(hours: i64) -> Result<Self, CalendarError> {
    let Some(seconds) = hours.checked_mul(SECONDS_PER_HOUR as i64) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    Self::from_seconds(seconds)
  }

  /// Creates a new instance from the specified number of milliseconds.
  #[allow(clippy::arithmetic_side_effects, reason = "divisors are constants")]
  #[allow(clippy::cast_possible_truncation, reason = "remainder is always less than one second")]
  #[inline]
  pub const fn from_milliseconds(milliseconds: i64) -> Self {
    let rest = (milliseconds % MILLISECONDS_PER_SECOND as i64) as i32;
    Self {
      seconds: milliseconds / MILLISECONDS_PER_SECOND as i64,
      nanosecond: rest.wrapping_mul(NANOSECONDS_PER_MILLISECOND.cast_signed()),
    }
  }

  /// Creates a new instance from the specified number of minutes.
  #[inline]
  pub const fn from_minutes(minutes: i64) -> Result<Self, CalendarError> {
    let Some(seconds) = minutes.checked_mul(SECONDS_PER_MINUTE as i64) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    Self::from_seconds(seconds)
  }

  /// Creates a new instance from the specified number of whole seconds.
  #[inline]
  pub const fn from_seconds(seconds: i64) -> Result<Self, CalendarError> {
    if seconds == i64::MIN {
      return Err(CalendarError::ArithmeticOverflow);
    }
    Ok(Self { seconds, nanosecond: 0 })
  }

  /// Creates a new instance from the specified number of whole seconds and additional
  /// nanoseconds.
  ///
  /// Nanoseconds that amount to one or more seconds carry over into the number of seconds. The
  /// stored components always share the same sign.
  #[allow(clippy::arithmetic_side_effects, reason = "divisor is constant")]
  #[inline]
  pub const fn new(seconds: i64, nanosecond: i32) -> Result<Self, CalendarError> {
    let carry = (nanosecond / NANOSECONDS_PER_SECOND.cast_signed()) as i64;
    let Some(mut whole) = seconds.checked_add(carry) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    let mut rest = nanosecond % NANOSECONDS_PER_SECOND.cast_signed();
    if whole > 0 && rest < 0 {
      whole = whole.wrapping_sub(1);
      rest = rest.wrapping_add(NANOSECONDS_PER_SECOND.cast_signed());
    } else if whole < 0 && rest > 0 {
      whole = whole.wrapping_add(1);
      rest = rest.wrapping_sub(NANOSECONDS_PER_SECOND.cast_signed());
    }
    if whole == i64::MIN {
      return Err(CalendarError::ArithmeticOverflow);
    }
    Ok(Self { seconds: whole, nanosecond: rest })
  }

  /// Returns the number of whole days contained in this instance.
  #[allow(clippy::arithmetic_side_effects, reason = "divisor is constant")]
  #[inline]
  pub const fn days(self) -> i64 {
    self.seconds / u32i64(SECONDS_PER_DAY)
  }

  /// Returns `true` if the number of seconds and nanoseconds are zero
  #[inline]
  pub const fn is_zero(self) -> bool {
    self.seconds == 0 && self.nanosecond == 0
  }

  /// Computes `-self`.
  #[allow(clippy::arithmetic_side_effects, reason = "constructors reject `i64::MIN` seconds")]
  #[inline]
  #[must_use]
  pub const fn neg(self) -> Self {
    Self { seconds: -self.seconds, nanosecond: -self.nanosecond }
  }

  /// Returns the number of _whole_ seconds contained in this instance.
  #[inline]
  pub const fn seconds(self) -> i64 {
    self.seconds
  }

  /// Returns the number of nanoseconds past the number of whole seconds.
  #[inline]
  pub const fn subsec_nanoseconds(self) -> i32 {
    self.nanosecond
  }
}

impl TryFrom<core::time::Duration> for Duration {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: core::time::Duration) -> crate::Result<Self> {
    Ok(Self::new(from.as_secs().try_into()?, from.subsec_nanos().cast_signed())?)
  }
}

impl TryFrom<Duration> for core::time::Duration {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: Duration) -> crate::Result<Self> {
    Ok(Self::new(from.seconds.try_into()?, from.nanosecond.try_into()?))
  }
}
