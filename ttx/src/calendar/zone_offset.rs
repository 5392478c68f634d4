use crate::calendar::{CalendarError, MAX_OFFSET_SECONDS, MINUTES_PER_HOUR, SECONDS_PER_MINUTE};
use core::fmt::{Debug, Display, Formatter};

/// Fixed offset from UTC. From -18:00 to +18:00.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ZoneOffset(i32);

impl ZoneOffset {
  /// Instance without any displacement from UTC
  pub const UTC: Self = Self(0);

  /// Creates a new instance from hour and minute components.
  ///
  /// Non-zero components must share the same sign and the minute magnitude can only go up to
  /// 59.
  #[inline]
  pub const fn from_hours_minutes(hours: i8, minutes: i8) -> Result<Self, CalendarError> {
    if (hours > 0 && minutes < 0) || (hours < 0 && minutes > 0) {
      return Err(CalendarError::MismatchedOffsetSigns);
    }
    if minutes <= -(MINUTES_PER_HOUR as i8) || minutes >= MINUTES_PER_HOUR as i8 {
      return Err(CalendarError::InvalidMinute { received: minutes.unsigned_abs() });
    }
    let hour_seconds =
      (hours as i32).wrapping_mul(MINUTES_PER_HOUR as i32 * SECONDS_PER_MINUTE as i32);
    let minute_seconds = (minutes as i32).wrapping_mul(SECONDS_PER_MINUTE as i32);
    Self::from_seconds(hour_seconds.wrapping_add(minute_seconds))
  }

  /// Creates a new instance from the total number of seconds.
  ///
  /// The amount must be aligned to whole minutes so that the textual `±HH:mm` form is able to
  /// round-trip every constructible value.
  #[inline]
  pub const fn from_seconds(seconds: i32) -> Result<Self, CalendarError> {
    if seconds < -MAX_OFFSET_SECONDS || seconds > MAX_OFFSET_SECONDS {
      return Err(CalendarError::InvalidZoneOffset { received: seconds });
    }
    if seconds % SECONDS_PER_MINUTE as i32 != 0 {
      return Err(CalendarError::InvalidZoneOffset { received: seconds });
    }
    Ok(Self(seconds))
  }

  /// Total number of seconds of displacement from UTC
  #[inline]
  pub const fn seconds(self) -> i32 {
    self.0
  }
}

impl Debug for ZoneOffset {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Display for ZoneOffset {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    let magnitude = self.0.unsigned_abs();
    let hours = magnitude / 3600;
    let minutes = (magnitude % 3600) / 60;
    let sign = if self.0 < 0 { '-' } else { '+' };
    write!(f, "{sign}{hours:02}:{minutes:02}")
  }
}
