use crate::calendar::{CalendarError, Duration, NANOSECONDS_PER_SECOND, Nanosecond, misc::u32i64};
use core::hint::unreachable_unchecked;

/// A point on the UTC timeline counted from the UNIX epoch (1970-01-01).
///
/// Every calendar value that stands for a point in time converts into this structure, which is
/// the only currency used for cross-type comparison.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Instant {
  seconds: i64,
  nanosecond: Nanosecond,
}

impl Instant {
  /// Instance that refers the UNIX epoch (1970-01-01).
  pub const EPOCH: Self = Self { seconds: 0, nanosecond: Nanosecond::ZERO };

  /// New instance from the number of whole seconds since the UNIX epoch alongside the
  /// sub-second remainder.
  #[inline]
  pub const fn new(seconds: i64, nanosecond: Nanosecond) -> Self {
    Self { seconds, nanosecond }
  }

  /// New instance from raw timestamp components.
  #[inline]
  pub const fn from_timestamp(seconds: i64, nanosecond: u32) -> Result<Self, CalendarError> {
    let nanosecond = match Nanosecond::from_num(nanosecond) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    Ok(Self { seconds, nanosecond })
  }

  /// Reading of the host clock. Never fails, even when the host clock sits before the UNIX
  /// epoch.
  #[inline]
  pub fn now() -> Self {
    let (seconds, nanosecond) = match std::time::SystemTime::now()
      .duration_since(std::time::UNIX_EPOCH)
    {
      Ok(elem) => (i64::try_from(elem.as_secs()).unwrap_or(i64::MAX), elem.subsec_nanos()),
      Err(elem) => {
        let before = elem.duration();
        let seconds = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
        if before.subsec_nanos() == 0 {
          (seconds.wrapping_neg(), 0)
        } else {
          (
            seconds.wrapping_neg().wrapping_sub(1),
            NANOSECONDS_PER_SECOND.wrapping_sub(before.subsec_nanos()),
          )
        }
      }
    };
    match Self::from_timestamp(seconds, nanosecond) {
      Ok(elem) => elem,
      // SAFETY: both branches produce a sub-second remainder
      Err(_) => unsafe { unreachable_unchecked() },
    }
  }

  /// Returns the addition if the resulting value is within bounds.
  #[inline]
  pub const fn checked_add(self, duration: Duration) -> Result<Self, CalendarError> {
    let Some(mut seconds) = self.seconds.checked_add(duration.seconds()) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    let mut nanosecond =
      (self.nanosecond.num() as i64).wrapping_add(duration.subsec_nanoseconds() as i64);
    if nanosecond < 0 {
      nanosecond = nanosecond.wrapping_add(u32i64(NANOSECONDS_PER_SECOND));
      let Some(elem) = seconds.checked_sub(1) else {
        return Err(CalendarError::ArithmeticOverflow);
      };
      seconds = elem;
    } else if nanosecond >= u32i64(NANOSECONDS_PER_SECOND) {
      nanosecond = nanosecond.wrapping_sub(u32i64(NANOSECONDS_PER_SECOND));
      let Some(elem) = seconds.checked_add(1) else {
        return Err(CalendarError::ArithmeticOverflow);
      };
      seconds = elem;
    }
    match Self::from_timestamp(seconds, nanosecond as u32) {
      Ok(elem) => Ok(elem),
      // SAFETY: `nanosecond` was reduced to a sub-second remainder
      Err(_) => unsafe { unreachable_unchecked() },
    }
  }

  /// Returns the difference if the resulting value is within bounds.
  #[inline]
  pub const fn checked_sub(self, duration: Duration) -> Result<Self, CalendarError> {
    self.checked_add(duration.neg())
  }

  /// Returns the amount of time elapsed from another instant to this one.
  #[inline]
  pub const fn duration_since(self, earlier: Self) -> Result<Duration, CalendarError> {
    let Some(seconds) = self.seconds.checked_sub(earlier.seconds) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    let nanosecond =
      self.nanosecond.num().cast_signed().wrapping_sub(earlier.nanosecond.num().cast_signed());
    Duration::new(seconds, nanosecond)
  }

  /// Sub-second remainder
  #[inline]
  pub const fn nanosecond(self) -> Nanosecond {
    self.nanosecond
  }

  /// Number of whole seconds since the UNIX epoch
  #[inline]
  pub const fn seconds(self) -> i64 {
    self.seconds
  }
}
