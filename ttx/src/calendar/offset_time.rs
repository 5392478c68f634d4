#![allow(deprecated, reason = "implementations of a deprecated type still have to exist")]

use crate::calendar::{Time, ZoneOffset};
use core::fmt::{Debug, Display, Formatter};

/// Clock time displaced from UTC by a fixed offset.
#[deprecated = "a time-of-day with an offset but without a date does not identify a point in time"]
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OffsetTime {
  time: Time,
  offset: ZoneOffset,
}

impl OffsetTime {
  /// New instance from basic parameters
  #[inline]
  pub const fn new(time: Time, offset: ZoneOffset) -> Self {
    Self { time, offset }
  }

  /// See [`ZoneOffset`].
  #[inline]
  pub const fn offset(self) -> ZoneOffset {
    self.offset
  }

  /// See [`Time`].
  #[inline]
  pub const fn time(self) -> Time {
    self.time
  }
}

impl Debug for OffsetTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Display for OffsetTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}{}", self.time, self.offset)
  }
}
