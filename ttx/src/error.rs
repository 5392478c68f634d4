use crate::calendar::CalendarError;
use core::fmt::{Debug, Display, Formatter};

/// Grouped individual errors
#[derive(Debug)]
pub enum Error {
  // External
  //
  /// See [`chrono::ParseError`]. The original cause is preserved for diagnostics.
  ChronoParse(chrono::ParseError),
  /// See [`core::fmt::Error`]
  Fmt(core::fmt::Error),
  /// See [`core::num::TryFromIntError`]
  TryFromIntError(core::num::TryFromIntError),

  // Internal
  //
  /// See [`CalendarError`]
  CalendarError(CalendarError),
}

impl Display for Error {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl core::error::Error for Error {}

impl From<CalendarError> for Error {
  #[inline]
  #[track_caller]
  fn from(from: CalendarError) -> Self {
    Self::CalendarError(from)
  }
}

impl From<chrono::ParseError> for Error {
  #[inline]
  #[track_caller]
  fn from(from: chrono::ParseError) -> Self {
    Self::ChronoParse(from)
  }
}

impl From<core::fmt::Error> for Error {
  #[inline]
  fn from(from: core::fmt::Error) -> Self {
    Self::Fmt(from)
  }
}

impl From<core::num::TryFromIntError> for Error {
  #[inline]
  fn from(from: core::num::TryFromIntError) -> Self {
    Self::TryFromIntError(from)
  }
}
