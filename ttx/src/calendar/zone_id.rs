use crate::calendar::CalendarError;
use core::{
  fmt::{Debug, Display, Formatter},
  str::FromStr,
};

/// Identifier of an IANA time zone, resolved against the zone database at construction.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ZoneId(chrono_tz::Tz);

impl ZoneId {
  /// Universal Time Coordinated (UTC)
  pub const UTC: Self = Self(chrono_tz::Tz::UTC);

  /// Creates a new instance if `name` exists in the zone database.
  #[inline]
  pub fn from_name(name: &str) -> crate::Result<Self> {
    let tz = chrono_tz::Tz::from_str(name).map_err(|_err| CalendarError::UnknownTimeZone)?;
    Ok(Self(tz))
  }

  /// Canonical zone name
  #[inline]
  pub fn name(self) -> &'static str {
    self.0.name()
  }

  pub(crate) const fn from_tz(tz: chrono_tz::Tz) -> Self {
    Self(tz)
  }

  pub(crate) const fn tz(self) -> chrono_tz::Tz {
    self.0
  }
}

impl Debug for ZoneId {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}

impl Default for ZoneId {
  #[inline]
  fn default() -> Self {
    Self::UTC
  }
}

impl Display for ZoneId {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}
