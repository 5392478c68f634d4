use crate::{
  calendar::CalendarError,
  convert::stringifier,
  temporal::{CalendarKind, CalendarValue, Temporal},
};

/// Offending value packed generically so it can travel and be unpacked without knowing its
/// concrete type.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Packed {
  kind: CalendarKind,
  text: String,
}

impl Packed {
  /// Packs `value` through its registered stringifier.
  #[inline]
  pub fn pack(value: &CalendarValue) -> crate::Result<Self> {
    let kind = value.kind();
    let elem = stringifier(kind)
      .ok_or(CalendarError::UnsupportedTemporalField(kind.name()))?;
    Ok(Self { kind, text: elem.to_text_any(value)? })
  }

  /// Kind of the packed value
  #[inline]
  pub const fn kind(&self) -> CalendarKind {
    self.kind
  }

  /// Canonical text of the packed value
  #[inline]
  pub fn text(&self) -> &str {
    &self.text
  }

  /// Restores the packed value through its registered stringifier.
  #[inline]
  pub fn unpack(&self) -> crate::Result<CalendarValue> {
    let elem = stringifier(self.kind)
      .ok_or(CalendarError::UnsupportedTemporalField(self.kind.name()))?;
    elem.from_text_any(&self.text)
  }
}

/// Report of a single field value that does not satisfy its declared requirement.
///
/// Violations are data rather than errors so that surrounding systems can batch them.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Violation {
  field_path: String,
  message: String,
  value: Packed,
}

impl Violation {
  /// New instance from basic parameters
  #[inline]
  pub fn new(field_path: impl Into<String>, message: impl Into<String>, value: Packed) -> Self {
    Self { field_path: field_path.into(), message: message.into(), value }
  }

  /// Path of the field that carries the offending value
  #[inline]
  pub fn field_path(&self) -> &str {
    &self.field_path
  }

  /// Human-readable description built from the active message template
  #[inline]
  pub fn message(&self) -> &str {
    &self.message
  }

  /// Offending value
  #[inline]
  pub const fn value(&self) -> &Packed {
    &self.value
  }
}
