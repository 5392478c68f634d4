use crate::{
  calendar::{CalendarError, Timestamp},
  temporal::CalendarValue,
};

/// Raw content of a wire field before temporal evaluation.
///
/// The decision of whether a field can participate in temporal validation is taken once at this
/// boundary instead of through open-ended runtime type inspection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue {
  /// A value that is already a calendar value
  Temporal(CalendarValue),
  /// The wire instant
  Timestamp(Timestamp),
  /// Any other field type, carrying its name for diagnostics
  Unsupported(&'static str),
}

impl FieldValue {
  /// Temporal view of the content.
  ///
  /// [`FieldValue::Unsupported`] is a configuration error of the caller, clearly distinct from
  /// a constraint violation.
  #[inline]
  pub fn to_temporal(&self) -> crate::Result<CalendarValue> {
    match self {
      Self::Temporal(elem) => Ok(*elem),
      Self::Timestamp(elem) => Ok(CalendarValue::Timestamp(*elem)),
      Self::Unsupported(name) => Err(CalendarError::UnsupportedTemporalField(name).into()),
    }
  }
}
