//! Future/past validation of point-in-time fields.

mod field_value;
#[cfg(test)]
mod tests;
mod violation;

pub use field_value::FieldValue;
pub use violation::{Packed, Violation};

use crate::{clock::Clock, temporal::Temporal};

/// Template applied when a [`When`] option carries no custom message.
pub const DEFAULT_TEMPLATE: &str = "must be in the {when}";

/// Declared requirement of a point-in-time field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum WhenRequirement {
  /// No requirement. Fields are never evaluated.
  #[default]
  Undefined,
  /// The value must lie strictly after the current moment.
  Future,
  /// The value must lie strictly before the current moment.
  Past,
}

impl WhenRequirement {
  /// Lowercase name substituted into message templates
  #[inline]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Undefined => "undefined",
      Self::Future => "future",
      Self::Past => "past",
    }
  }
}

/// Field-level option that constrains a point-in-time field.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct When {
  requirement: WhenRequirement,
  message: Option<String>,
}

impl When {
  /// New instance with the default message template.
  #[inline]
  pub const fn new(requirement: WhenRequirement) -> Self {
    Self { requirement, message: None }
  }

  /// Active message template
  #[inline]
  pub fn message_template(&self) -> &str {
    self.message.as_deref().unwrap_or(DEFAULT_TEMPLATE)
  }

  /// Declared requirement
  #[inline]
  pub const fn requirement(&self) -> WhenRequirement {
    self.requirement
  }

  /// Replaces the default message template. Occurrences of `{when}` are substituted with the
  /// requirement name when a violation is reported.
  #[inline]
  #[must_use]
  pub fn with_message(mut self, template: impl Into<String>) -> Self {
    self.message = Some(template.into());
    self
  }
}

/// Evaluates every value of a field against the declared requirement.
///
/// An [`WhenRequirement::Undefined`] requirement succeeds immediately without any evaluation.
/// Otherwise values are visited in order and the first violating one short-circuits into exactly
/// one [`Violation`], even for repeated fields. A value that can not be turned into a temporal
/// at all is a configuration error of the caller and surfaces as [`Err`] instead of a violation.
#[inline]
pub fn check_field<C>(
  when: &When,
  field_path: &str,
  values: &[FieldValue],
  clock: &C,
) -> crate::Result<Option<Violation>>
where
  C: Clock,
{
  let requirement = when.requirement();
  if requirement == WhenRequirement::Undefined {
    return Ok(None);
  }
  for value in values {
    let temporal = value.to_temporal()?;
    let satisfied = match requirement {
      WhenRequirement::Undefined => true,
      WhenRequirement::Future => temporal.is_in_future(clock)?,
      WhenRequirement::Past => temporal.is_in_past(clock)?,
    };
    if !satisfied {
      #[cfg(feature = "tracing")]
      tracing::debug!(field_path, requirement = requirement.name(), "When constraint violated");
      let message = when.message_template().replace("{when}", requirement.name());
      return Ok(Some(Violation::new(field_path, message, Packed::pack(&temporal)?)));
    }
  }
  Ok(None)
}
