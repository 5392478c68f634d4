use crate::convert::{NativeConvert, NativeText};

/// Bidirectional mapping between a calendar value type and its canonical textual form.
///
/// Comes for free for every type whose native counterpart implements [`NativeText`], keeping
/// the converter as the single source of truth for both directions.
pub trait Stringify: Sized {
  /// Canonical text. Round-trips through [`Stringify::from_text`].
  fn to_text(&self) -> crate::Result<String>;

  /// Parses the canonical text. Malformed or empty input fails with the low-level cause
  /// preserved; a default value is never returned to signal failure.
  fn from_text(input: &str) -> crate::Result<Self>;
}

impl<V> Stringify for V
where
  V: NativeConvert,
  V::Native: NativeText,
{
  #[inline]
  fn to_text(&self) -> crate::Result<String> {
    Ok(self.to_native()?.to_native_text())
  }

  #[inline]
  fn from_text(input: &str) -> crate::Result<Self> {
    Self::from_native(<V::Native as NativeText>::from_native_text(input)?)
  }
}
