//! Pluggable source of the current moment.

#[cfg(test)]
mod tests;

use crate::calendar::Instant;
use core::cell::RefCell;

std::thread_local! {
  static OVERRIDE: RefCell<Option<Box<dyn Fn() -> Instant>>> = const { RefCell::new(None) };
}

/// Source of "now".
///
/// Everything that evaluates relative time receives an explicit implementation of this trait
/// instead of reaching for a process-wide singleton.
pub trait Clock {
  /// Current instant. Never fails.
  fn now(&self) -> Instant;
}

impl<C> Clock for &C
where
  C: Clock,
{
  #[inline]
  fn now(&self) -> Instant {
    C::now(self)
  }
}

/// Always returns the same initially informed instant. Useful for deterministic tests.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedClock(Instant);

impl FixedClock {
  /// New instance that will forever return `instant`.
  #[inline]
  pub const fn new(instant: Instant) -> Self {
    Self(instant)
  }
}

impl Clock for FixedClock {
  #[inline]
  fn now(&self) -> Instant {
    self.0
  }
}

/// Reads the host clock unless an override was installed with [`set_override`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SystemClock;

impl Clock for SystemClock {
  #[inline]
  fn now(&self) -> Instant {
    let overridden = OVERRIDE.with(|elem| elem.borrow().as_ref().map(|provider| provider()));
    overridden.unwrap_or_else(Instant::now)
  }
}

/// Replaces the host clock reading of [`SystemClock`] with the result of `provider`.
///
/// The override is stored in a thread local so parallel test execution can not observe the
/// overrides of other threads. Installing a new override replaces any active one. The provider
/// must not itself read [`SystemClock`].
#[inline]
pub fn set_override<F>(provider: F)
where
  F: Fn() -> Instant + 'static,
{
  #[cfg(feature = "tracing")]
  tracing::debug!("Installing clock override");
  OVERRIDE.with(|elem| *elem.borrow_mut() = Some(Box::new(provider)));
}

/// Removes any active override installed with [`set_override`], returning [`SystemClock`] to the
/// host clock.
#[inline]
pub fn reset_override() {
  #[cfg(feature = "tracing")]
  tracing::debug!("Removing clock override");
  OVERRIDE.with(|elem| *elem.borrow_mut() = None);
}
