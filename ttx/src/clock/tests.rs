use crate::{
  calendar::{Instant, Nanosecond},
  clock::{Clock, FixedClock, SystemClock, reset_override, set_override},
};

#[test]
fn fixed_clock_always_returns_the_same_instant() {
  let instant = Instant::new(1_577_836_800, Nanosecond::ZERO);
  let clock = FixedClock::new(instant);
  assert_eq!(clock.now(), instant);
  assert_eq!(clock.now(), instant);
}

#[test]
fn override_is_installed_replaced_and_removed() {
  let first = Instant::new(10, Nanosecond::ZERO);
  let second = Instant::new(20, Nanosecond::ZERO);
  set_override(move || first);
  assert_eq!(SystemClock.now(), first);
  set_override(move || second);
  assert_eq!(SystemClock.now(), second);
  reset_override();
  assert_ne!(SystemClock.now(), second);
}

#[test]
fn overrides_do_not_leak_into_other_threads() {
  let frozen = Instant::new(42, Nanosecond::ZERO);
  set_override(move || frozen);
  let other = std::thread::spawn(|| SystemClock.now()).join().unwrap();
  assert_ne!(other, frozen);
  reset_override();
}
