#![no_main]

use libfuzzer_sys::fuzz_target;
use ttx::{calendar::ZonedDateTime, convert::Stringify};

fuzz_target!(|data: &[u8]| {
  if let Ok(input) = core::str::from_utf8(data) {
    let _rslt = ZonedDateTime::from_text(input);
  }
});
