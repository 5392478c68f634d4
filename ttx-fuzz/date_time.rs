#![no_main]

use libfuzzer_sys::fuzz_target;
use ttx::{calendar::DateTime, convert::Stringify};

fuzz_target!(|data: &[u8]| {
  if let Ok(input) = core::str::from_utf8(data) {
    let _rslt = DateTime::from_text(input);
  }
});
