#![no_main]

use libfuzzer_sys::fuzz_target;
use ttx::{calendar::Timestamp, convert::Stringify};

fuzz_target!(|data: &[u8]| {
  if let Ok(input) = core::str::from_utf8(data) {
    let _rslt0 = Timestamp::from_text(input);
    let _rslt1 = Timestamp::from_web_safe_text(input);
  }
});
