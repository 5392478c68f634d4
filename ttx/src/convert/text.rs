use crate::calendar::CalendarError;
use chrono::Offset;
use core::fmt::Write;

pub(crate) const DATE_FMT: &str = "%Y-%m-%d";
pub(crate) const DATE_TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";
pub(crate) const OFFSET_DATE_TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";
pub(crate) const TIME_FMT: &str = "%H:%M:%S%.f";
pub(crate) const TIMESTAMP_FMT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Canonical textual form of a native counterpart, produced and consumed with the native
/// parsing and formatting machinery.
pub trait NativeText: Sized {
  /// Canonical text
  fn to_native_text(&self) -> String;

  /// Parses the canonical text. Malformed or empty input fails without ever yielding a default
  /// value.
  fn from_native_text(input: &str) -> crate::Result<Self>;
}

impl NativeText for chrono::NaiveDate {
  #[inline]
  fn to_native_text(&self) -> String {
    self.format(DATE_FMT).to_string()
  }

  #[inline]
  fn from_native_text(input: &str) -> crate::Result<Self> {
    Ok(Self::parse_from_str(input, DATE_FMT)?)
  }
}

impl NativeText for chrono::NaiveDateTime {
  #[inline]
  fn to_native_text(&self) -> String {
    self.format(DATE_TIME_FMT).to_string()
  }

  #[inline]
  fn from_native_text(input: &str) -> crate::Result<Self> {
    Ok(Self::parse_from_str(input, DATE_TIME_FMT)?)
  }
}

impl NativeText for chrono::NaiveTime {
  #[inline]
  fn to_native_text(&self) -> String {
    self.format(TIME_FMT).to_string()
  }

  #[inline]
  fn from_native_text(input: &str) -> crate::Result<Self> {
    Ok(Self::parse_from_str(input, TIME_FMT)?)
  }
}

impl NativeText for chrono::DateTime<chrono::FixedOffset> {
  #[inline]
  fn to_native_text(&self) -> String {
    self.format(OFFSET_DATE_TIME_FMT).to_string()
  }

  #[inline]
  fn from_native_text(input: &str) -> crate::Result<Self> {
    Ok(Self::parse_from_str(input, OFFSET_DATE_TIME_FMT)?)
  }
}

impl NativeText for chrono::DateTime<chrono::Utc> {
  #[inline]
  fn to_native_text(&self) -> String {
    self.format(TIMESTAMP_FMT).to_string()
  }

  #[inline]
  fn from_native_text(input: &str) -> crate::Result<Self> {
    Ok(chrono::NaiveDateTime::parse_from_str(input, TIMESTAMP_FMT)?.and_utc())
  }
}

impl NativeText for chrono::DateTime<chrono_tz::Tz> {
  #[inline]
  fn to_native_text(&self) -> String {
    let mut text = self.format(OFFSET_DATE_TIME_FMT).to_string();
    let _rslt = write!(text, "[{}]", self.timezone().name());
    text
  }

  #[inline]
  fn from_native_text(input: &str) -> crate::Result<Self> {
    let (head, tail) = input.split_once('[').ok_or(CalendarError::MissingZoneDesignator)?;
    let name = tail.strip_suffix(']').ok_or(CalendarError::MissingZoneDesignator)?;
    let tz: chrono_tz::Tz = name.parse().map_err(|_err| CalendarError::UnknownTimeZone)?;
    let fixed = chrono::DateTime::<chrono::FixedOffset>::from_native_text(head)?;
    let zoned = fixed.with_timezone(&tz);
    if zoned.offset().fix() != *fixed.offset() {
      return Err(CalendarError::OffsetZoneDisagreement.into());
    }
    Ok(zoned)
  }
}

impl NativeText for chrono::FixedOffset {
  #[inline]
  fn to_native_text(&self) -> String {
    let seconds = self.local_minus_utc();
    let magnitude = seconds.unsigned_abs();
    let sign = if seconds < 0 { '-' } else { '+' };
    let hours = magnitude / 3600;
    let minutes = (magnitude % 3600) / 60;
    let mut text = String::new();
    let _rslt = write!(text, "{sign}{hours:02}:{minutes:02}");
    text
  }

  // Accepts both the extended `±HH:mm` and the basic `±HHmm` forms.
  #[inline]
  fn from_native_text(input: &str) -> crate::Result<Self> {
    let (sign, rest) = match input.as_bytes() {
      [b'+', rest @ ..] => (1i32, rest),
      [b'-', rest @ ..] => (-1i32, rest),
      _ => return Err(CalendarError::InvalidParsingBytes.into()),
    };
    let (hours, rest) = two_digits(rest)?;
    let rest = if let [b':', elem @ ..] = rest { elem } else { rest };
    let (minutes, rest) = two_digits(rest)?;
    if !rest.is_empty() {
      return Err(CalendarError::InvalidParsingBytes.into());
    }
    if minutes > 59 {
      return Err(CalendarError::InvalidMinute { received: minutes as u8 }.into());
    }
    let seconds = sign.wrapping_mul(hours.wrapping_mul(3600).wrapping_add(minutes.wrapping_mul(60)));
    Self::east_opt(seconds)
      .ok_or_else(|| CalendarError::InvalidZoneOffset { received: seconds }.into())
  }
}

impl NativeText for chrono::Month {
  #[inline]
  fn to_native_text(&self) -> String {
    String::from(self.name())
  }

  #[inline]
  fn from_native_text(input: &str) -> crate::Result<Self> {
    input.parse().map_err(|_err| CalendarError::InvalidMonth { received: None }.into())
  }
}

impl NativeText for chrono::Weekday {
  #[inline]
  fn to_native_text(&self) -> String {
    String::from(match self {
      Self::Mon => "Monday",
      Self::Tue => "Tuesday",
      Self::Wed => "Wednesday",
      Self::Thu => "Thursday",
      Self::Fri => "Friday",
      Self::Sat => "Saturday",
      Self::Sun => "Sunday",
    })
  }

  #[inline]
  fn from_native_text(input: &str) -> crate::Result<Self> {
    input.parse().map_err(|_err| CalendarError::InvalidWeekday { received: None }.into())
  }
}

impl NativeText for chrono_tz::Tz {
  #[inline]
  fn to_native_text(&self) -> String {
    String::from(self.name())
  }

  #[inline]
  fn from_native_text(input: &str) -> crate::Result<Self> {
    input.parse().map_err(|_err| CalendarError::UnknownTimeZone.into())
  }
}

impl NativeText for (chrono::NaiveTime, chrono::FixedOffset) {
  #[inline]
  fn to_native_text(&self) -> String {
    let mut text = self.0.to_native_text();
    text.push_str(&self.1.to_native_text());
    text
  }

  #[inline]
  fn from_native_text(input: &str) -> crate::Result<Self> {
    let idx = input.find(['+', '-']).ok_or(CalendarError::InvalidParsingBytes)?;
    let (time, offset) = input.split_at(idx);
    Ok((
      chrono::NaiveTime::from_native_text(time)?,
      chrono::FixedOffset::from_native_text(offset)?,
    ))
  }
}

impl NativeText for (i32, chrono::Month) {
  #[inline]
  fn to_native_text(&self) -> String {
    let mut text = String::new();
    let year = self.0;
    let _rslt = if year < 0 {
      write!(text, "-{:04}-{:02}", year.unsigned_abs(), self.1.number_from_month())
    } else {
      write!(text, "{:04}-{:02}", year, self.1.number_from_month())
    };
    text
  }

  #[inline]
  fn from_native_text(input: &str) -> crate::Result<Self> {
    let (negative, rest) = match input.strip_prefix('-') {
      Some(elem) => (true, elem),
      None => (false, input),
    };
    let (year_str, month_str) = rest.split_once('-').ok_or(CalendarError::InvalidParsingBytes)?;
    let year: i32 =
      year_str.parse().map_err(|_err| CalendarError::InvalidParsingBytes)?;
    let month_num: u8 =
      month_str.parse().map_err(|_err| CalendarError::InvalidParsingBytes)?;
    let month = match month_num {
      1 => chrono::Month::January,
      2 => chrono::Month::February,
      3 => chrono::Month::March,
      4 => chrono::Month::April,
      5 => chrono::Month::May,
      6 => chrono::Month::June,
      7 => chrono::Month::July,
      8 => chrono::Month::August,
      9 => chrono::Month::September,
      10 => chrono::Month::October,
      11 => chrono::Month::November,
      12 => chrono::Month::December,
      _ => return Err(CalendarError::InvalidMonth { received: Some(month_num) }.into()),
    };
    Ok((if negative { year.wrapping_neg() } else { year }, month))
  }
}

fn two_digits(bytes: &[u8]) -> crate::Result<(i32, &[u8])> {
  let [first, second, rest @ ..] = bytes else {
    return Err(CalendarError::InvalidParsingBytes.into());
  };
  if !first.is_ascii_digit() || !second.is_ascii_digit() {
    return Err(CalendarError::InvalidParsingBytes.into());
  }
  let tens = i32::from(first.wrapping_sub(b'0'));
  let units = i32::from(second.wrapping_sub(b'0'));
  Ok((tens.wrapping_mul(10).wrapping_add(units), rest))
}
