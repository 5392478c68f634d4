#![allow(deprecated, reason = "deprecated value types keep their conversions")]

use crate::calendar::{
  CalendarError, Date, DateTime, Day, Hour, Minute, Month, Nanosecond, OffsetDateTime, OffsetTime,
  Second, Time, Timestamp, Weekday, Year, YearMonth, ZoneId, ZoneOffset, ZonedDateTime,
};
use chrono::{Datelike, TimeZone, Timelike};

/// Side-effect-free mapping between a calendar value type and its native counterpart.
///
/// Both directions are mutual inverses for every value the two representations share.
/// [`NativeConvert::to_native`] fails only when the instance itself can not stand for a concrete
/// native value; it never silently clamps.
pub trait NativeConvert: Sized {
  /// Native counterpart
  type Native;

  /// Mapping into the native counterpart.
  fn to_native(&self) -> crate::Result<Self::Native>;

  /// Mapping out of the native counterpart.
  fn from_native(native: Self::Native) -> crate::Result<Self>;
}

impl NativeConvert for Date {
  type Native = chrono::NaiveDate;

  #[inline]
  fn to_native(&self) -> crate::Result<Self::Native> {
    Ok(self.native())
  }

  #[inline]
  fn from_native(native: Self::Native) -> crate::Result<Self> {
    let year = Year::try_from(native.year())?;
    let month = Month::from_num(u8::try_from(native.month())?)?;
    let day = Day::from_num(u8::try_from(native.day())?)?;
    Ok(Self::from_ymd(year, month, day)?)
  }
}

impl NativeConvert for DateTime {
  type Native = chrono::NaiveDateTime;

  #[inline]
  fn to_native(&self) -> crate::Result<Self::Native> {
    Ok(self.native())
  }

  #[inline]
  fn from_native(native: Self::Native) -> crate::Result<Self> {
    Ok(Self::new(Date::from_native(native.date())?, Time::from_native(native.time())?))
  }
}

impl NativeConvert for Month {
  type Native = chrono::Month;

  #[inline]
  fn to_native(&self) -> crate::Result<Self::Native> {
    Ok(month_native(*self))
  }

  #[inline]
  fn from_native(native: Self::Native) -> crate::Result<Self> {
    Ok(Self::from_num(u8::try_from(native.number_from_month())?)?)
  }
}

impl NativeConvert for OffsetDateTime {
  type Native = chrono::DateTime<chrono::FixedOffset>;

  #[inline]
  fn to_native(&self) -> crate::Result<Self::Native> {
    let offset = offset_native(self.offset())?;
    self
      .date_time()
      .native()
      .and_local_timezone(offset)
      .single()
      .ok_or_else(|| CalendarError::NonexistentLocalTime.into())
  }

  #[inline]
  fn from_native(native: Self::Native) -> crate::Result<Self> {
    Ok(Self::new(
      DateTime::from_native(native.naive_local())?,
      ZoneOffset::from_seconds(native.offset().local_minus_utc())?,
    ))
  }
}

impl NativeConvert for OffsetTime {
  type Native = (chrono::NaiveTime, chrono::FixedOffset);

  #[inline]
  fn to_native(&self) -> crate::Result<Self::Native> {
    Ok((self.time().native(), offset_native(self.offset())?))
  }

  #[inline]
  fn from_native((time, offset): Self::Native) -> crate::Result<Self> {
    Ok(Self::new(Time::from_native(time)?, ZoneOffset::from_seconds(offset.local_minus_utc())?))
  }
}

impl NativeConvert for Time {
  type Native = chrono::NaiveTime;

  #[inline]
  fn to_native(&self) -> crate::Result<Self::Native> {
    Ok(self.native())
  }

  #[inline]
  fn from_native(native: Self::Native) -> crate::Result<Self> {
    Ok(Self::from_hms_ns(
      Hour::from_num(u8::try_from(native.hour())?)?,
      Minute::from_num(u8::try_from(native.minute())?)?,
      Second::from_num(u8::try_from(native.second())?)?,
      // A leap second representation lies outside of the supported range
      Nanosecond::from_num(native.nanosecond())?,
    ))
  }
}

impl NativeConvert for Timestamp {
  type Native = chrono::DateTime<chrono::Utc>;

  #[inline]
  fn to_native(&self) -> crate::Result<Self::Native> {
    chrono::DateTime::from_timestamp(self.seconds(), self.nanosecond().num())
      .ok_or_else(|| CalendarError::InvalidTimestamp.into())
  }

  #[inline]
  fn from_native(native: Self::Native) -> crate::Result<Self> {
    Ok(Self::new(native.timestamp(), Nanosecond::from_num(native.timestamp_subsec_nanos())?))
  }
}

impl NativeConvert for Weekday {
  type Native = chrono::Weekday;

  #[inline]
  fn to_native(&self) -> crate::Result<Self::Native> {
    Ok(match self {
      Self::Monday => chrono::Weekday::Mon,
      Self::Tuesday => chrono::Weekday::Tue,
      Self::Wednesday => chrono::Weekday::Wed,
      Self::Thursday => chrono::Weekday::Thu,
      Self::Friday => chrono::Weekday::Fri,
      Self::Saturday => chrono::Weekday::Sat,
      Self::Sunday => chrono::Weekday::Sun,
    })
  }

  #[inline]
  fn from_native(native: Self::Native) -> crate::Result<Self> {
    Ok(match native {
      chrono::Weekday::Mon => Self::Monday,
      chrono::Weekday::Tue => Self::Tuesday,
      chrono::Weekday::Wed => Self::Wednesday,
      chrono::Weekday::Thu => Self::Thursday,
      chrono::Weekday::Fri => Self::Friday,
      chrono::Weekday::Sat => Self::Saturday,
      chrono::Weekday::Sun => Self::Sunday,
    })
  }
}

impl NativeConvert for YearMonth {
  type Native = (i32, chrono::Month);

  #[inline]
  fn to_native(&self) -> crate::Result<Self::Native> {
    if self.is_zero() {
      return Err(CalendarError::ZeroValue("YearMonth").into());
    }
    Ok((i32::from(self.year().num()), month_native(self.month())))
  }

  #[inline]
  fn from_native((year, month): Self::Native) -> crate::Result<Self> {
    Ok(Self::new(
      Year::try_from(year)?,
      Month::from_num(u8::try_from(month.number_from_month())?)?,
    ))
  }
}

impl NativeConvert for ZoneId {
  type Native = chrono_tz::Tz;

  #[inline]
  fn to_native(&self) -> crate::Result<Self::Native> {
    Ok(self.tz())
  }

  #[inline]
  fn from_native(native: Self::Native) -> crate::Result<Self> {
    Ok(Self::from_tz(native))
  }
}

impl NativeConvert for ZoneOffset {
  type Native = chrono::FixedOffset;

  #[inline]
  fn to_native(&self) -> crate::Result<Self::Native> {
    offset_native(*self)
  }

  #[inline]
  fn from_native(native: Self::Native) -> crate::Result<Self> {
    Ok(Self::from_seconds(native.local_minus_utc())?)
  }
}

impl NativeConvert for ZonedDateTime {
  type Native = chrono::DateTime<chrono_tz::Tz>;

  #[inline]
  fn to_native(&self) -> crate::Result<Self::Native> {
    if self.is_zero() {
      return Err(CalendarError::ZeroValue("ZonedDateTime").into());
    }
    match self.zone().tz().from_local_datetime(&self.date_time().native()) {
      chrono::LocalResult::Single(elem) => Ok(elem),
      // The earlier of the two occurrences is taken when a transition repeats the local time
      chrono::LocalResult::Ambiguous(elem, _) => Ok(elem),
      chrono::LocalResult::None => Err(CalendarError::NonexistentLocalTime.into()),
    }
  }

  #[inline]
  fn from_native(native: Self::Native) -> crate::Result<Self> {
    Ok(Self::new(DateTime::from_native(native.naive_local())?, ZoneId::from_tz(native.timezone())))
  }
}

fn month_native(month: Month) -> chrono::Month {
  match month {
    Month::January => chrono::Month::January,
    Month::February => chrono::Month::February,
    Month::March => chrono::Month::March,
    Month::April => chrono::Month::April,
    Month::May => chrono::Month::May,
    Month::June => chrono::Month::June,
    Month::July => chrono::Month::July,
    Month::August => chrono::Month::August,
    Month::September => chrono::Month::September,
    Month::October => chrono::Month::October,
    Month::November => chrono::Month::November,
    Month::December => chrono::Month::December,
  }
}

fn offset_native(offset: ZoneOffset) -> crate::Result<chrono::FixedOffset> {
  chrono::FixedOffset::east_opt(offset.seconds())
    .ok_or_else(|| CalendarError::InvalidZoneOffset { received: offset.seconds() }.into())
}
