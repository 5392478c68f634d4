//! Typed calendar values with validated construction.

mod calendar_error;
mod date;
mod date_time;
mod day;
mod duration;
mod hour;
mod instant;
mod minute;
mod misc;
mod month;
mod nanosecond;
mod offset_date_time;
mod offset_time;
mod second;
mod time;
mod timestamp;
mod weekday;
mod year;
mod year_month;
mod zone_id;
mod zone_offset;
mod zoned_date_time;

pub use calendar_error::CalendarError;
pub use date::Date;
pub use date_time::DateTime;
pub use day::Day;
pub use duration::Duration;
pub use hour::Hour;
pub use instant::Instant;
pub use minute::Minute;
pub use month::Month;
pub use nanosecond::Nanosecond;
pub use offset_date_time::OffsetDateTime;
#[allow(deprecated, reason = "the type is still part of the public surface")]
pub use offset_time::OffsetTime;
pub use second::Second;
pub use time::Time;
pub use timestamp::Timestamp;
pub use weekday::Weekday;
pub use year::Year;
pub use year_month::YearMonth;
pub use zone_id::ZoneId;
pub use zone_offset::ZoneOffset;
pub use zoned_date_time::ZonedDateTime;

pub(crate) const MINUTES_PER_HOUR: u8 = 60;
pub(crate) const NANOSECONDS_PER_SECOND: u32 = 1_000_000_000;
pub(crate) const NANOSECONDS_PER_MILLISECOND: u32 = 1_000_000;
pub(crate) const MILLISECONDS_PER_SECOND: u16 = 1_000;
pub(crate) const SECONDS_PER_DAY: u32 = misc::u16u32(SECONDS_PER_HOUR) * 24;
pub(crate) const SECONDS_PER_HOUR: u16 = misc::u8u16(SECONDS_PER_MINUTE) * 60;
pub(crate) const SECONDS_PER_MINUTE: u8 = 60;
/// Upper bound of a zone offset, in seconds (18 hours).
pub(crate) const MAX_OFFSET_SECONDS: i32 = 64_800;
