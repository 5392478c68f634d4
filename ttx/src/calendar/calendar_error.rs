use crate::temporal::CalendarKind;

/// Calendar error
#[derive(Debug, Eq, PartialEq)]
pub enum CalendarError {
  // Range
  //
  /// Underlying time structure couldn't hold the value generated during an arithmetic operation.
  ArithmeticOverflow,
  /// A month can only have up to 31 days
  InvalidDay {
    /// Invalid received number
    received: u8,
  },
  /// The day does not exist in the received year and month
  InvalidDayForMonth {
    /// Received day
    received: u8,
    /// Number of days of the received year and month
    days_in_month: u8,
  },
  /// A day can only have up to 24 hours
  InvalidHour {
    /// Invalid received number
    received: u8,
  },
  /// A hour can only have up to 60 minutes
  InvalidMinute {
    /// Invalid received number
    received: u8,
  },
  /// A year can only have up to 12 months. Zero means an absent month.
  InvalidMonth {
    /// Invalid received number, if any
    received: Option<u8>,
  },
  /// A second can only have up to `999_999_999` nanoseconds
  InvalidNanosecond {
    /// Invalid received number
    received: u32,
  },
  /// A minute can only have up to 60 seconds
  InvalidSecond {
    /// Invalid received number
    received: u8,
  },
  /// A timestamp in this project must fit the supported year range
  InvalidTimestamp,
  /// A week can only have up to 7 days. Zero means an absent weekday.
  InvalidWeekday {
    /// Invalid received number, if any
    received: Option<u8>,
  },
  /// A year must be between `-32767` and `32766`
  InvalidYear {
    /// Invalid received year
    received: i32,
  },
  /// A zone offset must be within `-18:00` and `+18:00`
  InvalidZoneOffset {
    /// Invalid received number of seconds
    received: i32,
  },
  /// The hour and minute components of a zone offset must have the same sign
  MismatchedOffsetSigns,
  /// The instance is a default/zero value and can not stand for a concrete point in time
  ZeroValue(&'static str),

  // Parsing
  //
  /// Provided data does not match the expected format
  InvalidParsingBytes,
  /// The local date and time is skipped by a zone transition
  NonexistentLocalTime,
  /// The zoned representation must carry a `[Zone/Name]` designator
  MissingZoneDesignator,
  /// The textual offset disagrees with the rules of the named zone
  OffsetZoneDisagreement,
  /// A timestamp could not be turned into its web-safe form or back
  InvalidWebSafeTimestamp,
  /// The zone name could not be resolved by the zone database
  UnknownTimeZone,

  // Comparison
  //
  /// The lower bound of a range comparison must be strictly before the upper bound
  InvalidComparisonBounds,
  /// Two different concrete calendar types can not be compared
  KindMismatch {
    /// Kind of the left-hand side
    lhs: CalendarKind,
    /// Kind of the right-hand side
    rhs: CalendarKind,
  },

  // Conversion
  //
  /// The value does not stand for a point in time and has no canonical instant
  NotAPointInTime(CalendarKind),
  /// A generically received value was of an unexpected kind
  UnexpectedKind {
    /// Expected kind
    expected: CalendarKind,
    /// Received kind
    received: CalendarKind,
  },
  /// The field type can not be turned into a temporal value
  UnsupportedTemporalField(&'static str),
}
