/// Discriminant of every calendar value type, decided once at the conversion boundary.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum CalendarKind {
  /// See [`crate::calendar::Date`]
  Date,
  /// See [`crate::calendar::DateTime`]
  DateTime,
  /// See [`crate::calendar::Month`]
  Month,
  /// See [`crate::calendar::OffsetDateTime`]
  OffsetDateTime,
  /// See `crate::calendar::OffsetTime`
  OffsetTime,
  /// See [`crate::calendar::Time`]
  Time,
  /// See [`crate::calendar::Timestamp`]
  Timestamp,
  /// See [`crate::calendar::Weekday`]
  Weekday,
  /// See [`crate::calendar::YearMonth`]
  YearMonth,
  /// See [`crate::calendar::ZoneId`]
  ZoneId,
  /// See [`crate::calendar::ZoneOffset`]
  ZoneOffset,
  /// See [`crate::calendar::ZonedDateTime`]
  ZonedDateTime,
}

impl CalendarKind {
  /// Name of the concrete type
  #[inline]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Date => "Date",
      Self::DateTime => "DateTime",
      Self::Month => "Month",
      Self::OffsetDateTime => "OffsetDateTime",
      Self::OffsetTime => "OffsetTime",
      Self::Time => "Time",
      Self::Timestamp => "Timestamp",
      Self::Weekday => "Weekday",
      Self::YearMonth => "YearMonth",
      Self::ZoneId => "ZoneId",
      Self::ZoneOffset => "ZoneOffset",
      Self::ZonedDateTime => "ZonedDateTime",
    }
  }
}
