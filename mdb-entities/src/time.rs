use std::{fmt, ops::Add, str::FromStr};
use thiserror::Error;
use time::{Duration, OffsetDateTime};

/// A point in time with millisecond precision (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub fn to_offset_date_time(self) -> OffsetDateTime {
        OffsetDateTime::UNIX_EPOCH + Duration::milliseconds(self.0)
    }

    pub fn date(self) -> time::Date {
        self.to_offset_date_time().date()
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.to_offset_date_time()
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs.whole_milliseconds() as i64)
    }
}

impl Add<std::time::Duration> for Timestamp {
    type Output = Self;
    fn add(self, rhs: std::time::Duration) -> Self {
        Self(self.0 + rhs.as_millis() as i64)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let formatted = self
            .to_offset_date_time()
            .format(&time::format_description::well_known::Rfc3339)
            .map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

/// A wall clock time as entered by people, either `HH:MM` (24h)
/// or `hh:mm AM|PM`.
///
/// The original notation is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClockTime {
    text: String,
    minutes: u16,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid clock time '{0}' (expected HH:MM or hh:mm AM/PM)")]
pub struct ClockTimeParseError(pub String);

impl ClockTime {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Minutes since midnight.
    pub fn minutes_of_day(&self) -> u16 {
        self.minutes
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let err = || ClockTimeParseError(s.to_string());
        let (hm, meridiem) = match text.split_once(' ') {
            Some((hm, m)) => (hm, Some(m.trim().to_ascii_uppercase())),
            None => (text, None),
        };
        let (h, m) = hm.split_once(':').ok_or_else(err)?;
        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if h.is_empty() || h.len() > 2 || m.len() != 2 || !is_digits(h) || !is_digits(m) {
            return Err(err());
        }
        let h: u16 = h.parse().map_err(|_| err())?;
        let m: u16 = m.parse().map_err(|_| err())?;
        if m > 59 {
            return Err(err());
        }
        let h = match meridiem.as_deref() {
            None if h <= 23 => h,
            Some("AM") if (1..=12).contains(&h) => h % 12,
            Some("PM") if (1..=12).contains(&h) => h % 12 + 12,
            _ => return Err(err()),
        };
        Ok(Self {
            text: text.to_string(),
            minutes: h * 60 + m,
        })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}
