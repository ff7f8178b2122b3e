use crate::types::TemporalError;
use derive_more::Display;
use time::OffsetDateTime;

///
/// Date
///
/// Calendar date. The wire form is epoch seconds; inbound values are
/// truncated to the UTC day, outbound values are midnight UTC.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Date(time::Date);

impl Date {
    /// Truncate an epoch-seconds instant to its UTC calendar date.
    pub fn from_epoch_seconds(secs: i64) -> Result<Self, TemporalError> {
        let dt = OffsetDateTime::from_unix_timestamp(secs)
            .map_err(|_| TemporalError::OutOfRange { seconds: secs })?;

        Ok(Self(dt.date()))
    }

    /// Wire representation: midnight UTC, in epoch seconds.
    #[must_use]
    pub const fn epoch_seconds(self) -> i64 {
        self.0.midnight().assume_utc().unix_timestamp()
    }

    #[must_use]
    pub const fn inner(self) -> time::Date {
        self.0
    }
}

impl From<time::Date> for Date {
    fn from(date: time::Date) -> Self {
        Self(date)
    }
}
