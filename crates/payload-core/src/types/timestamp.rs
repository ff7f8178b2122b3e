use crate::types::TemporalError;
use derive_more::{Display, From, FromStr};
use time::OffsetDateTime;

///
/// Timestamp
/// (UTC, in seconds since the Unix epoch)
///

#[derive(
    Clone, Copy, Debug, Default, Display, Eq, From, FromStr, Hash, Ord, PartialEq, PartialOrd,
)]
#[repr(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);

    /// Construct from epoch seconds.
    #[must_use]
    pub const fn from_epoch_seconds(secs: i64) -> Self {
        Self(secs)
    }

    /// Wire representation: epoch seconds.
    #[must_use]
    pub const fn epoch_seconds(self) -> i64 {
        self.0
    }

    /// Calendar view of the instant.
    pub fn to_datetime(self) -> Result<OffsetDateTime, TemporalError> {
        OffsetDateTime::from_unix_timestamp(self.0)
            .map_err(|_| TemporalError::OutOfRange { seconds: self.0 })
    }

    #[must_use]
    pub const fn from_datetime(dt: OffsetDateTime) -> Self {
        Self(dt.unix_timestamp())
    }
}
