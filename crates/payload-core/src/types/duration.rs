use crate::types::TemporalError;
use derive_more::Display;

///
/// Duration
///
/// Signed span of time. The wire form is fractional seconds.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Duration(time::Duration);

impl Duration {
    pub const ZERO: Self = Self(time::Duration::ZERO);

    pub fn from_seconds_f64(secs: f64) -> Result<Self, TemporalError> {
        if !secs.is_finite() {
            return Err(TemporalError::NonFiniteDuration { seconds: secs });
        }

        time::Duration::checked_seconds_f64(secs)
            .map(Self)
            .ok_or(TemporalError::NonFiniteDuration { seconds: secs })
    }

    #[must_use]
    pub const fn from_seconds(secs: i64) -> Self {
        Self(time::Duration::seconds(secs))
    }

    /// Wire representation: total seconds as a float.
    #[must_use]
    pub fn as_seconds_f64(self) -> f64 {
        self.0.as_seconds_f64()
    }

    #[must_use]
    pub const fn inner(self) -> time::Duration {
        self.0
    }
}

impl From<time::Duration> for Duration {
    fn from(duration: time::Duration) -> Self {
        Self(duration)
    }
}
