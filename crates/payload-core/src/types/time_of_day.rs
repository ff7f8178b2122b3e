use crate::types::TemporalError;
use derive_more::Display;

// ratio constants
const SECS_PER_MIN: u32 = 60;
const MINS_PER_HOUR: u32 = 60;
const SECS_PER_HOUR: u32 = SECS_PER_MIN * MINS_PER_HOUR;
const SECS_PER_DAY: u32 = SECS_PER_HOUR * 24;

///
/// TimeOfDay
///
/// Wall-clock time with second precision. The wire form is seconds
/// since midnight, strictly below one day.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct TimeOfDay(time::Time);

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self(time::Time::MIDNIGHT);

    pub fn from_seconds_since_midnight(secs: u32) -> Result<Self, TemporalError> {
        if secs >= SECS_PER_DAY {
            return Err(TemporalError::TimeOfDayOverflow { seconds: secs });
        }

        let hour = (secs / SECS_PER_HOUR) as u8;
        let minute = ((secs / SECS_PER_MIN) % MINS_PER_HOUR) as u8;
        let second = (secs % SECS_PER_MIN) as u8;

        let time = time::Time::from_hms(hour, minute, second)
            .map_err(|_| TemporalError::TimeOfDayOverflow { seconds: secs })?;

        Ok(Self(time))
    }

    /// Wire representation: `h*3600 + m*60 + s`.
    #[must_use]
    pub fn seconds_since_midnight(self) -> u32 {
        u32::from(self.0.hour()) * SECS_PER_HOUR
            + u32::from(self.0.minute()) * SECS_PER_MIN
            + u32::from(self.0.second())
    }

    #[must_use]
    pub const fn inner(self) -> time::Time {
        self.0
    }
}

impl From<time::Time> for TimeOfDay {
    fn from(time: time::Time) -> Self {
        Self(time)
    }
}
