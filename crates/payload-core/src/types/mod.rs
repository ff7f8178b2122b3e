mod date;
mod duration;
mod float;
mod id;
mod time_of_day;
mod timestamp;

pub use date::Date;
pub use duration::Duration;
pub use float::{Float64, FloatError};
pub use id::RecordId;
pub use time_of_day::TimeOfDay;
pub use timestamp::Timestamp;

use thiserror::Error as ThisError;

///
/// TemporalError
///
/// Wire-form conversion failures for the temporal newtypes.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
#[remain::sorted]
pub enum TemporalError {
    #[error("duration seconds must be finite: {seconds}")]
    NonFiniteDuration { seconds: f64 },

    #[error("epoch seconds out of representable range: {seconds}")]
    OutOfRange { seconds: i64 },

    #[error("seconds since midnight must be below 86400: {seconds}")]
    TimeOfDayOverflow { seconds: u32 },
}

impl Eq for TemporalError {}
