use derive_more::Display;
use std::{cmp::Ordering, hash::Hash};
use thiserror::Error as ThisError;

///
/// FloatError
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum FloatError {
    #[error("float value must be finite: {value}")]
    NonFinite { value: f64 },
}

impl Eq for FloatError {}

///
/// Float64
///
/// Finite-only f64. Excluding NaN and the infinities keeps equality and
/// ordering total, so values can live in ordered containers.
///

#[derive(Clone, Copy, Debug, Default, Display)]
#[repr(transparent)]
pub struct Float64(f64);

impl Float64 {
    pub const ZERO: Self = Self(0.0);

    pub fn try_new(value: f64) -> Result<Self, FloatError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(FloatError::NonFinite { value })
        }
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Float64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Float64 {}

impl PartialOrd for Float64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Float64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Float64 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}
