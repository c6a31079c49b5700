//! Drift tolerance between the scrubber time and the pause time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Errors raised when building a [`DriftTolerance`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ToleranceError {
    #[error("Drift tolerance must be a finite number, got {value}")]
    NotFinite { value: f64 },

    #[error("Drift tolerance must not be negative, got {value}")]
    Negative { value: f64 },
}

/// Maximum gap allowed between the current (scrubber) time and the pause
/// time before the pause snapshot is treated as stale.
///
/// The comparison is strict: a drift equal to the tolerance is still
/// considered in sync.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DriftTolerance(f64);

impl DriftTolerance {
    /// Default tolerance, in timeline units.
    pub const DEFAULT: DriftTolerance = DriftTolerance(0.05);

    pub fn new(value: f64) -> Result<Self, ToleranceError> {
        if !value.is_finite() {
            return Err(ToleranceError::NotFinite { value });
        }
        if value < 0.0 {
            return Err(ToleranceError::Negative { value });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// True when `drift` is strictly larger than the tolerance.
    pub fn is_exceeded_by(self, drift: f64) -> bool {
        drift > self.0
    }
}

impl Default for DriftTolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for DriftTolerance {
    type Error = ToleranceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DriftTolerance> for f64 {
    fn from(tolerance: DriftTolerance) -> Self {
        tolerance.0
    }
}

impl fmt::Display for DriftTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
