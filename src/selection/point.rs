//! Execution point identifiers.
//!
//! Recordings identify execution points with unsigned decimal integers that
//! routinely exceed 64 bits, so points are kept in their string form and
//! compared numerically without parsing into a fixed-width integer.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, order-comparable identifier of a paused execution snapshot.
///
/// Numeric points order by value (`"9" < "10"`). Points that are not plain
/// digit strings still compare, after every numeric point, in string order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionPoint(String);

impl ExecutionPoint {
    pub fn new(point: impl Into<String>) -> Self {
        Self(point.into())
    }

    /// The point exactly as the recording reported it.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the point is a plain unsigned decimal integer.
    pub fn is_numeric(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit())
    }

    /// Digits with leading zeros removed (`"0"` stays `"0"`).
    fn significant_digits(&self) -> &str {
        let trimmed = self.0.trim_start_matches('0');
        if trimmed.is_empty() {
            &self.0[self.0.len().saturating_sub(1)..]
        } else {
            trimmed
        }
    }
}

impl Ord for ExecutionPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_numeric(), other.is_numeric()) {
            (true, true) => {
                let a = self.significant_digits();
                let b = other.significant_digits();
                a.len()
                    .cmp(&b.len())
                    .then_with(|| a.cmp(b))
                    // "007" and "7" are the same point numerically; keep Ord
                    // consistent with Eq by falling back to the raw text.
                    .then_with(|| self.0.cmp(&other.0))
            }
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for ExecutionPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ExecutionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExecutionPoint {
    fn from(point: &str) -> Self {
        Self::new(point)
    }
}

impl From<String> for ExecutionPoint {
    fn from(point: String) -> Self {
        Self(point)
    }
}
