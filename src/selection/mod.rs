//! Time and execution point selection.
//!
//! - `selector`: the branch logic that picks the authoritative time
//! - `point`: execution point identifiers and their ordering
//! - `tolerance`: the configurable drift tolerance

mod point;
mod selector;
mod tolerance;

pub use point::ExecutionPoint;
pub use selector::{select, SelectionSource, SelectorInputs, TimeSelection};
pub use tolerance::{DriftTolerance, ToleranceError};
