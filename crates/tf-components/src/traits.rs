//! Core trait for single-stream components.

use crate::error::ComponentResult;
use crate::station::StationState;

/// A component that consumes one inlet station and produces its exit solution.
///
/// Implementations are immutable after construction and deterministic
/// functions of the inlet station, so one instance can be shared across
/// threads and reused for every flight condition.
///
/// Components with a second input (turbines need the matched spool work,
/// mixers take two streams, nozzles take ambient pressure) expose their own
/// methods instead.
pub trait StreamComponent: Send + Sync {
    /// Exit solution: at minimum the exit station, plus whatever the
    /// component reports alongside it (work, fuel flow, split streams).
    type Output;

    /// Component name for logging and error context.
    fn name(&self) -> &str;

    /// Compute the exit solution for `inlet`.
    fn compute(&self, inlet: &StationState) -> ComponentResult<Self::Output>;
}
