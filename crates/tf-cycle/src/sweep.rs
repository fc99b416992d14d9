//! Mach sweep: one independent forward pass per Mach number.

use crate::config::EngineConfig;
use crate::engine::{CyclePoint, Engine};
use crate::error::{CycleError, CycleResult};
use crate::flight::{Ambient, FlightCondition, Mode};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Linearly spaced Mach range, both ends included.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachSweep {
    pub start: f64,
    pub end: f64,
    pub points: usize,
}

impl Default for MachSweep {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 2.25,
            points: 40,
        }
    }
}

impl MachSweep {
    pub fn new(start: f64, end: f64, points: usize) -> CycleResult<Self> {
        let sweep = Self { start, end, points };
        sweep.validate()?;
        Ok(sweep)
    }

    pub fn validate(&self) -> CycleResult<()> {
        if !(self.start.is_finite() && self.end.is_finite()) {
            return Err(CycleError::InvalidInput {
                field: "sweep range",
                reason: "start and end must be finite".to_string(),
            });
        }
        if self.start < 0.0 || self.end < 0.0 {
            return Err(CycleError::InvalidInput {
                field: "sweep range",
                reason: format!("Mach must not be negative ({}..{})", self.start, self.end),
            });
        }
        if self.points == 0 {
            return Err(CycleError::InvalidInput {
                field: "sweep points",
                reason: "at least one point is required".to_string(),
            });
        }
        Ok(())
    }

    /// Mach values in sweep order.
    pub fn values(&self) -> Vec<f64> {
        if self.points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.points - 1) as f64;
        let mut values: Vec<f64> = (0..self.points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Exact endpoint
        values[self.points - 1] = self.end;
        values
    }
}

/// A Mach point that was skipped.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweepFailure {
    pub mach: f64,
    pub error: String,
    /// True when the inputs were valid but the cycle has no physical solution
    pub infeasible: bool,
}

/// Solved points in Mach order plus the points that failed.
#[derive(Clone, Debug, Default)]
pub struct SweepReport {
    pub points: Vec<CyclePoint>,
    pub failures: Vec<SweepFailure>,
}

impl SweepReport {
    pub fn mach(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.flight.mach).collect()
    }

    pub fn net_thrust(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| p.performance.net_thrust_n)
            .collect()
    }

    pub fn tsfc(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| p.performance.tsfc_kg_per_n_s)
            .collect()
    }

    pub fn specific_thrust(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| p.performance.specific_thrust_n_s_per_kg)
            .collect()
    }
}

/// Evaluate every Mach value of `sweep` in parallel.
///
/// A failed point is logged and recorded in [`SweepReport::failures`]; it
/// never aborts the rest of the sweep. Output keeps the input Mach order.
///
/// # Errors
/// An invalid range or ambient state is rejected before any point runs.
pub fn sweep_engine(
    engine: &Engine,
    sweep: &MachSweep,
    ambient: Ambient,
    mode: Mode,
) -> CycleResult<SweepReport> {
    sweep.validate()?;
    FlightCondition::new(sweep.start, ambient).freestream()?;

    let results: Vec<(f64, CycleResult<CyclePoint>)> = sweep
        .values()
        .into_par_iter()
        .map(|mach| (mach, engine.run(&FlightCondition::new(mach, ambient), mode)))
        .collect();

    let mut report = SweepReport::default();
    for (mach, result) in results {
        match result {
            Ok(point) => report.points.push(point),
            Err(e) => {
                warn!(mach, error = %e, "skipping sweep point");
                report.failures.push(SweepFailure {
                    mach,
                    infeasible: e.is_infeasible(),
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        %mode,
        solved = report.points.len(),
        skipped = report.failures.len(),
        "Mach sweep complete"
    );
    Ok(report)
}

/// Build the engine once from `config`, then sweep.
///
/// # Errors
/// Only for an invalid configuration or sweep range; per-point failures are
/// reported inside the [`SweepReport`].
pub fn run_sweep(
    config: &EngineConfig,
    sweep: &MachSweep,
    ambient: Ambient,
    mode: Mode,
) -> CycleResult<SweepReport> {
    let engine = Engine::new(config)?;
    sweep_engine(&engine, sweep, ambient, mode)
}
