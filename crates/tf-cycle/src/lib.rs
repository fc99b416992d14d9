//! tf-cycle: steady-state cycle model of a two-spool, mixed-flow,
//! afterburning turbofan.
//!
//! An [`EngineConfig`] holds every component constant (F119 estimate by
//! default). [`Engine::run`] makes one forward pass for a
//! [`FlightCondition`] and [`Mode`] and returns a [`CyclePoint`] with every
//! station and the resulting [`Performance`]. [`run_sweep`] repeats that over
//! a Mach range in parallel.
//!
//! # Example
//!
//! ```no_run
//! use tf_cycle::{EngineConfig, FlightCondition, Mode, run_engine};
//!
//! let config = EngineConfig::default();
//! let point = run_engine(&config, &FlightCondition::sea_level(0.9), Mode::Wet).unwrap();
//! println!("F = {:.0} N", point.performance.net_thrust_n);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod flight;
pub mod performance;
pub mod sweep;

pub use config::EngineConfig;
pub use engine::{CyclePoint, Engine, SpoolWork, StationRecord, run_engine};
pub use error::{CycleError, CycleResult};
pub use flight::{Ambient, Arrangement, FlightCondition, Mode};
pub use performance::{Performance, aggregate, stream_thrust};
pub use sweep::{MachSweep, SweepFailure, SweepReport, run_sweep, sweep_engine};
