//! tf-components: component library for the turbofan cycle.
//!
//! Provides one model per engine component:
//! - Inlet (freestream → stagnation conditions + captured flow)
//! - Compressor (fan and HPC)
//! - Splitter (core/bypass division)
//! - Burner (combustor and afterburner)
//! - Turbine (work-matched HPT and LPT)
//! - Mixer (core + bypass)
//! - Nozzle (fixed exit Mach expansion)
//!
//! Every component is immutable after construction and maps an inlet
//! `StationState` to a new exit `StationState`; nothing is updated in place.
//!
//! # Example
//!
//! ```no_run
//! use tf_components::{Compressor, CompressorConfig, StationState, StreamComponent};
//! use tf_core::GasModel;
//!
//! let fan = Compressor::new("fan", CompressorConfig::f119_fan(), GasModel::air()).unwrap();
//! let inlet = StationState::from_si(293.0, 101_325.0, 144.8).unwrap();
//!
//! let out = fan.compute(&inlet).unwrap();
//! println!("Fan exit: {} K, {} Pa", out.exit.tt_k(), out.exit.pt_pa());
//! println!("Shaft work required: {} W", out.required_work.value);
//! ```

pub mod burner;
pub mod common;
pub mod compressor;
pub mod error;
pub mod inlet;
pub mod mixer;
pub mod nozzle;
pub mod splitter;
pub mod station;
pub mod traits;
pub mod turbine;

// Re-exports
pub use burner::{Burner, BurnerConfig, Combustion};
pub use compressor::{Compression, Compressor, CompressorConfig};
pub use error::{ComponentError, ComponentResult};
pub use inlet::{Freestream, Inlet, InletConfig};
pub use mixer::{Mixer, MixerConfig};
pub use nozzle::{Nozzle, NozzleConfig, NozzleExit};
pub use splitter::{SplitStreams, Splitter, SplitterConfig};
pub use station::StationState;
pub use traits::StreamComponent;
pub use turbine::{Expansion, Turbine, TurbineConfig};
